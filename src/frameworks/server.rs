// Framework bootstrap for the sim server runtime.

use crate::domain::Scene;
use crate::frameworks::config;
use crate::interface_adapters::net::ws_handler;
use crate::interface_adapters::state::AppState;
use crate::use_cases::sim::sim_task;
use crate::use_cases::{SimEvent, SimState, SimUpdate};

use axum::{Router, routing::get};
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state();

    // Start the web server.
    let app = Router::new()
        .route("/ws", get(ws_handler))
        .with_state(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Arc<AppState> {
    // Channel wiring for the sim loop.
    // event_tx/rx: all client events go to the single sim task.
    let (event_tx, event_rx) = mpsc::channel::<SimEvent>(config::EVENT_CHANNEL_CAPACITY);

    // update_tx/rx: sim updates are broadcast to all clients.
    let (update_tx, _update_rx) =
        broadcast::channel::<SimUpdate>(config::UPDATE_BROADCAST_CAPACITY);

    // sim_state_tx: lifecycle (Running, Crashed) changes.
    let (sim_state_tx, _sim_state_rx) = watch::channel::<SimState>(SimState::Running);

    // Spawn the authoritative sim loop. It owns the vehicle and scene and
    // runs for the lifetime of the process.
    let scene = Scene::default();
    tokio::spawn(sim_task(
        scene.clone(),
        event_rx,
        update_tx.clone(),
        sim_state_tx.clone(),
        config::TICK_INTERVAL,
        config::diag_every_ticks(),
    ));

    Arc::new(AppState {
        scene,
        event_tx,
        update_tx,
        sim_state_tx,
    })
}
