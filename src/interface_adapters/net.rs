use crate::interface_adapters::protocol::{
    ClientMessage, ServerMessage, SimStateDto, SimUpdateDto,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{SimEvent, SimState, SimUpdate};

use axum::{
    Error,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::SinkExt;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::watch::Receiver;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

#[derive(Debug)]
enum NetError {
    // Categorizes connection lifecycle failures so callers can decide policy.
    #[allow(dead_code)]
    Ws(axum::Error),
    #[allow(dead_code)]
    Serialization(serde_json::Error),
    EventsClosed,
    UpdatesClosed,
    SimStateClosed,
}

impl From<axum::Error> for NetError {
    fn from(e: axum::Error) -> Self {
        NetError::Ws(e)
    }
}

const LOG_THROTTLE: Duration = Duration::from_secs(2);

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let mut ctx = match bootstrap_connection(&mut socket, &state).await {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!(error = ?e, "failed to bootstrap connection");
            let _ = socket.close().await;
            return;
        }
    };

    info!("client connected");

    // Main client loop.
    if let Err(e) = run_client_loop(&mut socket, &mut ctx).await {
        warn!(error = ?e, "client loop exited with error");
    }
    info!("client disconnected");
}

async fn send_message(socket: &mut WebSocket, msg: &ServerMessage) -> Result<(), NetError> {
    // Serialize message safely; report JSON errors instead of panicking.
    let txt = serde_json::to_string(msg).map_err(NetError::Serialization)?;
    socket
        .send(Message::Text(txt.into()))
        .await
        .map_err(NetError::Ws)
}

struct ConnCtx {
    pub event_tx: mpsc::Sender<SimEvent>,
    pub update_rx: broadcast::Receiver<SimUpdate>,
    pub sim_state_rx: watch::Receiver<SimState>,

    pub last_event_full_log: Instant,
    pub last_update_lag_log: Instant,
    pub last_invalid_json_log: Instant,
}

async fn bootstrap_connection(
    socket: &mut WebSocket,
    state: &AppState,
) -> Result<ConnCtx, NetError> {
    // Subscribe to updates *before* doing anything else (awaits) to not miss packets.
    let update_rx = state.update_tx.subscribe();
    let sim_state_rx = state.sim_state_tx.subscribe();

    // Send the static scene first so the client can draw the background and
    // parked vehicles before the first snapshot arrives.
    let scene_msg = ServerMessage::Scene((&state.scene).into());
    send_message(socket, &scene_msg).await?;

    // Send the current lifecycle state. Clone out of the borrow immediately
    // to avoid holding it across an await.
    let initial_state = sim_state_rx.borrow().clone();
    let state_msg = ServerMessage::SimState(initial_state.into());
    send_message(socket, &state_msg).await?;

    let now = Instant::now() - LOG_THROTTLE;
    Ok(ConnCtx {
        event_tx: state.event_tx.clone(),
        update_rx,
        sim_state_rx,
        last_event_full_log: now,
        last_update_lag_log: now,
        last_invalid_json_log: now,
    })
}

enum LoopControl {
    Continue,
    Disconnect,
}

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}

async fn run_client_loop(socket: &mut WebSocket, ctx: &mut ConnCtx) -> Result<(), NetError> {
    // Split borrows so `tokio::select!` can hold them concurrently.
    let ConnCtx {
        event_tx,
        update_rx,
        sim_state_rx,
        last_event_full_log,
        last_update_lag_log,
        last_invalid_json_log,
    } = ctx;

    let mut fatal: Option<NetError> = None;

    loop {
        // disconnect becomes true on error
        let disconnect: bool = tokio::select! {
            // Incoming message from the client.
            incoming = socket.recv() => {
                match handle_incoming_ws(
                    incoming,
                    event_tx,
                    last_event_full_log,
                    last_invalid_json_log,
                ) {
                    Ok(LoopControl::Continue) => false,
                    Ok(LoopControl::Disconnect) => true,
                    Err(e) => {
                        fatal = Some(e);
                        true
                    }
                }
            }

            // Outgoing sim update.
            update = update_rx.recv() => {
                match update {
                    Ok(update) => match forward_update(update, socket).await {
                        LoopControl::Continue => false,
                        LoopControl::Disconnect => true,
                    },
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        // Updates are full snapshots, so skipping ahead is a
                        // complete resync by itself.
                        if should_log(last_update_lag_log) {
                            warn!(missed = n, "sim updates lagged; skipping to latest");
                        }
                        false
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        fatal = Some(NetError::UpdatesClosed);
                        true
                    }
                }
            }

            // Outgoing lifecycle state.
            changed_state = sim_state_rx.changed() => {
                match changed_state {
                    Ok(()) => match forward_sim_state(sim_state_rx, socket).await {
                        LoopControl::Continue => false,
                        LoopControl::Disconnect => true,
                    },
                    Err(_) => {
                        warn!("sim state channel closed; disconnecting");
                        fatal = Some(NetError::SimStateClosed);
                        true
                    }
                }
            }
        };

        if disconnect {
            if let Err(err) = socket.close().await.map_err(NetError::Ws) {
                debug!(error = ?err, "socket close error");
            }
            break;
        }
    }

    if let Some(err) = fatal { Err(err) } else { Ok(()) }
}

fn forward_event(
    event_tx: &mpsc::Sender<SimEvent>,
    event: SimEvent,
    last_event_full_log: &mut Instant,
) -> Result<LoopControl, NetError> {
    match event_tx.try_send(event) {
        Ok(()) => Ok(LoopControl::Continue),
        Err(mpsc::error::TrySendError::Full(_)) => {
            // Drop the event; the client resends controls every tick anyway.
            if should_log(last_event_full_log) {
                warn!("event channel full; dropping event");
            }
            Ok(LoopControl::Continue)
        }
        Err(mpsc::error::TrySendError::Closed(_)) => Err(NetError::EventsClosed),
    }
}

fn handle_incoming_ws(
    incoming: Option<Result<Message, Error>>,
    event_tx: &mpsc::Sender<SimEvent>,
    last_event_full_log: &mut Instant,
    last_invalid_json_log: &mut Instant,
) -> Result<LoopControl, NetError> {
    match incoming {
        Some(Ok(msg)) => match msg {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(ClientMessage::Input(input)) => forward_event(
                    event_tx,
                    SimEvent::Input {
                        input: input.into(),
                    },
                    last_event_full_log,
                ),
                Ok(ClientMessage::Reset) => {
                    forward_event(event_tx, SimEvent::Reset, last_event_full_log)
                }
                Err(e) => {
                    if should_log(last_invalid_json_log) {
                        warn!(bytes = text.len(), error = %e, "failed to parse client message");
                    }
                    Ok(LoopControl::Continue)
                }
            },
            Message::Close(_) => Ok(LoopControl::Disconnect),
            // Ping/Pong keep the connection healthy; nothing to do.
            Message::Ping(_) | Message::Pong(_) => Ok(LoopControl::Continue),
            Message::Binary(_) => {
                if should_log(last_invalid_json_log) {
                    warn!("binary messages not supported; ignoring");
                }
                Ok(LoopControl::Continue)
            }
        },
        Some(Err(e)) => {
            warn!(error = %e, "websocket recv error");
            Ok(LoopControl::Disconnect)
        }
        None => Ok(LoopControl::Disconnect),
    }
}

async fn forward_update(update: SimUpdate, socket: &mut WebSocket) -> LoopControl {
    let msg = ServerMessage::SimUpdate(SimUpdateDto::from(update));
    match send_message(socket, &msg).await {
        Ok(()) => LoopControl::Continue,
        Err(err) => {
            // Log unexpected send failures; disconnect will follow immediately.
            warn!(error = ?err, "failed to send sim update");
            LoopControl::Disconnect
        }
    }
}

async fn forward_sim_state(sim_state_rx: &Receiver<SimState>, socket: &mut WebSocket) -> LoopControl {
    let st = sim_state_rx.borrow().clone();
    let msg = ServerMessage::SimState(SimStateDto::from(st));
    match send_message(socket, &msg).await {
        Ok(()) => LoopControl::Continue,
        Err(err) => {
            warn!(error = ?err, "failed to send sim state");
            LoopControl::Disconnect
        }
    }
}
