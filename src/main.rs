#[tokio::main]
async fn main() {
    if let Err(e) = drive_sim::run_with_config().await {
        eprintln!("fatal: {e}");
        std::process::exit(1);
    }
}
