#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Delegate to the framework entry point.
    platformer_sim::run_with_config().await.map(|_| ())
}
