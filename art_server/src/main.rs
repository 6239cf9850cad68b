#[tokio::main]
async fn main() -> std::io::Result<()> {
    art_server::run_with_config().await
}
