#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = tasktrack_server::config::Config::from_env()?;
    tasktrack_server::web::start_web_server(config).await
}
