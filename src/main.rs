use tracing_subscriber::EnvFilter;
use treadport_server_lib::api::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    server::start().await;
}
