use statefulmesh_controller::config::ServerConfig;
use statefulmesh_controller::{server, telemetry, Reconciler, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let server_config = ServerConfig::from_env()?;
    telemetry::init_logging(server_config.log_format);

    let reconciler = Reconciler::default();
    let config = reconciler.config();
    info!(
        "Starting sync hook (image tag {}, gateway {}, port {})",
        config.image_tag, config.gateway, config.port
    );

    server::serve(server_config, reconciler).await
}
