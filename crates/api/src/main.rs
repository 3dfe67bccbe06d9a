use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    larder_api::telemetry::init();

    let config = larder_api::config::Config::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "starting larder");

    let bind_addr = config.bind_addr.clone();
    let app = larder_api::app::build_app(config)?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
