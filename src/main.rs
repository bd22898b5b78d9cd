use anyhow::Result;
use deribit_trades::{config::AppConfig, models::SubscribeRequest, stream, utils};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::load();
    let channel = config.channel.name();
    tracing::info!(url = %config.ws_url, %channel, "[INIT] deribit-trades starting");

    let request = SubscribeRequest::new(channel);
    let frames = stream::connect_and_stream(&config.ws_url, &request).await?;
    futures::pin_mut!(frames);
    stream::write_frames(frames, &mut std::io::stdout().lock()).await?;

    tracing::info!("[EXIT] connection closed, stream finished");
    Ok(())
}
