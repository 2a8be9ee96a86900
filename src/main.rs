//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use secchat::adapters::ai::{MockTextGen, OpenAiTextGen};
use secchat::adapters::ui::tui::TuiInputPort;
use secchat::ports::{InputPort, TextGenPort};
use secchat::usecases::AssistantService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    secchat::adapters::ui::init_ui();

    let cfg = secchat::shared::config::AppConfig::load().unwrap_or_default();

    // --- Text generation: real API when a key is present, mock otherwise ---
    let text_gen: Arc<dyn TextGenPort> = if cfg.is_api_configured() {
        info!(
            model = %cfg.model_or_default(),
            url = %cfg.api_url_or_default(),
            "answering with OpenAI-compatible adapter"
        );
        Arc::new(OpenAiTextGen::new(
            cfg.api_url_or_default(),
            cfg.api_key().unwrap_or_default(),
            cfg.model_or_default(),
            cfg.temperature_or_default(),
        ))
    } else {
        warn!("SECCHAT_API_KEY not set, using mock text-generation adapter");
        Arc::new(MockTextGen::new())
    };

    // --- Assistant pipeline (classify -> answer) ---
    let assistant = Arc::new(AssistantService::new(text_gen));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(assistant));

    // --- Run (chat loop until /quit) ---
    input_port.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
