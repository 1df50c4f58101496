use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use fast_fresh_facts::{
    config::Config,
    api::routes::create_router,
    llm::HuggingFaceSummarizer,
    summarizer::Summarizer,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // The model handle is built once and shared by every request
    let model = HuggingFaceSummarizer::from_config(&config)?;
    tracing::info!(model = %config.model_name, endpoint = model.endpoint(), "Summarization model ready");

    let app_state = AppState {
        summarizer: Summarizer::new(Arc::new(model)),
        config: Arc::new(config),
    };

    // Build the router with routes
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
