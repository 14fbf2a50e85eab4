use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use doc_assessor::{
    config::Config, llm::LLM, routes::create_router, utils::init_logger, AppState,
    DocumentAssessor,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Build the model client and the assessor that owns it
    let llm = LLM::from_config(&config.llm)?;
    info!(provider = %llm.provider_name(), model = %llm.model(), base_url = %config.llm.base_url, "Model client ready");
    let assessor = DocumentAssessor::new(llm);

    // Create shared state
    let state = AppState::new(config.clone(), assessor);

    // Create router
    let app = create_router(state);

    // Start server
    let ip: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(ip, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
