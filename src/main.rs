use std::sync::Arc;

use hiv_mate_chat::config::Settings;
use hiv_mate_chat::services::ai::GeminiClient;
use hiv_mate_chat::services::persona::PromptComposer;
use hiv_mate_chat::services::safety::SafetyGate;
use hiv_mate_chat::{AppState, app, init_tracing};

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    init_tracing(&settings);

    tracing::info!(
        app = %settings.app_name,
        version = %settings.app_version,
        "Starting server"
    );

    let http_client = reqwest::Client::new();
    let gemini = GeminiClient::new(
        http_client,
        &settings.gemini_api_key,
        &settings.gemini_model,
        settings.gemini_timeout,
    );

    let state = Arc::new(AppState {
        settings: settings.clone(),
        generator: Arc::new(gemini),
        safety: SafetyGate::default(),
        composer: PromptComposer::default(),
    });

    let app = app(state);

    let addr = format!("{}:{}", settings.host, settings.port);
    tracing::info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server error");
}
