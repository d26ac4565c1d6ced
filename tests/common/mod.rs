#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Client;

use hiv_mate_chat::AppState;
use hiv_mate_chat::config::Settings;
use hiv_mate_chat::services::ai::{GenerationParams, Generator, UpstreamError};
use hiv_mate_chat::services::persona::PromptComposer;
use hiv_mate_chat::services::safety::SafetyGate;

pub enum MockBehavior {
    Reply(&'static str),
    Empty,
    Fail,
}

/// Deterministic stand-in for the Gemini client. Records every invocation
/// so tests can assert the model was (or was not) contacted and what
/// system prompt it received.
pub struct MockGenerator {
    behavior: MockBehavior,
    calls: AtomicUsize,
    system_prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            system_prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.system_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(
        &self,
        _message: &str,
        system_prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.system_prompts
            .lock()
            .unwrap()
            .push(system_prompt.to_string());

        match &self.behavior {
            MockBehavior::Reply(text) => Ok((*text).to_string()),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Fail => Err(UpstreamError("simulated Gemini outage".into())),
        }
    }
}

pub fn test_settings(environment: &str) -> Settings {
    Settings {
        app_name: "HIV Mate API".into(),
        app_version: "1.0.0".into(),
        environment: environment.into(),
        host: "127.0.0.1".into(),
        port: 0,
        gemini_api_key: "test-key".into(),
        gemini_model: "gemini-2.0-flash".into(),
        gemini_timeout: 30,
        static_dir: "public".into(),
        cors_origins: "*".into(),
        log_level: "info".into(),
        log_format: "text".into(),
    }
}

/// Bind the app to an ephemeral port and return its base URL. Production
/// environment, so 500 bodies omit error detail unless a test opts in via
/// `spawn_app_with_env`.
pub async fn spawn_app(generator: Arc<MockGenerator>) -> String {
    spawn_app_with_env(generator, "production").await
}

pub async fn spawn_app_with_env(generator: Arc<MockGenerator>, environment: &str) -> String {
    let state = Arc::new(AppState {
        settings: test_settings(environment),
        generator,
        safety: SafetyGate::default(),
        composer: PromptComposer::default(),
    });

    let app = hiv_mate_chat::app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    format!("http://{addr}")
}

/// Build a reusable HTTP client.
pub fn http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
}
