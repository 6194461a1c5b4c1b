#![allow(dead_code)]

use prompt_gateway::config::{GatewayConfig, GoogleConfig, ModelConfig};
use prompt_gateway::services::providers::mock::MockTextProvider;
use prompt_gateway::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const TEST_TEXT_MODEL: &str = "gemini-test-flash";
pub const TEST_REASONING_MODEL: &str = "gemini-test-pro";

pub fn test_config(api_base: &str) -> GatewayConfig {
    GatewayConfig {
        common: CoreConfig { port: 0 },
        models: ModelConfig {
            text_model: TEST_TEXT_MODEL.to_string(),
            reasoning_model: TEST_REASONING_MODEL.to_string(),
        },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
            api_base: api_base.to_string(),
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub provider: Arc<MockTextProvider>,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the gateway on a random port, backed by `provider`.
    pub async fn spawn(provider: MockTextProvider) -> Self {
        let provider = Arc::new(provider);
        let app = Application::build_with_provider(test_config("http://127.0.0.1:9"), provider.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            provider,
            client,
        }
    }

    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .query(query)
            .send()
            .await
            .expect("Failed to send request")
    }
}
