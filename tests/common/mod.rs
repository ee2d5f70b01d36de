#![allow(dead_code)]

use httpmock::MockServer;
use tochka_client::{ClientConfig, TochkaClient};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client pointed at the mock server, with the production API prefix.
pub fn client_for(server: &MockServer, token: &str) -> TochkaClient {
    init_tracing();
    let config = ClientConfig::builder()
        .base_url(server.base_url())
        .build()
        .unwrap();
    TochkaClient::with_config(token, config).unwrap()
}
