pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
mod macros;

pub use api::{Account, Statement, StatementParams, StatementParamsBuilder};
pub use auth::JwtToken;
pub use client::{decode, path_segment, ApiResult, TochkaClient};
pub use config::{ClientConfig, ClientConfigBuilder, ClientConfigBuilderError, API_PREFIX, HOST};
pub use error::TochkaError;
pub use reqwest::Method;
pub use serde_json::Value;

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
    pub use serde::de::DeserializeOwned;
}
