use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::api::{Account, Statement};
use crate::auth::JwtToken;
use crate::config::ClientConfig;
use crate::error::TochkaError;

pub type ApiResult<T> = Result<T, TochkaError>;

/// Authenticated entry point to the Tochka API.
///
/// The `Authorization` header is built from the stored token on every request,
/// so [`TochkaClient::set_token`] takes effect on the next call.
#[derive(Debug, Clone)]
pub struct TochkaClient {
    token: JwtToken,
    config: ClientConfig,
    client: ReqwestClient,
}

impl TochkaClient {
    pub fn new(token: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> ApiResult<Self> {
        let token = JwtToken::new(token)?;
        let client = config.transport()?;
        debug!("Configured client for {}", config.endpoint_url(""));
        Ok(TochkaClient {
            token,
            config,
            client,
        })
    }

    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Replaces the token and returns the previous one.
    pub fn set_token(&mut self, token: impl Into<String>) -> ApiResult<String> {
        let token = JwtToken::new(token)?;
        Ok(std::mem::replace(&mut self.token, token).into_inner())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn account(&self) -> Account<'_> {
        Account::new(self)
    }

    pub fn statement(&self) -> Statement<'_> {
        Statement::new(self)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if self.config.overrides_authorization() {
            request
        } else {
            self.token.apply_auth(request)
        }
    }

    /// Sends one request to `path` under the API prefix and decodes the JSON answer.
    ///
    /// A body whose JSON form is empty (`null`, `{}`, `[]`, `""`, `"0"`, `0`, `false`)
    /// is not sent at all. A 403 answer becomes [`TochkaError::InvalidJwtToken`];
    /// any other failure is returned as the underlying [`reqwest::Error`].
    #[instrument(skip(self, body))]
    pub async fn request<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(path);
        info!("Sending {} request to URL: {}", method, url);

        let mut request = self.client.request(method, &url);
        request = self.apply_auth(request);

        if let Some(body) = body {
            let payload = serde_json::to_value(body).map_err(|e| {
                error!("Failed to serialize body: {:?}", e);
                TochkaError::JsonParse(e)
            })?;
            if is_empty_payload(&payload) {
                debug!("Body is empty, sending request without payload");
            } else {
                debug!("Serialized body: {}", payload);
                request = request.json(&payload);
            }
        }

        let response = request.send().await.map_err(|e| {
            error!("Network error while sending request to {}: {:?}", url, e);
            TochkaError::Http(e)
        })?;

        self.handle_response(response).await
    }

    /// Like [`TochkaClient::request`], then decodes the value into `T`.
    pub async fn request_as<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        decode(self.request(method, path, body).await?)
    }

    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn handle_response(&self, response: Response) -> ApiResult<Value> {
        let status = response.status();
        debug!("Received response with status {}", status);

        if status == StatusCode::FORBIDDEN {
            error!("Token rejected by {}", response.url());
            return Err(TochkaError::InvalidJwtToken);
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Request failed: {:?}", e);
            TochkaError::Http(e)
        })?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|err| {
            error!("Failed to parse JSON response: {:?}", err);
            TochkaError::JsonParse(err)
        })
    }
}

/// Decodes a response value into `T`, reporting the path of the first mismatching field.
pub fn decode<T>(value: Value) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(value).map_err(|err| {
        error!("Failed to deserialize response at {}: {}", err.path(), err.inner());
        TochkaError::Deserialize(err)
    })
}

/// Percent-encodes `value` as exactly one path segment.
///
/// Empty, `.` and `..` values cannot be expressed as a segment and are rejected.
pub fn path_segment(value: impl std::fmt::Display) -> ApiResult<String> {
    let raw = value.to_string();
    if raw.is_empty() || raw == "." || raw == ".." {
        return Err(TochkaError::InvalidArgument(format!(
            "{:?} is not a valid path segment",
            raw
        )));
    }
    Ok(urlencoding::encode(&raw).into_owned())
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
