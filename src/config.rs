use derive_builder::Builder;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use std::time::Duration;

use crate::error::TochkaError;

/// Production host of the Tochka API.
pub const HOST: &str = "https://enter.tochka.com";

/// Version prefix put in front of every endpoint path.
pub const API_PREFIX: &str = "api/v1";

pub const DEFAULT_USER_AGENT: &str = concat!("tochka-client/", env!("CARGO_PKG_VERSION"));

/// Transport options for [`TochkaClient`](crate::TochkaClient).
///
/// Every field has a default. `build()` fails only when `base_url` is not an
/// absolute `http`/`https` URL. Entries in `headers` are merged over the built-in
/// defaults one header at a time and win on collision.
#[derive(Debug, Clone, Builder)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct ClientConfig {
    #[builder(setter(into))]
    pub base_url: String,

    #[builder(setter(into))]
    pub api_prefix: String,

    /// Whole-request timeout. Unset means reqwest's default (none).
    #[builder(setter(strip_option))]
    pub timeout: Option<Duration>,

    #[builder(setter(strip_option))]
    pub connect_timeout: Option<Duration>,

    #[builder(setter(into))]
    pub user_agent: String,

    /// Proxy URL used for all schemes.
    #[builder(setter(into, strip_option))]
    pub proxy: Option<String>,

    #[builder(setter(custom))]
    pub headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: HOST.to_string(),
            api_prefix: API_PREFIX.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
            headers: HeaderMap::new(),
        }
    }
}

impl ClientConfigBuilder {
    /// Adds a default header sent with every request.
    /// An `Authorization` value is marked sensitive.
    pub fn header(&mut self, name: HeaderName, mut value: HeaderValue) -> &mut Self {
        if name == AUTHORIZATION {
            value.set_sensitive(true);
        }
        self.headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name, value);
        self
    }

    pub fn headers(&mut self, mut headers: HeaderMap) -> &mut Self {
        for (name, value) in headers.iter_mut() {
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
        }
        self.headers
            .get_or_insert_with(HeaderMap::new)
            .extend(headers);
        self
    }

    fn validate(&self) -> Result<(), String> {
        let Some(base_url) = &self.base_url else {
            return Ok(());
        };
        let url = reqwest::Url::parse(base_url)
            .map_err(|e| format!("invalid base url {:?}: {}", base_url, e))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(format!("unsupported base url scheme {:?}", scheme)),
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Full URL of `path` under the API prefix.
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", base, path)
        } else {
            format!("{}/{}/{}", base, prefix, path)
        }
    }

    /// True when the caller supplied their own `Authorization` header.
    pub(crate) fn overrides_authorization(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }

    pub(crate) fn default_headers(&self) -> Result<HeaderMap, TochkaError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|_| {
            TochkaError::InvalidArgument(format!("invalid user agent: {:?}", self.user_agent))
        })?;
        headers.insert(USER_AGENT, user_agent);
        headers.extend(self.headers.clone());
        Ok(headers)
    }

    pub(crate) fn transport(&self) -> Result<reqwest::Client, TochkaError> {
        let mut builder = reqwest::Client::builder().default_headers(self.default_headers()?);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }
        Ok(builder.build()?)
    }
}
