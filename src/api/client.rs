/*!
Authenticated request execution against the DigitalOcean v2 API.

One core path (`execute`) builds the request, attaches the bearer token,
sends it, and classifies the outcome:

  transport failure      -> ApiError::Transport (no retry)
  status 422             -> ApiError::Validation (echoes the request body)
  status > 400 (not 422) -> ApiError::Api (status line, body never decoded)
  otherwise              -> raw body text for the typed wrappers to decode

Typed wrappers (`get` / `post` / `delete`) layer JSON decoding on top.
Diagnostics go to tracing: a one-line summary at info, full request and
response dumps at debug; the subscriber in `main` maps the `--verbose` and
`--debug` flags onto those levels.

No explicit timeout is configured; the client relies on reqwest's defaults.
*/

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::api::error::ApiError;

/// Fixed production endpoint. Tests point the client elsewhere.
pub const API_URL: &str = "https://api.digitalocean.com/v2/";

/// Invocation-wide settings, constructed once in `main` from flags and
/// environment, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// DigitalOcean API v2 access token.
    pub token: String,
    /// Dump raw HTTP requests and responses to the diagnostic stream.
    pub debug: bool,
    /// One-line method/URL/status summary per request.
    pub verbose: bool,
}

/// HTTP client for the DigitalOcean v2 API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl ApiClient {
    /// Client against the production API.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_base_url(config, API_URL)
    }

    /// Client against an arbitrary base URL. The URL must end with `/` so
    /// relative paths join underneath it.
    pub fn with_base_url(config: &Config, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("invalid API base URL '{base_url}': {e}")))?;
        Ok(Self {
            http: Client::new(),
            base_url,
            token: config.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Config(format!("invalid request path '{path}': {e}")))
    }

    /// GET `path` and decode the JSON response into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::GET, path, None).await?;
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }

    /// POST `body` as JSON to `path` and decode the response into `T`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(body).map_err(ApiError::Encode)?;
        let text = self.execute(Method::POST, path, Some(payload)).await?;
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }

    /// DELETE `path`. No response body is expected; success is the absence
    /// of an error.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None).await.map(|_| ())
    }

    /// Headers sent with every request: the bearer token, plus a JSON
    /// content type when a body is attached.
    fn request_headers(&self, has_body: bool) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| ApiError::Config(format!("API token is not a valid header value: {e}")))?;
        headers.insert(AUTHORIZATION, bearer);
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        Ok(headers)
    }

    /// Single request attempt. `body` arrives pre-serialized so a 422 can
    /// echo it byte-for-byte.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let url = self.endpoint(path)?;
        let req_headers = self.request_headers(body.is_some())?;

        debug!(
            %method,
            %url,
            headers = ?req_headers,
            body = body.as_deref().unwrap_or("-"),
            "http request"
        );

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .headers(req_headers);
        if let Some(payload) = &body {
            request = request.body(payload.clone());
        }

        let response = request.send().await?;
        let status = response.status();
        info!(%method, %url, %status, "api call");

        let headers = response.headers().clone();
        let text = response.text().await?;
        debug!(%status, ?headers, body = %text, "http response");

        // The v2 API reports semantic validation failures as 422; anything
        // else above 400 is terminal with just its status line.
        if status.as_u16() == 422 {
            return Err(ApiError::Validation {
                body: body.unwrap_or_default(),
            });
        }
        if status.as_u16() > 400 {
            return Err(ApiError::Api { status });
        }

        Ok(text)
    }
}

/* ---- Tests ---- */
