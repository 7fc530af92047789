//! HTTP plumbing shared by the typed endpoints.

use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::ClientConfig;

use crate::error::{ApiError, ErrorBody};

/// Client for the task backend.
///
/// Every request goes to `{base_url}{path}`. A bearer token is attached only
/// when the caller passes one. Cloning is cheap and shares the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a resource path such as `/tasks/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the JSON response body.
    pub async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch(method, path, body, token).await?;
        Ok(response.json::<R>().await?)
    }

    /// Send a request whose response body is irrelevant.
    pub async fn request_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, body, token).await?;
        Ok(())
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, authenticated = token.is_some(), "sending request");

        let mut request = self.http.request(method.clone(), &url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%method, %url, "request failed: {e}");
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        tracing::warn!(%method, %url, status = status.as_u16(), ?detail, "request rejected");
        Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorDetail;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://api.test/");
        assert_eq!(client.base_url(), "http://api.test");
        assert_eq!(client.url("/tasks"), "http://api.test/tasks");

        let client = ApiClient::from_config(&ClientConfig::new("http://api.test/v1"));
        assert_eq!(client.url("/tasks/3"), "http://api.test/v1/tasks/3");
    }

    #[tokio::test]
    async fn test_bearer_header_only_when_token_given() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/secure"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/open"))
            .respond_with(|req: &Request| {
                let has_auth = req.headers.contains_key("authorization");
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": !has_auth }))
            })
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());

        let secure: serde_json::Value = client
            .request::<(), _>(Method::GET, "/secure", None, Some("abc"))
            .await
            .unwrap();
        assert_eq!(secure["ok"], true);

        let open: serde_json::Value = client
            .request::<(), _>(Method::GET, "/open", None, None)
            .await
            .unwrap();
        assert_eq!(open["ok"], true);
    }

    #[tokio::test]
    async fn test_json_body_is_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header_exists("content-type"))
            .respond_with(|req: &Request| {
                let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
                ResponseTemplate::new(200).set_body_json(body)
            })
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let sent = serde_json::json!({"title": "x", "n": 1});
        let echoed: serde_json::Value = client
            .request(Method::POST, "/echo", Some(&sent), None)
            .await
            .unwrap();
        assert_eq!(echoed, sent);
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Task not found"})),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());

        let err = client
            .request_empty::<()>(Method::GET, "/missing", None, None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(matches!(
            err,
            ApiError::Rejected { detail: Some(ErrorDetail::Message(ref m)), .. } if m == "Task not found"
        ));

        let err = client
            .request_empty::<()>(Method::GET, "/broken", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 500, detail: None }));
        assert_eq!(err.message_or("Failed"), "Failed");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Nothing listens on the discard port.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client
            .request_empty::<()>(Method::GET, "/tasks", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.message_or("ignored"), crate::error::UNEXPECTED_ERROR);
    }
}
