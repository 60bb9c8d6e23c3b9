//! reqwest-backed chat gateway

use super::error::{HttpGatewayError, Result};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info};
use zar_application::{ChatGateway, GatewayError};
use zar_domain::{CHAT_PATH, ChatRequest, ChatResponse, UserText};

const USER_AGENT: &str = concat!("zar-chat/", env!("CARGO_PKG_VERSION"));

/// Chat gateway speaking JSON over HTTP
///
/// No client-side timeout is set: a request runs until the transport
/// resolves or fails.
#[derive(Debug, Clone)]
pub struct HttpChatGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpChatGateway {
    /// Create a gateway for the backend at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Self::with_client(client, base_url)
    }

    /// Create a gateway with an existing client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let endpoint = chat_endpoint(base_url)?;
        info!("HttpChatGateway targeting {}", endpoint);
        Ok(Self { client, endpoint })
    }

    /// Full URL of the chat endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Resolve the chat endpoint against a base URL
///
/// Only `http` and `https` bases are accepted.
pub fn chat_endpoint(base_url: &str) -> Result<Url> {
    let invalid = |reason: String| HttpGatewayError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }
    base.join(CHAT_PATH).map_err(|e| invalid(e.to_string()))
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn send(&self, text: &UserText) -> std::result::Result<String, GatewayError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ChatRequest::new(text))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response body: {}", e)))?;
        let parsed = ChatResponse::parse(&body);

        debug!("Response status {} ({} bytes)", status.as_u16(), body.len());

        if !status.is_success() {
            return Err(GatewayError::Server {
                status: status.as_u16(),
                reason: parsed.as_ref().and_then(|p| p.reason()).map(str::to_string),
            });
        }

        parsed.and_then(|p| p.reply).ok_or_else(|| {
            GatewayError::MalformedResponse(format!(
                "HTTP {} without a 'reply' string",
                status.as_u16()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    fn text(s: &str) -> UserText {
        UserText::try_new(s).unwrap()
    }

    #[test]
    fn test_endpoint_joined_onto_base() {
        let gateway = HttpChatGateway::new("http://localhost:5000").unwrap();
        assert_eq!(gateway.endpoint().as_str(), "http://localhost:5000/api/chat");

        let gateway = HttpChatGateway::new("https://zar.example.com/app/").unwrap();
        assert_eq!(gateway.endpoint().as_str(), "https://zar.example.com/api/chat");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpChatGateway::new("not a url").unwrap_err();
        assert!(matches!(err, HttpGatewayError::InvalidUrl { .. }));

        let err = HttpChatGateway::new("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[tokio::test]
    async fn test_send_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"message": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "hi there"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let gateway = HttpChatGateway::new(&mock_server.uri()).unwrap();
        let reply = gateway.send(&text("  hello  ")).await.unwrap();

        assert_eq!(reply, "hi there");
    }

    #[tokio::test]
    async fn test_reply_rendered_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"reply": "<b>Pedido</b>\n  42"})),
            )
            .mount(&mock_server)
            .await;

        let gateway = HttpChatGateway::new(&mock_server.uri()).unwrap();
        let reply = gateway.send(&text("status")).await.unwrap();

        assert_eq!(reply, "<b>Pedido</b>\n  42");
    }

    #[tokio::test]
    async fn test_server_error_with_reason() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({"reply": "server busy"})))
            .mount(&mock_server)
            .await;

        let gateway = HttpChatGateway::new(&mock_server.uri()).unwrap();
        let err = gateway.send(&text("hello")).await.unwrap_err();

        assert_eq!(
            err,
            GatewayError::Server {
                status: 503,
                reason: Some("server busy".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_server_error_without_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let gateway = HttpChatGateway::new(&mock_server.uri()).unwrap();
        let err = gateway.send(&text("hello")).await.unwrap_err();

        assert_eq!(
            err,
            GatewayError::Server {
                status: 502,
                reason: None,
            }
        );
    }

    #[tokio::test]
    async fn test_success_without_reply_is_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "?"})))
            .mount(&mock_server)
            .await;

        let gateway = HttpChatGateway::new(&mock_server.uri()).unwrap();
        let err = gateway.send(&text("hello")).await.unwrap_err();

        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then release a port so nothing is listening on it
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let uri = format!("http://127.0.0.1:{}", port);

        let gateway = HttpChatGateway::new(&uri).unwrap();
        let err = gateway.send(&text("hello")).await.unwrap_err();

        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
