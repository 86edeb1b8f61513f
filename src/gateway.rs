//! Transporte HTTP da CLI (reqwest)

use crate::config::Config;
use crate::error::Result;
use schedula_common::{Gateway, HttpRequest, Method, RawResponse, Transport};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> schedula_common::Result<RawResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok(RawResponse::new(status, body))
    }
}

fn transport_error(error: reqwest::Error) -> schedula_common::Error {
    let message = if error.is_timeout() {
        "Tempo de resposta esgotado".to_string()
    } else if error.is_connect() {
        "Não foi possível conectar ao servidor".to_string()
    } else {
        error.to_string()
    };
    schedula_common::Error::Transport(message)
}

/// Gateway com a URL e o token da configuração
pub fn connect(config: &Config) -> Result<Gateway<ReqwestTransport>> {
    let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_seconds))?;
    let token = config.session.as_ref().and_then(|s| s.token.clone());
    Ok(Gateway::new(transport, config.api_url()).with_token(token))
}
