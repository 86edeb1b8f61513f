//! Transporte via fetch do navegador

use schedula_common::{Gateway, HttpRequest, RawResponse, Session, Transport};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// URL base definida no build (`SCHEDULA_API_URL`)
pub const API_URL: &str = match option_env!("SCHEDULA_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: &HttpRequest) -> schedula_common::Result<RawResponse> {
        fetch(request)
            .await
            .map_err(|e| schedula_common::Error::Transport(js_message(&e)))
    }
}

async fn fetch(request: &HttpRequest) -> Result<RawResponse, JsValue> {
    let url = with_query(&request.url, &request.query);

    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let req = Request::new_with_str_and_init(&url, &opts)?;
    if request.body.is_some() {
        req.headers().set("Content-Type", "application/json")?;
    }
    if let Some(token) = &request.bearer {
        req.headers().set("Authorization", &format!("Bearer {}", token))?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window indisponível"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&req)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok(RawResponse::new(resp.status(), text.as_string().unwrap_or_default()))
}

fn with_query(url: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let pairs: Vec<String> = query
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                js_sys::encode_uri_component(k),
                js_sys::encode_uri_component(v)
            )
        })
        .collect();
    format!("{}?{}", url, pairs.join("&"))
}

/// fetch rejeita com TypeError em falha de rede
fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Falha de rede".to_string())
}

/// Gateway autenticado com o token da sessão
pub fn gateway(session: Option<&Session>) -> Gateway<FetchTransport> {
    let token = session.and_then(|s| s.token.clone());
    Gateway::new(FetchTransport, API_URL).with_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_query_is_encoded() {
        let query = vec![("nome".to_string(), "São Paulo".to_string())];
        assert_eq!(with_query("/workstations", &query), "/workstations?nome=S%C3%A3o%20Paulo");
        assert_eq!(with_query("/cities", &[]), "/cities");
    }

    #[wasm_bindgen_test]
    fn test_gateway_uses_build_url() {
        let gateway = gateway(None);
        assert_eq!(gateway.url_for("/cities"), format!("{}/cities", API_URL.trim_end_matches('/')));
    }
}
