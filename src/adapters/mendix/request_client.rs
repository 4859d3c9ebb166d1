//! HTTP client for the purchase-request JSON feed.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::tasks::PurchaseRequest;
use crate::ports::{PurchaseRequestSource, SourceError};

use super::{check_status, map_transport_error};

/// Fetches purchase requests from the provider's JSON endpoint.
///
/// The payload shape varies between deployments: a bare array, the
/// `RequisicaoCompras.RequisicaoCompra` wrapper, or some other wrapper
/// object with the row array nested one or two levels deep. All of them
/// are flattened to a plain list before reaching the core.
pub struct MendixRequestClient {
    client: reqwest::Client,
    url: String,
}

impl MendixRequestClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PurchaseRequestSource for MendixRequestClient {
    async fn fetch_requests(&self) -> Result<Vec<PurchaseRequest>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let payload: Value = check_status(response)?
            .json()
            .await
            .map_err(map_transport_error)?;
        Ok(flatten_requests(payload))
    }
}

/// Normalizes any known payload shape to a flat request list.
///
/// Rows that fail to deserialize are dropped individually; a malformed
/// record never aborts the batch.
fn flatten_requests(payload: Value) -> Vec<PurchaseRequest> {
    extract_rows(payload)
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect()
}

fn extract_rows(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(rows) => rows,
        Value::Object(map) => {
            if let Some(rows) = map
                .get("RequisicaoCompras")
                .and_then(|v| v.get("RequisicaoCompra"))
                .and_then(Value::as_array)
            {
                return rows.clone();
            }
            // Unknown wrapper: take the first array one or two levels deep.
            for value in map.values() {
                if let Value::Array(rows) = value {
                    return rows.clone();
                }
            }
            for value in map.values() {
                if let Value::Object(inner) = value {
                    for nested in inner.values() {
                        if let Value::Array(rows) = nested {
                            return rows.clone();
                        }
                    }
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn row(id: &str) -> Value {
        json!({
            "_RequestInternalId": id,
            "Title": "Compra",
            "EmialOwner": "ana@example.com",
            "Level": "C"
        })
    }

    #[test]
    fn bare_array_payload_flattens_directly() {
        let requests = flatten_requests(json!([row("WS1"), row("WS2")]));
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].internal_id.as_deref(), Some("WS1"));
    }

    #[test]
    fn provider_wrapper_is_unwrapped() {
        let payload = json!({
            "RequisicaoCompras": { "RequisicaoCompra": [row("WS1")] }
        });
        let requests = flatten_requests(payload);
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn unknown_wrapper_falls_back_to_first_nested_array() {
        let one_deep = json!({ "items": [row("WS1")] });
        assert_eq!(flatten_requests(one_deep).len(), 1);

        let two_deep = json!({ "data": { "rows": [row("WS1"), row("WS2")] } });
        assert_eq!(flatten_requests(two_deep).len(), 2);
    }

    #[test]
    fn rowless_payloads_yield_an_empty_list() {
        assert!(flatten_requests(json!(null)).is_empty());
        assert!(flatten_requests(json!({"message": "no data"})).is_empty());
        assert!(flatten_requests(json!("text")).is_empty());
    }

    #[tokio::test]
    async fn fetches_and_flattens_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requisicao"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "RequisicaoCompras": { "RequisicaoCompra": [row("WS1")] }
            })))
            .mount(&server)
            .await;

        let client = MendixRequestClient::new(
            reqwest::Client::new(),
            format!("{}/requisicao", server.uri()),
        );
        let requests = client.fetch_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].is_in_scope());
    }

    #[tokio::test]
    async fn non_success_status_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = MendixRequestClient::new(reqwest::Client::new(), server.uri());
        let err = client.fetch_requests().await.unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 503 }));
    }
}
