use async_trait::async_trait;

use business::domain::analysis::model::{
    AnalysisResponse, BarcodeAnalysisRequest, BarcodePayload,
};
use business::domain::analysis::services::BarcodeAnalysisService;
use business::domain::errors::AnalysisError;
use business::domain::shared::value_objects::AuthToken;

use crate::client::AnalysisApiClient;

pub const ANALYZE_BARCODE_PATH: &str = "api/v1/analyzeBarcode";
const DEFAULT_ERROR_MESSAGE: &str = "Failed to analyze barcode";

pub struct BarcodeAnalyzerHttp {
    client: AnalysisApiClient,
}

impl BarcodeAnalyzerHttp {
    pub fn new(client: AnalysisApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BarcodeAnalysisService for BarcodeAnalyzerHttp {
    async fn analyze_barcode(
        &self,
        request: &BarcodeAnalysisRequest,
        token: &AuthToken,
    ) -> Result<AnalysisResponse<BarcodePayload>, AnalysisError> {
        let body = self
            .client
            .post_json(ANALYZE_BARCODE_PATH, request, token, DEFAULT_ERROR_MESSAGE)
            .await?;

        Ok(AnalysisResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::analysis::value_objects::Barcode;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn analyzer(server: &MockServer) -> BarcodeAnalyzerHttp {
        let base_url = Url::parse(&server.uri()).unwrap();
        BarcodeAnalyzerHttp::new(AnalysisApiClient::new(base_url, None))
    }

    fn request(barcode: &str) -> BarcodeAnalysisRequest {
        BarcodeAnalysisRequest::new(Barcode::new(barcode).unwrap(), None)
    }

    #[tokio::test]
    async fn should_return_body_unchanged_on_success() {
        let server = MockServer::start().await;
        let body = json!({"success":true,"payload":{"analysis":{"name":{"english":"Cola"}}}});
        Mock::given(method("POST"))
            .and(path("/api/v1/analyzeBarcode"))
            .and(header("Authorization", "Bearer abc"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"barcode": "0123456789012"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let result = analyzer(&server)
            .analyze_barcode(&request("0123456789012"), &AuthToken::new("abc"))
            .await;

        assert_eq!(result.unwrap().into_body(), body);
    }

    #[tokio::test]
    async fn should_send_product_name_hint_alongside_barcode() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/analyzeBarcode"))
            .and(body_json(
                json!({"barcode": "8801043014809", "product_name": "Shin Ramyun"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let request = BarcodeAnalysisRequest::new(
            Barcode::new("8801043014809").unwrap(),
            Some("Shin Ramyun"),
        );
        let result = analyzer(&server)
            .analyze_barcode(&request, &AuthToken::new("abc"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_carry_server_message_for_any_error_status() {
        for status in [400u16, 401, 404, 500, 503] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/api/v1/analyzeBarcode"))
                .respond_with(
                    ResponseTemplate::new(status)
                        .set_body_json(json!({"message": "Barcode is required", "success": false})),
                )
                .mount(&server)
                .await;

            let result = analyzer(&server)
                .analyze_barcode(&request("42"), &AuthToken::new("abc"))
                .await;

            assert_eq!(
                result.unwrap_err(),
                AnalysisError::server(status, "Barcode is required")
            );
        }
    }

    #[tokio::test]
    async fn should_use_default_message_when_error_body_has_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let result = analyzer(&server)
            .analyze_barcode(&request("42"), &AuthToken::new("abc"))
            .await;

        assert_eq!(result.unwrap_err().message(), "Failed to analyze barcode");
    }

    #[tokio::test]
    async fn should_fail_with_transport_error_when_error_body_is_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let result = analyzer(&server)
            .analyze_barcode(&request("42"), &AuthToken::new("abc"))
            .await;

        let error = result.unwrap_err();
        assert_eq!(error.kind(), "transport");
        assert!(matches!(error, AnalysisError::Transport(_)));
    }

    #[tokio::test]
    async fn should_fail_with_transport_error_on_malformed_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let result = analyzer(&server)
            .analyze_barcode(&request("42"), &AuthToken::new("abc"))
            .await;

        assert!(matches!(result, Err(AnalysisError::Transport(_))));
    }

    #[tokio::test]
    async fn should_fail_with_transport_error_when_server_is_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let base_url = Url::parse(&format!("http://127.0.0.1:{port}")).unwrap();
        let analyzer = BarcodeAnalyzerHttp::new(AnalysisApiClient::new(base_url, None));

        let result = analyzer
            .analyze_barcode(&request("42"), &AuthToken::new("abc"))
            .await;

        assert!(matches!(result, Err(AnalysisError::Transport(_))));
    }
}
