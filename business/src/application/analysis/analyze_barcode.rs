use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analysis::model::{AnalysisResponse, BarcodeAnalysisRequest, BarcodePayload};
use crate::domain::analysis::services::BarcodeAnalysisService;
use crate::domain::analysis::use_cases::analyze_barcode::{
    AnalyzeBarcodeParams, AnalyzeBarcodeUseCase,
};
use crate::domain::analysis::value_objects::Barcode;
use crate::domain::errors::{AnalysisError, ValidationError};
use crate::domain::logger::Logger;

pub struct AnalyzeBarcodeUseCaseImpl {
    pub analyzer: Arc<dyn BarcodeAnalysisService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AnalyzeBarcodeUseCase for AnalyzeBarcodeUseCaseImpl {
    async fn execute(
        &self,
        params: AnalyzeBarcodeParams,
    ) -> Result<AnalysisResponse<BarcodePayload>, AnalysisError> {
        let barcode = Barcode::new(&params.barcode).inspect_err(|e| {
            self.logger.warn(&format!("Rejected barcode analysis: {}", e));
        })?;
        if params.token.is_blank() {
            self.logger.warn("Rejected barcode analysis: missing authentication token");
            return Err(ValidationError::TokenMissing.into());
        }

        self.logger.info(&format!("Analyzing barcode: {}", barcode));

        let request = BarcodeAnalysisRequest::new(barcode, params.product_name.as_deref());
        match self.analyzer.analyze_barcode(&request, &params.token).await {
            Ok(response) => {
                self.logger
                    .info(&format!("Barcode analysis completed: {}", request.barcode));
                Ok(response)
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Error analyzing barcode {} ({}): {}",
                    request.barcode,
                    e.kind(),
                    e
                ));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::AuthToken;
    use mockall::mock;
    use serde_json::json;

    mock! {
        pub BarcodeAnalyzer {}

        #[async_trait]
        impl BarcodeAnalysisService for BarcodeAnalyzer {
            async fn analyze_barcode(
                &self,
                request: &BarcodeAnalysisRequest,
                token: &AuthToken,
            ) -> Result<AnalysisResponse<BarcodePayload>, AnalysisError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(barcode: &str, token: &str) -> AnalyzeBarcodeParams {
        AnalyzeBarcodeParams {
            barcode: barcode.to_string(),
            product_name: None,
            token: AuthToken::new(token),
        }
    }

    #[tokio::test]
    async fn should_return_body_unchanged_when_analysis_succeeds() {
        let body = json!({"success":true,"payload":{"analysis":{"name":{"english":"Cola"}}}});
        let expected = body.clone();
        let mut mock_analyzer = MockBarcodeAnalyzer::new();
        mock_analyzer
            .expect_analyze_barcode()
            .withf(|request, token| {
                request.barcode.as_str() == "0123456789012" && token.as_str() == "abc"
            })
            .times(1)
            .returning(move |_, _| Ok(AnalysisResponse::new(body.clone())));

        let use_case = AnalyzeBarcodeUseCaseImpl {
            analyzer: Arc::new(mock_analyzer),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("0123456789012", "abc")).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_body(), expected);
    }

    #[tokio::test]
    async fn should_forward_product_name_hint() {
        let mut mock_analyzer = MockBarcodeAnalyzer::new();
        mock_analyzer
            .expect_analyze_barcode()
            .withf(|request, _| request.product_name.as_deref() == Some("Shin Ramyun"))
            .times(1)
            .returning(|_, _| Ok(AnalysisResponse::new(json!({"success": true}))));

        let use_case = AnalyzeBarcodeUseCaseImpl {
            analyzer: Arc::new(mock_analyzer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AnalyzeBarcodeParams {
                barcode: "8801043014809".to_string(),
                product_name: Some("Shin Ramyun".to_string()),
                token: AuthToken::new("abc"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_empty_barcode_without_calling_server() {
        let mut mock_analyzer = MockBarcodeAnalyzer::new();
        mock_analyzer.expect_analyze_barcode().never();

        let use_case = AnalyzeBarcodeUseCaseImpl {
            analyzer: Arc::new(mock_analyzer),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("   ", "abc")).await;

        assert_eq!(
            result.unwrap_err(),
            AnalysisError::Validation(ValidationError::BarcodeEmpty)
        );
    }

    #[tokio::test]
    async fn should_reject_missing_token_without_calling_server() {
        let mut mock_analyzer = MockBarcodeAnalyzer::new();
        mock_analyzer.expect_analyze_barcode().never();

        let use_case = AnalyzeBarcodeUseCaseImpl {
            analyzer: Arc::new(mock_analyzer),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("0123456789012", "")).await;

        assert_eq!(
            result.unwrap_err(),
            AnalysisError::Validation(ValidationError::TokenMissing)
        );
    }

    #[tokio::test]
    async fn should_log_and_propagate_server_error() {
        let mut mock_analyzer = MockBarcodeAnalyzer::new();
        mock_analyzer
            .expect_analyze_barcode()
            .returning(|_, _| Err(AnalysisError::server(404, "Product not found")));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("Product not found"))
            .times(1)
            .returning(|_| ());

        let use_case = AnalyzeBarcodeUseCaseImpl {
            analyzer: Arc::new(mock_analyzer),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(params("8801043014809", "abc")).await;

        let error = result.unwrap_err();
        assert_eq!(error.message(), "Product not found");
        assert!(matches!(error, AnalysisError::Server { status: 404, .. }));
    }

    #[tokio::test]
    async fn should_propagate_transport_error() {
        let mut mock_analyzer = MockBarcodeAnalyzer::new();
        mock_analyzer
            .expect_analyze_barcode()
            .returning(|_, _| Err(AnalysisError::transport("connection refused")));

        let use_case = AnalyzeBarcodeUseCaseImpl {
            analyzer: Arc::new(mock_analyzer),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("8801043014809", "abc")).await;

        assert!(matches!(result, Err(AnalysisError::Transport(_))));
    }
}
