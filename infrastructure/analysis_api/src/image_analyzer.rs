use async_trait::async_trait;

use business::domain::analysis::model::{AnalysisResponse, ImageAnalysisRequest, ImagePayload};
use business::domain::analysis::services::ImageAnalysisService;
use business::domain::errors::AnalysisError;
use business::domain::shared::value_objects::AuthToken;

use crate::client::AnalysisApiClient;

pub const ANALYZE_PRODUCT_IMAGE_PATH: &str = "api/v1/analyzeProductImage";
const DEFAULT_ERROR_MESSAGE: &str = "Failed to analyze product image";

pub struct ImageAnalyzerHttp {
    client: AnalysisApiClient,
}

impl ImageAnalyzerHttp {
    pub fn new(client: AnalysisApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageAnalysisService for ImageAnalyzerHttp {
    async fn analyze_product_image(
        &self,
        request: &ImageAnalysisRequest,
        token: &AuthToken,
    ) -> Result<AnalysisResponse<ImagePayload>, AnalysisError> {
        let body = self
            .client
            .post_json(
                ANALYZE_PRODUCT_IMAGE_PATH,
                request,
                token,
                DEFAULT_ERROR_MESSAGE,
            )
            .await?;

        Ok(AnalysisResponse::new(body))
    }
}
