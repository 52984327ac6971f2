use async_trait::async_trait;

use super::model::{
    AnalysisResponse, BarcodeAnalysisRequest, BarcodePayload, ImageAnalysisRequest, ImagePayload,
};
use crate::domain::errors::AnalysisError;
use crate::domain::shared::value_objects::AuthToken;

/// Service port for `POST /api/v1/analyzeBarcode`.
///
/// Implementations send exactly one request per call and never retry.
#[async_trait]
pub trait BarcodeAnalysisService: Send + Sync {
    async fn analyze_barcode(
        &self,
        request: &BarcodeAnalysisRequest,
        token: &AuthToken,
    ) -> Result<AnalysisResponse<BarcodePayload>, AnalysisError>;
}

/// Service port for `POST /api/v1/analyzeProductImage`.
#[async_trait]
pub trait ImageAnalysisService: Send + Sync {
    async fn analyze_product_image(
        &self,
        request: &ImageAnalysisRequest,
        token: &AuthToken,
    ) -> Result<AnalysisResponse<ImagePayload>, AnalysisError>;
}
