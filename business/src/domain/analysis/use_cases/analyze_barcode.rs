use async_trait::async_trait;

use crate::domain::analysis::model::{AnalysisResponse, BarcodePayload};
use crate::domain::errors::AnalysisError;
use crate::domain::shared::value_objects::AuthToken;

pub struct AnalyzeBarcodeParams {
    pub barcode: String,
    /// Optional product name that helps the server identify the barcode.
    pub product_name: Option<String>,
    pub token: AuthToken,
}

#[async_trait]
pub trait AnalyzeBarcodeUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AnalyzeBarcodeParams,
    ) -> Result<AnalysisResponse<BarcodePayload>, AnalysisError>;
}
