use async_trait::async_trait;

use crate::domain::analysis::image::ImageSource;
use crate::domain::analysis::model::{AnalysisResponse, ImagePayload};
use crate::domain::errors::AnalysisError;
use crate::domain::shared::value_objects::AuthToken;

pub struct AnalyzeProductImageParams {
    /// `None` when the caller has not picked an image yet.
    pub image: Option<ImageSource>,
    pub token: AuthToken,
}

#[async_trait]
pub trait AnalyzeProductImageUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AnalyzeProductImageParams,
    ) -> Result<AnalysisResponse<ImagePayload>, AnalysisError>;
}
