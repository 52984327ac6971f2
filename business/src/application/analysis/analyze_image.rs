use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analysis::image::EncodedImage;
use crate::domain::analysis::model::{AnalysisResponse, ImageAnalysisRequest, ImagePayload};
use crate::domain::analysis::services::ImageAnalysisService;
use crate::domain::analysis::use_cases::analyze_image::{
    AnalyzeProductImageParams, AnalyzeProductImageUseCase,
};
use crate::domain::errors::{AnalysisError, ValidationError};
use crate::domain::logger::Logger;

pub struct AnalyzeProductImageUseCaseImpl {
    pub analyzer: Arc<dyn ImageAnalysisService>,
    pub logger: Arc<dyn Logger>,
}

impl AnalyzeProductImageUseCaseImpl {
    fn reject(&self, error: ValidationError) -> AnalysisError {
        self.logger.warn(&format!("Rejected product image analysis: {}", error));
        error.into()
    }
}

#[async_trait]
impl AnalyzeProductImageUseCase for AnalyzeProductImageUseCaseImpl {
    async fn execute(
        &self,
        params: AnalyzeProductImageParams,
    ) -> Result<AnalysisResponse<ImagePayload>, AnalysisError> {
        let source = params
            .image
            .ok_or_else(|| self.reject(ValidationError::ImageMissing))?;
        if params.token.is_blank() {
            return Err(self.reject(ValidationError::TokenMissing));
        }

        self.logger.debug(&format!("Encoding product image from {}", source.describe()));
        let image = EncodedImage::load(&source)
            .await
            .map_err(|e| self.reject(e))?;

        self.logger.info(&format!(
            "Analyzing product image ({} base64 chars)",
            image.len()
        ));

        let request = ImageAnalysisRequest { image };
        match self
            .analyzer
            .analyze_product_image(&request, &params.token)
            .await
        {
            Ok(response) => {
                self.logger.info("Product analysis completed");
                Ok(response)
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Error analyzing product image ({}): {}",
                    e.kind(),
                    e
                ));
                Err(e)
            }
        }
    }
}
