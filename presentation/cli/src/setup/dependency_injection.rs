use std::sync::Arc;

use logger::TracingLogger;

use analysis_api::barcode_analyzer::BarcodeAnalyzerHttp;
use analysis_api::client::AnalysisApiClient;
use analysis_api::image_analyzer::ImageAnalyzerHttp;

use business::application::analysis::analyze_barcode::AnalyzeBarcodeUseCaseImpl;
use business::application::analysis::analyze_image::AnalyzeProductImageUseCaseImpl;
use business::domain::analysis::use_cases::analyze_barcode::AnalyzeBarcodeUseCase;
use business::domain::analysis::use_cases::analyze_image::AnalyzeProductImageUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub analyze_barcode: Arc<dyn AnalyzeBarcodeUseCase>,
    pub analyze_product_image: Arc<dyn AnalyzeProductImageUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let api_client = AnalysisApiClient::new(config.api.base_url.clone(), config.api.timeout);
        let barcode_analyzer = Arc::new(BarcodeAnalyzerHttp::new(api_client.clone()));
        let image_analyzer = Arc::new(ImageAnalyzerHttp::new(api_client));

        // Analysis use cases
        let analyze_barcode: Arc<dyn AnalyzeBarcodeUseCase> = Arc::new(AnalyzeBarcodeUseCaseImpl {
            analyzer: barcode_analyzer,
            logger: logger.clone(),
        });
        let analyze_product_image: Arc<dyn AnalyzeProductImageUseCase> =
            Arc::new(AnalyzeProductImageUseCaseImpl {
                analyzer: image_analyzer,
                logger,
            });

        Self {
            analyze_barcode,
            analyze_product_image,
        }
    }
}
