use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::image::EncodedImage;
use super::report::ProductReport;
use super::value_objects::{Barcode, HalalStatus, Verdict};
use crate::domain::errors::{AnalysisError, ReportError};

/// Body of `POST /api/v1/analyzeBarcode`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarcodeAnalysisRequest {
    pub barcode: Barcode,
    /// Name hint passed to the analysis alongside the barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl BarcodeAnalysisRequest {
    /// Builds a request, dropping a blank `product_name` hint.
    pub fn new(barcode: Barcode, product_name: Option<&str>) -> Self {
        let product_name = product_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Self {
            barcode,
            product_name,
        }
    }
}

/// Body of `POST /api/v1/analyzeProductImage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAnalysisRequest {
    pub image: EncodedImage,
}

/// Envelope shared by both endpoints. Absent fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<P> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub payload: Option<P>,
    #[serde(default)]
    pub user_exists: bool,
}

/// A successful response body, kept exactly as the server sent it.
///
/// `P` is the payload type the endpoint promises; it is only used when a
/// typed view is requested through [`AnalysisResponse::envelope`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse<P> {
    body: Value,
    _payload: PhantomData<P>,
}

impl<P> AnalysisResponse<P> {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            _payload: PhantomData,
        }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

impl<P: DeserializeOwned> AnalysisResponse<P> {
    /// Deserializes a typed copy of the body. The raw body is left untouched.
    pub fn envelope(&self) -> Result<ServiceResponse<P>, AnalysisError> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| AnalysisError::transport(format!("Unexpected response shape: {e}")))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductNames {
    pub english: String,
    pub korean: String,
    pub japanese: String,
    pub chinese: String,
}

/// Structured analysis returned by the barcode endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductAnalysis {
    pub name: ProductNames,
    pub expiry_date: String,
    pub ingredients_translated: String,
    pub contains_alcohol: String,
    pub halal_status: String,
    pub contains_pork: String,
    pub contains_beef: String,
    pub is_plant_based: String,
    pub reasoning: String,
}

impl ProductAnalysis {
    pub fn alcohol(&self) -> Verdict {
        Verdict::from_answer(&self.contains_alcohol)
    }

    pub fn halal(&self) -> HalalStatus {
        HalalStatus::from_answer(&self.halal_status)
    }

    pub fn pork(&self) -> Verdict {
        Verdict::from_answer(&self.contains_pork)
    }

    pub fn beef(&self) -> Verdict {
        Verdict::from_answer(&self.contains_beef)
    }

    pub fn plant_based(&self) -> Verdict {
        Verdict::from_answer(&self.is_plant_based)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BarcodePayload {
    #[serde(default)]
    pub analysis: ProductAnalysis,
    #[serde(default, rename = "isNewItem")]
    pub is_new_item: bool,
}

/// Payload of the image endpoint: a six-line text report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImagePayload {
    #[serde(default)]
    pub analysis: String,
}

impl ImagePayload {
    pub fn report(&self) -> Result<ProductReport, ReportError> {
        ProductReport::parse(&self.analysis)
    }
}
