use std::path::PathBuf;

use base64::{Engine as _, engine::general_purpose};
use serde::Serialize;

use crate::domain::errors::ValidationError;

/// Where the image to analyse comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// A file on disk, read asynchronously when the call runs.
    Path(PathBuf),
    Bytes(Vec<u8>),
    /// Base64 text, with or without a `data:image/...;base64,` prefix.
    DataUrl(String),
}

impl ImageSource {
    /// Short description for log lines; never includes image content.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => format!("file {}", path.display()),
            ImageSource::Bytes(bytes) => format!("{} bytes in memory", bytes.len()),
            ImageSource::DataUrl(text) => format!("data url ({} chars)", text.len()),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

/// Standard base64 text of an image, without any data-URL prefix.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ValidationError> {
        if bytes.is_empty() {
            return Err(ValidationError::ImageMissing);
        }
        Ok(Self(general_purpose::STANDARD.encode(bytes)))
    }

    /// Accepts either bare base64 or a data URL and keeps only the base64 part.
    pub fn from_data_url(raw: &str) -> Result<Self, ValidationError> {
        let stripped = regex::Regex::new(r"^data:[^,]*;base64,")
            .map(|re| re.replace(raw.trim_start(), "").to_string())
            .unwrap_or_else(|_| raw.to_string());
        let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

        if clean.is_empty() {
            return Err(ValidationError::ImageMissing);
        }
        general_purpose::STANDARD
            .decode(&clean)
            .map_err(|e| ValidationError::ImageUnreadable(format!("invalid base64: {e}")))?;

        Ok(Self(clean))
    }

    /// Resolves an [`ImageSource`] into its encoded form.
    pub async fn load(source: &ImageSource) -> Result<Self, ValidationError> {
        match source {
            ImageSource::Path(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    ValidationError::ImageUnreadable(format!("{}: {}", path.display(), e))
                })?;
                Self::from_bytes(&bytes)
            }
            ImageSource::Bytes(bytes) => Self::from_bytes(bytes),
            ImageSource::DataUrl(text) => Self::from_data_url(text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        general_purpose::STANDARD.decode(&self.0)
    }
}

impl std::fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EncodedImage({} chars)", self.0.len())
    }
}
