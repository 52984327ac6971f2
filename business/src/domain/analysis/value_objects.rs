use serde::Serialize;

use crate::domain::errors::ValidationError;

/// Product barcode as typed or scanned by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Barcode(String);

impl Barcode {
    /// Trims surrounding whitespace and rejects empty input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BarcodeEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Yes/No/Unclear answer used by the analysis for alcohol, pork, beef and
/// plant-based questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
    Unclear,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Yes => write!(f, "Yes"),
            Verdict::No => write!(f, "No"),
            Verdict::Unclear => write!(f, "Unclear"),
        }
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Verdict::Yes),
            "no" => Ok(Verdict::No),
            "unclear" => Ok(Verdict::Unclear),
            _ => Err(format!("Invalid verdict: {}", s)),
        }
    }
}

impl Verdict {
    /// Parses a server answer, treating anything unknown as `Unclear`.
    pub fn from_answer(answer: &str) -> Self {
        answer.parse().unwrap_or(Verdict::Unclear)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalalStatus {
    Halal,
    NotHalal,
    Unclear,
}

impl std::fmt::Display for HalalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HalalStatus::Halal => write!(f, "Halal"),
            HalalStatus::NotHalal => write!(f, "Not Halal"),
            HalalStatus::Unclear => write!(f, "Unclear"),
        }
    }
}

impl std::str::FromStr for HalalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "halal" => Ok(HalalStatus::Halal),
            "not halal" => Ok(HalalStatus::NotHalal),
            "unclear" => Ok(HalalStatus::Unclear),
            _ => Err(format!("Invalid halal status: {}", s)),
        }
    }
}

impl HalalStatus {
    pub fn from_answer(answer: &str) -> Self {
        answer.parse().unwrap_or(HalalStatus::Unclear)
    }
}
