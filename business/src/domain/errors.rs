/// Caller-side precondition failures, raised before any request is sent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a barcode")]
    BarcodeEmpty,
    #[error("Please select an image")]
    ImageMissing,
    #[error("Failed to read image: {0}")]
    ImageUnreadable(String),
    #[error("Authentication token is required")]
    TokenMissing,
}

/// The single failure type surfaced by both analysis calls.
///
/// `Display` yields the human-readable message a caller shows to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The endpoint answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Network failure or an unparseable response body.
    #[error("{0}")]
    Transport(String),
}

impl AnalysisError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        AnalysisError::Server {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        AnalysisError::Transport(message.into())
    }

    /// Human-readable message carried by the failure.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Validation(_) => "validation",
            AnalysisError::Server { .. } => "server",
            AnalysisError::Transport(_) => "transport",
        }
    }
}

/// Failures of the six-line product report parser.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error("report.missing_field: line {line} ({label})")]
    MissingField { line: usize, label: &'static str },
    #[error("report.unexpected_label: line {line} should start with \"{expected}\"")]
    UnexpectedLabel { line: usize, expected: &'static str },
    #[error("report.trailing_content: line {line}")]
    TrailingContent { line: usize },
}
