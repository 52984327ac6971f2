use crate::domain::errors::ReportError;

/// Line labels of the image-analysis text, in the order the server writes them.
pub const REPORT_LABELS: [&str; 6] = [
    "1. Product Name:",
    "2. Expiry Date:",
    "3. Ingredients:",
    "4. Alcohol:",
    "5. Halal:",
    "6. Reasoning:",
];

/// The six fields of the text returned by `analyzeProductImage`.
///
/// The server format is positional: one labelled field per line, in a fixed
/// order. [`ProductReport::parse`] rejects anything else instead of guessing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductReport {
    pub product_name: String,
    pub expiry_date: String,
    pub ingredients: String,
    pub alcohol: String,
    pub halal: String,
    pub reasoning: String,
}

impl ProductReport {
    pub fn parse(text: &str) -> Result<Self, ReportError> {
        let body = text.trim_end();
        let lines: Vec<&str> = if body.is_empty() {
            Vec::new()
        } else {
            body.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .collect()
        };

        let mut values = Vec::with_capacity(REPORT_LABELS.len());
        for (index, label) in REPORT_LABELS.iter().copied().enumerate() {
            let line = index + 1;
            let raw = lines
                .get(index)
                .ok_or(ReportError::MissingField { line, label })?;
            let value = raw
                .trim_start()
                .strip_prefix(label)
                .ok_or(ReportError::UnexpectedLabel {
                    line,
                    expected: label,
                })?;
            values.push(value.trim().to_string());
        }

        if let Some(extra) = lines
            .iter()
            .skip(REPORT_LABELS.len())
            .position(|line| !line.trim().is_empty())
        {
            return Err(ReportError::TrailingContent {
                line: REPORT_LABELS.len() + extra + 1,
            });
        }

        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();
        Ok(Self {
            product_name: next(),
            expiry_date: next(),
            ingredients: next(),
            alcohol: next(),
            halal: next(),
            reasoning: next(),
        })
    }

    fn fields(&self) -> [&str; 6] {
        [
            self.product_name.as_str(),
            self.expiry_date.as_str(),
            self.ingredients.as_str(),
            self.alcohol.as_str(),
            self.halal.as_str(),
            self.reasoning.as_str(),
        ]
    }
}

/// Renders the report in the server's six-line format.
impl std::fmt::Display for ProductReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (label, value)) in REPORT_LABELS.iter().zip(self.fields()).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {}", label, value)?;
        }
        Ok(())
    }
}
