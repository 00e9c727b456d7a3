//! Wire types for the classification endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST {base}/sentiment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl AnalyzeRequest {
    /// Builds a request from raw input, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn from_input(input: &str) -> Option<Self> {
        let text = input.trim();
        (!text.is_empty()).then(|| Self {
            text: text.to_string(),
        })
    }
}

/// Classification returned by a successful request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub label: String,
    /// Fraction in `[0, 1]`.
    pub confidence: f64,
}

impl Analysis {
    /// Confidence as a percentage with one decimal place, e.g. `"87.3%"`.
    pub fn confidence_percent(&self) -> String {
        format_confidence(self.confidence)
    }

    /// Known polarity of the label, if it is one of the service's labels.
    pub fn polarity(&self) -> Option<Polarity> {
        Polarity::from_label(&self.label)
    }
}

/// Formats a confidence fraction as a one-decimal percentage.
///
/// Ties round up (`0.8725` is `87.3%`), not to even.
pub fn format_confidence(confidence: f64) -> String {
    let tenths = (confidence * 100.0 * 10.0).round() / 10.0;
    format!("{tenths:.1}%")
}

/// Labels the classification service is documented to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    pub fn from_label(label: &str) -> Option<Polarity> {
        match label.trim().to_lowercase().as_str() {
            "positive" => Some(Polarity::Positive),
            "neutral" => Some(Polarity::Neutral),
            "negative" => Some(Polarity::Negative),
            _ => None,
        }
    }
}

/// Response body for `GET {base}/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_percent_one_decimal() {
        let analysis = Analysis {
            label: "positive".to_string(),
            confidence: 0.8734,
        };
        assert_eq!(analysis.confidence_percent(), "87.3%");
    }

    #[test]
    fn test_format_confidence_edges() {
        assert_eq!(format_confidence(0.95), "95.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
    }

    #[test]
    fn test_format_confidence_rounds_ties_up() {
        assert_eq!(format_confidence(0.8725), "87.3%");
        assert_eq!(format_confidence(0.0025), "0.3%");
        assert_eq!(format_confidence(0.1225), "12.3%");
        assert_eq!(format_confidence(0.0125), "1.3%");
        assert_eq!(format_confidence(0.8734), "87.3%");
    }

    #[test]
    fn test_request_trims_input() {
        let request = AnalyzeRequest::from_input("  I love this!\n").unwrap();
        assert_eq!(request.text, "I love this!");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"text":"I love this!"}"#
        );
    }

    #[test]
    fn test_request_rejects_blank_input() {
        assert_eq!(AnalyzeRequest::from_input(""), None);
        assert_eq!(AnalyzeRequest::from_input(" \t\n "), None);
    }

    #[test]
    fn test_analysis_parses_service_body() {
        let analysis: Analysis =
            serde_json::from_str(r#"{"label":"negative","confidence":0.61}"#).unwrap();
        assert_eq!(analysis.label, "negative");
        assert_eq!(analysis.polarity(), Some(Polarity::Negative));
    }

    #[test]
    fn test_unknown_label_has_no_polarity() {
        let analysis = Analysis {
            label: "mixed".to_string(),
            confidence: 0.5,
        };
        assert_eq!(analysis.polarity(), None);
    }
}
