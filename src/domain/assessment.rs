//! Assessment results and their failure taxonomy.

use thiserror::Error;

/// Classified assessment failure. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The credential was rejected or lacks permission.
    #[error(
        "🔥 API KEY FAILURE 🔥\n\n\
         Possible solutions:\n\
         1. Check if API is enabled: https://console.cloud.google.com/apis/api/generativelanguage.googleapis.com\n\
         2. Verify your API key restrictions\n\
         3. Generate new key: https://makersuite.google.com/app/apikey"
    )]
    CredentialFailure,

    /// Anything else; carries the upstream message verbatim.
    #[error("💀 System Malfunction 💀\n calculator exploded!\nReason: {reason}")]
    GenericFailure { reason: String },
}

const UNKNOWN_ERROR: &str = "Unknown error";

impl AssessmentError {
    /// Classify an upstream failure message.
    ///
    /// Matching is case-sensitive on `API_KEY` and `permission`.
    pub fn classify(message: &str) -> Self {
        if message.contains("API_KEY") || message.contains("permission") {
            return AssessmentError::CredentialFailure;
        }

        let reason = if message.is_empty() { UNKNOWN_ERROR } else { message };
        AssessmentError::GenericFailure { reason: reason.to_string() }
    }

    pub fn is_credential_failure(&self) -> bool {
        matches!(self, AssessmentError::CredentialFailure)
    }
}

/// Display marker a result line may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker {
    /// 💸
    Money,
    /// 📜
    Details,
    /// 🔥
    Important,
}

impl LineMarker {
    pub const ALL: [LineMarker; 3] = [LineMarker::Money, LineMarker::Details, LineMarker::Important];

    pub fn glyph(&self) -> &'static str {
        match self {
            LineMarker::Money => "💸",
            LineMarker::Details => "📜",
            LineMarker::Important => "🔥",
        }
    }

    fn detect(line: &str) -> Option<LineMarker> {
        LineMarker::ALL.into_iter().find(|marker| line.starts_with(marker.glyph()))
    }
}

/// One newline-delimited line of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLine<'a> {
    pub marker: Option<LineMarker>,
    pub text: &'a str,
}

/// Generated assessment text, kept exactly as returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    text: String,
}

impl Assessment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Split into lines tagged with their display marker.
    pub fn lines(&self) -> impl Iterator<Item = ResultLine<'_>> {
        self.text.split('\n').map(|text| ResultLine { marker: LineMarker::detect(text), text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_message_is_credential_failure() {
        let err = AssessmentError::classify("[400 Bad Request] API key not valid. [API_KEY_INVALID]");
        assert_eq!(err, AssessmentError::CredentialFailure);
        assert!(err.is_credential_failure());
    }

    #[test]
    fn permission_message_is_credential_failure() {
        let err = AssessmentError::classify("caller does not have permission");
        assert_eq!(err, AssessmentError::CredentialFailure);
    }

    #[test]
    fn classification_is_case_sensitive() {
        let err = AssessmentError::classify("Permission denied");
        assert_eq!(err, AssessmentError::GenericFailure { reason: "Permission denied".into() });
    }

    #[test]
    fn generic_failure_wraps_original_message() {
        let err = AssessmentError::classify("connection reset");
        assert_eq!(
            err.to_string(),
            "💀 System Malfunction 💀\n calculator exploded!\nReason: connection reset"
        );
    }

    #[test]
    fn empty_message_reports_unknown_error() {
        let err = AssessmentError::classify("");
        assert!(err.to_string().ends_with("Reason: Unknown error"));
    }

    #[test]
    fn credential_failure_message_lists_remediation() {
        let message = AssessmentError::CredentialFailure.to_string();
        assert!(message.starts_with("🔥 API KEY FAILURE 🔥\n\nPossible solutions:\n1. Check"));
        assert!(message.contains("\n2. Verify your API key restrictions\n"));
        assert!(message.ends_with("3. Generate new key: https://makersuite.google.com/app/apikey"));
    }

    #[test]
    fn lines_tag_markers() {
        let assessment = Assessment::new("📜 2 cows\nplain\n🔥 burn\n💸 10 lakh");
        let markers: Vec<_> = assessment.lines().map(|line| line.marker).collect();

        assert_eq!(
            markers,
            vec![
                Some(LineMarker::Details),
                None,
                Some(LineMarker::Important),
                Some(LineMarker::Money)
            ]
        );
        assert_eq!(assessment.as_str(), "📜 2 cows\nplain\n🔥 burn\n💸 10 lakh");
    }
}
