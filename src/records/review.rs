//! Review record.
use serde::Deserialize;

/// A review, as found in the review JSON-lines file.
///
/// `text` may contain raw newlines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    pub business_id: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize() {
        let r: Review = serde_json::from_str(
            r#"{"review_id":"r1","business_id":"b1","stars":4,"text":"Great food!\nWould return."}"#,
        )
        .unwrap();
        assert_eq!(r.business_id, "b1");
        assert_eq!(r.text, "Great food!\nWould return.");
    }

    #[test]
    fn missing_text() {
        let r = serde_json::from_str::<Review>(r#"{"business_id":"b1"}"#);
        assert!(r.is_err());
    }
}
