use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Sentiment of a tweet toward man-made climate change.
///
/// Codes follow the labeled training data: -1 Anti, 0 Neutral, 1 Pro, 2 News.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Anti,
    Neutral,
    Pro,
    News,
}

impl Sentiment {
    /// All labels, in code order.
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Anti,
        Sentiment::Neutral,
        Sentiment::Pro,
        Sentiment::News,
    ];

    /// Numeric code used by the dataset and the classifier artifacts.
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            Sentiment::Anti => -1,
            Sentiment::Neutral => 0,
            Sentiment::Pro => 1,
            Sentiment::News => 2,
        }
    }

    /// Look up a label by its numeric code.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownSentimentCode` for codes outside
    /// {-1, 0, 1, 2}.
    pub fn from_code(code: i8) -> Result<Self, CoreError> {
        match code {
            -1 => Ok(Sentiment::Anti),
            0 => Ok(Sentiment::Neutral),
            1 => Ok(Sentiment::Pro),
            2 => Ok(Sentiment::News),
            other => Err(CoreError::UnknownSentimentCode(other)),
        }
    }

    /// Short display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Sentiment::Anti => "Anti",
            Sentiment::Neutral => "Neutral",
            Sentiment::Pro => "Pro",
            Sentiment::News => "News",
        }
    }

    /// The fixed human-readable sentence shown to the user after
    /// classification.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Sentiment::Anti => "Anti: the tweet does not believe in man-made climate change",
            Sentiment::Neutral => {
                "Neutral: the tweet neither supports nor refutes the belief of man-made climate change"
            }
            Sentiment::Pro => "Pro: the tweet supports the belief of man-made climate change",
            Sentiment::News => "News: the tweet links to factual news about climate change",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_for_all_labels() {
        for label in Sentiment::ALL {
            assert_eq!(Sentiment::from_code(label.code()).unwrap(), label);
        }
    }

    #[test]
    fn from_code_rejects_unknown_codes() {
        for code in [-2, 3, 17, i8::MIN] {
            let err = Sentiment::from_code(code).unwrap_err();
            assert!(
                matches!(err, CoreError::UnknownSentimentCode(c) if c == code),
                "expected UnknownSentimentCode({code}), got: {err:?}"
            );
        }
    }

    #[test]
    fn descriptions_are_the_fixed_sentences() {
        assert_eq!(
            Sentiment::from_code(-1).unwrap().description(),
            "Anti: the tweet does not believe in man-made climate change"
        );
        assert_eq!(
            Sentiment::from_code(0).unwrap().description(),
            "Neutral: the tweet neither supports nor refutes the belief of man-made climate change"
        );
        assert_eq!(
            Sentiment::from_code(1).unwrap().description(),
            "Pro: the tweet supports the belief of man-made climate change"
        );
        assert_eq!(
            Sentiment::from_code(2).unwrap().description(),
            "News: the tweet links to factual news about climate change"
        );
    }

    #[test]
    fn all_is_in_code_order() {
        let codes: Vec<i8> = Sentiment::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec![-1, 0, 1, 2]);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Sentiment::Pro.to_string(), "Pro");
        assert_eq!(Sentiment::Anti.to_string(), "Anti");
    }

    #[test]
    fn label_is_serializable() {
        let json = serde_json::to_string(&Sentiment::News).expect("serialize");
        assert_eq!(json, "\"News\"");
        let back: Sentiment = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Sentiment::News);
    }
}
