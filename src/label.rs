use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One of the three fixed sentiment categories.
///
/// Serializes to the exact strings `"Positive"`, `"Neutral"`, `"Negative"`,
/// which is also the on-disk form in the prediction log. Parsing is
/// case-insensitive because classifier `id2label` tables use lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Positive sentiment.
    Positive,
    /// Neutral sentiment.
    Neutral,
    /// Negative sentiment.
    Negative,
}

impl Sentiment {
    /// All labels, in the order they are displayed.
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// The capitalized label name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(AppError::Unexpected(format!(
                "Unknown sentiment label '{other}'. Expected Positive, Neutral, or Negative."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!("NEUTRAL".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
        assert_eq!("Negative".parse::<Sentiment>().unwrap(), Sentiment::Negative);
        assert!("meh".parse::<Sentiment>().is_err());
    }

    #[test]
    fn serde_uses_capitalized_strings() {
        assert_eq!(serde_json::to_string(&Sentiment::Positive).unwrap(), "\"Positive\"");
        let parsed: Sentiment = serde_json::from_str("\"Negative\"").unwrap();
        assert_eq!(parsed, Sentiment::Negative);
    }
}
