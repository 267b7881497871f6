use serde::Serialize;

pub const POSITIVE_LABEL: &str = "POSITIVE";
pub const FALLBACK_QUERY: &str = "pop";

/// Search queries keyed by mood. `chill` is never produced by the classifier.
pub const MOOD_QUERIES: [(&str, &str); 3] = [
    ("happy", "happy upbeat"),
    ("sad", "sad acoustic"),
    ("chill", "chill relax"),
];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    #[allow(dead_code)]
    Chill,
}

impl Mood {
    /// Binary simplification of the classifier output.
    pub fn from_sentiment_label(label: &str) -> Mood {
        if label == POSITIVE_LABEL {
            Mood::Happy
        } else {
            Mood::Sad
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Chill => "chill",
        }
    }

    pub fn search_query(&self) -> &'static str {
        query_for(self.as_str())
    }
}

pub fn query_for(mood: &str) -> &'static str {
    MOOD_QUERIES
        .iter()
        .find(|(key, _)| *key == mood)
        .map(|(_, query)| *query)
        .unwrap_or(FALLBACK_QUERY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_label_is_happy() {
        let mood = Mood::from_sentiment_label("POSITIVE");
        assert_eq!(mood, Mood::Happy);
        assert_eq!(mood.search_query(), "happy upbeat");
    }

    #[test]
    fn anything_else_is_sad() {
        for label in ["NEGATIVE", "positive", "NEUTRAL", "", "LABEL_1"] {
            let mood = Mood::from_sentiment_label(label);
            assert_eq!(mood, Mood::Sad, "label {label:?}");
            assert_eq!(mood.search_query(), "sad acoustic");
        }
    }

    #[test]
    fn chill_is_mapped_but_unreachable_from_labels() {
        assert_eq!(Mood::Chill.search_query(), "chill relax");
        for label in ["POSITIVE", "NEGATIVE", "CHILL", "chill"] {
            assert_ne!(Mood::from_sentiment_label(label), Mood::Chill);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_pop() {
        assert_eq!(query_for("angry"), FALLBACK_QUERY);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Happy).unwrap(), "\"happy\"");
    }
}
