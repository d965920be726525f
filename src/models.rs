use serde::{Deserialize, Serialize};

/// A question as held in the pool. The correct-choice index never leaves
/// the process in this shape; clients get [`RedactedQuestion`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub choices: Vec<String>,
    pub correct_choice_index: usize,
    pub explanation: String,
}

/// Client-facing shape of a question.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedQuestion {
    pub id: u32,
    pub text: String,
    pub choices: Vec<String>,
    pub explanation: String,
}

impl From<&Question> for RedactedQuestion {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            text: question.text.clone(),
            choices: question.choices.clone(),
            explanation: question.explanation.clone(),
        }
    }
}

/// A question as the generative provider returns it, before an id is
/// assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub text: String,
    pub choices: Vec<String>,
    pub correct_choice_index: usize,
    #[serde(default)]
    pub explanation: String,
}

impl RawQuestion {
    /// Non-empty text, at least three choices, correct index in range.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
            && self.choices.len() >= 3
            && self.correct_choice_index < self.choices.len()
    }
}

/// Builds a pool from provider records, assigning 1-based ids in arrival
/// order. Pool replacement always goes through here, so ids are unique
/// within a snapshot by construction.
pub fn build_pool(records: Vec<RawQuestion>) -> Vec<Question> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Question {
            id: index as u32 + 1,
            text: record.text,
            choices: record.choices,
            correct_choice_index: record.correct_choice_index,
            explanation: record.explanation,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> RawQuestion {
        RawQuestion {
            text: text.to_string(),
            choices: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct_choice_index: 1,
            explanation: String::new(),
        }
    }

    #[test]
    fn pool_ids_follow_arrival_order() {
        let pool = build_pool(vec![record("first"), record("second"), record("third")]);

        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0].id, 1);
        assert_eq!(pool[1].id, 2);
        assert_eq!(pool[2].id, 3);
        assert_eq!(pool[0].text, "first");
        assert_eq!(pool[2].text, "third");
    }

    #[test]
    fn validity_checks_record_constraints() {
        assert!(record("fine").is_valid());

        let mut blank = record("   ");
        assert!(!blank.is_valid());
        blank.text = "ok".to_string();
        assert!(blank.is_valid());

        let mut narrow = record("two choices");
        narrow.choices.pop();
        assert!(!narrow.is_valid());

        let mut out_of_range = record("bad index");
        out_of_range.correct_choice_index = 3;
        assert!(!out_of_range.is_valid());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let pool = build_pool(vec![record("q")]);
        let json = serde_json::to_string(&pool[0]).unwrap();

        assert!(json.contains("\"correctChoiceIndex\":1"));
    }
}
