use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Candidate record as the dashboard holds it. The matcher reads `skills` only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// AI-extracted skills, free text, not deduplicated.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
impl Candidate {
    pub fn with_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: Some(skills.into_iter().map(Into::into).collect()),
            extra: Map::new(),
        }
    }
}
