//! Skill vocabulary: the closed set of tokens spotted in job role text.

use serde::Serialize;

use crate::models::job_role::JobRole;

/// Built-in vocabulary, grouped programming / cloud / web / data / tools.
/// Group order is the order requirement skills are reported in.
const BUILTIN_SKILLS: &[&str] = &[
    // programming
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "php", "go", "rust",
    "swift", "kotlin",
    // cloud
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "jenkins", "ci/cd",
    // web
    "react", "vue", "angular", "node.js", "express", "django", "flask", "fastapi", "spring",
    "html", "css", "tailwind",
    // data
    "sql", "postgresql", "mysql", "mongodb", "redis", "pandas", "numpy", "tensorflow",
    "pytorch", "spark",
    // tools
    "git", "linux", "rest api", "graphql", "microservices", "agile", "scrum",
];

/// Ordered, de-duplicated, lower-case skill tokens.
///
/// Immutable once built. A replacement table can be supplied at startup
/// via `SKILL_VOCABULARY`; otherwise the built-in table is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillVocabulary {
    tokens: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::from_tokens(BUILTIN_SKILLS.iter().copied())
    }
}

impl SkillVocabulary {
    /// Builds a vocabulary: trims and lower-cases each token, drops blanks,
    /// keeps the first occurrence of any duplicate.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.as_ref().trim().to_lowercase();
            if !token.is_empty() && !out.contains(&token) {
                out.push(token);
            }
        }
        Self { tokens: out }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Requirement skills for a role: every token found as a substring of
    /// `requirements` + `description`, lower-cased, in vocabulary order.
    ///
    /// Matching is plain substring containment, so "java" is found in
    /// "javascript" and "go" in "django".
    pub fn extract_requirement_skills(&self, role: &JobRole) -> Vec<String> {
        let text = format!(
            "{} {}",
            role.requirements.as_deref().unwrap_or(""),
            role.description.as_deref().unwrap_or("")
        );
        self.extract_from_text(&text)
    }

    pub fn extract_from_text(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        self.tokens
            .iter()
            .filter(|token| text.contains(token.as_str()))
            .cloned()
            .collect()
    }
}
