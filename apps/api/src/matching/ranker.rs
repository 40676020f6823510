//! Role Matcher: ranks a job role catalog against one candidate's skills.
//!
//! Pure, synchronous, no I/O. `AppState` holds one `Arc<RoleMatcher>` built
//! at startup from the configured vocabulary.

use serde::Serialize;
use tracing::debug;

use crate::matching::scorer::SkillBreakdown;
use crate::matching::vocabulary::SkillVocabulary;
use crate::models::candidate::Candidate;
use crate::models::job_role::JobRole;

/// Upper bound on the number of roles `find_best_matches` returns.
pub const MAX_MATCHES: usize = 3;

/// Keys written by `SkillBreakdown`. A role carrying any of them (for example
/// one echoed back from an earlier match response) has them replaced.
const ANNOTATION_KEYS: &[&str] = &[
    "requirementSkills",
    "matchScore",
    "matchingSkills",
    "missingSkills",
    "matchLevel",
];

/// A role annotated with how well one candidate fits it.
///
/// Serializes as the role's own fields followed by `requirementSkills`,
/// `matchScore`, `matchingSkills`, `missingSkills` and `matchLevel`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleMatch {
    #[serde(flatten)]
    pub role: JobRole,
    #[serde(flatten)]
    pub breakdown: SkillBreakdown,
}

impl RoleMatch {
    pub fn score(&self) -> u32 {
        self.breakdown.match_score
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoleMatcher {
    vocabulary: SkillVocabulary,
}

impl RoleMatcher {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Scores one role. The role is copied into the result, minus any stale
    /// annotation fields it already carried.
    pub fn evaluate(&self, candidate_skills: Option<&[String]>, role: &JobRole) -> RoleMatch {
        let requirement_skills = self.vocabulary.extract_requirement_skills(role);
        let mut role = role.clone();
        for key in ANNOTATION_KEYS {
            role.extra.remove(*key);
        }
        RoleMatch {
            role,
            breakdown: SkillBreakdown::compute(candidate_skills, requirement_skills),
        }
    }

    /// Best-fit roles for a candidate, at most [`MAX_MATCHES`].
    ///
    /// Roles scoring 0 are dropped. Sorting is stable, so equal scores keep
    /// their catalog order. An absent or empty skill list, or an empty
    /// catalog, yields no matches.
    pub fn find_best_matches(&self, candidate: &Candidate, roles: &[JobRole]) -> Vec<RoleMatch> {
        let skills = match candidate.skills.as_deref() {
            Some(skills) if !skills.is_empty() => skills,
            _ => return Vec::new(),
        };
        if roles.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<RoleMatch> = roles
            .iter()
            .map(|role| self.evaluate(Some(skills), role))
            .filter(|m| m.score() > 0)
            .collect();

        matches.sort_by(|a, b| b.score().cmp(&a.score()));
        matches.truncate(MAX_MATCHES);

        debug!(
            candidate_skills = skills.len(),
            roles = roles.len(),
            matched = matches.len(),
            "Ranked job roles for candidate"
        );

        matches
    }
}
