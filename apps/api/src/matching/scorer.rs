//! Skill overlap scoring between a candidate and one role's requirement skills.
//!
//! A candidate skill and a requirement skill overlap when either one contains
//! the other after normalization. "aws lambda" overlaps "aws", and so does
//! "react" with "react native". The rule is loose on purpose and is known to
//! produce hits such as "mongodb" overlapping "go".

use serde::Serialize;

use crate::matching::level::{match_level, MatchLevel};

/// Lower-cases and trims each skill. Output is index-aligned with the input.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| normalize(s)).collect()
}

fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Containment in either direction. Both arguments must already be normalized.
pub fn skills_overlap(candidate: &str, requirement: &str) -> bool {
    candidate.contains(requirement) || requirement.contains(candidate)
}

/// Percentage of `requirement_skills` covered by the candidate, rounded half up.
///
/// Returns 0 when the candidate has no skill list or the role has no
/// requirement skills.
pub fn match_score(candidate_skills: Option<&[String]>, requirement_skills: &[String]) -> u32 {
    let Some(candidate_skills) = candidate_skills else {
        return 0;
    };
    if requirement_skills.is_empty() {
        return 0;
    }

    let candidates = normalize_skills(candidate_skills);
    let matched = requirement_skills
        .iter()
        .map(|r| normalize(r))
        .filter(|req| candidates.iter().any(|c| skills_overlap(c, req)))
        .count();

    percent_rounded(matched, requirement_skills.len())
}

/// `round(100 * part / whole)` with halves rounded up, in integer arithmetic.
fn percent_rounded(part: usize, whole: usize) -> u32 {
    ((200 * part + whole) / (2 * whole)) as u32
}

/// Candidate skills, in original casing and order, that overlap any requirement.
/// Duplicates in the candidate list are kept.
pub fn matching_skills(candidate_skills: Option<&[String]>, requirement_skills: &[String]) -> Vec<String> {
    let Some(candidate_skills) = candidate_skills else {
        return Vec::new();
    };

    let requirements = normalize_skills(requirement_skills);
    let normalized = normalize_skills(candidate_skills);

    candidate_skills
        .iter()
        .zip(normalized.iter())
        .filter(|(_, norm)| requirements.iter().any(|req| skills_overlap(norm, req)))
        .map(|(original, _)| original.clone())
        .collect()
}

/// Requirement skills no candidate skill overlaps. With no candidate skill
/// list every requirement is missing.
pub fn missing_skills(candidate_skills: Option<&[String]>, requirement_skills: &[String]) -> Vec<String> {
    let Some(candidate_skills) = candidate_skills else {
        return requirement_skills.to_vec();
    };

    let candidates = normalize_skills(candidate_skills);
    requirement_skills
        .iter()
        .filter(|req| {
            let req = normalize(req);
            !candidates.iter().any(|c| skills_overlap(c, &req))
        })
        .cloned()
        .collect()
}

/// Everything the dashboard shows for one candidate/role pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBreakdown {
    pub requirement_skills: Vec<String>,
    pub match_score: u32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_level: MatchLevel,
}

impl SkillBreakdown {
    pub fn compute(candidate_skills: Option<&[String]>, requirement_skills: Vec<String>) -> Self {
        let match_score = match_score(candidate_skills, &requirement_skills);
        Self {
            matching_skills: matching_skills(candidate_skills, &requirement_skills),
            missing_skills: missing_skills(candidate_skills, &requirement_skills),
            match_level: match_level(match_score),
            match_score,
            requirement_skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::level::MatchColor;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn some(skills: &[String]) -> Option<&[String]> {
        Some(skills)
    }

    #[test]
    fn test_full_overlap_scores_exactly_100() {
        let reqs = strings(&["react"]);
        assert_eq!(match_score(some(&strings(&["React"])), &reqs), 100);

        let reqs = strings(&["python", "java", "aws", "docker", "git", "sql", "linux"]);
        assert_eq!(match_score(some(&reqs), &reqs), 100);
    }

    #[test]
    fn test_score_ignores_case_and_surrounding_whitespace() {
        let reqs = strings(&["react"]);
        assert_eq!(match_score(some(&strings(&["  react  "])), &reqs), 100);
        assert_eq!(match_score(some(&strings(&["REACT"])), &strings(&[" React "])), 100);
    }

    #[test]
    fn test_missing_inputs_score_zero() {
        assert_eq!(match_score(None, &strings(&["react"])), 0);
        assert_eq!(match_score(some(&strings(&["React"])), &[]), 0);
        assert_eq!(match_score(some(&[]), &strings(&["react"])), 0);
    }

    #[test]
    fn test_score_rounds_half_up() {
        assert_eq!(percent_rounded(1, 3), 33);
        assert_eq!(percent_rounded(2, 3), 67);
        assert_eq!(percent_rounded(1, 8), 13);
        assert_eq!(percent_rounded(0, 5), 0);
        assert_eq!(percent_rounded(7, 7), 100);
    }

    #[test]
    fn test_overlap_works_in_both_directions() {
        let reqs = strings(&["aws", "react native"]);
        let candidate = strings(&["AWS Lambda", "React"]);
        assert_eq!(match_score(some(&candidate), &reqs), 100);
        assert_eq!(matching_skills(some(&candidate), &reqs), candidate);
    }

    #[test]
    fn test_mongodb_overlaps_go() {
        let reqs = strings(&["go"]);
        let candidate = strings(&["MongoDB"]);
        assert_eq!(match_score(some(&candidate), &reqs), 100);
        assert_eq!(matching_skills(some(&candidate), &reqs), vec!["MongoDB"]);
        assert!(missing_skills(some(&candidate), &reqs).is_empty());
    }

    #[test]
    fn test_matching_skills_keeps_original_casing_order_and_duplicates() {
        let reqs = strings(&["aws", "react"]);
        let candidate = strings(&["React", "Node.js", "AWS", " react "]);
        assert_eq!(
            matching_skills(some(&candidate), &reqs),
            vec!["React", "AWS", " react "]
        );
    }

    #[test]
    fn test_missing_skills_without_candidate_returns_all_requirements() {
        let reqs = strings(&["docker", "react", "vue"]);
        assert_eq!(missing_skills(None, &reqs), reqs);
        assert!(matching_skills(None, &reqs).is_empty());
    }

    #[test]
    fn test_missing_skills_keeps_vocabulary_order() {
        let reqs = strings(&["docker", "react", "vue"]);
        let candidate = strings(&["React"]);
        assert_eq!(missing_skills(some(&candidate), &reqs), vec!["docker", "vue"]);
    }

    #[test]
    fn test_normalize_preserves_length_and_order() {
        let skills = strings(&[" Go ", "go", "", "RUST"]);
        assert_eq!(normalize_skills(&skills), vec!["go", "go", "", "rust"]);
    }

    #[test]
    fn test_breakdown_for_partial_match() {
        let breakdown = SkillBreakdown::compute(
            some(&strings(&["React", "Node.js", "AWS"])),
            strings(&["docker", "react", "vue"]),
        );
        assert_eq!(breakdown.match_score, 33);
        assert_eq!(breakdown.matching_skills, vec!["React"]);
        assert_eq!(breakdown.missing_skills, vec!["docker", "vue"]);
        assert_eq!(breakdown.match_level.label, "Partial Match");
        assert_eq!(breakdown.match_level.color, MatchColor::Orange);
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let breakdown = SkillBreakdown::compute(some(&strings(&["Rust"])), strings(&["rust"]));
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["matchScore"], 100);
        assert_eq!(json["matchingSkills"][0], "Rust");
        assert_eq!(json["requirementSkills"][0], "rust");
        assert_eq!(json["matchLevel"]["color"], "green");
    }
}
