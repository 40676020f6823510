// Role Matcher: ranks job roles against a candidate's extracted skills.
// Everything outside handlers is pure and synchronous.

pub mod handlers;
pub mod level;
pub mod ranker;
pub mod scorer;
pub mod vocabulary;

pub use ranker::RoleMatcher;
pub use vocabulary::SkillVocabulary;
