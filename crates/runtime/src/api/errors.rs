//! Unified error types surfaced by the runtime API.
//!
//! Decision logic never fails: actions degrade to a terminal status instead.
//! Errors only come from configuration and from callers that choose to turn
//! a non-fatal report (such as missing key bindings) into a hard stop.
use thiserror::Error;

use game_core::SkillId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("required skills are not bound to any key: {}", format_skills(.0))]
    MissingKeyBindings(Vec<SkillId>),
}

fn format_skills(skills: &[SkillId]) -> String {
    skills
        .iter()
        .map(SkillId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_bindings_lists_skills() {
        let err = RuntimeError::MissingKeyBindings(vec![SkillId::Teleport, SkillId::StaticField]);
        assert_eq!(
            err.to_string(),
            "required skills are not bound to any key: teleport, static_field"
        );
    }
}
