//! Objective engine
//!
//! One synchronous pipeline per goal:
//! classify → normalize → main objective → supporting objectives → outline.
//!
//! The engine holds no state, so a single value can be shared freely across
//! threads and requests.

pub mod classifier;
pub mod format;
pub mod normalizer;
pub mod synthesis;

use tracing::debug;

use crate::error::{ObjectiveError, Result};
use crate::types::ObjectiveSet;

pub use classifier::identify_level;
pub use format::format_outline;
pub use normalizer::normalize;
pub use synthesis::{synthesize_main, synthesize_supports};

/// Learning objectives generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveEngine;

impl ObjectiveEngine {
    pub fn new() -> Self {
        Self
    }

    /// Generate the full objective set for a goal.
    ///
    /// Callers are expected to reject empty goals first (see [`validate_goal`]);
    /// any non-empty string produces a well-formed result.
    pub fn generate(&self, goal: &str) -> ObjectiveSet {
        let target = identify_level(goal);
        let core = normalize(goal);
        let main_objective = synthesize_main(goal, target);
        let supporting_objectives = synthesize_supports(&core, target);
        let formatted_output = format_outline(&main_objective, &supporting_objectives);

        debug!(
            "Generated {} supporting objectives for target level {}",
            supporting_objectives.len(),
            target
        );

        ObjectiveSet {
            goal: goal.to_string(),
            target_level: target.rank(),
            target_level_name: target.name().to_string(),
            main_objective,
            supporting_objectives,
            formatted_output,
        }
    }
}

/// Generate objectives with a throwaway engine
pub fn generate_objectives(goal: &str) -> ObjectiveSet {
    ObjectiveEngine::new().generate(goal)
}

/// Trim a raw goal and reject it when nothing is left
pub fn validate_goal(raw: &str) -> Result<&str> {
    let goal = raw.trim();
    if goal.is_empty() {
        return Err(ObjectiveError::invalid("Goal cannot be empty"));
    }
    Ok(goal)
}
