//! Shared result types
//!
//! These are the values handed back to the CLI and HTTP layers.

use serde::{Serialize, Serializer};

use crate::taxonomy::BloomLevel;

/// A single generated objective.
///
/// `text` is capitalized, ends with one period and carries a trailing
/// `(level)` annotation, e.g. `"List the steps. (remember)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objective {
    pub text: String,
    pub level: BloomLevel,
}

impl Objective {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Objectives travel over the wire as their text alone
impl Serialize for Objective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Everything produced for one goal
#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveSet {
    pub goal: String,
    pub target_level: u8,
    pub target_level_name: String,
    pub main_objective: Objective,
    pub supporting_objectives: Vec<Objective>,
    pub formatted_output: String,
}

impl ObjectiveSet {
    pub fn level(&self) -> BloomLevel {
        self.main_objective.level
    }
}
