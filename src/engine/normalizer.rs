//! Goal normalizer
//!
//! Reduces a goal statement to its core concept phrase by lowercasing it and
//! peeling off the boilerplate lead-in ("the goal is for learners to know ...").

use regex::Regex;
use std::sync::LazyLock;

/// Lead-in patterns, stripped in this order, each at most once
static LEAD_INS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^the goal is ").unwrap(),
        Regex::new(
            r"^(for learners to |for students to |students to |learners to |students will |learners will )",
        )
        .unwrap(),
        Regex::new(r"^(know |understand |learn |be able to )").unwrap(),
    ]
});

/// Normalize a goal into the phrase reused by objective synthesis
pub fn normalize(goal: &str) -> String {
    let mut core = goal.to_lowercase().trim().to_string();
    for pattern in LEAD_INS.iter() {
        core = pattern.replace(&core, "").trim().to_string();
    }
    core
}
