//! Level classifier
//!
//! Infers the highest Bloom level a goal asks for. Three independent signals
//! are combined and the highest rank wins:
//!
//! 1. any taxonomy verb appearing in the goal
//! 2. the first matching tier of context keywords (create first, understand last)
//! 3. "know" paired with procedures, supplies, equipment or tools, which lifts
//!    the goal to `Apply`
//!
//! Matching is plain substring containment on the lowercased goal, so "use"
//! also fires inside "because". Keep it that way: existing outputs depend on it.

use tracing::debug;

use crate::taxonomy::{BloomLevel, TAXONOMY};

/// Context keyword tiers, tried in order. Only the first tier that matches counts.
const CONTEXT_TIERS: &[(BloomLevel, &[&str])] = &[
    (
        BloomLevel::Create,
        &["create", "design", "develop", "formulate", "generate"],
    ),
    (BloomLevel::Evaluate, &["evaluate", "assess", "judge", "critique"]),
    (BloomLevel::Analyze, &["analyze", "compare", "examine", "investigate"]),
    (
        BloomLevel::Apply,
        &["apply", "use", "implement", "practice", "demonstrate", "layout"],
    ),
    (
        BloomLevel::Understand,
        &["explain", "describe", "interpret", "understand"],
    ),
];

/// Practical nouns that turn a "know" goal into an application goal
const HANDS_ON_NOUNS: &[&str] = &["procedure", "supplies", "equipment", "tools"];

/// Identify the target level of a goal
pub fn identify_level(goal: &str) -> BloomLevel {
    let lower = goal.to_lowercase();

    let mut level = BloomLevel::Remember;
    if let Some(verb_level) = verb_level(&lower) {
        level = level.max(verb_level);
    }
    if let Some(context_level) = context_level(&lower) {
        level = level.max(context_level);
    }
    if needs_hands_on(&lower) {
        level = level.max(BloomLevel::Apply);
    }

    debug!("Classified goal as {} (rank {})", level, level.rank());
    level
}

/// Highest level whose verb list has a member contained in the goal
fn verb_level(lower: &str) -> Option<BloomLevel> {
    TAXONOMY
        .iter()
        .filter(|entry| entry.verbs.iter().any(|verb| lower.contains(verb)))
        .map(|entry| entry.level)
        .max()
}

/// First context tier with a keyword contained in the goal
fn context_level(lower: &str) -> Option<BloomLevel> {
    CONTEXT_TIERS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(level, _)| *level)
}

fn needs_hands_on(lower: &str) -> bool {
    lower.contains("know") && HANDS_ON_NOUNS.iter().any(|n| lower.contains(n))
}
