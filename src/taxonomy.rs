//! Bloom's Taxonomy table
//!
//! Six fixed cognitive levels, each with the verbs that signal it. The table is
//! constant data shared by every request; nothing here is ever mutated.

use serde::{Deserialize, Serialize};

/// A cognitive level, ordered from lowest (`Remember`) to highest (`Create`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloomLevel {
    Remember = 1,
    Understand = 2,
    Apply = 3,
    Analyze = 4,
    Evaluate = 5,
    Create = 6,
}

impl BloomLevel {
    /// All levels in ascending rank order
    pub const ALL: [BloomLevel; 6] = [
        BloomLevel::Remember,
        BloomLevel::Understand,
        BloomLevel::Apply,
        BloomLevel::Analyze,
        BloomLevel::Evaluate,
        BloomLevel::Create,
    ];

    /// Rank in `1..=6`
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Lowercase level name, as used in objective annotations
    pub fn name(self) -> &'static str {
        match self {
            BloomLevel::Remember => "remember",
            BloomLevel::Understand => "understand",
            BloomLevel::Apply => "apply",
            BloomLevel::Analyze => "analyze",
            BloomLevel::Evaluate => "evaluate",
            BloomLevel::Create => "create",
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(BloomLevel::Remember),
            2 => Some(BloomLevel::Understand),
            3 => Some(BloomLevel::Apply),
            4 => Some(BloomLevel::Analyze),
            5 => Some(BloomLevel::Evaluate),
            6 => Some(BloomLevel::Create),
            _ => None,
        }
    }

    /// Parse from a level name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
    }

    /// Levels strictly below this one, ascending
    pub fn below(self) -> impl Iterator<Item = BloomLevel> {
        Self::ALL.into_iter().take_while(move |level| *level < self)
    }

    /// Table entry for this level
    pub fn info(self) -> &'static TaxonomyLevel {
        &TAXONOMY[usize::from(self.rank() - 1)]
    }
}

impl std::fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the taxonomy table
#[derive(Debug)]
pub struct TaxonomyLevel {
    pub level: BloomLevel,
    pub verbs: &'static [&'static str],
    pub description: &'static str,
}

impl TaxonomyLevel {
    pub fn name(&self) -> &'static str {
        self.level.name()
    }

    pub fn rank(&self) -> u8 {
        self.level.rank()
    }
}

/// The fixed taxonomy, indexed by `rank - 1`.
///
/// A verb may appear under several levels; classification always takes the
/// highest level that matches, so repeats can only raise a goal's rank.
pub static TAXONOMY: [TaxonomyLevel; 6] = [
    TaxonomyLevel {
        level: BloomLevel::Remember,
        verbs: &[
            "list", "name", "identify", "show", "label", "collect", "examine",
            "tabulate", "quote", "recall", "define", "recognize", "match",
        ],
        description: "Recall facts and basic concepts",
    },
    TaxonomyLevel {
        level: BloomLevel::Understand,
        verbs: &[
            "explain", "describe", "interpret", "summarize", "paraphrase",
            "classify", "compare", "contrast", "demonstrate", "illustrate",
        ],
        description: "Explain ideas or concepts",
    },
    TaxonomyLevel {
        level: BloomLevel::Apply,
        verbs: &[
            "use", "solve", "apply", "construct", "choose", "make", "develop",
            "organize", "plan", "select", "utilize", "model", "identify",
        ],
        description: "Use information in new situations",
    },
    TaxonomyLevel {
        level: BloomLevel::Analyze,
        verbs: &[
            "analyze", "examine", "compare", "contrast", "investigate",
            "categorize", "identify", "separate", "advertise",
        ],
        description: "Draw connections among ideas",
    },
    TaxonomyLevel {
        level: BloomLevel::Evaluate,
        verbs: &[
            "critique", "defend", "judge", "select", "support", "value",
            "evaluate", "prioritize", "recommend",
        ],
        description: "Justify a stand or decision",
    },
    TaxonomyLevel {
        level: BloomLevel::Create,
        verbs: &[
            "design", "construct", "create", "develop", "formulate", "author",
            "investigate", "compose", "plan", "produce", "generate",
        ],
        description: "Produce new or original work",
    },
];

/// Look up a level by rank
pub fn lookup(rank: u8) -> Option<&'static TaxonomyLevel> {
    BloomLevel::from_rank(rank).map(BloomLevel::info)
}
