//! Objective text synthesis
//!
//! Builds the main objective at the target level and the ladder of supporting
//! objectives beneath it. Every branch is a pure function of the normalized
//! goal; recognized topics get canned phrasings, everything else a template.

use crate::taxonomy::BloomLevel;
use crate::types::Objective;

use super::normalizer::normalize;

/// Build the main objective for `goal` at `target`
pub fn synthesize_main(goal: &str, target: BloomLevel) -> Objective {
    let core = normalize(goal);
    let verb = lead_verb(&core, target);
    let text = drop_repeated_lead(&format!("{} {}", verb, core));
    finish(&text, target)
}

/// Build one supporting objective per level below `target`, ascending
pub fn synthesize_supports(core: &str, target: BloomLevel) -> Vec<Objective> {
    target
        .below()
        .filter_map(|level| supporting_text(core, level).map(|text| finish(&text, level)))
        .collect()
}

/// Verb that opens the main objective
fn lead_verb(core: &str, level: BloomLevel) -> &'static str {
    match level {
        BloomLevel::Remember => {
            if core.contains("supplies") {
                "List"
            } else if core.contains("steps") || core.contains("procedure") {
                "Identify"
            } else {
                "Recall"
            }
        }
        BloomLevel::Understand => {
            if core.contains("purpose") {
                "Explain"
            } else {
                "Describe"
            }
        }
        BloomLevel::Apply => {
            if core.contains("supplies") {
                "Layout"
            } else if core.contains("procedure") {
                "Demonstrate"
            } else {
                "Apply"
            }
        }
        BloomLevel::Analyze => "Analyze",
        BloomLevel::Evaluate => "Evaluate",
        BloomLevel::Create => {
            if core.contains("create") {
                "Create"
            } else if core.contains("design") {
                "Design"
            } else {
                "Develop"
            }
        }
    }
}

/// Topic recognized in a normalized goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Supplies,
    Procedure,
    InterfaceDesign,
    MarketingPlan,
    General,
}

impl Topic {
    /// Supplies and procedure goals only have dedicated phrasings for the two
    /// lowest levels; above that they are checked for the other topics.
    fn detect(core: &str, level: BloomLevel) -> Self {
        let hands_on = level <= BloomLevel::Understand;
        if hands_on && core.contains("supplies") {
            Topic::Supplies
        } else if hands_on && core.contains("procedure") {
            Topic::Procedure
        } else if core.contains("design") && core.contains("interface") {
            Topic::InterfaceDesign
        } else if core.contains("marketing plan") {
            Topic::MarketingPlan
        } else {
            Topic::General
        }
    }
}

/// Supporting objective text for one level; `None` for `Create`, which is
/// only ever a target
fn supporting_text(core: &str, level: BloomLevel) -> Option<String> {
    let topic = Topic::detect(core, level);
    let text = match (level, topic) {
        (BloomLevel::Remember, Topic::Supplies) => {
            "List the supplies needed for each emergency procedure".to_string()
        }
        (BloomLevel::Remember, Topic::Procedure) => format!("Identify the steps in {}", core),
        (BloomLevel::Remember, Topic::InterfaceDesign) => {
            "Recall the principles of user interface design".to_string()
        }
        (BloomLevel::Remember, Topic::MarketingPlan) => {
            "Identify the components of a marketing plan".to_string()
        }
        (BloomLevel::Remember, Topic::General) => {
            format!("Identify key concepts related to {}", core)
        }

        (BloomLevel::Understand, Topic::Supplies) => {
            "Explain the purpose of each supply item".to_string()
        }
        (BloomLevel::Understand, Topic::Procedure) => format!("Describe the rationale for {}", core),
        (BloomLevel::Understand, Topic::InterfaceDesign) => {
            "Explain user experience design principles".to_string()
        }
        (BloomLevel::Understand, Topic::MarketingPlan) => {
            "Explain marketing principles and strategies".to_string()
        }
        (BloomLevel::Understand, Topic::General) => {
            format!("Describe the concepts involved in {}", core)
        }

        (BloomLevel::Apply, Topic::InterfaceDesign) => {
            "Apply design principles to create interface prototypes".to_string()
        }
        (BloomLevel::Apply, Topic::MarketingPlan) => {
            "Apply marketing concepts to develop campaign strategies".to_string()
        }
        (BloomLevel::Apply, _) => format!("Apply knowledge to {}", core),

        (BloomLevel::Analyze, Topic::InterfaceDesign) => {
            "Analyze existing applications for design patterns".to_string()
        }
        (BloomLevel::Analyze, Topic::MarketingPlan) => {
            "Analyze market conditions and competitive landscape".to_string()
        }
        (BloomLevel::Analyze, _) => format!("Analyze different approaches to {}", core),

        // Capitalization only touches the first letter, so "UI" stays uppercase
        (BloomLevel::Evaluate, Topic::InterfaceDesign) => {
            "Evaluate the effectiveness of different UI approaches".to_string()
        }
        (BloomLevel::Evaluate, Topic::MarketingPlan) => {
            "Evaluate the potential success of marketing strategies".to_string()
        }
        (BloomLevel::Evaluate, _) => format!("Evaluate the effectiveness of {}", core),

        (BloomLevel::Create, _) => return None,
    };
    Some(text)
}

/// Drop the first word when the verb repeats the goal's own opening word
/// ("Design design a ..." becomes "design a ...")
fn drop_repeated_lead(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > 1 && words[0].to_lowercase() == words[1].to_lowercase() {
        words[1..].join(" ")
    } else {
        text.to_string()
    }
}

/// Capitalize, end with exactly one period and annotate with the level name
pub(crate) fn finish(text: &str, level: BloomLevel) -> Objective {
    let body = capitalize_first(text.trim());
    let body = body.trim_end_matches(|c: char| c == '.' || c.is_whitespace());
    Objective {
        text: format!("{}. ({})", body, level.name()),
        level,
    }
}

/// Uppercase the first character, leaving the rest untouched
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
