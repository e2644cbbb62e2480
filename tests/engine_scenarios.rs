//! End-to-end tests for the objective engine:
//! - Classification across all six levels
//! - Main and supporting objective phrasing
//! - Outline numbering
//! - JSON shape of the result record

use bloom_objectives::engine::{identify_level, normalize, synthesize_supports};
use bloom_objectives::{generate_objectives, validate_goal, BloomLevel, ObjectiveSet};

const SAMPLE_GOALS: &[&str] = &[
    "The goal is for learners to know the supplies needed for each emergency procedure",
    "Students will design a user interface for a mobile application",
    "Learners will analyze data to identify trends and patterns",
    "Develop a marketing plan for a new product",
    "Students will learn the evacuation procedure",
    "Recall the capital cities of europe",
    "Critique the arguments in a persuasive essay",
    "Understand the purpose of photosynthesis",
    "Know the tools for woodworking",
    "Be able to ride a bike...",
    "x",
];

fn assert_well_formed(set: &ObjectiveSet) {
    for objective in std::iter::once(&set.main_objective).chain(&set.supporting_objectives) {
        let suffix = format!(". ({})", objective.level.name());
        assert!(
            objective.text.ends_with(&suffix),
            "missing suffix: {}",
            objective.text
        );
        let body = &objective.text[..objective.text.len() - suffix.len()];
        assert!(!body.ends_with('.'), "double period: {}", objective.text);
        assert!(
            objective.text.chars().next().is_some_and(|c| !c.is_lowercase()),
            "not capitalized: {}",
            objective.text
        );
    }
}

// =====================================================================
// SCENARIOS
// =====================================================================

#[test]
fn test_know_supplies_goal_targets_apply() {
    let set = generate_objectives(
        "The goal is for learners to know the supplies needed for each emergency procedure",
    );

    assert_eq!(set.target_level, 3);
    assert_eq!(set.target_level_name, "apply");
    assert!(set
        .main_objective
        .text
        .starts_with("Layout the supplies needed for each emergency procedure. (apply)"));

    let levels: Vec<_> = set.supporting_objectives.iter().map(|o| o.level).collect();
    assert_eq!(levels, vec![BloomLevel::Remember, BloomLevel::Understand]);
    assert_eq!(
        set.supporting_objectives[0].text,
        "List the supplies needed for each emergency procedure. (remember)"
    );
    assert_eq!(
        set.supporting_objectives[1].text,
        "Explain the purpose of each supply item. (understand)"
    );
}

#[test]
fn test_design_goal_targets_create() {
    let set = generate_objectives("Students will design a user interface for a mobile application");

    assert_eq!(set.target_level, 6);
    assert_eq!(set.target_level_name, "create");
    assert_eq!(
        set.main_objective.text,
        "Design a user interface for a mobile application. (create)"
    );
    assert_eq!(set.supporting_objectives.len(), 5);

    let ranks: Vec<u8> = set.supporting_objectives.iter().map(|o| o.level.rank()).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_analyze_goal_targets_analyze() {
    let set = generate_objectives("Learners will analyze data to identify trends and patterns");

    assert_eq!(set.target_level, 4);
    assert_eq!(set.target_level_name, "analyze");
    assert_eq!(
        set.main_objective.text,
        "Analyze data to identify trends and patterns. (analyze)"
    );
    assert_eq!(set.supporting_objectives.len(), 3);
    assert_eq!(
        set.supporting_objectives[0].text,
        "Identify key concepts related to analyze data to identify trends and patterns. (remember)"
    );
    assert_eq!(
        set.supporting_objectives[2].text,
        "Apply knowledge to analyze data to identify trends and patterns. (apply)"
    );
}

#[test]
fn test_marketing_plan_phrasings() {
    let set = generate_objectives("Develop a marketing plan for a new product");

    assert_eq!(set.target_level, 6);
    assert_eq!(
        set.main_objective.text,
        "Develop a marketing plan for a new product. (create)"
    );
    let texts: Vec<&str> = set.supporting_objectives.iter().map(|o| o.text()).collect();
    assert_eq!(
        texts,
        vec![
            "Identify the components of a marketing plan. (remember)",
            "Explain marketing principles and strategies. (understand)",
            "Apply marketing concepts to develop campaign strategies. (apply)",
            "Analyze market conditions and competitive landscape. (analyze)",
            "Evaluate the potential success of marketing strategies. (evaluate)",
        ]
    );
}

#[test]
fn test_remember_goal_has_single_line_outline() {
    let set = generate_objectives("Students will learn the evacuation procedure");

    assert_eq!(set.target_level, 1);
    assert!(set.supporting_objectives.is_empty());
    assert_eq!(
        set.formatted_output,
        "1.0.0. Identify the evacuation procedure. (remember)"
    );
}

#[test]
fn test_empty_goal_is_rejected_before_engine() {
    let err = validate_goal("").unwrap_err();
    assert!(err.is_invalid_input());
    assert!(validate_goal("  \t ").is_err());
}

// =====================================================================
// PROPERTIES
// =====================================================================

#[test]
fn test_remember_only_verbs_stay_at_remember() {
    for goal in [
        "Recall the capital cities of europe",
        "Define the term photosynthesis",
        "Name the bones of the human hand",
    ] {
        assert_eq!(identify_level(goal), BloomLevel::Remember, "{}", goal);
    }
}

#[test]
fn test_create_words_always_reach_create() {
    for goal in [
        "create a budget",
        "Design a bridge",
        "develop a plan",
        "Formulate a theory",
        "generate ideas",
        "Recall and describe the facts, then design a bridge",
    ] {
        assert_eq!(identify_level(goal), BloomLevel::Create, "{}", goal);
    }
}

#[test]
fn test_supports_count_and_order() {
    for level in BloomLevel::ALL {
        let supports = synthesize_supports("the causes of inflation", level);
        assert_eq!(supports.len(), usize::from(level.rank() - 1));
        for (i, objective) in supports.iter().enumerate() {
            assert_eq!(usize::from(objective.level.rank()), i + 1);
        }
    }
}

#[test]
fn test_objectives_are_well_formed() {
    for goal in SAMPLE_GOALS {
        assert_well_formed(&generate_objectives(goal));
    }
}

#[test]
fn test_normalize_is_stable() {
    for goal in SAMPLE_GOALS {
        let once = normalize(goal);
        assert_eq!(normalize(&once), once, "{}", goal);
    }
}

#[test]
fn test_outline_numbering() {
    for goal in SAMPLE_GOALS {
        let set = generate_objectives(goal);
        let lines: Vec<&str> = set.formatted_output.split('\n').collect();

        assert_eq!(lines.len(), 1 + set.supporting_objectives.len());
        assert!(lines[0].starts_with("1.0.0. "));
        if let Some(second) = lines.get(1) {
            assert!(second.starts_with("   1.1.0. "));
        }
        for (k, line) in lines.iter().enumerate().skip(2) {
            assert!(line.starts_with(&format!("       1.1.{}. ", k - 1)), "{}", line);
        }
    }
}

#[test]
fn test_result_json_shape() {
    let set = generate_objectives("Explain the water cycle");
    let value = serde_json::to_value(&set).unwrap();

    assert_eq!(value["goal"], "Explain the water cycle");
    assert_eq!(value["target_level"], 2);
    assert_eq!(value["target_level_name"], "understand");
    assert_eq!(
        value["main_objective"],
        "Describe explain the water cycle. (understand)"
    );
    assert_eq!(
        value["supporting_objectives"],
        serde_json::json!(["Identify key concepts related to explain the water cycle. (remember)"])
    );
    assert_eq!(value["formatted_output"], set.formatted_output);
}
