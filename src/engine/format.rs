//! Outline formatting
//!
//! ```text
//! 1.0.0. <main>
//!    1.1.0. <first support>
//!        1.1.1. <second support>
//!        1.1.2. ...
//! ```
//!
//! Supports never nest deeper than `1.1.N`.

use crate::types::Objective;

const MAIN_PREFIX: &str = "1.0.0. ";
const FIRST_SUPPORT_PREFIX: &str = "   1.1.0. ";
const SUPPORT_INDENT: &str = "       ";

/// Render the hierarchical outline, one objective per line
pub fn format_outline(main: &Objective, supports: &[Objective]) -> String {
    let mut lines = Vec::with_capacity(supports.len() + 1);
    lines.push(format!("{}{}", MAIN_PREFIX, main.text));

    for (i, objective) in supports.iter().enumerate() {
        if i == 0 {
            lines.push(format!("{}{}", FIRST_SUPPORT_PREFIX, objective.text));
        } else {
            lines.push(format!("{}1.1.{}. {}", SUPPORT_INDENT, i, objective.text));
        }
    }

    lines.join("\n")
}
