//! Bloom Objectives - Learning Objectives Library
//!
//! Turns a free-text course goal into a small hierarchy of learning objectives
//! labeled with Bloom's Taxonomy levels:
//! - Rule-based classification of the goal's target level
//! - A main objective at that level
//! - Supporting objectives for every lower level
//! - A numbered outline ready for display
//!
//! # Example
//!
//! ```
//! use bloom_objectives::ObjectiveEngine;
//!
//! let set = ObjectiveEngine::new().generate("Students will design a user interface for a mobile application");
//! assert_eq!(set.target_level_name, "create");
//! assert_eq!(set.supporting_objectives.len(), 5);
//! println!("{}", set.formatted_output);
//! ```

// Core modules
pub mod taxonomy;
pub mod types;
pub mod error;
pub mod engine;

// Presentation layers
pub mod config;
pub mod server;
pub mod cli;

// Re-export commonly used types for convenience
pub use engine::{
    generate_objectives,
    validate_goal,
    ObjectiveEngine,
};

pub use error::ObjectiveError;

pub use taxonomy::{BloomLevel, TaxonomyLevel};

pub use types::{Objective, ObjectiveSet};

pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - Learning Objectives Generator", NAME, VERSION)
}
