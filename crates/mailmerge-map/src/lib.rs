#![deny(unsafe_code)]

//! Field mapping for the mail-merge workflow.
//!
//! - [`engine`]: case-insensitive auto-mapping of placeholders to columns
//! - [`state`]: the editable mapping built by the user before generation
//! - [`utils`]: assignment parsing and mapping files passed in as plain data

pub mod engine;
pub mod error;
pub mod state;
pub mod utils;

pub use engine::{MappingEngine, MappingResult, auto_map};
pub use error::MappingError;
pub use state::{MappingState, MappingSummary};
pub use utils::{load_mapping_file, match_key, parse_assignment};
