//! Template engine for the mail-merge workflow.
//!
//! Template text goes through [`placeholders`] extraction, per-record
//! [`substitute`], word [`wrap`] and [`layout`] pagination. The [`generate`]
//! module runs that pipeline over a record set and hands the results to a
//! [`DocumentSink`]; [`wizard`] sequences the workflow stages around it.

pub mod dates;
pub mod error;
pub mod generate;
pub mod layout;
pub mod metrics;
pub mod naming;
pub mod placeholders;
pub mod substitute;
pub mod wizard;
pub mod wrap;

pub use dates::{format_date, format_timestamp};
pub use error::{GenerationError, Result, WizardError};
pub use generate::{CollectingSink, DocumentSink, GenerationContext, Generator};
pub use layout::{apply_footers, layout_document, paginate};
pub use metrics::text_width;
pub use naming::{artifact_name, display_name, header_reference, reference_token, sanitize_name};
pub use placeholders::{extract_placeholders, mappable_placeholders};
pub use substitute::{resolve_reserved, substitute};
pub use wizard::{Wizard, WizardStep};
pub use wrap::{wrap_line, wrap_text};
