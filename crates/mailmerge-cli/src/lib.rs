//! Library side of the `mailmerge` command: logging setup and the generation pipeline.

pub mod logging;
pub mod pipeline;
pub mod types;
