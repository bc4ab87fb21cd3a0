//! Serializable summaries of an outline pass.
//!
//! `OutlineReport` is what [`Outliner::process`](crate::Outliner::process)
//! returns; the CLI writes it out as JSON.

pub mod report;

pub use report::{OutlineReport, PassTimings, Stage, StageTiming};
