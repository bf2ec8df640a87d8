//! segmentify core: turns a crawl URL extract into segmentation rules.
//!
//! Pipeline: [`extract`] streams lines, [`tokenize`] derives keys, [`tally`]
//! counts and orders them, [`rules`] renders sections and [`output`] owns the
//! segment file. [`generator`] drives a full run; [`report`] holds the plain
//! folder and parameter counts.

pub mod config;
pub mod error;
pub mod logging;

pub mod extract;
pub mod generator;
pub mod output;
pub mod progress;
pub mod report;
pub mod rules;
pub mod tally;
pub mod tokenize;

pub use error::{Result, SegmentifyError};
