//! Command-line front ends for segmentify.

pub mod cli;
