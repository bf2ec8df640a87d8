//! CLI command handlers, one per binary.

mod foldercount;
mod paramcount;
mod segment;

pub use foldercount::run_foldercount;
pub use paramcount::run_paramcount;
pub use segment::run_segment;
