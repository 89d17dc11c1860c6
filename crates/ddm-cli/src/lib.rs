//! Library side of the `ddm` command-line tool.

pub mod logging;
pub mod pipeline;
pub mod report;
