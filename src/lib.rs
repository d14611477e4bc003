pub mod bench_params;
pub mod error;
pub mod input;

pub mod median_extract;
pub mod table_format;
pub mod speed_report;

pub mod cli;

pub use bench_params::Section;
pub use error::{BenchError, Result};
