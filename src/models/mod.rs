pub mod entry;
pub mod error;
pub mod filter;
pub mod report;
pub mod stats;

pub use entry::*;
pub use error::*;
pub use filter::*;
pub use report::*;
pub use stats::*;
