pub mod calendar;
pub mod mood;
pub mod entry;
pub mod config;

pub use calendar::*;
pub use mood::*;
pub use entry::*;
pub use config::*;
