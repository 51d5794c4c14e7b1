pub mod content;
pub mod ideas;
pub mod metrics;
pub mod providers;
