pub mod generator;
pub mod validate;

pub use generator::{GenerateOptions, GenerationSummary, TimeEntry, generate};
pub use validate::{Plan, validate};
