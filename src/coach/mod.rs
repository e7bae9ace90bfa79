pub mod engine;
pub mod pace;
pub mod scheduler;
pub mod stats;
pub mod templates;
