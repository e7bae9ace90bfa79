pub mod feedback;
pub mod plan;
pub mod run;
pub mod stats;
