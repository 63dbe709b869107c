pub mod common;
pub mod plan;
pub mod planner;
pub mod preferences;
