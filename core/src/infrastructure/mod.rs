pub mod key_value;
pub mod llm;
pub mod planner;
