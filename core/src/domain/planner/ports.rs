use std::future::Future;

use serde_json::Value;
use thiserror::Error;

use crate::domain::{common::entities::app_errors::CoreError, plan::value_objects::GeneratePlanInput};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// The server answered with a non-success status.
    #[error("server returned {status}")]
    Server { status: u16, message: Option<String> },

    #[error("request failed: {0}")]
    Transport(String),
}

/// Remote plan endpoint as seen from the planner.
pub trait PlannerApi: Send + Sync {
    fn create_plan(
        &self,
        request: GeneratePlanInput,
    ) -> impl Future<Output = Result<Value, PlannerError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait Printer: Send + Sync {
    fn print(&self, document: &str) -> Result<(), CoreError>;
}
