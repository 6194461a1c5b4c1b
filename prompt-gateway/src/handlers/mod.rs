//! HTTP handlers for the prompt gateway.

pub mod generation;
pub mod health;

pub use generation::{evaluate_answer, generate_mcq, get_output, summarize};
pub use health::{health_check, readiness_check};
