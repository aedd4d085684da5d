//! Transcript analyzers that run beside the scorecard

pub mod insights;
pub mod transitions;

pub use insights::{analyze_response, analyze_responses};
pub use transitions::{detect_transitions, detect_transitions_with};
