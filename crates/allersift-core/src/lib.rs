//! Allersift core: the on-device allergen inference pipeline.
//!
//! One call takes a prompt string through tokenization, prefill, a greedy
//! decode loop with early-stop rules, metric capture and a closed-vocabulary
//! allergen filter, and renders the result as
//! `TTFT_MS=..;ITPS=..;OTPS=..;OET_MS=..|<allergens_or_EMPTY>`.

pub mod engine;
pub mod filter;
pub mod metrics;
pub mod prompt;
pub mod report;

pub use engine::SlmEngine;
pub use report::InferenceOutcome;
