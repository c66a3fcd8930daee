mod commentary;
mod engine;
mod types;

pub use commentary::{CUSHION_YEARS, GOLDEN_AGE_THRESHOLD, classify_outlook, outlook_commentary};
pub use engine::{HORIZON_AGE, MAX_AGE, MIN_START_AGE, run_projection};
pub use types::{Commentary, Outlook, PlotPoint, ProjectionInputs, ProjectionResult, Severity};
