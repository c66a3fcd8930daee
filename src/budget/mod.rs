mod presets;
mod snapshot;
mod verdict;

use thiserror::Error;

pub use presets::{ExpenseCategory, ExpensePreset, OtherCost, PresetCatalog};
pub use snapshot::{BudgetSelection, BudgetSnapshot, summarize};
pub use verdict::{BudgetVerdict, judge_budget, verdict_commentary};

#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("preset label must not be empty")]
    EmptyLabel,
    #[error("cost for {label:?} must be a finite number, got {cost}")]
    InvalidCost { label: String, cost: f64 },
}
