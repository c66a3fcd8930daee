use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use super::presets::{ExpenseCategory, OtherCost, PresetCatalog};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetSelection {
    pub partner1_income: f64,
    pub partner2_income: f64,
    pub selections: BTreeMap<ExpenseCategory, Vec<String>>,
    pub other_costs: Vec<OtherCost>,
}

impl BudgetSelection {
    pub fn selected(&self, category: ExpenseCategory) -> &[String] {
        self.selections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_selected(&self, category: ExpenseCategory, id: &str) -> bool {
        self.selected(category).iter().any(|selected| selected == id)
    }
}

/// Monthly income/expense totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_income: f64,
    /// Expenses as a fraction of income; infinite without income.
    #[serde(skip)]
    pub expense_ratio: f64,
}

pub fn summarize(catalog: &PresetCatalog, selection: &BudgetSelection) -> BudgetSnapshot {
    let total_income = selection.partner1_income + selection.partner2_income;

    let mut total_expenses = 0.0;
    for category in ExpenseCategory::ALL {
        let mut category_total = 0.0;
        for id in selection.selected(category) {
            match catalog.find(category, id) {
                Some(preset) => category_total += preset.cost,
                None => warn!("ignoring unknown {} preset {id:?}", category.slug()),
            }
        }
        total_expenses += category.monthly_cost(category_total);
    }
    total_expenses += selection
        .other_costs
        .iter()
        .map(|cost| cost.cost)
        .sum::<f64>();

    let expense_ratio = if total_income > 0.0 {
        total_expenses / total_income
    } else {
        f64::INFINITY
    };

    BudgetSnapshot {
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
        expense_ratio,
    }
}
