use serde::Serialize;

use super::presets::ExpenseCategory;
use super::snapshot::{BudgetSelection, BudgetSnapshot};
use crate::core::{Commentary, Severity};

const OVERSPEND_RATIO: f64 = 1.2;
const TIGHT_MARGIN: f64 = 0.1;
const COMFORTABLE_MARGIN: f64 = 0.5;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetVerdict {
    SideHustle,
    Minimalist,
    ThoughtsAndPrayers,
    BezosBozo,
    Crying,
    Tightrope,
    Hiring,
    Sustainable,
}

/// First match wins.
pub fn judge_budget(snapshot: &BudgetSnapshot, selection: &BudgetSelection) -> BudgetVerdict {
    let income = snapshot.total_income;
    let net = snapshot.net_income;

    if snapshot.total_expenses < 0.0 {
        BudgetVerdict::SideHustle
    } else if selection.has_selected(ExpenseCategory::Housing, "homeless")
        && selection.has_selected(ExpenseCategory::Groceries, "no-eating")
    {
        BudgetVerdict::Minimalist
    } else if income == 0.0 && snapshot.total_expenses > 0.0 {
        BudgetVerdict::ThoughtsAndPrayers
    } else if snapshot.expense_ratio > OVERSPEND_RATIO {
        BudgetVerdict::BezosBozo
    } else if net < 0.0 {
        BudgetVerdict::Crying
    } else if net > 0.0 && net < income * TIGHT_MARGIN {
        BudgetVerdict::Tightrope
    } else if net > income * COMFORTABLE_MARGIN {
        BudgetVerdict::Hiring
    } else {
        BudgetVerdict::Sustainable
    }
}

pub fn verdict_commentary(verdict: BudgetVerdict) -> Commentary {
    let (title, message, severity) = match verdict {
        BudgetVerdict::SideHustle => (
            "The side hustle is strong.",
            "You've managed to get paid for your lifestyle. Are you an influencer, or did you \
             just monetize breathing?",
            Severity::Info,
        ),
        BudgetVerdict::Minimalist => (
            "Ah, the 'air and pavement' diet.",
            "It's a bold minimalist strategy. Very chic, very... hungry. Is this voluntary?",
            Severity::Warning,
        ),
        BudgetVerdict::ThoughtsAndPrayers => (
            "The 'Thoughts & Prayers' budget plan.",
            "Hoping for the best is not a financial strategy. Unless you're planning to win the \
             lottery, this won't end well.",
            Severity::Critical,
        ),
        BudgetVerdict::BezosBozo => (
            "Living like Bezos, earning like a bozo.",
            "Your spending habits are writing checks your income can't cash. Time to swap \
             champagne wishes for tap water dreams.",
            Severity::Critical,
        ),
        BudgetVerdict::Crying => (
            "Your bank account is crying.",
            "And honestly, so am I. This isn't a budget, it's a cry for help written in red ink.",
            Severity::Critical,
        ),
        BudgetVerdict::Tightrope => (
            "Walking the financial tightrope.",
            "You're balancing perfectly, for now. One gust of wind (or an unexpected bill) and \
             it's a long way down.",
            Severity::Caution,
        ),
        BudgetVerdict::Hiring => (
            "Are you hiring?",
            "Your budget has more room than a mansion. Seriously, asking for a friend... who is me.",
            Severity::Positive,
        ),
        BudgetVerdict::Sustainable => (
            "Solidly Sustainable!",
            "Look at you, being all responsible. Your future selves are already thanking you. \
             Don't get too crazy, now.",
            Severity::Positive,
        ),
    };
    Commentary {
        title: title.to_string(),
        message: message.to_string(),
        severity,
    }
}
