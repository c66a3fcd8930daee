use super::commentary::{classify_outlook, outlook_commentary};
use super::types::{PlotPoint, ProjectionInputs, ProjectionResult};

/// Last age on every projection.
pub const HORIZON_AGE: u32 = 100;
/// Projections never start at age zero.
pub const MIN_START_AGE: u32 = 1;
/// Ages above this are treated as this age.
pub const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, Copy)]
struct DepletionOutcome {
    years_of_savings: f64,
    age_at_bankruptcy: Option<f64>,
}

/// Year-by-year savings trajectory from the older partner's age through
/// [`HORIZON_AGE`]: linear accumulation of net income until retirement, then
/// depletion by annual expenses. Total for any finite input; ages are capped
/// at [`MAX_AGE`].
pub fn run_projection(inputs: &ProjectionInputs) -> ProjectionResult {
    let start_age = inputs
        .partner1_age
        .max(inputs.partner2_age)
        .clamp(MIN_START_AGE, MAX_AGE);
    let years_to_retirement = inputs
        .retirement_age
        .min(MAX_AGE)
        .saturating_sub(start_age);
    let retirement_age = start_age + years_to_retirement;
    let growth = 1.0 + inputs.annual_return_rate;

    let mut plot_data =
        Vec::with_capacity((HORIZON_AGE.max(retirement_age) - start_age + 1) as usize);
    plot_data.push(PlotPoint::clamped(start_age, inputs.current_savings));

    let balance = accumulate(
        &mut plot_data,
        inputs.current_savings,
        inputs.net_monthly_income * 12.0,
        start_age,
        years_to_retirement,
        growth,
    );
    let savings_at_retirement = balance.max(0.0);
    let annual_expense = inputs.total_monthly_expenses * 12.0;

    let outcome = if annual_expense <= 0.0 {
        push_growth_years(&mut plot_data, balance, annual_expense, retirement_age, growth);
        DepletionOutcome {
            years_of_savings: f64::INFINITY,
            age_at_bankruptcy: None,
        }
    } else if savings_at_retirement > 0.0 {
        let years_of_savings =
            runway_years(savings_at_retirement, annual_expense, inputs.annual_return_rate);
        push_depletion_years(
            &mut plot_data,
            savings_at_retirement,
            annual_expense,
            retirement_age,
            growth,
        );
        DepletionOutcome {
            years_of_savings,
            age_at_bankruptcy: years_of_savings
                .is_finite()
                .then(|| retirement_age as f64 + years_of_savings),
        }
    } else {
        DepletionOutcome {
            years_of_savings: 0.0,
            age_at_bankruptcy: Some(retirement_age as f64),
        }
    };

    push_zero_tail(&mut plot_data);

    let outlook = classify_outlook(
        inputs.net_monthly_income,
        savings_at_retirement,
        outcome.age_at_bankruptcy,
        retirement_age,
    );
    let commentary = outlook_commentary(
        outlook,
        outcome.age_at_bankruptcy,
        outcome.years_of_savings,
    );

    ProjectionResult {
        start_age,
        retirement_age,
        plot_data,
        savings_at_retirement,
        years_of_savings_post_retirement: outcome.years_of_savings,
        age_at_bankruptcy: outcome.age_at_bankruptcy.map(|age| age.floor() as u32),
        outlook,
        commentary,
    }
}

// Only the plotted value is clamped; the running balance keeps its sign so a
// dip below zero can recover.
fn accumulate(
    plot_data: &mut Vec<PlotPoint>,
    current_savings: f64,
    annual_net_income: f64,
    start_age: u32,
    years_to_retirement: u32,
    growth: f64,
) -> f64 {
    let mut balance = current_savings;
    for year in 1..=years_to_retirement {
        balance = balance * growth + annual_net_income;
        plot_data.push(PlotPoint::clamped(start_age + year, balance));
    }
    balance
}

fn push_growth_years(
    plot_data: &mut Vec<PlotPoint>,
    mut balance: f64,
    annual_expense: f64,
    retirement_age: u32,
    growth: f64,
) {
    for age in retirement_age.saturating_add(1)..=HORIZON_AGE {
        balance = balance * growth - annual_expense;
        plot_data.push(PlotPoint {
            age,
            savings: balance,
        });
    }
}

fn push_depletion_years(
    plot_data: &mut Vec<PlotPoint>,
    savings_at_retirement: f64,
    annual_expense: f64,
    retirement_age: u32,
    growth: f64,
) {
    let mut remaining = savings_at_retirement;
    for age in retirement_age.saturating_add(1)..=HORIZON_AGE {
        remaining = remaining * growth - annual_expense;
        plot_data.push(PlotPoint::clamped(age, remaining));
        if remaining <= 0.0 {
            break;
        }
    }
}

fn push_zero_tail(plot_data: &mut Vec<PlotPoint>) {
    let Some(last) = plot_data.last() else {
        return;
    };
    for age in last.age.saturating_add(1)..=HORIZON_AGE {
        plot_data.push(PlotPoint { age, savings: 0.0 });
    }
}

/// Years until `savings` is exhausted by `annual_expense` (> 0). With a
/// return rate `r` the balance follows `b' = b * (1 + r) - e`, which has the
/// closed form `-ln(1 - r * s / e) / ln(1 + r)`; returns that cover the
/// expense give an unlimited runway.
fn runway_years(savings: f64, annual_expense: f64, annual_return_rate: f64) -> f64 {
    if annual_return_rate == 0.0 {
        return savings / annual_expense;
    }
    let covered = annual_return_rate * savings / annual_expense;
    if covered >= 1.0 {
        return f64::INFINITY;
    }
    -(-covered).ln_1p() / annual_return_rate.ln_1p()
}
