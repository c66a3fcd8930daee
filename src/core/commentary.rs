use super::types::{Commentary, Outlook, Severity};

/// Savings lasting past this age count as a golden retirement.
pub const GOLDEN_AGE_THRESHOLD: f64 = 85.0;
/// Runway (in years past retirement) that separates a cushion from a short runway.
pub const CUSHION_YEARS: f64 = 5.0;

/// First match wins. `age_at_bankruptcy` is the unfloored age, `None` when
/// savings never run out.
pub fn classify_outlook(
    net_monthly_income: f64,
    savings_at_retirement: f64,
    age_at_bankruptcy: Option<f64>,
    retirement_age: u32,
) -> Outlook {
    if net_monthly_income < 0.0 && savings_at_retirement <= 0.0 {
        return Outlook::Cliff;
    }
    let Some(age) = age_at_bankruptcy else {
        return Outlook::Immortal;
    };
    if age > GOLDEN_AGE_THRESHOLD {
        Outlook::Golden
    } else if age > retirement_age as f64 + CUSHION_YEARS {
        Outlook::Cushion
    } else {
        Outlook::ShortRunway
    }
}

pub fn outlook_commentary(
    outlook: Outlook,
    age_at_bankruptcy: Option<f64>,
    years_of_savings: f64,
) -> Commentary {
    match outlook {
        Outlook::Cliff => Commentary {
            title: "The Math Isn't Mathing".to_string(),
            message: "You're spending more than you earn and will have no savings for \
                      retirement. This isn't a projection; it's a financial cliff."
                .to_string(),
            severity: Severity::Critical,
        },
        Outlook::Immortal => Commentary {
            title: "Financial Immortality Unlocked".to_string(),
            message: "Your money will outlive you, your children, and possibly civilization \
                      itself. Well done."
                .to_string(),
            severity: Severity::Positive,
        },
        Outlook::Golden => Commentary {
            title: "The Golden Years are... Golden!".to_string(),
            message: "You're set for a long and comfortable retirement. Your planning is solid."
                .to_string(),
            severity: Severity::Positive,
        },
        Outlook::Cushion => {
            let age = age_at_bankruptcy.map(f64::floor).unwrap_or(0.0);
            Commentary {
                title: "A Comfortable Cushion".to_string(),
                message: format!(
                    "You've got a runway post-retirement, but at age {age:.0}, the party's over. \
                     No sudden super-yacht purchases."
                ),
                severity: Severity::Caution,
            }
        }
        Outlook::ShortRunway => Commentary {
            title: "Dangerously Short Runway".to_string(),
            message: format!(
                "You'll run out of money just {years_of_savings:.1} years into retirement. \
                 Time to rethink... everything."
            ),
            severity: Severity::Critical,
        },
    }
}
