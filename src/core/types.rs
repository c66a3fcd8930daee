use serde::{Serialize, Serializer};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Positive,
    Info,
    Caution,
    Warning,
    Critical,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outlook {
    Cliff,
    Immortal,
    Golden,
    Cushion,
    ShortRunway,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commentary {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// One year of the savings trajectory.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PlotPoint {
    pub age: u32,
    pub savings: f64,
}

impl PlotPoint {
    pub(crate) fn clamped(age: u32, balance: f64) -> Self {
        Self {
            age,
            savings: balance.max(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionInputs {
    pub partner1_age: u32,
    pub partner2_age: u32,
    pub current_savings: f64,
    pub retirement_age: u32,
    pub net_monthly_income: f64,
    pub total_monthly_expenses: f64,
    /// Per-year growth factor applied to the running balance, as a fraction.
    /// Zero keeps the nominal linear model.
    pub annual_return_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub start_age: u32,
    pub retirement_age: u32,
    pub plot_data: Vec<PlotPoint>,
    pub savings_at_retirement: f64,
    #[serde(serialize_with = "serialize_runway_years")]
    pub years_of_savings_post_retirement: f64,
    /// `None` when savings never run out.
    pub age_at_bankruptcy: Option<u32>,
    pub outlook: Outlook,
    pub commentary: Commentary,
}

#[cfg(test)]
impl ProjectionResult {
    pub(crate) fn never_bankrupt(&self) -> bool {
        self.age_at_bankruptcy.is_none()
    }
}

// JSON has no infinity; unlimited runway goes out as the string "Infinity".
fn serialize_runway_years<S: Serializer>(years: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if years.is_finite() {
        serializer.serialize_f64(*years)
    } else if years.is_nan() {
        serializer.serialize_none()
    } else if years.is_sign_positive() {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_str("-Infinity")
    }
}
