use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::budget::{
    BudgetError, BudgetSelection, BudgetSnapshot, BudgetVerdict, ExpenseCategory, ExpensePreset,
    OtherCost, PresetCatalog, judge_budget, summarize, verdict_commentary,
};
use crate::core::{Commentary, MAX_AGE, ProjectionInputs, ProjectionResult, run_projection};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("--{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("--annual-return must be > -100")]
    ReturnTooLow,
    #[error("--{field} must be <= {max}")]
    AgeTooHigh { field: &'static str, max: u32 },
    #[error("failed to render summary: {0}")]
    Render(#[from] std::fmt::Error),
    #[error(transparent)]
    Budget(#[from] BudgetError),
    #[error("Invalid API JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "runway",
    about = "Household budget snapshot and retirement savings projection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Run one projection and print it
    Project(ProjectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[arg(long, default_value_t = 30)]
    partner1_age: u32,
    #[arg(long, default_value_t = 32)]
    partner2_age: u32,
    #[arg(long, default_value_t = 50_000.0, allow_negative_numbers = true)]
    current_savings: f64,
    #[arg(
        long,
        default_value_t = 65,
        help = "Raised to one year past the older partner's age when not above it"
    )]
    retirement_age: u32,
    #[arg(long, allow_negative_numbers = true)]
    net_monthly_income: f64,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Monthly cost drawn from savings after retirement; <= 0 never depletes"
    )]
    total_monthly_expenses: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Annual return on savings in percent"
    )]
    annual_return: f64,
    #[arg(long, help = "Print the full result as JSON")]
    json: bool,
}

/// Starting values for any field a request leaves out.
#[derive(Debug, Clone)]
pub struct ProjectionDefaults {
    pub partner1_age: u32,
    pub partner2_age: u32,
    pub current_savings: f64,
    pub retirement_age: u32,
    pub partner1_income: f64,
    pub partner2_income: f64,
    pub selections: BTreeMap<ExpenseCategory, Vec<String>>,
    pub annual_return: f64,
}

impl Default for ProjectionDefaults {
    fn default() -> Self {
        let selections = [
            (ExpenseCategory::Housing, "apartment"),
            (ExpenseCategory::Groceries, "standard"),
            (ExpenseCategory::Car, "sedan"),
            (ExpenseCategory::Leisure, "hobbies"),
            (ExpenseCategory::Travel, "road-trip"),
        ]
        .into_iter()
        .map(|(category, id)| (category, vec![id.to_string()]))
        .collect();

        Self {
            partner1_age: 30,
            partner2_age: 32,
            current_savings: 50_000.0,
            retirement_age: 65,
            partner1_income: 2_500.0,
            partner2_income: 3_000.0,
            selections,
            annual_return: 0.0,
        }
    }
}

impl ProjectionDefaults {
    pub fn selection(&self) -> BudgetSelection {
        BudgetSelection {
            partner1_income: self.partner1_income,
            partner2_income: self.partner2_income,
            selections: self.selections.clone(),
            other_costs: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct AppState {
    defaults: ProjectionDefaults,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectionPayload {
    partner1_age: Option<u32>,
    partner2_age: Option<u32>,
    current_savings: Option<f64>,
    retirement_age: Option<u32>,
    net_monthly_income: Option<f64>,
    total_monthly_expenses: Option<f64>,
    annual_return: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomPresetPayload {
    category: ExpenseCategory,
    id: Option<String>,
    label: String,
    cost: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct BudgetPayload {
    partner1_income: Option<f64>,
    partner2_income: Option<f64>,
    selections: Option<BTreeMap<ExpenseCategory, Vec<String>>>,
    other_costs: Vec<OtherCost>,
    custom_presets: Vec<CustomPresetPayload>,

    partner1_age: Option<u32>,
    partner2_age: Option<u32>,
    current_savings: Option<f64>,
    retirement_age: Option<u32>,
    annual_return: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetsResponse {
    catalog: PresetCatalog,
    other_cost_suggestions: Vec<OtherCost>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BudgetResponse {
    snapshot: BudgetSnapshot,
    verdict: BudgetVerdict,
    commentary: Commentary,
    custom_preset_ids: Vec<String>,
    /// Every custom preset in the catalog used for this request, for export.
    custom_presets: BTreeMap<ExpenseCategory, Vec<ExpensePreset>>,
    projection: ProjectionResult,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_inputs(args: &ProjectArgs) -> Result<ProjectionInputs, RequestError> {
    for (field, value) in [
        ("current-savings", args.current_savings),
        ("net-monthly-income", args.net_monthly_income),
        ("total-monthly-expenses", args.total_monthly_expenses),
        ("annual-return", args.annual_return),
    ] {
        if !value.is_finite() {
            return Err(RequestError::NonFinite { field });
        }
    }

    if args.annual_return <= -100.0 {
        return Err(RequestError::ReturnTooLow);
    }

    for (field, age) in [
        ("partner1-age", args.partner1_age),
        ("partner2-age", args.partner2_age),
        ("retirement-age", args.retirement_age),
    ] {
        if age > MAX_AGE {
            return Err(RequestError::AgeTooHigh {
                field,
                max: MAX_AGE,
            });
        }
    }

    let oldest = args.partner1_age.max(args.partner2_age);
    let retirement_age = if args.retirement_age <= oldest {
        debug!(
            "retirement age {} not above oldest partner age {oldest}; using {}",
            args.retirement_age,
            oldest + 1
        );
        oldest + 1
    } else {
        args.retirement_age
    };

    Ok(ProjectionInputs {
        partner1_age: args.partner1_age,
        partner2_age: args.partner2_age,
        current_savings: args.current_savings,
        retirement_age,
        net_monthly_income: args.net_monthly_income,
        total_monthly_expenses: args.total_monthly_expenses,
        annual_return_rate: args.annual_return / 100.0,
    })
}

/// Runs the `project` subcommand and prints the result to stdout.
pub fn run_projection_command(args: ProjectArgs) -> Result<(), RequestError> {
    let inputs = build_inputs(&args)?;
    let result = run_projection(&inputs);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_summary(&result)?);
    }
    Ok(())
}

fn render_summary(result: &ProjectionResult) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let years = if result.years_of_savings_post_retirement.is_finite() {
        format!("{:.1}", result.years_of_savings_post_retirement)
    } else {
        "unlimited".to_string()
    };
    let bankruptcy = result
        .age_at_bankruptcy
        .map(|age| age.to_string())
        .unwrap_or_else(|| "never".to_string());

    writeln!(
        out,
        "Start age {}, retirement age {}",
        result.start_age, result.retirement_age
    )?;
    writeln!(
        out,
        "Savings at retirement: {:.2}",
        result.savings_at_retirement
    )?;
    writeln!(out, "Years of savings: {years}")?;
    writeln!(out, "Bankruptcy age: {bankruptcy}")?;
    writeln!(
        out,
        "{}: {}",
        result.commentary.title, result.commentary.message
    )?;
    writeln!(out)?;
    writeln!(out, "{:>4} {:>16}", "Age", "Savings")?;
    for point in &result.plot_data {
        writeln!(out, "{:>4} {:>16.2}", point.age, point.savings)?;
    }
    Ok(out)
}

pub async fn run_http_server(port: u16, defaults: ProjectionDefaults) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("runway HTTP API listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{port}/api/projection");

    axum::serve(listener, router(defaults)).await
}

fn router(defaults: ProjectionDefaults) -> Router {
    let state = Arc::new(AppState { defaults });
    Router::new()
        .route("/api/presets", get(presets_handler))
        .route(
            "/api/projection",
            get(projection_get_handler).post(projection_post_handler),
        )
        .route("/api/budget", post(budget_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn presets_handler() -> Response {
    let catalog = PresetCatalog::defaults();
    let other_cost_suggestions = catalog.other_cost_suggestions();
    json_response(
        StatusCode::OK,
        PresetsResponse {
            catalog,
            other_cost_suggestions,
        },
    )
}

async fn projection_get_handler(
    State(state): State<Arc<AppState>>,
    Query(payload): Query<ProjectionPayload>,
) -> Response {
    projection_handler_impl(&state, payload)
}

async fn projection_post_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProjectionPayload>,
) -> Response {
    projection_handler_impl(&state, payload)
}

fn projection_handler_impl(state: &AppState, payload: ProjectionPayload) -> Response {
    debug!("projection request: {payload:?}");
    let args = project_args_from_payload(payload, &state.defaults);
    match build_inputs(&args) {
        Ok(inputs) => json_response(StatusCode::OK, run_projection(&inputs)),
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    }
}

async fn budget_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BudgetPayload>,
) -> Response {
    debug!(
        "budget request with {} custom presets and {} other costs",
        payload.custom_presets.len(),
        payload.other_costs.len()
    );
    match evaluate_budget(payload, &state.defaults) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn default_args_for_api(defaults: &ProjectionDefaults) -> ProjectArgs {
    let snapshot = summarize(&PresetCatalog::defaults(), &defaults.selection());
    ProjectArgs {
        partner1_age: defaults.partner1_age,
        partner2_age: defaults.partner2_age,
        current_savings: defaults.current_savings,
        retirement_age: defaults.retirement_age,
        net_monthly_income: snapshot.net_income,
        total_monthly_expenses: snapshot.total_expenses,
        annual_return: defaults.annual_return,
        json: true,
    }
}

fn project_args_from_payload(
    payload: ProjectionPayload,
    defaults: &ProjectionDefaults,
) -> ProjectArgs {
    let mut args = default_args_for_api(defaults);

    if let Some(v) = payload.partner1_age {
        args.partner1_age = v;
    }
    if let Some(v) = payload.partner2_age {
        args.partner2_age = v;
    }
    if let Some(v) = payload.current_savings {
        args.current_savings = v;
    }
    if let Some(v) = payload.retirement_age {
        args.retirement_age = v;
    }
    if let Some(v) = payload.net_monthly_income {
        args.net_monthly_income = v;
    }
    if let Some(v) = payload.total_monthly_expenses {
        args.total_monthly_expenses = v;
    }
    if let Some(v) = payload.annual_return {
        args.annual_return = v;
    }

    args
}

#[cfg(test)]
fn project_args_from_json(
    json: &str,
    defaults: &ProjectionDefaults,
) -> Result<ProjectArgs, RequestError> {
    let payload = serde_json::from_str::<ProjectionPayload>(json)?;
    Ok(project_args_from_payload(payload, defaults))
}

/// Catalog (plus request presets) -> snapshot -> projection. The projection
/// takes the snapshot's net income and total expenses as they are, signs
/// included.
fn evaluate_budget(
    payload: BudgetPayload,
    defaults: &ProjectionDefaults,
) -> Result<BudgetResponse, RequestError> {
    let mut catalog = PresetCatalog::defaults();
    let mut custom_preset_ids = Vec::with_capacity(payload.custom_presets.len());
    for preset in payload.custom_presets {
        match preset.id {
            Some(id) => {
                let added = catalog.merge(
                    preset.category,
                    vec![ExpensePreset {
                        id: id.clone(),
                        label: preset.label,
                        cost: preset.cost,
                        custom: true,
                    }],
                )?;
                if added == 0 {
                    debug!("custom preset {id:?} already in catalog; keeping existing entry");
                }
                custom_preset_ids.push(id);
            }
            None => {
                custom_preset_ids.push(catalog.add_custom(
                    preset.category,
                    &preset.label,
                    preset.cost,
                )?);
            }
        }
    }

    let selection = BudgetSelection {
        partner1_income: payload.partner1_income.unwrap_or(defaults.partner1_income),
        partner2_income: payload.partner2_income.unwrap_or(defaults.partner2_income),
        selections: payload
            .selections
            .unwrap_or_else(|| defaults.selections.clone()),
        other_costs: payload.other_costs,
    };
    for (field, value) in [
        ("partner1-income", selection.partner1_income),
        ("partner2-income", selection.partner2_income),
    ] {
        if !value.is_finite() {
            return Err(RequestError::NonFinite { field });
        }
    }
    if let Some(cost) = selection.other_costs.iter().find(|c| !c.cost.is_finite()) {
        return Err(BudgetError::InvalidCost {
            label: cost.label.clone(),
            cost: cost.cost,
        }
        .into());
    }

    let snapshot = summarize(&catalog, &selection);
    let verdict = judge_budget(&snapshot, &selection);

    let projection_payload = ProjectionPayload {
        partner1_age: payload.partner1_age,
        partner2_age: payload.partner2_age,
        current_savings: payload.current_savings,
        retirement_age: payload.retirement_age,
        net_monthly_income: Some(snapshot.net_income),
        total_monthly_expenses: Some(snapshot.total_expenses),
        annual_return: payload.annual_return,
    };
    let inputs = build_inputs(&project_args_from_payload(projection_payload, defaults))?;

    let mut custom_presets: BTreeMap<ExpenseCategory, Vec<ExpensePreset>> = BTreeMap::new();
    for (category, preset) in catalog.custom_presets() {
        custom_presets.entry(category).or_default().push(preset.clone());
    }

    Ok(BudgetResponse {
        snapshot,
        verdict,
        commentary: verdict_commentary(verdict),
        custom_preset_ids,
        custom_presets,
        projection: run_projection(&inputs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outlook;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_args() -> ProjectArgs {
        default_args_for_api(&ProjectionDefaults::default())
    }

    fn budget_from_json(json: &str) -> Result<BudgetResponse, RequestError> {
        let payload = serde_json::from_str::<BudgetPayload>(json)?;
        evaluate_budget(payload, &ProjectionDefaults::default())
    }

    #[test]
    fn defaults_come_from_the_default_household_budget() {
        let args = sample_args();
        let monthly_expenses = 2_500.0 + 600.0 + 550.0 + 150.0 + 4_000.0 / 12.0;
        assert_approx(args.total_monthly_expenses, monthly_expenses);
        assert_approx(args.net_monthly_income, 5_500.0 - monthly_expenses);
        assert_eq!(args.partner1_age, 30);
        assert_eq!(args.partner2_age, 32);
        assert_eq!(args.retirement_age, 65);
    }

    #[test]
    fn build_inputs_converts_percent_return_to_fraction() {
        let mut args = sample_args();
        args.annual_return = 4.5;
        let inputs = build_inputs(&args).expect("valid inputs");
        assert_approx(inputs.annual_return_rate, 0.045);
    }

    #[test]
    fn build_inputs_raises_retirement_age_past_oldest_partner() {
        let mut args = sample_args();
        args.partner1_age = 70;
        args.retirement_age = 65;
        let inputs = build_inputs(&args).expect("valid inputs");
        assert_eq!(inputs.retirement_age, 71);

        args.partner1_age = 0;
        args.partner2_age = 0;
        args.retirement_age = 0;
        assert_eq!(build_inputs(&args).expect("valid inputs").retirement_age, 1);
    }

    #[test]
    fn build_inputs_rejects_non_finite_values() {
        let mut args = sample_args();
        args.total_monthly_expenses = f64::INFINITY;
        let err = build_inputs(&args).expect_err("must reject infinity");
        assert!(err.to_string().contains("--total-monthly-expenses"));

        let mut args = sample_args();
        args.current_savings = f64::NAN;
        let err = build_inputs(&args).expect_err("must reject NaN");
        assert!(err.to_string().contains("--current-savings"));
    }

    #[test]
    fn build_inputs_rejects_total_loss_return() {
        let mut args = sample_args();
        args.annual_return = -100.0;
        let err = build_inputs(&args).expect_err("must reject -100%");
        assert!(err.to_string().contains("--annual-return"));
    }

    #[test]
    fn build_inputs_rejects_partner_age_above_cap() {
        let mut args = sample_args();
        args.partner1_age = u32::MAX;
        let err = build_inputs(&args).expect_err("must reject huge age");
        assert!(err.to_string().contains("--partner1-age must be <= 120"));

        let mut args = sample_args();
        args.partner2_age = MAX_AGE + 1;
        let err = build_inputs(&args).expect_err("must reject age past cap");
        assert!(err.to_string().contains("--partner2-age"));

        let mut args = sample_args();
        args.partner1_age = MAX_AGE;
        let inputs = build_inputs(&args).expect("cap itself is valid");
        assert_eq!(run_projection(&inputs).start_age, MAX_AGE);
    }

    #[test]
    fn build_inputs_rejects_retirement_age_above_cap() {
        let mut args = sample_args();
        args.retirement_age = u32::MAX;
        let err = build_inputs(&args).expect_err("must reject huge retirement age");
        assert!(err.to_string().contains("--retirement-age must be <= 120"));
    }

    #[test]
    fn oversized_age_from_http_payload_is_rejected() {
        let args = project_args_from_json(
            r#"{"partner1Age": 4294967295, "retirementAge": 4294967295}"#,
            &ProjectionDefaults::default(),
        )
        .expect("json should parse");
        let err = build_inputs(&args).expect_err("must reject");
        assert!(matches!(err, RequestError::AgeTooHigh { max: MAX_AGE, .. }));

        let err = budget_from_json(r#"{"retirementAge": 500}"#).expect_err("must reject");
        assert!(err.to_string().contains("--retirement-age"));
    }

    #[test]
    fn project_args_from_json_parses_web_keys() {
        let json = r#"{
          "partner1Age": 41,
          "partner2Age": 39,
          "currentSavings": 120000,
          "retirementAge": 60,
          "netMonthlyIncome": -250.5,
          "totalMonthlyExpenses": 1800,
          "annualReturn": 2
        }"#;
        let args = project_args_from_json(json, &ProjectionDefaults::default())
            .expect("json should parse");

        assert_eq!(args.partner1_age, 41);
        assert_eq!(args.partner2_age, 39);
        assert_approx(args.current_savings, 120_000.0);
        assert_eq!(args.retirement_age, 60);
        assert_approx(args.net_monthly_income, -250.5);
        assert_approx(args.total_monthly_expenses, 1_800.0);
        assert_approx(args.annual_return, 2.0);
    }

    #[test]
    fn project_args_from_json_rejects_wrong_types() {
        let err = project_args_from_json(r#"{"partner1Age": "old"}"#, &ProjectionDefaults::default())
            .expect_err("must reject string age");
        assert!(err.to_string().contains("Invalid API JSON payload"));
    }

    #[test]
    fn projection_response_serialization_contains_expected_fields() {
        let inputs = build_inputs(&sample_args()).expect("valid inputs");
        let json = serde_json::to_string(&run_projection(&inputs)).expect("serializes");
        for key in [
            "\"plotData\"",
            "\"savingsAtRetirement\"",
            "\"yearsOfSavingsPostRetirement\"",
            "\"ageAtBankruptcy\"",
            "\"commentary\"",
            "\"outlook\"",
            "\"startAge\"",
        ] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
    }

    #[test]
    fn default_budget_runs_the_full_pipeline() {
        let response = budget_from_json("{}").expect("defaults are valid");

        assert_approx(response.snapshot.total_income, 5_500.0);
        assert_eq!(response.verdict, BudgetVerdict::Sustainable);
        assert_eq!(response.projection.start_age, 32);
        assert_eq!(response.projection.plot_data.len(), 69);
        // 50k + 33 years of ~1366.67 a month, drained at ~4133.33 a month.
        assert_approx(
            response.projection.savings_at_retirement,
            50_000.0 + 33.0 * 12.0 * (5_500.0 - 3_800.0 - 4_000.0 / 12.0),
        );
        assert_eq!(response.projection.age_at_bankruptcy, Some(76));
        assert_eq!(response.projection.outlook, Outlook::Cushion);
    }

    #[test]
    fn negative_total_expenses_are_immortal_despite_negative_income() {
        let json = r#"{
          "partner1Income": 0,
          "partner2Income": 0,
          "selections": { "housing": ["shed"] },
          "otherCosts": [{ "id": "other-1", "label": "Sublet", "cost": -400 }],
          "currentSavings": 10000
        }"#;
        let response = budget_from_json(json).expect("valid payload");

        assert_approx(response.snapshot.total_expenses, -250.0);
        assert_approx(response.snapshot.net_income, 250.0);
        assert_eq!(response.verdict, BudgetVerdict::SideHustle);
        assert!(response.projection.never_bankrupt());
        assert_eq!(response.projection.outlook, Outlook::Immortal);
    }

    #[test]
    fn custom_presets_can_be_selected_in_the_same_request() {
        let json = r#"{
          "customPresets": [
            { "category": "leisure", "id": "leisure-yacht", "label": "Yacht Club", "cost": 5200 },
            { "category": "car", "label": "Horse", "cost": 300 }
          ],
          "selections": { "leisure": ["leisure-yacht"], "car": ["car-horse"] },
          "partner1Income": 6000,
          "partner2Income": 0
        }"#;
        let response = budget_from_json(json).expect("valid payload");

        assert_eq!(response.custom_preset_ids, vec!["leisure-yacht", "car-horse"]);
        let exported: Vec<&str> = response
            .custom_presets
            .values()
            .flatten()
            .map(|preset| preset.label.as_str())
            .collect();
        assert_eq!(exported, vec!["Horse", "Yacht Club"]);
        assert!(response.custom_presets[&ExpenseCategory::Leisure][0].custom);
        assert_approx(response.snapshot.total_expenses, 5_500.0);
        assert_eq!(response.verdict, BudgetVerdict::Tightrope);
    }

    #[test]
    fn invalid_custom_preset_is_rejected() {
        let json = r#"{ "customPresets": [{ "category": "travel", "label": " ", "cost": 1 }] }"#;
        let err = budget_from_json(json).expect_err("blank label");
        assert!(matches!(err, RequestError::Budget(BudgetError::EmptyLabel)));
    }

    #[test]
    fn summary_mentions_never_for_unlimited_runway() {
        let mut args = sample_args();
        args.total_monthly_expenses = -10.0;
        let result = run_projection(&build_inputs(&args).expect("valid inputs"));
        let summary = render_summary(&result).expect("renders");

        assert!(summary.contains("Bankruptcy age: never"));
        assert!(summary.contains("Years of savings: unlimited"));
        assert!(summary.contains("Financial Immortality Unlocked"));
        assert_eq!(
            summary.lines().filter(|line| line.trim_start().starts_with("100 ")).count(),
            1
        );
    }

    #[test]
    fn cli_parses_project_subcommand_with_negative_values() {
        let cli = Cli::try_parse_from([
            "runway",
            "project",
            "--net-monthly-income",
            "-300",
            "--total-monthly-expenses",
            "-50",
            "--json",
        ])
        .expect("valid command line");
        let Command::Project(args) = cli.command else {
            panic!("expected project subcommand");
        };
        assert_approx(args.net_monthly_income, -300.0);
        assert_approx(args.total_monthly_expenses, -50.0);
        assert_eq!(args.partner2_age, 32);
        assert!(args.json);
    }
}
