use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::BudgetError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Housing,
    Groceries,
    Car,
    Leisure,
    Travel,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Groceries,
        ExpenseCategory::Car,
        ExpenseCategory::Leisure,
        ExpenseCategory::Travel,
    ];

    /// Travel presets are priced per year; everything else per month.
    pub fn is_annual(self) -> bool {
        matches!(self, ExpenseCategory::Travel)
    }

    pub fn slug(self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "housing",
            ExpenseCategory::Groceries => "groceries",
            ExpenseCategory::Car => "car",
            ExpenseCategory::Leisure => "leisure",
            ExpenseCategory::Travel => "travel",
        }
    }

    pub fn monthly_cost(self, cost: f64) -> f64 {
        if self.is_annual() { cost / 12.0 } else { cost }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExpensePreset {
    pub id: String,
    pub label: String,
    pub cost: f64,
    #[serde(default)]
    pub custom: bool,
}

impl ExpensePreset {
    fn stock(id: &str, label: &str, cost: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            cost,
            custom: false,
        }
    }
}

/// A one-off monthly line item outside the lifestyle categories.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OtherCost {
    pub id: String,
    pub label: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetCatalog {
    categories: BTreeMap<ExpenseCategory, Vec<ExpensePreset>>,
    other_costs: Vec<OtherCost>,
}

impl PresetCatalog {
    pub fn defaults() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            ExpenseCategory::Housing,
            vec![
                ExpensePreset::stock("mansion", "Mansion", 25_000.0),
                ExpensePreset::stock("house", "Suburban House", 3_500.0),
                ExpensePreset::stock("apartment", "Downtown Apartment", 2_500.0),
                ExpensePreset::stock("studio", "Studio Apartment", 1_600.0),
                ExpensePreset::stock("room", "Renting a Room", 900.0),
                ExpensePreset::stock("shed", "Garden Shed", 150.0),
                ExpensePreset::stock("homeless", "Living with Parents", 0.0),
            ],
        );
        categories.insert(
            ExpenseCategory::Groceries,
            vec![
                ExpensePreset::stock("gourmet", "Gourmet / Organic", 1_200.0),
                ExpensePreset::stock("standard", "Standard Diet", 600.0),
                ExpensePreset::stock("budget", "Budget Eating", 350.0),
                ExpensePreset::stock("ramen", "Instant Noodle Diet", 100.0),
                ExpensePreset::stock("no-eating", "Fasting / No Eating", 0.0),
            ],
        );
        categories.insert(
            ExpenseCategory::Car,
            vec![
                ExpensePreset::stock("supercar", "Supercar", 3_500.0),
                ExpensePreset::stock("suv", "Luxury SUV", 1_200.0),
                ExpensePreset::stock("sedan", "Reliable Sedan", 550.0),
                ExpensePreset::stock("public-transport", "Public Transport", 100.0),
                ExpensePreset::stock("bicycle", "Bicycle", 20.0),
            ],
        );
        categories.insert(
            ExpenseCategory::Leisure,
            vec![
                ExpensePreset::stock("fine-dining", "Fine Dining & Clubs", 1_500.0),
                ExpensePreset::stock("clubbing", "Going Out / Bars", 600.0),
                ExpensePreset::stock("movies", "Movies & Takeout", 300.0),
                ExpensePreset::stock("hobbies", "Hobbies", 150.0),
                ExpensePreset::stock("stay-home", "Netflix & Chill", 50.0),
                ExpensePreset::stock("no-fun", "No Fun Allowed", 0.0),
            ],
        );
        categories.insert(
            ExpenseCategory::Travel,
            vec![
                ExpensePreset::stock("globetrotting", "Luxury Globe-trotting", 25_000.0),
                ExpensePreset::stock("resort", "All-inclusive Resort", 8_000.0),
                ExpensePreset::stock("road-trip", "Several Road Trips", 4_000.0),
                ExpensePreset::stock("camping", "Weekend Camping", 1_500.0),
                ExpensePreset::stock("staycation", "Staycation", 500.0),
            ],
        );

        let other_costs = [
            ("other-student-loans", "Student Loans", 450.0),
            ("other-gym", "Gym Membership", 50.0),
            ("other-subscriptions", "Subscriptions (Streaming, etc.)", 40.0),
            ("other-pet-care", "Pet Care / Insurance", 100.0),
            ("other-childcare", "Childcare", 1_200.0),
            ("other-personal-care", "Personal Care (Haircuts, etc.)", 75.0),
            ("other-charity", "Charity Donations", 100.0),
        ]
        .into_iter()
        .map(|(id, label, cost)| OtherCost {
            id: id.to_string(),
            label: label.to_string(),
            cost,
        })
        .collect();

        Self {
            categories,
            other_costs,
        }
    }

    pub fn presets(&self, category: ExpenseCategory) -> &[ExpensePreset] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find(&self, category: ExpenseCategory, id: &str) -> Option<&ExpensePreset> {
        self.presets(category).iter().find(|preset| preset.id == id)
    }

    /// Adds a user-defined preset and returns its id.
    pub fn add_custom(
        &mut self,
        category: ExpenseCategory,
        label: &str,
        cost: f64,
    ) -> Result<String, BudgetError> {
        let label = label.trim();
        validate_preset(label, cost)?;

        let base_id = format!("{}-{}", category.slug(), slugify(label));
        let mut id = base_id.clone();
        let mut suffix = 2;
        while self.find(category, &id).is_some() {
            id = format!("{base_id}-{suffix}");
            suffix += 1;
        }

        self.categories
            .entry(category)
            .or_default()
            .push(ExpensePreset {
                id: id.clone(),
                label: label.to_string(),
                cost,
                custom: true,
            });
        Ok(id)
    }

    /// Imports presets into `category`, skipping ids that already exist.
    /// Returns how many were added; nothing is added if any preset is invalid.
    pub fn merge(
        &mut self,
        category: ExpenseCategory,
        presets: Vec<ExpensePreset>,
    ) -> Result<usize, BudgetError> {
        for preset in &presets {
            validate_preset(preset.label.trim(), preset.cost)?;
        }
        let existing = self.categories.entry(category).or_default();
        let mut added = 0;
        for preset in presets {
            if existing.iter().any(|p| p.id == preset.id) {
                continue;
            }
            existing.push(preset);
            added += 1;
        }
        Ok(added)
    }

    pub fn custom_presets(&self) -> impl Iterator<Item = (ExpenseCategory, &ExpensePreset)> {
        self.categories.iter().flat_map(|(category, presets)| {
            presets
                .iter()
                .filter(|preset| preset.custom)
                .map(move |preset| (*category, preset))
        })
    }

    /// Stock other-cost presets plus every lifestyle preset as a monthly
    /// amount, de-duplicated by label (first wins) and sorted by label.
    pub fn other_cost_suggestions(&self) -> Vec<OtherCost> {
        let lifestyle = ExpenseCategory::ALL.into_iter().flat_map(|category| {
            self.presets(category).iter().map(move |preset| {
                let label = if category.is_annual() {
                    format!("{} (Avg/Mo)", preset.label)
                } else {
                    preset.label.clone()
                };
                OtherCost {
                    id: preset.id.clone(),
                    label,
                    cost: category.monthly_cost(preset.cost),
                }
            })
        });

        let mut by_label: BTreeMap<String, OtherCost> = BTreeMap::new();
        for cost in self.other_costs.iter().cloned().chain(lifestyle) {
            by_label.entry(cost.label.clone()).or_insert(cost);
        }
        by_label.into_values().collect()
    }
}

fn validate_preset(label: &str, cost: f64) -> Result<(), BudgetError> {
    if label.is_empty() {
        return Err(BudgetError::EmptyLabel);
    }
    if !cost.is_finite() {
        return Err(BudgetError::InvalidCost {
            label: label.to_string(),
            cost,
        });
    }
    Ok(())
}

fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
