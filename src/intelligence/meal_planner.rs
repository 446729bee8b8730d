// ABOUTME: Meal split initialisation, per-meal distribution of daily targets and diet presets
// ABOUTME: Turns daily calories and macro grams into ordered meal rows; presets replace a MacroSplit wholesale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal and Diet Preset Derivation
//!
//! Meal rows are purely multiplicative: each aggregate value is scaled by the
//! slot's share and rounded independently, so per-meal values may not add up
//! to the daily totals to the gram.

use crate::constants::limits::PERCENT_TOTAL;
use crate::errors::{AppError, AppResult};
use crate::models::{MacroGrams, MacroSplit, MealPlanEntry, MealSlot, MealSplit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Default meal names by meal count
const MEAL_NAMES_2: [&str; 2] = ["Breakfast", "Dinner"];
const MEAL_NAMES_3: [&str; 3] = ["Breakfast", "Lunch", "Dinner"];
const MEAL_NAMES_4: [&str; 4] = ["Breakfast", "Lunch", "Snack", "Dinner"];
const MEAL_NAMES_5: [&str; 5] = [
    "Breakfast",
    "Morning Snack",
    "Lunch",
    "Afternoon Snack",
    "Dinner",
];
const MEAL_NAMES_6: [&str; 6] = [
    "Breakfast",
    "Morning Snack",
    "Lunch",
    "Afternoon Snack",
    "Dinner",
    "Evening Snack",
];

/// Display names for `count` meals, falling back to "Meal N"
fn default_meal_names(count: usize) -> Vec<String> {
    let names: &[&str] = match count {
        2 => &MEAL_NAMES_2,
        3 => &MEAL_NAMES_3,
        4 => &MEAL_NAMES_4,
        5 => &MEAL_NAMES_5,
        6 => &MEAL_NAMES_6,
        _ => &[],
    };
    (1..=count)
        .map(|n| {
            names
                .get(n - 1)
                .map_or_else(|| format!("Meal {n}"), |name| (*name).to_owned())
        })
        .collect()
}

impl MealSplit {
    /// Split the day evenly over `count` meals
    ///
    /// Every slot gets `100 / count`; the first `100 % count` slots get one
    /// extra point. Three meals are 34/33/33, six are 17/17/17/17/16/16.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a count outside 2..=6
    pub fn even(count: usize) -> AppResult<Self> {
        Self::check_count(count)?;
        let count_u32 = u32::try_from(count)
            .map_err(|_| AppError::internal("Meal count does not fit in u32"))?;
        let base = PERCENT_TOTAL / count_u32;
        let extra = (PERCENT_TOTAL % count_u32) as usize;

        let percents: Vec<u32> = (0..count)
            .map(|index| if index < extra { base + 1 } else { base })
            .collect();
        Ok(Self::from_slots_unchecked(build_slots(&percents)))
    }

    /// Build a split from percentages in slot order, using default names
    ///
    /// # Errors
    ///
    /// Returns an error for a count outside 2..=6 or percentages that do not
    /// sum to 100
    pub fn from_percents(percents: &[u32]) -> AppResult<Self> {
        Self::from_slots(build_slots(percents))
    }

    /// Re-initialise for a new meal count
    ///
    /// The previous shares are discarded rather than rescaled: a changed meal
    /// count always starts again from the even split.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a count outside 2..=6
    pub fn resize(&self, count: usize) -> AppResult<Self> {
        debug!(from = self.len(), to = count, "Resizing meal split");
        Self::even(count)
    }
}

fn build_slots(percents: &[u32]) -> Vec<MealSlot> {
    default_meal_names(percents.len())
        .into_iter()
        .zip(percents)
        .enumerate()
        .map(|(index, (name, percent))| MealSlot {
            key: format!("meal{}", index + 1),
            name,
            percent: *percent,
        })
        .collect()
}

/// Scale daily targets into one row per meal slot
///
/// Calories and every macro are multiplied by the slot's share and rounded
/// half away from zero.
#[must_use]
pub fn distribute_meals(
    daily_calories: u32,
    macros: &MacroGrams,
    split: &MealSplit,
) -> Vec<MealPlanEntry> {
    split
        .slots()
        .iter()
        .map(|slot| {
            let share = |value: u32| -> u32 {
                (f64::from(value) * f64::from(slot.percent) / 100.0).round() as u32
            };
            MealPlanEntry {
                key: slot.key.clone(),
                name: slot.name.clone(),
                percentage: slot.percent,
                calories: share(daily_calories),
                macros: MacroGrams {
                    protein: share(macros.protein),
                    carbs: share(macros.carbs),
                    fat: share(macros.fat),
                    fiber: share(macros.fiber),
                },
            }
        })
        .collect()
}

/// Named macro split that replaces the current split wholesale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietPreset {
    /// Even everyday split
    #[default]
    Balanced,
    /// Protein-forward split for muscle gain or retention
    HighProtein,
    /// Reduced carbohydrate
    LowCarb,
    /// Reduced fat, carbohydrate-forward
    LowFat,
    /// Very low carbohydrate, high fat
    Ketogenic,
    /// Olive oil and whole-grain pattern
    Mediterranean,
}

impl DietPreset {
    /// Every preset in display order
    pub const ALL: [Self; 6] = [
        Self::Balanced,
        Self::HighProtein,
        Self::LowCarb,
        Self::LowFat,
        Self::Ketogenic,
        Self::Mediterranean,
    ];

    /// Macro split for this preset (always sums to 100)
    #[must_use]
    pub const fn split(&self) -> MacroSplit {
        let (protein, carbs, fat) = match self {
            Self::Balanced => (30, 40, 30),
            Self::HighProtein => (40, 35, 25),
            Self::LowCarb => (40, 20, 40),
            Self::LowFat => (25, 55, 20),
            Self::Ketogenic => (20, 5, 75),
            Self::Mediterranean => (20, 50, 30),
        };
        MacroSplit::from_array([protein, carbs, fat])
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::HighProtein => "High Protein",
            Self::LowCarb => "Low Carb",
            Self::LowFat => "Low Fat",
            Self::Ketogenic => "Ketogenic",
            Self::Mediterranean => "Mediterranean",
        }
    }
}

impl fmt::Display for DietPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DietPreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match normalized.as_str() {
            "balanced" => Ok(Self::Balanced),
            "highprotein" => Ok(Self::HighProtein),
            "lowcarb" => Ok(Self::LowCarb),
            "lowfat" => Ok(Self::LowFat),
            "ketogenic" | "keto" => Ok(Self::Ketogenic),
            "mediterranean" => Ok(Self::Mediterranean),
            _ => Err(AppError::invalid_input(format!(
                "Unknown diet preset: {}",
                s.trim()
            ))
            .with_details(serde_json::json!({
                "available": Self::ALL.iter().map(Self::name).collect::<Vec<_>>(),
            }))),
        }
    }
}

/// Look up a preset by name and return its split
///
/// The split replaces the caller's current one as is; presets never pass
/// through the rebalancer.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown preset name
pub fn apply_diet_preset(name: &str) -> AppResult<MacroSplit> {
    let preset: DietPreset = name.parse()?;
    debug!(preset = %preset, split = %preset.split(), "Applying diet preset");
    Ok(preset.split())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_cover_every_count() {
        for count in 2..=6 {
            let names = default_meal_names(count);
            assert_eq!(names.len(), count);
            assert_eq!(names[0], "Breakfast");
        }
    }

    #[test]
    fn test_presets_sum_to_one_hundred() {
        for preset in DietPreset::ALL {
            assert_eq!(preset.split().total(), 100, "{preset}");
        }
    }
}
