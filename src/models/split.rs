// ABOUTME: Percentage split value objects that must always total 100
// ABOUTME: Defines Macro, MacroSplit, PercentBounds, MacroBounds, MealSlot and MealSplit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::{MAX_MEAL_COUNT, MIN_MEAL_COUNT, PERCENT_TOTAL};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macronutrient bucket of a [`MacroSplit`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
    /// Protein (4 kcal/g)
    Protein,
    /// Carbohydrates (4 kcal/g)
    Carbs,
    /// Fat (9 kcal/g)
    Fat,
}

impl Macro {
    /// Buckets in split order
    pub const ALL: [Self; 3] = [Self::Protein, Self::Carbs, Self::Fat];

    /// Position of this macro inside a split
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Protein => 0,
            Self::Carbs => 1,
            Self::Fat => 2,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Macro {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "protein" => Ok(Self::Protein),
            "carbs" | "carbohydrates" => Ok(Self::Carbs),
            "fat" => Ok(Self::Fat),
            other => Err(AppError::invalid_input(format!("Unknown macro: {other}"))),
        }
    }
}

/// Percentage of daily calories per macronutrient
///
/// Always sums to 100. Construct with [`MacroSplit::new`]; edits go through
/// the rebalancer and presets replace the whole split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    /// Protein percentage
    pub protein: u32,
    /// Carbohydrate percentage
    pub carbs: u32,
    /// Fat percentage
    pub fat: u32,
}

impl MacroSplit {
    /// Build a split, rejecting triples that do not sum to 100
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `protein + carbs + fat != 100`
    pub fn new(protein: u32, carbs: u32, fat: u32) -> AppResult<Self> {
        let split = Self::from_array([protein, carbs, fat]);
        split.validate()?;
        Ok(split)
    }

    /// Check that the buckets total 100
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `protein + carbs + fat != 100`
    pub fn validate(&self) -> AppResult<()> {
        if self.total() != PERCENT_TOTAL {
            return Err(AppError::invalid_input(format!(
                "Macro percentages must sum to 100, got {}",
                self.total()
            ))
            .with_details(serde_json::json!({
                "protein": self.protein,
                "carbs": self.carbs,
                "fat": self.fat,
            })));
        }
        Ok(())
    }

    pub(crate) const fn from_array(values: [u32; 3]) -> Self {
        Self {
            protein: values[0],
            carbs: values[1],
            fat: values[2],
        }
    }

    /// Values in [`Macro::ALL`] order
    #[must_use]
    pub const fn as_array(&self) -> [u32; 3] {
        [self.protein, self.carbs, self.fat]
    }

    /// Percentage of one macro
    #[must_use]
    pub const fn get(&self, nutrient: Macro) -> u32 {
        match nutrient {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    /// Sum of all buckets
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.protein.saturating_add(self.carbs).saturating_add(self.fat)
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self {
            protein: 30,
            carbs: 40,
            fat: 30,
        }
    }
}

impl fmt::Display for MacroSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "protein {}% / carbs {}% / fat {}%",
            self.protein, self.carbs, self.fat
        )
    }
}

/// Inclusive percentage range a single bucket may take
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PercentBounds {
    /// Lowest allowed value
    pub min: u32,
    /// Highest allowed value
    pub max: u32,
}

impl PercentBounds {
    /// Build bounds, rejecting `min > max` or `max > 100`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty or over-100 range
    pub fn new(min: u32, max: u32) -> AppResult<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Full 0-100 range
    #[must_use]
    pub const fn full() -> Self {
        Self {
            min: 0,
            max: PERCENT_TOTAL,
        }
    }

    /// Check `min <= max <= 100`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty or over-100 range
    pub fn validate(&self) -> AppResult<()> {
        if self.min > self.max || self.max > PERCENT_TOTAL {
            return Err(AppError::invalid_input(format!(
                "Invalid percentage bounds {}..={}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Clamp a value into the range
    #[must_use]
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// Per-macro bounds used when a single macro is edited
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroBounds {
    /// Protein range
    pub protein: PercentBounds,
    /// Carbohydrate range
    pub carbs: PercentBounds,
    /// Fat range
    pub fat: PercentBounds,
}

impl MacroBounds {
    /// Bounds for one macro
    #[must_use]
    pub const fn for_macro(&self, nutrient: Macro) -> PercentBounds {
        match nutrient {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }
}

impl Default for MacroBounds {
    fn default() -> Self {
        Self {
            protein: PercentBounds { min: 10, max: 60 },
            carbs: PercentBounds { min: 5, max: 70 },
            fat: PercentBounds { min: 15, max: 75 },
        }
    }
}

/// One meal slot of a [`MealSplit`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSlot {
    /// Stable slot key (`meal1`..`mealN`)
    pub key: String,
    /// Display name
    pub name: String,
    /// Share of daily calories and macros
    pub percent: u32,
}

/// Ordered distribution of the day's intake over 2-6 meals, summing to 100
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSplit {
    slots: Vec<MealSlot>,
}

impl MealSplit {
    /// Build a split from explicit slots
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for fewer than 2 or more than 6 slots or a
    /// slot above 100, and `InvalidInput` when the percentages do not sum to 100
    pub fn from_slots(slots: Vec<MealSlot>) -> AppResult<Self> {
        Self::check_count(slots.len())?;
        if let Some(slot) = slots.iter().find(|slot| slot.percent > PERCENT_TOTAL) {
            return Err(AppError::out_of_range(
                "meal_percent",
                slot.percent,
                0.0,
                f64::from(PERCENT_TOTAL),
            ));
        }
        let total = Self::sum_percents(&slots);
        if total != PERCENT_TOTAL {
            return Err(AppError::invalid_input(format!(
                "Meal percentages must sum to 100, got {total}"
            )));
        }
        Ok(Self { slots })
    }

    pub(crate) fn check_count(count: usize) -> AppResult<()> {
        if !(MIN_MEAL_COUNT..=MAX_MEAL_COUNT).contains(&count) {
            return Err(AppError::out_of_range(
                "meal_count",
                count,
                MIN_MEAL_COUNT as f64,
                MAX_MEAL_COUNT as f64,
            ));
        }
        Ok(())
    }

    pub(crate) const fn from_slots_unchecked(slots: Vec<MealSlot>) -> Self {
        Self { slots }
    }

    /// Slots in order
    #[must_use]
    pub fn slots(&self) -> &[MealSlot] {
        &self.slots
    }

    /// Number of meals
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a validated split
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Percentages in slot order
    #[must_use]
    pub fn percents(&self) -> Vec<u32> {
        self.slots.iter().map(|slot| slot.percent).collect()
    }

    /// Sum of all slot percentages
    #[must_use]
    pub fn total(&self) -> u32 {
        Self::sum_percents(&self.slots)
    }

    fn sum_percents(slots: &[MealSlot]) -> u32 {
        slots
            .iter()
            .fold(0_u32, |sum, slot| sum.saturating_add(slot.percent))
    }

    /// Index of the slot with the given key
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.key == key)
    }
}
