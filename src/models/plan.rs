// ABOUTME: Derived nutrition outputs handed to display and export collaborators
// ABOUTME: Defines MacroGrams, MealPlanEntry, NutritionResult, Rebalanced and invariant warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::split::MacroSplit;
use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily or per-meal macronutrient targets in grams
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroGrams {
    /// Protein (g)
    pub protein: u32,
    /// Carbohydrates (g)
    pub carbs: u32,
    /// Fat (g)
    pub fat: u32,
    /// Fiber (g), always derived from carbohydrates
    pub fiber: u32,
}

impl MacroGrams {
    /// Energy represented by the protein, carbs and fat grams (kcal)
    #[must_use]
    pub fn calories(&self) -> u32 {
        let fat_kcal = f64::from(self.fat) * KCAL_PER_GRAM_FAT;
        let kcal = f64::from(self.protein).mul_add(
            KCAL_PER_GRAM_PROTEIN,
            f64::from(self.carbs).mul_add(KCAL_PER_GRAM_CARBS, fat_kcal),
        );
        kcal.round() as u32
    }
}

/// One row of a meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlanEntry {
    /// Slot key (`meal1`..`mealN`)
    pub key: String,
    /// Display name
    pub name: String,
    /// Share of the day
    pub percentage: u32,
    /// Calories for this meal
    pub calories: u32,
    /// Macros for this meal
    pub macros: MacroGrams,
}

/// Non-fatal condition detected while computing or rebalancing
///
/// Returned next to the value it concerns and logged at `warn` level, so the
/// caller always learns when a result needed a corrective step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvariantViolationWarning {
    /// Every bucket besides the edited one was zero, so nothing could be
    /// scaled; the remainder was assigned by the corrective step instead
    ZeroSumRedistribution {
        /// Index of the edited bucket
        changed_index: usize,
        /// Percentage points that had to be assigned
        residual: u32,
    },
    /// The bodyweight protein target used more energy than the day allows;
    /// carbs and fat were clamped to zero
    ProteinExceedsCalories {
        /// Energy of the protein target
        protein_calories: u32,
        /// Daily calorie target
        daily_calories: u32,
    },
}

impl fmt::Display for InvariantViolationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSumRedistribution {
                changed_index,
                residual,
            } => write!(
                f,
                "all buckets except #{changed_index} were zero; assigned {residual}% by correction"
            ),
            Self::ProteinExceedsCalories {
                protein_calories,
                daily_calories,
            } => write!(
                f,
                "protein target ({protein_calories} kcal) exceeds daily calories ({daily_calories} kcal); carbs and fat clamped to 0"
            ),
        }
    }
}

/// A value produced together with any warnings raised while producing it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rebalanced<T> {
    /// The rebalanced value
    pub value: T,
    /// Warnings raised during rebalancing
    pub warnings: Vec<InvariantViolationWarning>,
}

/// Complete result of one calculation
///
/// Recomputed from scratch on every input change; it has no identity and the
/// planner never stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionResult {
    /// Basal metabolic rate (kcal/day, rounded)
    pub bmr: u32,
    /// Total daily energy expenditure (kcal/day, unrounded)
    pub tdee: f64,
    /// Daily calorie target after the goal adjustment
    pub daily_calories: u32,
    /// Daily macro targets
    pub macro_grams: MacroGrams,
    /// Calorie share of each macro
    pub macro_percentages: MacroSplit,
    /// Per-meal breakdown
    pub meal_plan: Vec<MealPlanEntry>,
    /// Non-fatal conditions detected during the calculation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<InvariantViolationWarning>,
}
