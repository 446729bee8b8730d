// ABOUTME: Energy and macronutrient calculations using published BMR equations
// ABOUTME: BMR (Mifflin, Harris, Katch), TDEE, goal calorie targets and macro gram breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Pure functions from biometrics and goals to daily calories and macro
//! grams. Nothing here holds state or performs I/O; every function can be
//! called on each keystroke of a form.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology (lean-mass BMR).

use crate::config::{GoalConfig, ProteinOverflowPolicy};
use crate::constants::{bmr, energy, legacy_goal, limits};
use crate::errors::{AppError, AppResult};
use crate::models::{
    ActivityLevel, BiometricInput, BmrFormula, Goal, InvariantViolationWarning, MacroGrams,
    MacroSplit, Sex,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the goal turns TDEE into a calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GoalAdjustment {
    /// Fixed factors: lose x0.8, gain x1.15
    #[default]
    Legacy,
    /// Slider-driven factors: lose x(1 - i/100), gain x(1 + i/100)
    Advanced {
        /// Deficit or surplus as a percentage of TDEE
        intensity_percent: u32,
    },
}

/// Calculate Basal Metabolic Rate, rounded to the nearest kcal
///
/// - Mifflin-St Jeor: `10w + 6.25h - 5a + 5` (male) / `- 161` (female)
/// - Harris-Benedict: `13.397w + 4.799h - 5.677a + 88.362` (male),
///   `9.247w + 3.098h - 4.330a + 447.593` (female)
/// - Katch-McArdle: `370 + 21.6 * lean_mass_kg`
///
/// # Errors
///
/// Returns an error if the biometrics are out of range, if Katch-McArdle is
/// requested without `body_fat_percent`, or if the equation yields a
/// non-positive rate
pub fn compute_bmr(input: &BiometricInput, formula: BmrFormula) -> AppResult<u32> {
    input.validate()?;
    if formula.requires_body_fat() && input.body_fat_percent.is_none() {
        return Err(AppError::missing_field("body_fat_percent"));
    }

    let weight = input.weight_kg;
    let height = input.height_cm;
    let age = f64::from(input.age_years);

    let raw = match formula {
        BmrFormula::Mifflin => mifflin_st_jeor(weight, height, age, input.sex),
        BmrFormula::Harris => harris_benedict(weight, height, age, input.sex),
        BmrFormula::Katch => {
            let lean_mass = input
                .lean_mass_kg()
                .ok_or_else(|| AppError::missing_field("body_fat_percent"))?;
            bmr::katch::LEAN_MASS.mul_add(lean_mass, bmr::katch::BASE)
        }
    };

    let rounded = raw.round();
    if rounded <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "{formula} produced a non-positive BMR ({raw:.1} kcal) for these biometrics"
        )));
    }
    Ok(rounded as u32)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity multiplier (1.2 / 1.375 / 1.55 / 1.725 / 1.9).
/// The result is left unrounded.
#[must_use]
pub fn apply_activity(bmr: u32, level: ActivityLevel) -> f64 {
    f64::from(bmr) * level.multiplier()
}

/// Turn TDEE into the daily calorie target for a goal
///
/// The legacy and advanced paths are separate: legacy always
/// uses 0.8 / 1.15, advanced uses the caller's slider intensity.
///
/// # Errors
///
/// Returns an error if TDEE is not positive or an advanced intensity falls
/// outside the configured slider range
pub fn apply_goal(
    tdee: f64,
    goal: Goal,
    adjustment: GoalAdjustment,
    config: &GoalConfig,
) -> AppResult<u32> {
    if !(tdee > 0.0 && tdee.is_finite()) {
        return Err(AppError::invalid_input("TDEE must be positive"));
    }

    let factor = match (adjustment, goal) {
        (_, Goal::Maintain) => 1.0,
        (GoalAdjustment::Legacy, Goal::Lose) => legacy_goal::LOSE_FACTOR,
        (GoalAdjustment::Legacy, Goal::Gain) => legacy_goal::GAIN_FACTOR,
        (GoalAdjustment::Advanced { intensity_percent }, Goal::Lose) => {
            config.check_intensity(intensity_percent)?;
            1.0 - f64::from(intensity_percent) / 100.0
        }
        (GoalAdjustment::Advanced { intensity_percent }, Goal::Gain) => {
            config.check_intensity(intensity_percent)?;
            1.0 + f64::from(intensity_percent) / 100.0
        }
    };

    Ok((tdee * factor).round() as u32)
}

/// Split daily calories into grams using a percentage split
///
/// Protein and carbs at 4 kcal/g, fat at 9 kcal/g; fiber is 15% of the
/// (rounded) carbohydrate grams.
#[must_use]
pub fn grams_from_percentages(calories: u32, split: &MacroSplit) -> MacroGrams {
    let calories = f64::from(calories);
    let protein_kcal = calories * f64::from(split.protein) / 100.0;
    let carbs_kcal = calories * f64::from(split.carbs) / 100.0;
    let fat_kcal = calories * f64::from(split.fat) / 100.0;

    let carbs = round_grams(carbs_kcal / energy::KCAL_PER_GRAM_CARBS);
    MacroGrams {
        protein: round_grams(protein_kcal / energy::KCAL_PER_GRAM_PROTEIN),
        carbs,
        fat: round_grams(fat_kcal / energy::KCAL_PER_GRAM_FAT),
        fiber: round_grams(f64::from(carbs) * energy::FIBER_PER_GRAM_CARBS),
    }
}

/// Split daily calories with protein fixed by bodyweight
///
/// Protein grams are `weight_kg * g_per_kg`; the remaining energy is divided
/// between carbs and fat in the ratio of the original split's carbs to fat.
/// Fiber is 15% of the unrounded carbohydrate grams.
///
/// When protein alone exceeds `calories`, [`ProteinOverflowPolicy::Clamp`]
/// zeroes carbs and fat and returns a warning, while
/// [`ProteinOverflowPolicy::Reject`] fails.
///
/// # Errors
///
/// Returns an error if `g_per_kg` is outside (0, 5], the split has no carbs
/// or fat to share the remainder, or the overflow policy rejects the target
pub fn grams_from_bodyweight_protein(
    calories: u32,
    weight_kg: f64,
    g_per_kg: f64,
    split: &MacroSplit,
    policy: ProteinOverflowPolicy,
) -> AppResult<(MacroGrams, Option<InvariantViolationWarning>)> {
    if !(g_per_kg > 0.0 && g_per_kg <= limits::MAX_PROTEIN_G_PER_KG) {
        return Err(AppError::out_of_range(
            "protein_g_per_kg",
            g_per_kg,
            0.0,
            limits::MAX_PROTEIN_G_PER_KG,
        ));
    }
    let carbs_fat_total = split.carbs + split.fat;
    if carbs_fat_total == 0 {
        return Err(AppError::invalid_input(
            "Bodyweight protein mode needs a non-zero carbs or fat percentage",
        ));
    }

    let protein = round_grams(weight_kg * g_per_kg);
    let protein_kcal = f64::from(protein) * energy::KCAL_PER_GRAM_PROTEIN;
    let mut remaining_kcal = f64::from(calories) - protein_kcal;
    let mut warning = None;

    if remaining_kcal < 0.0 {
        let overflow = InvariantViolationWarning::ProteinExceedsCalories {
            protein_calories: protein_kcal as u32,
            daily_calories: calories,
        };
        match policy {
            ProteinOverflowPolicy::Reject => {
                return Err(AppError::invalid_input(overflow.to_string()).with_details(
                    serde_json::json!({
                        "protein_calories": protein_kcal,
                        "daily_calories": calories,
                    }),
                ));
            }
            ProteinOverflowPolicy::Clamp => {
                warn!(
                    protein_calories = protein_kcal,
                    daily_calories = calories,
                    "Protein target exceeds daily calories, clamping carbs and fat to zero"
                );
                remaining_kcal = 0.0;
                warning = Some(overflow);
            }
        }
    }

    let carbs_ratio = f64::from(split.carbs) / f64::from(carbs_fat_total);
    let carbs_kcal = remaining_kcal * carbs_ratio;
    let fat_kcal = remaining_kcal * (1.0 - carbs_ratio);
    let carbs_exact = carbs_kcal / energy::KCAL_PER_GRAM_CARBS;

    let grams = MacroGrams {
        protein,
        carbs: round_grams(carbs_exact),
        fat: round_grams(fat_kcal / energy::KCAL_PER_GRAM_FAT),
        fiber: round_grams(carbs_exact * energy::FIBER_PER_GRAM_CARBS),
    };
    Ok((grams, warning))
}

/// Mifflin-St Jeor (1990)
fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: f64, sex: Sex) -> f64 {
    let weight_component = bmr::mifflin::WEIGHT * weight_kg;
    let height_component = bmr::mifflin::HEIGHT * height_cm;
    let age_component = bmr::mifflin::AGE * age;
    let sex_constant = match sex {
        Sex::Male => bmr::mifflin::MALE_OFFSET,
        Sex::Female => bmr::mifflin::FEMALE_OFFSET,
    };
    weight_component + height_component - age_component + sex_constant
}

/// Revised Harris-Benedict (Roza & Shizgal 1984)
fn harris_benedict(weight_kg: f64, height_cm: f64, age: f64, sex: Sex) -> f64 {
    let (weight_coef, height_coef, age_coef, constant) = match sex {
        Sex::Male => (
            bmr::harris::MALE_WEIGHT,
            bmr::harris::MALE_HEIGHT,
            bmr::harris::MALE_AGE,
            bmr::harris::MALE_OFFSET,
        ),
        Sex::Female => (
            bmr::harris::FEMALE_WEIGHT,
            bmr::harris::FEMALE_HEIGHT,
            bmr::harris::FEMALE_AGE,
            bmr::harris::FEMALE_OFFSET,
        ),
    };
    let weight_component = weight_coef * weight_kg;
    let height_component = height_coef * height_cm;
    let age_component = age_coef * age;
    weight_component + height_component - age_component + constant
}

/// Round a non-negative gram amount to the nearest whole gram
fn round_grams(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
