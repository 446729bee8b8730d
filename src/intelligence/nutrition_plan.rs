// ABOUTME: End-to-end nutrition plan calculation from biometrics to per-meal targets
// ABOUTME: Chains BMR, TDEE, goal calories, macro grams and meal distribution into a NutritionResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::macro_rebalancer::normalize_to_total;
use super::meal_planner::distribute_meals;
use super::nutrition_calculator::{
    apply_activity, apply_goal, compute_bmr, grams_from_bodyweight_protein,
    grams_from_percentages, GoalAdjustment,
};
use crate::config::NutritionConfig;
use crate::constants::energy;
use crate::errors::AppResult;
use crate::models::{
    ActivityLevel, BiometricInput, BmrFormula, Goal, MacroGrams, MacroSplit, MealSplit,
    NutritionResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

/// Where the protein target comes from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProteinMode {
    /// Protein grams follow the macro split percentage
    #[default]
    FromSplit,
    /// Protein grams are `weight_kg * grams_per_kg`; carbs and fat share the rest
    Bodyweight {
        /// Protein factor in g/kg of body weight
        grams_per_kg: f64,
    },
}

/// Optional knobs of a calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CalculationOptions {
    /// Legacy or slider-driven goal factors
    #[serde(default)]
    pub goal_adjustment: GoalAdjustment,
    /// Split-based or bodyweight-based protein
    #[serde(default)]
    pub protein_mode: ProteinMode,
    /// Meal distribution; the configured default meal count is used when absent
    #[serde(default)]
    pub meal_split: Option<MealSplit>,
}

/// Everything needed for one calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionRequest {
    /// Who the plan is for
    pub biometrics: BiometricInput,
    /// Activity multiplier
    pub activity_level: ActivityLevel,
    /// Lose, maintain or gain
    pub goal: Goal,
    /// BMR equation
    #[serde(default)]
    pub formula: BmrFormula,
    /// Requested calorie split
    #[serde(default)]
    pub macro_split: MacroSplit,
    /// Optional knobs
    #[serde(default)]
    pub options: CalculationOptions,
}

/// Produce a complete nutrition plan
///
/// Pipeline: validate biometrics, BMR, TDEE, goal calories, macro grams,
/// meal rows. Every call recomputes from scratch; nothing is cached.
///
/// In bodyweight protein mode `macro_percentages` holds the effective calorie
/// share of each computed macro (normalised to 100); otherwise it echoes the
/// requested split.
///
/// # Errors
///
/// Returns an error for invalid biometrics, a macro or meal split that does
/// not total 100, Katch-McArdle without body fat, an out-of-range goal
/// intensity or protein factor, or a protein target the configured overflow
/// policy rejects
pub fn calculate(
    request: &NutritionRequest,
    config: &NutritionConfig,
) -> AppResult<NutritionResult> {
    let span = info_span!(
        "nutrition_calculation",
        formula = %request.formula,
        goal = ?request.goal,
        activity = ?request.activity_level,
    );
    let _guard = span.enter();

    // Requests may arrive deserialized, bypassing the split constructors
    request.macro_split.validate()?;

    let bmr = compute_bmr(&request.biometrics, request.formula)?;
    debug!(bmr, "Computed BMR");

    let tdee = apply_activity(bmr, request.activity_level);
    debug!(tdee, "Applied activity multiplier");

    let daily_calories = apply_goal(
        tdee,
        request.goal,
        request.options.goal_adjustment,
        &config.goal,
    )?;
    debug!(daily_calories, adjustment = ?request.options.goal_adjustment, "Applied goal");

    let mut warnings = Vec::new();
    let (macro_grams, macro_percentages) = match request.options.protein_mode {
        ProteinMode::FromSplit => (
            grams_from_percentages(daily_calories, &request.macro_split),
            request.macro_split,
        ),
        ProteinMode::Bodyweight { grams_per_kg } => {
            let (grams, warning) = grams_from_bodyweight_protein(
                daily_calories,
                request.biometrics.weight_kg,
                grams_per_kg,
                &request.macro_split,
                config.protein_overflow,
            )?;
            warnings.extend(warning);
            (grams, effective_split(&grams, request.macro_split))
        }
    };
    debug!(?macro_grams, split = %macro_percentages, "Derived macro targets");

    let meal_split = match &request.options.meal_split {
        Some(split) => MealSplit::from_slots(split.slots().to_vec())?,
        None => MealSplit::even(config.default_meal_count)?,
    };
    let meal_plan = distribute_meals(daily_calories, &macro_grams, &meal_split);
    debug!(meals = meal_plan.len(), "Distributed meals");

    info!(
        bmr,
        daily_calories,
        protein_g = macro_grams.protein,
        carbs_g = macro_grams.carbs,
        fat_g = macro_grams.fat,
        warnings = warnings.len(),
        "Nutrition plan calculated"
    );

    Ok(NutritionResult {
        bmr,
        tdee,
        daily_calories,
        macro_grams,
        macro_percentages,
        meal_plan,
        warnings,
    })
}

/// Calorie share of each macro in `grams`, falling back to `requested` when
/// the grams carry no energy
fn effective_split(grams: &MacroGrams, requested: MacroSplit) -> MacroSplit {
    let kcal = [
        f64::from(grams.protein) * energy::KCAL_PER_GRAM_PROTEIN,
        f64::from(grams.carbs) * energy::KCAL_PER_GRAM_CARBS,
        f64::from(grams.fat) * energy::KCAL_PER_GRAM_FAT,
    ];
    let total: f64 = kcal.iter().sum();
    if total <= 0.0 {
        return requested;
    }

    let mut shares = kcal.map(|value| (value / total * 100.0).round() as u32);
    normalize_to_total(&mut shares);
    MacroSplit::from_array(shares)
}
