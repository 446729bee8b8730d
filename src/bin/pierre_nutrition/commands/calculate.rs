// ABOUTME: Plan calculation command for pierre-nutrition
// ABOUTME: Builds a NutritionRequest from flags, runs the pipeline and exports the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Args;
use pierre_nutrition_planner::{
    config::NutritionConfig,
    errors::{AppError, AppResult},
    formatters::{export_report, ClientMetadata, NutritionReport, OutputFormat},
    intelligence::{
        calculate, CalculationOptions, DietPreset, GoalAdjustment, NutritionRequest, ProteinMode,
    },
    models::{ActivityLevel, BiometricInput, BmrFormula, Goal, MacroSplit, MealSplit, Sex},
};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

/// Flags of `pierre-nutrition calculate`
#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Height in centimetres
    #[arg(long)]
    height_cm: f64,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Biological sex (male, female)
    #[arg(long)]
    sex: Sex,

    /// Activity level (sedentary, light, moderate, active, very_active)
    #[arg(long)]
    activity: ActivityLevel,

    /// Goal (lose, maintain, gain)
    #[arg(long)]
    goal: Goal,

    /// BMR equation (mifflin, harris, katch)
    #[arg(long, default_value = "mifflin")]
    formula: BmrFormula,

    /// Body fat percentage (required for katch)
    #[arg(long)]
    body_fat: Option<f64>,

    /// Protein percentage of calories
    #[arg(long, requires_all = ["carbs", "fat"], conflicts_with = "preset")]
    protein: Option<u32>,

    /// Carbohydrate percentage of calories
    #[arg(long, requires_all = ["protein", "fat"])]
    carbs: Option<u32>,

    /// Fat percentage of calories
    #[arg(long, requires_all = ["protein", "carbs"])]
    fat: Option<u32>,

    /// Diet preset replacing the split (balanced, high-protein, low-carb, low-fat, keto, mediterranean)
    #[arg(long)]
    preset: Option<DietPreset>,

    /// Goal intensity in percent; switches from the fixed 0.8 / 1.15 factors to the slider mode
    #[arg(long)]
    intensity: Option<u32>,

    /// Fix protein at this many grams per kg of body weight
    #[arg(long, conflicts_with = "bodyweight_protein")]
    protein_g_per_kg: Option<f64>,

    /// Fix protein by body weight using the configured default factor
    #[arg(long)]
    bodyweight_protein: bool,

    /// Number of meals, split evenly
    #[arg(long, conflicts_with = "meal_split")]
    meals: Option<usize>,

    /// Explicit meal percentages, comma separated (e.g. 30,40,30)
    #[arg(long, value_delimiter = ',')]
    meal_split: Option<Vec<u32>>,

    /// Output format
    #[arg(long, default_value = "json", value_parser = ["json", "toon", "csv"])]
    format: String,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Client identifier recorded in the report
    #[arg(long)]
    client_id: Option<Uuid>,

    /// Client name recorded in the report
    #[arg(long)]
    client_name: Option<String>,
}

impl CalculateArgs {
    fn macro_split(&self) -> AppResult<MacroSplit> {
        if let Some(preset) = self.preset {
            return Ok(preset.split());
        }
        match (self.protein, self.carbs, self.fat) {
            (Some(protein), Some(carbs), Some(fat)) => MacroSplit::new(protein, carbs, fat),
            _ => Ok(MacroSplit::default()),
        }
    }

    fn options(&self, config: &NutritionConfig) -> AppResult<CalculationOptions> {
        let goal_adjustment = self
            .intensity
            .map_or(GoalAdjustment::Legacy, |intensity_percent| {
                GoalAdjustment::Advanced { intensity_percent }
            });

        let protein_mode = match (self.protein_g_per_kg, self.bodyweight_protein) {
            (Some(grams_per_kg), _) => ProteinMode::Bodyweight { grams_per_kg },
            (None, true) => ProteinMode::Bodyweight {
                grams_per_kg: config.default_protein_g_per_kg,
            },
            (None, false) => ProteinMode::FromSplit,
        };

        let meal_split = match (&self.meal_split, self.meals) {
            (Some(percents), _) => Some(MealSplit::from_percents(percents)?),
            (None, Some(count)) => Some(MealSplit::even(count)?),
            (None, None) => None,
        };

        Ok(CalculationOptions {
            goal_adjustment,
            protein_mode,
            meal_split,
        })
    }

    fn request(&self, config: &NutritionConfig) -> AppResult<NutritionRequest> {
        Ok(NutritionRequest {
            biometrics: BiometricInput {
                weight_kg: self.weight_kg,
                height_cm: self.height_cm,
                age_years: self.age,
                sex: self.sex,
                body_fat_percent: self.body_fat,
            },
            activity_level: self.activity,
            goal: self.goal,
            formula: self.formula,
            macro_split: self.macro_split()?,
            options: self.options(config)?,
        })
    }
}

/// Calculate a plan and print or write the exported report
pub fn run(args: &CalculateArgs, config: &NutritionConfig) -> AppResult<()> {
    let request = args.request(config)?;
    let result = calculate(&request, config)?;

    let client = ClientMetadata {
        client_id: args.client_id,
        name: args.client_name.clone(),
    };
    let report = NutritionReport::new(client, result);
    let output = export_report(&report, OutputFormat::from_str_param(&args.format))?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output.data).map_err(|e| {
                AppError::serialization(format!("Failed to write {}", path.display()))
                    .with_source(e)
            })?;
            info!(path = %path.display(), format = %output.format, "Report written");
        }
        None => println!("{}", output.data),
    }

    Ok(())
}
