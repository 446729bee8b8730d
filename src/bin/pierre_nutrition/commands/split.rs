// ABOUTME: Split editing commands for pierre-nutrition
// ABOUTME: Rebalances macro splits, lists diet presets and shows default meal splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Args;
use pierre_nutrition_planner::{
    config::NutritionConfig,
    errors::AppResult,
    intelligence::DietPreset,
    models::{Macro, MacroSplit, MealSplit},
};
use tracing::info;

use crate::helpers::display::{display_macro_split, display_meal_split, display_warnings};

/// Flags of `pierre-nutrition rebalance`
#[derive(Args, Debug)]
pub struct RebalanceArgs {
    /// Current protein percentage
    #[arg(long)]
    protein: u32,

    /// Current carbohydrate percentage
    #[arg(long)]
    carbs: u32,

    /// Current fat percentage
    #[arg(long)]
    fat: u32,

    /// Edit to apply, as <macro>=<percent> (e.g. protein=50)
    #[arg(long, value_parser = parse_assignment)]
    set: (String, u32),
}

/// Flags of `pierre-nutrition meals`
#[derive(Args, Debug)]
pub struct MealsArgs {
    /// Number of meals (2-6); defaults to the configured meal count
    #[arg(long)]
    count: Option<usize>,

    /// Edit to apply after the even split, as <slot>=<percent> (e.g. meal1=40)
    #[arg(long, value_parser = parse_assignment)]
    set: Option<(String, u32)>,
}

fn parse_assignment(raw: &str) -> Result<(String, u32), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <name>=<percent>, got {raw}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid percentage in {raw}: {e}"))?;
    Ok((key.trim().to_owned(), value))
}

/// Rebalance a macro split after one edit
pub fn rebalance(args: &RebalanceArgs, config: &NutritionConfig) -> AppResult<()> {
    let current = MacroSplit::new(args.protein, args.carbs, args.fat)?;
    let (name, value) = &args.set;
    let nutrient: Macro = name.parse()?;

    let rebalanced = current.rebalance(nutrient, *value, &config.macro_bounds)?;
    info!(from = %current, to = %rebalanced.value, "Rebalanced macro split");

    display_macro_split(&rebalanced.value);
    display_warnings(&rebalanced.warnings);
    Ok(())
}

/// Print every diet preset with its split
pub fn presets() {
    println!("{:<16} {:>8} {:>6} {:>5}", "Preset", "Protein", "Carbs", "Fat");
    println!("{}", "=".repeat(38));
    for preset in DietPreset::ALL {
        let split = preset.split();
        println!(
            "{:<16} {:>7}% {:>5}% {:>4}%",
            preset.name(),
            split.protein,
            split.carbs,
            split.fat
        );
    }
}

/// Print the even meal split for a count, optionally after one edit
pub fn meals(args: &MealsArgs, config: &NutritionConfig) -> AppResult<()> {
    let split = MealSplit::even(args.count.unwrap_or(config.default_meal_count))?;

    let Some((key, value)) = &args.set else {
        display_meal_split(&split);
        return Ok(());
    };

    let rebalanced = split.rebalance_key(key, *value, config.meal_bounds)?;
    display_meal_split(&rebalanced.value);
    display_warnings(&rebalanced.warnings);
    Ok(())
}
