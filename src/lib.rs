// ABOUTME: Main library entry point for the Pierre nutrition planner
// ABOUTME: BMR/TDEE calculation, macro targets, percentage rebalancing, meal plans and report export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Pierre Nutrition Planner
//!
//! Nutrition computation for coaching back-offices: from a client's
//! biometrics, activity level and goal to daily calories, macro grams and a
//! per-meal breakdown, plus the proportional rebalancing that keeps macro and
//! meal percentage splits at exactly 100% while a coach edits them.
//!
//! ## Architecture
//!
//! - **Models**: immutable value objects (biometrics, splits, results)
//! - **Intelligence**: pure calculator, rebalancer, meal planner and pipeline
//! - **Config**: tunable goal intensities, bounds and policies from the environment
//! - **Formatters**: JSON / TOON / CSV export of results
//!
//! Nothing here performs I/O or holds state between calls; the caller owns the
//! form state and re-invokes the core after every change.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_nutrition_planner::config::NutritionConfig;
//! use pierre_nutrition_planner::errors::AppResult;
//! use pierre_nutrition_planner::intelligence::{calculate, CalculationOptions, NutritionRequest};
//! use pierre_nutrition_planner::models::{
//!     ActivityLevel, BiometricInput, BmrFormula, Goal, MacroSplit, Sex,
//! };
//!
//! fn main() -> AppResult<()> {
//!     let request = NutritionRequest {
//!         biometrics: BiometricInput {
//!             weight_kg: 70.0,
//!             height_cm: 175.0,
//!             age_years: 30,
//!             sex: Sex::Male,
//!             body_fat_percent: None,
//!         },
//!         activity_level: ActivityLevel::Moderate,
//!         goal: Goal::Maintain,
//!         formula: BmrFormula::Mifflin,
//!         macro_split: MacroSplit::default(),
//!         options: CalculationOptions::default(),
//!     };
//!
//!     let result = calculate(&request, NutritionConfig::global())?;
//!     println!("{} kcal/day", result.daily_calories);
//!     Ok(())
//! }
//! ```

/// Tunable nutrition configuration and its loading errors
pub mod config;

/// Fixed physiological constants and input limits
pub mod constants;

/// Unified error handling
pub mod errors;

/// JSON / TOON / CSV output formats and report export
pub mod formatters;

/// Nutrition computation core
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Value objects for inputs, splits and results
pub mod models;
