// ABOUTME: Nutrition computation core: calculator, rebalancer, meal planner and plan pipeline
// ABOUTME: Pure synchronous functions over value objects, re-exported under one path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Everything here is a stateless transform: the caller owns the form state
//! (biometrics, splits) and re-invokes these functions after every edit.
//! No function blocks, performs I/O or keeps data between calls.

/// BMR, TDEE, goal calories and macro grams
pub mod nutrition_calculator;

/// Proportional rebalancing of percentage buckets summing to 100
pub mod macro_rebalancer;

/// Even meal splits, per-meal distribution and diet presets
pub mod meal_planner;

/// Full calculation pipeline producing a `NutritionResult`
pub mod nutrition_plan;

pub use macro_rebalancer::rebalance_percentages;
pub use meal_planner::{apply_diet_preset, distribute_meals, DietPreset};
pub use nutrition_calculator::{
    apply_activity, apply_goal, compute_bmr, grams_from_bodyweight_protein,
    grams_from_percentages, GoalAdjustment,
};
pub use nutrition_plan::{calculate, CalculationOptions, NutritionRequest, ProteinMode};
