// ABOUTME: Value objects for nutrition planning inputs, splits and results
// ABOUTME: Re-exports biometric, split and plan types under one path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are plain immutable values. The caller (a form, the CLI, an
//! API layer) owns any mutable state and hands copies to the pure functions
//! in [`crate::intelligence`] whenever an input changes.
//!
//! - `biometrics`: who the plan is for and what they want
//! - `split`: percentage splits that always total 100
//! - `plan`: derived grams, meal rows and the final result

mod biometrics;
mod plan;
mod split;

pub use biometrics::{ActivityLevel, BiometricInput, BmrFormula, Goal, Sex};
pub use plan::{InvariantViolationWarning, MacroGrams, MealPlanEntry, NutritionResult, Rebalanced};
pub use split::{Macro, MacroBounds, MacroSplit, MealSlot, MealSplit, PercentBounds};
