// ABOUTME: Configuration module for tunable nutrition planning parameters
// ABOUTME: Loads defaults, applies environment overrides and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the nutrition planner
//!
//! - **Nutrition**: goal intensities, split bounds, meal defaults and the
//!   bodyweight-protein overflow policy
//! - **Error**: configuration loading and validation errors
//!
//! Configuration is environment-only (`PIERRE_NUTRITION_*` variables); there
//! is no config file.

/// Configuration loading and validation errors
pub mod error;
/// Nutrition planning configuration
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{GoalConfig, NutritionConfig, ProteinOverflowPolicy};
