// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and standard biometric and request fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `pierre_nutrition_planner`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use pierre_nutrition_planner::{
    intelligence::{CalculationOptions, NutritionRequest},
    models::{ActivityLevel, BiometricInput, BmrFormula, Goal, MacroSplit, Sex},
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 70 kg, 175 cm, 30-year-old male (Mifflin BMR 1649)
pub fn male_reference() -> BiometricInput {
    BiometricInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        sex: Sex::Male,
        body_fat_percent: None,
    }
}

/// 60 kg, 165 cm, 25-year-old female (Mifflin BMR 1345)
pub fn female_reference() -> BiometricInput {
    BiometricInput {
        weight_kg: 60.0,
        height_cm: 165.0,
        age_years: 25,
        sex: Sex::Female,
        body_fat_percent: None,
    }
}

/// 80 kg male at 20% body fat (64 kg lean mass, Katch BMR 1752)
pub fn lean_mass_reference() -> BiometricInput {
    BiometricInput {
        weight_kg: 80.0,
        height_cm: 180.0,
        age_years: 35,
        sex: Sex::Male,
        body_fat_percent: Some(20.0),
    }
}

/// Moderately active maintenance request for the reference male
pub fn maintenance_request() -> NutritionRequest {
    NutritionRequest {
        biometrics: male_reference(),
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
        formula: BmrFormula::Mifflin,
        macro_split: MacroSplit::default(),
        options: CalculationOptions::default(),
    }
}
