// ABOUTME: Tests for nutrition configuration defaults, environment overrides and validation
// ABOUTME: Serialised because every test mutates PIERRE_NUTRITION_* process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_nutrition_planner::{
    config::{ConfigError, NutritionConfig, ProteinOverflowPolicy},
    errors::{AppError, ErrorCode},
    models::{Goal, PercentBounds},
};
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: [&str; 7] = [
    "PIERRE_NUTRITION_LOSE_INTENSITY",
    "PIERRE_NUTRITION_GAIN_INTENSITY",
    "PIERRE_NUTRITION_PROTEIN_G_PER_KG",
    "PIERRE_NUTRITION_PROTEIN_OVERFLOW",
    "PIERRE_NUTRITION_DEFAULT_MEAL_COUNT",
    "PIERRE_NUTRITION_PROTEIN_MIN",
    "PIERRE_NUTRITION_PROTEIN_MAX",
];

fn clear_overrides() {
    for key in OVERRIDE_VARS {
        env::remove_var(key);
    }
}

/// Run `check` with the given overrides set, clearing them afterwards
fn with_overrides(vars: &[(&str, &str)], check: impl FnOnce()) {
    clear_overrides();
    for (key, value) in vars {
        env::set_var(key, value);
    }
    check();
    clear_overrides();
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn test_defaults_are_valid() {
    let config = NutritionConfig::default();
    config.validate().unwrap();

    assert_eq!(config.goal.default_intensity(Goal::Lose), 20);
    assert_eq!(config.goal.default_intensity(Goal::Maintain), 0);
    assert_eq!(config.goal.default_intensity(Goal::Gain), 15);
    assert_eq!(config.default_meal_count, 4);
    assert_eq!(config.meal_bounds, PercentBounds { min: 5, max: 70 });
    assert_eq!(config.protein_overflow, ProteinOverflowPolicy::Clamp);
}

#[test]
fn test_intensity_check_uses_configured_range() {
    let config = NutritionConfig::default();

    config.goal.check_intensity(5).unwrap();
    config.goal.check_intensity(30).unwrap();

    let err = config.goal.check_intensity(31).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.details["field"], "goal_intensity_percent");
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    with_overrides(&[], || {
        assert_eq!(NutritionConfig::load().unwrap(), NutritionConfig::default());
    });
}

// ============================================================================
// OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_environment_overrides_are_applied() {
    with_overrides(
        &[
            ("PIERRE_NUTRITION_LOSE_INTENSITY", "25"),
            ("PIERRE_NUTRITION_GAIN_INTENSITY", " 10 "),
            ("PIERRE_NUTRITION_PROTEIN_G_PER_KG", "1.6"),
            ("PIERRE_NUTRITION_PROTEIN_OVERFLOW", "Reject"),
            ("PIERRE_NUTRITION_DEFAULT_MEAL_COUNT", "5"),
            ("PIERRE_NUTRITION_PROTEIN_MIN", "15"),
            ("PIERRE_NUTRITION_PROTEIN_MAX", "50"),
        ],
        || {
            let config = NutritionConfig::load().unwrap();

            assert_eq!(config.goal.lose_intensity_percent, 25);
            assert_eq!(config.goal.gain_intensity_percent, 10);
            assert!((config.default_protein_g_per_kg - 1.6).abs() < f64::EPSILON);
            assert_eq!(config.protein_overflow, ProteinOverflowPolicy::Reject);
            assert_eq!(config.default_meal_count, 5);
            assert_eq!(config.macro_bounds.protein, PercentBounds { min: 15, max: 50 });
        },
    );
}

#[test]
#[serial]
fn test_unparseable_override_is_a_config_error() {
    with_overrides(&[("PIERRE_NUTRITION_LOSE_INTENSITY", "lots")], || {
        let err = NutritionConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("PIERRE_NUTRITION_LOSE_INTENSITY"));

        let app_error = AppError::from(err);
        assert_eq!(app_error.code, ErrorCode::ConfigError);
        assert_eq!(app_error.code.exit_code(), 78);
    });

    with_overrides(&[("PIERRE_NUTRITION_PROTEIN_OVERFLOW", "ignore")], || {
        let err = NutritionConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    });
}

#[test]
#[serial]
fn test_override_outside_slider_range_is_invalid() {
    with_overrides(&[("PIERRE_NUTRITION_LOSE_INTENSITY", "50")], || {
        let err = NutritionConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
        assert_eq!(AppError::from(err).code, ErrorCode::ConfigInvalid);
    });

    with_overrides(&[("PIERRE_NUTRITION_DEFAULT_MEAL_COUNT", "9")], || {
        let err = NutritionConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    });

    with_overrides(&[("PIERRE_NUTRITION_PROTEIN_G_PER_KG", "0")], || {
        let err = NutritionConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    });
}

#[test]
#[serial]
fn test_inverted_protein_bounds_are_invalid() {
    with_overrides(&[("PIERRE_NUTRITION_PROTEIN_MIN", "70")], || {
        let err = NutritionConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
    });
}

#[test]
#[serial]
fn test_minimums_above_one_hundred_are_invalid() {
    // 85 + carbs 5 + fat 15
    with_overrides(
        &[
            ("PIERRE_NUTRITION_PROTEIN_MIN", "85"),
            ("PIERRE_NUTRITION_PROTEIN_MAX", "90"),
        ],
        || {
            let err = NutritionConfig::load().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidWeights(_)));
        },
    );
}

// ============================================================================
// VALIDATION WITHOUT ENVIRONMENT
// ============================================================================

#[test]
fn test_validate_rejects_inconsistent_goal_config() {
    let mut config = NutritionConfig::default();
    config.goal.min_intensity_percent = 40;
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidRange(_)
    ));

    let mut config = NutritionConfig::default();
    config.goal.max_intensity_percent = 100;
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::ValueOutOfRange(_)
    ));
}

#[test]
fn test_validate_rejects_bad_meal_bounds() {
    let config = NutritionConfig {
        meal_bounds: PercentBounds { min: 10, max: 120 },
        ..NutritionConfig::default()
    };
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidRange(_)
    ));
}

#[test]
fn test_validate_rejects_maximums_below_one_hundred() {
    let mut config = NutritionConfig::default();
    config.macro_bounds.protein.max = 20;
    config.macro_bounds.carbs.max = 30;
    config.macro_bounds.fat.max = 40;

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidWeights(_)
    ));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = NutritionConfig {
        protein_overflow: ProteinOverflowPolicy::Reject,
        ..NutritionConfig::default()
    };

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["protein_overflow"], "reject");
    assert_eq!(json["meal_bounds"]["max"], 70);

    let back: NutritionConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);
}
