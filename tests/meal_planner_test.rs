// ABOUTME: Tests for meal split initialisation, per-meal distribution and diet presets
// ABOUTME: Pins the even-split rounding rule, default slot names and every preset split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_nutrition_planner::{
    errors::ErrorCode,
    intelligence::{apply_diet_preset, distribute_meals, DietPreset},
    models::{MacroGrams, MacroSplit, MealSplit, PercentBounds},
};

mod common;

// ============================================================================
// MEAL SPLITS
// ============================================================================

#[test]
fn test_even_split_rounding_rule() {
    let expected: [(usize, &[u32]); 5] = [
        (2, &[50, 50]),
        (3, &[34, 33, 33]),
        (4, &[25, 25, 25, 25]),
        (5, &[20, 20, 20, 20, 20]),
        (6, &[17, 17, 17, 17, 16, 16]),
    ];
    for (count, percents) in expected {
        let split = MealSplit::even(count).unwrap();
        assert_eq!(split.percents(), percents, "{count} meals");
        assert_eq!(split.total(), 100);
        assert_eq!(split.len(), count);
    }
}

#[test]
fn test_even_split_slot_keys_and_names() {
    let split = MealSplit::even(5).unwrap();
    let keys: Vec<&str> = split.slots().iter().map(|slot| slot.key.as_str()).collect();
    let names: Vec<&str> = split.slots().iter().map(|slot| slot.name.as_str()).collect();

    assert_eq!(keys, ["meal1", "meal2", "meal3", "meal4", "meal5"]);
    assert_eq!(
        names,
        ["Breakfast", "Morning Snack", "Lunch", "Afternoon Snack", "Dinner"]
    );
    assert_eq!(split.position("meal3"), Some(2));
}

#[test]
fn test_meal_count_outside_range_is_rejected() {
    for count in [0, 1, 7, 12] {
        let err = MealSplit::even(count).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "{count} meals");
        assert!(err.is_invalid_input());
    }
}

#[test]
fn test_meal_count_change_reinitialises_split() {
    common::init_test_logging();
    let four = MealSplit::even(4).unwrap();

    let three = four.resize(3).unwrap();

    assert_eq!(three.percents(), vec![34, 33, 33]);
}

#[test]
fn test_resize_discards_edited_shares() {
    let edited = MealSplit::even(4)
        .unwrap()
        .rebalance(0, 40, PercentBounds::full())
        .unwrap()
        .value;
    assert_eq!(edited.percents(), vec![40, 20, 20, 20]);

    let reset = edited.resize(4).unwrap();
    assert_eq!(reset, MealSplit::even(4).unwrap());
}

#[test]
fn test_from_percents_validates_total_and_count() {
    let split = MealSplit::from_percents(&[30, 40, 30]).unwrap();
    assert_eq!(split.slots()[2].name, "Dinner");

    let err = MealSplit::from_percents(&[30, 40]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = MealSplit::from_percents(&[100]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = MealSplit::from_percents(&[10, 10, 10, 10, 10, 10, 40]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_from_percents_rejects_share_above_one_hundred() {
    // Would wrap to exactly 100 if summed without checks
    let err = MealSplit::from_percents(&[u32::MAX, 101]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(err.message.contains("meal_percent"));

    let err = MealSplit::from_percents(&[101, 0]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let split = MealSplit::from_percents(&[100, 0]).unwrap();
    assert_eq!(split.total(), 100);
}

// ============================================================================
// DISTRIBUTION
// ============================================================================

#[test]
fn test_distribute_meals_scales_every_value() {
    let macros = MacroGrams {
        protein: 150,
        carbs: 200,
        fat: 67,
        fiber: 30,
    };
    let split = MealSplit::even(3).unwrap();

    let plan = distribute_meals(2000, &macros, &split);

    assert_eq!(plan.len(), 3);

    let breakfast = &plan[0];
    assert_eq!(breakfast.name, "Breakfast");
    assert_eq!(breakfast.percentage, 34);
    assert_eq!(breakfast.calories, 680);
    assert_eq!(breakfast.macros.protein, 51);
    assert_eq!(breakfast.macros.carbs, 68);
    // 67 * 0.34 = 22.78
    assert_eq!(breakfast.macros.fat, 23);
    // 30 * 0.34 = 10.2
    assert_eq!(breakfast.macros.fiber, 10);

    let lunch = &plan[1];
    assert_eq!(lunch.key, "meal2");
    assert_eq!(lunch.calories, 660);
    // 150 * 0.33 = 49.5 rounds away from zero
    assert_eq!(lunch.macros.protein, 50);
    assert_eq!(lunch.macros.carbs, 66);
    assert_eq!(lunch.macros.fat, 22);
}

#[test]
fn test_distribute_meals_preserves_slot_order() {
    let split = MealSplit::from_percents(&[10, 20, 30, 40]).unwrap();
    let plan = distribute_meals(2500, &MacroGrams::default(), &split);

    let percentages: Vec<u32> = plan.iter().map(|entry| entry.percentage).collect();
    let calories: Vec<u32> = plan.iter().map(|entry| entry.calories).collect();
    assert_eq!(percentages, vec![10, 20, 30, 40]);
    assert_eq!(calories, vec![250, 500, 750, 1000]);
}

// ============================================================================
// DIET PRESETS
// ============================================================================

#[test]
fn test_preset_splits() {
    let expected = [
        (DietPreset::Balanced, (30, 40, 30)),
        (DietPreset::HighProtein, (40, 35, 25)),
        (DietPreset::LowCarb, (40, 20, 40)),
        (DietPreset::LowFat, (25, 55, 20)),
        (DietPreset::Ketogenic, (20, 5, 75)),
        (DietPreset::Mediterranean, (20, 50, 30)),
    ];
    for (preset, (protein, carbs, fat)) in expected {
        assert_eq!(
            preset.split(),
            MacroSplit::new(protein, carbs, fat).unwrap(),
            "{preset}"
        );
    }
    assert_eq!(DietPreset::ALL.len(), expected.len());
}

#[test]
fn test_apply_ketogenic_preset() {
    let split = apply_diet_preset("Ketogenic").unwrap();
    assert_eq!(split.as_array(), [20, 5, 75]);
}

#[test]
fn test_preset_names_are_flexible() {
    let cases = [
        ("keto", DietPreset::Ketogenic),
        ("KETOGENIC", DietPreset::Ketogenic),
        ("high-protein", DietPreset::HighProtein),
        ("High Protein", DietPreset::HighProtein),
        ("low_carb", DietPreset::LowCarb),
        (" mediterranean ", DietPreset::Mediterranean),
    ];
    for (raw, preset) in cases {
        assert_eq!(raw.parse::<DietPreset>().unwrap(), preset, "{raw}");
    }
}

#[test]
fn test_preset_display_round_trips_through_from_str() {
    for preset in DietPreset::ALL {
        assert_eq!(preset.to_string().parse::<DietPreset>().unwrap(), preset);
    }
}

#[test]
fn test_unknown_preset_lists_available_names() {
    let err = apply_diet_preset("paleo").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("paleo"));

    let available = err.details["available"].as_array().unwrap();
    assert_eq!(available.len(), DietPreset::ALL.len());
}
