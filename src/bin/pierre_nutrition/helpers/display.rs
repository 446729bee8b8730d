// ABOUTME: Output formatting helpers for pierre-nutrition
// ABOUTME: Prints macro splits, meal splits and invariant warnings as terminal tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_nutrition_planner::models::{InvariantViolationWarning, MacroSplit, MealSplit};

/// Display a macro split, one macro per line
pub fn display_macro_split(split: &MacroSplit) {
    println!("{:<8} {:>5}", "Macro", "%");
    println!("{}", "=".repeat(14));
    println!("{:<8} {:>4}%", "Protein", split.protein);
    println!("{:<8} {:>4}%", "Carbs", split.carbs);
    println!("{:<8} {:>4}%", "Fat", split.fat);
}

/// Display a meal split, one slot per line
pub fn display_meal_split(split: &MealSplit) {
    println!("{:<7} {:<16} {:>5}", "Slot", "Meal", "%");
    println!("{}", "=".repeat(30));
    for slot in split.slots() {
        println!("{:<7} {:<16} {:>4}%", slot.key, slot.name, slot.percent);
    }
}

/// Display warnings raised by a rebalance, if any
pub fn display_warnings(warnings: &[InvariantViolationWarning]) {
    for warning in warnings {
        println!("\nWARNING {warning}");
    }
}
