// ABOUTME: Fixed physiological and dietary constants used by the nutrition calculator
// ABOUTME: Energy densities, fiber heuristic, BMR coefficients, legacy goal factors and input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Values here are not configurable. Anything a deployment may tune lives in
//! [`crate::config::nutrition::NutritionConfig`] instead.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Fiber target as a fraction of carbohydrate grams
    pub const FIBER_PER_GRAM_CARBS: f64 = 0.15;
}

/// Coefficients of the supported BMR equations
pub mod bmr {
    /// Mifflin-St Jeor (1990)
    pub mod mifflin {
        /// Weight coefficient (kcal per kg)
        pub const WEIGHT: f64 = 10.0;
        /// Height coefficient (kcal per cm)
        pub const HEIGHT: f64 = 6.25;
        /// Age coefficient (kcal per year)
        pub const AGE: f64 = 5.0;
        /// Male constant
        pub const MALE_OFFSET: f64 = 5.0;
        /// Female constant
        pub const FEMALE_OFFSET: f64 = -161.0;
    }

    /// Revised Harris-Benedict (Roza & Shizgal, 1984)
    pub mod harris {
        /// Male weight coefficient
        pub const MALE_WEIGHT: f64 = 13.397;
        /// Male height coefficient
        pub const MALE_HEIGHT: f64 = 4.799;
        /// Male age coefficient
        pub const MALE_AGE: f64 = 5.677;
        /// Male constant
        pub const MALE_OFFSET: f64 = 88.362;
        /// Female weight coefficient
        pub const FEMALE_WEIGHT: f64 = 9.247;
        /// Female height coefficient
        pub const FEMALE_HEIGHT: f64 = 3.098;
        /// Female age coefficient
        pub const FEMALE_AGE: f64 = 4.330;
        /// Female constant
        pub const FEMALE_OFFSET: f64 = 447.593;
    }

    /// Katch-McArdle (lean body mass based)
    pub mod katch {
        /// Intercept
        pub const BASE: f64 = 370.0;
        /// Lean mass coefficient (kcal per kg of lean mass)
        pub const LEAN_MASS: f64 = 21.6;
    }
}

/// Activity multipliers applied to BMR to obtain TDEE
pub mod activity {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Physical job or twice-daily training
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Fixed factors of the legacy (non-advanced) goal adjustment
pub mod legacy_goal {
    /// Calorie factor for weight loss
    pub const LOSE_FACTOR: f64 = 0.8;
    /// Calorie factor for weight gain
    pub const GAIN_FACTOR: f64 = 1.15;
}

/// Accepted ranges for caller-supplied values
pub mod limits {
    /// Maximum body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Maximum height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum age (years)
    pub const MIN_AGE_YEARS: u32 = 1;
    /// Maximum age (years)
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Maximum body fat percentage
    pub const MAX_BODY_FAT_PERCENT: f64 = 100.0;
    /// Maximum bodyweight protein factor (g/kg)
    pub const MAX_PROTEIN_G_PER_KG: f64 = 5.0;
    /// Fewest meal slots a plan may have
    pub const MIN_MEAL_COUNT: usize = 2;
    /// Most meal slots a plan may have
    pub const MAX_MEAL_COUNT: usize = 6;
    /// Every percentage split sums to this value
    pub const PERCENT_TOTAL: u32 = 100;
}

/// Service identification used in structured logs
pub mod service_names {
    /// Name reported by the planner CLI and logging layer
    pub const PIERRE_NUTRITION_PLANNER: &str = "pierre-nutrition-planner";
}
