// ABOUTME: Biometric inputs and lifestyle enums consumed by the energy calculator
// ABOUTME: Defines Sex, ActivityLevel, Goal, BmrFormula and validated BiometricInput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{activity, limits};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the BMR equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male equation constants
    Male,
    /// Female equation constants
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Unknown sex: {other}"))),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise (x1.2)
    Sedentary,
    /// Light exercise 1-3 days/week (x1.375)
    Light,
    /// Moderate exercise 3-5 days/week (x1.55)
    Moderate,
    /// Hard exercise 6-7 days/week (x1.725)
    Active,
    /// Physical job or twice-daily training (x1.9)
    VeryActive,
}

impl ActivityLevel {
    /// Every level, ordered from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Fixed TDEE multiplier for this level
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => activity::SEDENTARY,
            Self::Light => activity::LIGHT,
            Self::Moderate => activity::MODERATE,
            Self::Active => activity::ACTIVE,
            Self::VeryActive => activity::VERY_ACTIVE,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: {other}"
            ))),
        }
    }
}

/// Body-weight goal driving the calorie adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!("Unknown goal: {other}"))),
        }
    }
}

/// BMR equation selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor (1990)
    #[default]
    Mifflin,
    /// Revised Harris-Benedict (1984)
    Harris,
    /// Katch-McArdle, needs body fat percentage
    Katch,
}

impl BmrFormula {
    /// Whether the equation needs `body_fat_percent`
    #[must_use]
    pub const fn requires_body_fat(&self) -> bool {
        matches!(self, Self::Katch)
    }

    /// Human-readable equation name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mifflin => "Mifflin-St Jeor",
            Self::Harris => "Harris-Benedict",
            Self::Katch => "Katch-McArdle",
        }
    }
}

impl fmt::Display for BmrFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BmrFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mifflin" => Ok(Self::Mifflin),
            "harris" => Ok(Self::Harris),
            "katch" => Ok(Self::Katch),
            other => Err(AppError::invalid_input(format!("Unknown BMR formula: {other}"))),
        }
    }
}

/// Client biometrics for a single calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BiometricInput {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Body fat percentage, only required by Katch-McArdle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

impl BiometricInput {
    /// Validate that every field is inside its physiological range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if !(self.weight_kg > 0.0 && self.weight_kg <= limits::MAX_WEIGHT_KG) {
            return Err(AppError::out_of_range(
                "weight_kg",
                self.weight_kg,
                0.0,
                limits::MAX_WEIGHT_KG,
            ));
        }
        if !(self.height_cm > 0.0 && self.height_cm <= limits::MAX_HEIGHT_CM) {
            return Err(AppError::out_of_range(
                "height_cm",
                self.height_cm,
                0.0,
                limits::MAX_HEIGHT_CM,
            ));
        }
        if !(limits::MIN_AGE_YEARS..=limits::MAX_AGE_YEARS).contains(&self.age_years) {
            return Err(AppError::out_of_range(
                "age_years",
                self.age_years,
                f64::from(limits::MIN_AGE_YEARS),
                f64::from(limits::MAX_AGE_YEARS),
            ));
        }
        if let Some(body_fat) = self.body_fat_percent {
            if !(0.0..=limits::MAX_BODY_FAT_PERCENT).contains(&body_fat) {
                return Err(AppError::out_of_range(
                    "body_fat_percent",
                    body_fat,
                    0.0,
                    limits::MAX_BODY_FAT_PERCENT,
                ));
            }
        }
        Ok(())
    }

    /// Lean body mass in kilograms, if body fat is known
    #[must_use]
    pub fn lean_mass_kg(&self) -> Option<f64> {
        self.body_fat_percent
            .map(|body_fat| self.weight_kg * (1.0 - body_fat / 100.0))
    }
}
