// ABOUTME: Nutrition planning configuration with environment overrides and validation
// ABOUTME: Configures goal intensities, split bounds, meal defaults and protein overflow policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Planning Configuration
//!
//! Defaults reproduce the coaching dashboard's behaviour: a 20% deficit and a
//! 15% surplus for the advanced goal slider (accepted range 5-30%), macro
//! bounds of protein 10-60%, carbs 5-70%, fat 15-75%, four meals, and
//! 2.0 g/kg for bodyweight-based protein.

use super::error::ConfigError;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::{Goal, MacroBounds, PercentBounds};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Environment variable prefix for every override
const ENV_PREFIX: &str = "PIERRE_NUTRITION_";

/// What to do when a bodyweight protein target needs more energy than the
/// daily calorie target provides
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProteinOverflowPolicy {
    /// Clamp remaining calories at zero and report a warning
    #[default]
    Clamp,
    /// Refuse the configuration with `InvalidInput`
    Reject,
}

impl FromStr for ProteinOverflowPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            other => Err(ConfigError::Parse(format!(
                "Unknown protein overflow policy: {other} (expected clamp or reject)"
            ))),
        }
    }
}

impl fmt::Display for ProteinOverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clamp => "clamp",
            Self::Reject => "reject",
        })
    }
}

/// Goal adjustment configuration for the advanced (slider) mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalConfig {
    /// Default deficit for `Goal::Lose` (percent of TDEE)
    pub lose_intensity_percent: u32,
    /// Default surplus for `Goal::Gain` (percent of TDEE)
    pub gain_intensity_percent: u32,
    /// Smallest accepted intensity
    pub min_intensity_percent: u32,
    /// Largest accepted intensity
    pub max_intensity_percent: u32,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            lose_intensity_percent: 20,
            gain_intensity_percent: 15,
            min_intensity_percent: 5,
            max_intensity_percent: 30,
        }
    }
}

impl GoalConfig {
    /// Default intensity for a goal (maintenance has none)
    #[must_use]
    pub const fn default_intensity(&self, goal: Goal) -> u32 {
        match goal {
            Goal::Lose => self.lose_intensity_percent,
            Goal::Maintain => 0,
            Goal::Gain => self.gain_intensity_percent,
        }
    }

    /// Check an intensity against the configured slider range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` outside `min_intensity_percent..=max_intensity_percent`
    pub fn check_intensity(&self, intensity_percent: u32) -> AppResult<()> {
        if !(self.min_intensity_percent..=self.max_intensity_percent).contains(&intensity_percent)
        {
            return Err(AppError::out_of_range(
                "goal_intensity_percent",
                intensity_percent,
                f64::from(self.min_intensity_percent),
                f64::from(self.max_intensity_percent),
            ));
        }
        Ok(())
    }
}

/// Nutrition planning configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Advanced goal slider settings
    pub goal: GoalConfig,
    /// Bounds applied when one macro percentage is edited
    pub macro_bounds: MacroBounds,
    /// Bounds applied when one meal percentage is edited
    pub meal_bounds: PercentBounds,
    /// Meal count used when the caller supplies no meal split
    pub default_meal_count: usize,
    /// Protein factor suggested for bodyweight mode (g/kg)
    pub default_protein_g_per_kg: f64,
    /// Handling of protein targets that exceed daily calories
    pub protein_overflow: ProteinOverflowPolicy,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            goal: GoalConfig::default(),
            macro_bounds: MacroBounds::default(),
            meal_bounds: PercentBounds { min: 5, max: 70 },
            default_meal_count: 4,
            default_protein_g_per_kg: 2.0,
            protein_overflow: ProteinOverflowPolicy::Clamp,
        }
    }
}

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Nutrition configuration loaded");
        Ok(config)
    }

    /// Validate internal consistency
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let goal = &self.goal;
        if goal.min_intensity_percent > goal.max_intensity_percent {
            return Err(ConfigError::InvalidRange(format!(
                "min_intensity_percent ({}) must be <= max_intensity_percent ({})",
                goal.min_intensity_percent, goal.max_intensity_percent
            )));
        }
        if goal.max_intensity_percent >= limits::PERCENT_TOTAL {
            return Err(ConfigError::ValueOutOfRange(format!(
                "max_intensity_percent must be below 100, got {}",
                goal.max_intensity_percent
            )));
        }
        for (name, value) in [
            ("lose_intensity_percent", goal.lose_intensity_percent),
            ("gain_intensity_percent", goal.gain_intensity_percent),
        ] {
            if !(goal.min_intensity_percent..=goal.max_intensity_percent).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} ({value}) must be within {}..={}",
                    goal.min_intensity_percent, goal.max_intensity_percent
                )));
            }
        }

        let bounds = [
            ("protein", self.macro_bounds.protein),
            ("carbs", self.macro_bounds.carbs),
            ("fat", self.macro_bounds.fat),
            ("meal", self.meal_bounds),
        ];
        for (name, range) in bounds {
            if range.min > range.max || range.max > limits::PERCENT_TOTAL {
                return Err(ConfigError::InvalidRange(format!(
                    "{name} bounds {}..={} are not a valid percentage range",
                    range.min, range.max
                )));
            }
        }

        let min_sum = self.macro_bounds.protein.min
            + self.macro_bounds.carbs.min
            + self.macro_bounds.fat.min;
        let max_sum = self.macro_bounds.protein.max
            + self.macro_bounds.carbs.max
            + self.macro_bounds.fat.max;
        if min_sum > limits::PERCENT_TOTAL || max_sum < limits::PERCENT_TOTAL {
            return Err(ConfigError::InvalidWeights(format!(
                "macro bounds cannot produce a 100% split (minimums sum to {min_sum}, maximums to {max_sum})"
            )));
        }

        if !(limits::MIN_MEAL_COUNT..=limits::MAX_MEAL_COUNT).contains(&self.default_meal_count) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "default_meal_count must be between {} and {}, got {}",
                limits::MIN_MEAL_COUNT,
                limits::MAX_MEAL_COUNT,
                self.default_meal_count
            )));
        }

        if !(self.default_protein_g_per_kg > 0.0
            && self.default_protein_g_per_kg <= limits::MAX_PROTEIN_G_PER_KG)
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "default_protein_g_per_kg must be in (0, {}], got {}",
                limits::MAX_PROTEIN_G_PER_KG,
                self.default_protein_g_per_kg
            )));
        }

        Ok(())
    }

    /// Apply `PIERRE_NUTRITION_*` environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override("LOSE_INTENSITY")? {
            self.goal.lose_intensity_percent = val;
        }
        if let Some(val) = env_override("GAIN_INTENSITY")? {
            self.goal.gain_intensity_percent = val;
        }
        if let Some(val) = env_override("PROTEIN_G_PER_KG")? {
            self.default_protein_g_per_kg = val;
        }
        if let Some(val) = env_override("PROTEIN_OVERFLOW")? {
            self.protein_overflow = val;
        }
        if let Some(val) = env_override("DEFAULT_MEAL_COUNT")? {
            self.default_meal_count = val;
        }
        if let Some(val) = env_override("PROTEIN_MIN")? {
            self.macro_bounds.protein.min = val;
        }
        if let Some(val) = env_override("PROTEIN_MAX")? {
            self.macro_bounds.protein.max = val;
        }
        Ok(self)
    }
}

/// Read and parse `PIERRE_NUTRITION_<suffix>` if it is set
fn env_override<T>(suffix: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let key = format!("{ENV_PREFIX}{suffix}");
    match env::var(&key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("Invalid {key}={raw}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
