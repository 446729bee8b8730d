// ABOUTME: Proportional rebalancing of percentage buckets that must total exactly 100
// ABOUTME: Rescales untouched buckets after a single edit, then corrects rounding drift deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Percentage Rebalancer
//!
//! When a user drags one slider (protein %, or the share of one meal), every
//! other bucket is rescaled by `(100 - new) / others_before` so their
//! relative proportions are preserved. Rounding each bucket independently
//! can leave the total at 99 or 101; a corrective pass then moves the
//! residual onto the largest untouched buckets so the total is always
//! exactly 100 afterwards.
//!
//! The algorithm is generic over the number of buckets: three for
//! [`MacroSplit`], two to six for [`MealSplit`].

use crate::constants::limits::PERCENT_TOTAL;
use crate::errors::{AppError, AppResult};
use crate::models::{
    InvariantViolationWarning, Macro, MacroBounds, MacroSplit, MealSlot, MealSplit,
    PercentBounds, Rebalanced,
};
use std::cmp::Reverse;
use tracing::{debug, warn};

/// Set one bucket and rescale the others so the total stays 100
///
/// 1. `new_value` is clamped into `bounds`.
/// 2. Every other bucket is multiplied by `(100 - new) / others_sum`, where
///    `others_sum` is taken from `current` before the edit, and rounded.
/// 3. If `others_sum` is zero nothing can be scaled; a
///    [`InvariantViolationWarning::ZeroSumRedistribution`] is reported.
/// 4. Any residual left by rounding (or by step 3) is applied to the other
///    buckets, largest first, so the result sums to exactly 100.
///
/// Setting a bucket to its current value on a split that already totals
/// 100 returns the split unchanged.
///
/// # Errors
///
/// Returns an error for fewer than two buckets, an out-of-range
/// `changed_index`, a `current` bucket above 100 or a `current` that does
/// not total 100, or invalid `bounds`
pub fn rebalance_percentages(
    current: &[u32],
    changed_index: usize,
    new_value: u32,
    bounds: PercentBounds,
) -> AppResult<Rebalanced<Vec<u32>>> {
    if current.len() < 2 {
        return Err(AppError::invalid_input(
            "Rebalancing needs at least two buckets",
        ));
    }
    if changed_index >= current.len() {
        return Err(AppError::invalid_input(format!(
            "Bucket index {changed_index} out of range for {} buckets",
            current.len()
        )));
    }
    if let Some(value) = current.iter().find(|value| **value > PERCENT_TOTAL) {
        return Err(AppError::out_of_range(
            "bucket_percent",
            value,
            0.0,
            f64::from(PERCENT_TOTAL),
        ));
    }
    let current_total = current.iter().fold(0_u32, |sum, value| sum.saturating_add(*value));
    if current_total != PERCENT_TOTAL {
        return Err(AppError::invalid_input(format!(
            "Buckets must sum to 100 before rebalancing, got {current_total}"
        )));
    }
    bounds.validate()?;

    let target = bounds.clamp(new_value);
    if target != new_value {
        debug!(
            requested = new_value,
            clamped = target,
            min = bounds.min,
            max = bounds.max,
            "Clamped edited bucket to its bounds"
        );
    }

    let others_sum: u32 = current
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != changed_index)
        .fold(0_u32, |sum, (_, value)| sum.saturating_add(*value));
    let remaining = PERCENT_TOTAL - target;

    let mut values = current.to_vec();
    values[changed_index] = target;
    let mut warnings = Vec::new();

    if others_sum > 0 {
        let factor = f64::from(remaining) / f64::from(others_sum);
        for (index, value) in values.iter_mut().enumerate() {
            if index != changed_index {
                *value = (f64::from(*value) * factor).round() as u32;
            }
        }
    } else {
        let warning = InvariantViolationWarning::ZeroSumRedistribution {
            changed_index,
            residual: remaining,
        };
        warn!(changed_index, residual = remaining, "{warning}");
        warnings.push(warning);
    }

    correct_residual(&mut values, Some(changed_index));

    Ok(Rebalanced {
        value: values,
        warnings,
    })
}

/// Normalise independently rounded shares so they total exactly 100
pub(crate) fn normalize_to_total(values: &mut [u32]) {
    correct_residual(values, None);
}

/// Move the difference between the total and 100 onto the untouched buckets
///
/// Buckets are visited in descending value order (ties: lowest index first).
/// A positive residual goes entirely to the first; a negative one is drained
/// from each in turn without taking any bucket below zero.
fn correct_residual(values: &mut [u32], skip: Option<usize>) {
    let total: i64 = values.iter().map(|value| i64::from(*value)).sum();
    let mut residual = i64::from(PERCENT_TOTAL) - total;
    if residual == 0 {
        return;
    }
    debug!(residual, "Correcting rounding drift");

    let mut order: Vec<usize> = (0..values.len())
        .filter(|index| Some(*index) != skip)
        .collect();
    order.sort_by_key(|index| (Reverse(values[*index]), *index));

    for index in order {
        if residual > 0 {
            values[index] += residual as u32;
            residual = 0;
        } else {
            let take = residual.unsigned_abs().min(u64::from(values[index]));
            values[index] -= take as u32;
            residual += take as i64;
        }
        if residual == 0 {
            break;
        }
    }
}

impl MacroSplit {
    /// Set one macro and rebalance the other two
    ///
    /// # Errors
    ///
    /// Returns an error if the split does not total 100 or the bounds for
    /// `nutrient` are invalid
    pub fn rebalance(
        &self,
        nutrient: Macro,
        new_value: u32,
        bounds: &MacroBounds,
    ) -> AppResult<Rebalanced<Self>> {
        let rebalanced = rebalance_percentages(
            &self.as_array(),
            nutrient.index(),
            new_value,
            bounds.for_macro(nutrient),
        )?;
        let values: [u32; 3] = rebalanced
            .value
            .try_into()
            .map_err(|_| AppError::internal("Rebalancer changed the macro bucket count"))?;
        Ok(Rebalanced {
            value: Self::from_array(values),
            warnings: rebalanced.warnings,
        })
    }
}

impl MealSplit {
    /// Set one meal's share and rebalance the other meals
    ///
    /// # Errors
    ///
    /// Returns an error if `slot_index` is out of range or `bounds` are invalid
    pub fn rebalance(
        &self,
        slot_index: usize,
        new_value: u32,
        bounds: PercentBounds,
    ) -> AppResult<Rebalanced<Self>> {
        let rebalanced = rebalance_percentages(&self.percents(), slot_index, new_value, bounds)?;
        let slots = self
            .slots()
            .iter()
            .zip(rebalanced.value)
            .map(|(slot, percent)| MealSlot {
                percent,
                ..slot.clone()
            })
            .collect();
        Ok(Rebalanced {
            value: Self::from_slots_unchecked(slots),
            warnings: rebalanced.warnings,
        })
    }

    /// Set the share of the meal with `key` and rebalance the others
    ///
    /// # Errors
    ///
    /// Returns an error if no slot has `key` or `bounds` are invalid
    pub fn rebalance_key(
        &self,
        key: &str,
        new_value: u32,
        bounds: PercentBounds,
    ) -> AppResult<Rebalanced<Self>> {
        let index = self
            .position(key)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown meal slot: {key}")))?;
        self.rebalance(index, new_value, bounds)
    }
}
