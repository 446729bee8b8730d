// ABOUTME: Re-exports command modules for pierre-nutrition
// ABOUTME: Provides plan calculation and split editing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculate;
pub mod split;
