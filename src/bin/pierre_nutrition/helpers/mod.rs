// ABOUTME: Re-exports helper modules for pierre-nutrition
// ABOUTME: Provides terminal display formatting for splits and warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
