// ABOUTME: Output format abstraction for nutrition results and exported reports
// ABOUTME: Supports JSON (default), TOON (token-efficient for LLMs) and CSV meal tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The planner itself only produces a plain, serializable [`NutritionResult`].
//! Export collaborators (report generators, the CLI) wrap it in a
//! [`NutritionReport`] together with client metadata and pick a format here.
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, universal compatibility
//! - **TOON**: Token-efficient format optimized for LLM input (`toon` feature)
//! - **CSV**: One row per meal plus a `Total` row, for spreadsheets
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pierre_nutrition_planner::formatters::{export_report, NutritionReport, OutputFormat};
//!
//! let report = NutritionReport::new(client, result);
//! let output = export_report(&report, OutputFormat::Csv)?;
//! ```

use crate::models::NutritionResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format (default) - universal compatibility
    #[default]
    Json,
    /// TOON format - Token-Oriented Object Notation for LLM efficiency
    Toon,
    /// CSV meal table (reports only)
    Csv,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values (backwards compatible)
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "toon" => Self::Toon,
            "csv" => Self::Csv,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            Self::Toon => "application/vnd.toon",
            Self::Csv => "text/csv",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toon => "toon",
            Self::Csv => "csv",
        }
    }

    /// File extension for exported reports
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl FormatError {
    fn new(format: OutputFormat, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            format,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Who a report was generated for
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientMetadata {
    /// Coaching client identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Uuid>,
    /// Client display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A nutrition result plus the metadata an export needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionReport {
    /// Client the plan belongs to
    pub client: ClientMetadata,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// The computed plan
    pub result: NutritionResult,
}

impl NutritionReport {
    /// Wrap a result, stamping it with the current time
    #[must_use]
    pub fn new(client: ClientMetadata, result: NutritionResult) -> Self {
        Self {
            client,
            generated_at: Utc::now(),
            result,
        }
    }
}

/// Format serializable data to the specified output format
///
/// # Errors
///
/// Returns `FormatError` if serialization fails, if TOON support is not
/// compiled in, or if `format` is CSV (only reports have a tabular form)
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => {
            serde_json::to_string(data).map_err(|e| FormatError::new(format, e.to_string()))?
        }
        OutputFormat::Toon => encode_toon(data)?,
        OutputFormat::Csv => {
            return Err(FormatError::new(
                format,
                "CSV is only available for nutrition reports",
            ))
        }
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Format serializable data to pretty-printed output (for debugging/display)
///
/// # Errors
///
/// Same conditions as [`format_output`]
pub fn format_output_pretty<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    match format {
        OutputFormat::Json => {
            let data = serde_json::to_string_pretty(data)
                .map_err(|e| FormatError::new(format, e.to_string()))?;
            Ok(FormattedOutput {
                data,
                format,
                content_type: format.content_type(),
            })
        }
        // TOON is already human-readable, use standard formatting
        OutputFormat::Toon | OutputFormat::Csv => format_output(data, format),
    }
}

/// Render a report in the requested format
///
/// JSON is pretty-printed. CSV holds one row per meal followed by a `Total`
/// row with the daily targets; client metadata is not part of the table.
///
/// # Errors
///
/// Returns `FormatError` if serialization or CSV writing fails
pub fn export_report(
    report: &NutritionReport,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    match format {
        OutputFormat::Json | OutputFormat::Toon => format_output_pretty(report, format),
        OutputFormat::Csv => Ok(FormattedOutput {
            data: meal_plan_csv(&report.result)?,
            format,
            content_type: format.content_type(),
        }),
    }
}

/// Header of the CSV meal table
pub const CSV_HEADER: [&str; 7] = [
    "meal",
    "percentage",
    "calories",
    "protein_g",
    "carbs_g",
    "fat_g",
    "fiber_g",
];

fn meal_plan_csv(result: &NutritionResult) -> Result<String, FormatError> {
    let csv_error = |e: csv::Error| FormatError::new(OutputFormat::Csv, e.to_string());

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(csv_error)?;

    for meal in &result.meal_plan {
        writer
            .write_record([
                meal.name.clone(),
                meal.percentage.to_string(),
                meal.calories.to_string(),
                meal.macros.protein.to_string(),
                meal.macros.carbs.to_string(),
                meal.macros.fat.to_string(),
                meal.macros.fiber.to_string(),
            ])
            .map_err(csv_error)?;
    }

    let totals = &result.macro_grams;
    writer
        .write_record([
            "Total".to_owned(),
            "100".to_owned(),
            result.daily_calories.to_string(),
            totals.protein.to_string(),
            totals.carbs.to_string(),
            totals.fat.to_string(),
            totals.fiber.to_string(),
        ])
        .map_err(csv_error)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::new(OutputFormat::Csv, e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FormatError::new(OutputFormat::Csv, e.to_string()))
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| {
        FormatError::new(
            OutputFormat::Toon,
            format!("Failed to convert to JSON value: {e}"),
        )
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options)
        .map_err(|e| FormatError::new(OutputFormat::Toon, e.to_string()))
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError::new(
        OutputFormat::Toon,
        "TOON support requires the `toon` feature",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_is_recognised() {
        assert_eq!(OutputFormat::from_str_param("CSV"), OutputFormat::Csv);
        assert_eq!(OutputFormat::Csv.content_type(), "text/csv");
    }

    #[test]
    fn test_plain_data_cannot_be_csv() {
        let err = format_output(&vec![1, 2, 3], OutputFormat::Csv).unwrap_err();
        assert_eq!(err.format, OutputFormat::Csv);
    }
}
