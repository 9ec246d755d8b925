//! Error types for the divider optimizer.
//!
//! This module provides a unified error type [`DividerError`] that covers
//! all error conditions that can occur while configuring a search, parsing
//! a desired voltage, and evaluating a regulator formula.

use thiserror::Error;

/// Result type alias using [`DividerError`].
pub type Result<T> = std::result::Result<T, DividerError>;

/// Unified error type for all divider operations.
#[derive(Error, Debug)]
pub enum DividerError {
    // ============ Configuration Errors ============
    /// Series, multipliers or result cap cannot produce a meaningful search
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Requested resistor series is not one of the standard tables
    #[error("Unknown resistor series '{name}' (expected E24 or E96)")]
    UnknownSeries { name: String },

    /// Requested regulator has no preset
    #[error("Unknown regulator '{name}' (expected LM317 or LTC4020)")]
    UnknownRegulator { name: String },

    // ============ Input Errors ============
    /// Desired voltage is not a finite number
    #[error("Invalid desired voltage '{input}': {message}")]
    InvalidVoltage { input: String, message: String },

    // ============ Arithmetic Errors ============
    /// Formula denominator is zero
    #[error("Division by zero evaluating divider (R1: {r1}, R2: {r2})")]
    DivisionByZero { r1: f64, r2: f64 },

    /// Formula produced NaN or infinity
    #[error("Non-finite voltage {voltage} for divider (R1: {r1}, R2: {r2})")]
    NonFiniteVoltage { r1: f64, r2: f64, voltage: f64 },

    // ============ I/O Errors ============
    /// Error reading the desired voltage from stdin
    #[error("Failed to read input: {source}")]
    InputReadError {
        #[source]
        source: std::io::Error,
    },

    /// Error writing the report to stdout
    #[error("Failed to write output: {source}")]
    OutputWriteError {
        #[source]
        source: std::io::Error,
    },
}

impl DividerError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an invalid voltage error
    pub fn invalid_voltage(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidVoltage {
            input: input.into(),
            message: message.into(),
        }
    }
}
