//! Error types for serial date conversion and formatting.

use thiserror::Error;

/// Errors that can occur when converting or rendering a serial date.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("serial number is not finite: {value}")]
    NonFinite { value: f64 },

    #[error("date out of range: serial number {serial}")]
    OutOfRange { serial: f64 },

    #[error("format id {id} is not a built-in date/time format")]
    NotADateFormat { id: u16 },
}
