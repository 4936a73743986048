//! Error types for the payroll computation core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur during a payroll run.
//!
//! Two families matter to callers: data-integrity errors (a single bad
//! employee or doctor record, excluded from the batch while the rest of the
//! run proceeds) and ledger-consistency errors (an advance-loan operation
//! that is rejected outright, leaving the ledger unchanged). Non-fatal
//! anomalies are not errors at all; see
//! [`PayrollWarning`](crate::models::PayrollWarning).

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::PayMonth;

/// The main error type for the payroll computation core.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An attendance sequence does not match the day count of the target month.
    #[error("Attendance for '{id}' has {actual} entries, expected {expected} for the month")]
    AttendanceLengthMismatch {
        /// The employee or doctor the sequence belongs to.
        id: String,
        /// Days in the target month.
        expected: u32,
        /// Entries actually supplied.
        actual: usize,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A doctor record was invalid or contained inconsistent data.
    #[error("Invalid doctor field '{field}': {message}")]
    InvalidDoctor {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An advance loan was requested with unusable terms.
    #[error("Invalid loan terms: {message}")]
    InvalidLoanTerms {
        /// A description of what made the terms invalid.
        message: String,
    },

    /// No loan exists in the ledger for the given id.
    #[error("Advance loan not found: {id}")]
    LoanNotFound {
        /// The loan id that was not found.
        id: Uuid,
    },

    /// The operation requires an active loan but the loan has reached a
    /// terminal status.
    #[error("Advance loan {id} is {status}, not active")]
    LoanNotActive {
        /// The loan id.
        id: Uuid,
        /// The loan's current status, rendered lowercase.
        status: String,
    },

    /// A deduction was already posted for this loan and month.
    #[error("Advance loan {id} already has a deduction recorded for {month}")]
    DuplicateDeduction {
        /// The loan id.
        id: Uuid,
        /// The month that already carries a history entry.
        month: PayMonth,
    },

    /// A deduction would drive the loan's remaining balance negative.
    #[error("Deduction of {attempted} exceeds remaining balance {remaining} on loan {id}")]
    LedgerOverdraft {
        /// The loan id.
        id: Uuid,
        /// The amount the caller attempted to deduct.
        attempted: Decimal,
        /// The remaining balance on the loan.
        remaining: Decimal,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
