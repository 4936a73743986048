//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum for
//! representing salaried staff in the payroll system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment status of a salaried employee.
///
/// Employees are never hard-deleted while referenced by historical payroll
/// records; they are switched to `Inactive` instead, which excludes them
/// from future payroll runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    /// Included in payroll runs.
    Active,
    /// Retained for history, excluded from payroll runs.
    Inactive,
}

/// A salaried hospital employee subject to monthly payroll.
///
/// The three `has_*` flags are opt-out switches for the statutory
/// deductions; they default to `true` when absent from serialized input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Job designation.
    pub designation: String,
    /// Monthly basic salary. Must be positive for payroll to run.
    pub basic_salary: Decimal,
    /// Monthly house rent allowance.
    pub hra: Decimal,
    /// Monthly conveyance allowance.
    pub conveyance: Decimal,
    /// Other monthly allowances.
    pub other_allowances: Decimal,
    /// Bank account number for salary transfer.
    #[serde(default)]
    pub bank_account: String,
    /// IFSC code of the bank branch.
    #[serde(default)]
    pub ifsc: String,
    /// Name of the bank.
    #[serde(default)]
    pub bank_name: String,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Whether Provident Fund is deducted.
    #[serde(default = "default_true")]
    pub has_pf: bool,
    /// Whether ESIC is deducted.
    #[serde(default = "default_true")]
    pub has_esic: bool,
    /// Whether Professional Tax is deducted.
    #[serde(default = "default_true")]
    pub has_pt: bool,
}

fn default_true() -> bool {
    true
}

impl Employee {
    /// Returns true if the employee is included in payroll runs.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
