//! Derived payroll record types.
//!
//! This module contains the [`PayrollRecord`] and [`DoctorPayrollRecord`]
//! output types plus the [`PayrollWarning`] carrier for non-fatal anomalies.
//!
//! Records are derived values: they are recomputable at any time from the
//! employee/doctor, attendance, and loan-ledger inputs and are not an
//! independent source of truth. Every numeric field is always present
//! (defaulting to zero, never absent) so report renderers need no
//! null-checks on core output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayMonth;

/// A salaried employee's computed payroll for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// Employee name, denormalized for rendering.
    pub name: String,
    /// Department, denormalized for rendering.
    pub department: String,
    /// The reporting month.
    pub month: PayMonth,

    /// Days marked present.
    pub present_days: u32,
    /// Days marked present with overtime.
    pub present_with_overtime_days: u32,
    /// Days marked overtime only.
    pub overtime_only_days: u32,
    /// Days marked absent.
    pub absent_days: u32,
    /// Days marked off.
    pub off_days: u32,
    /// Off days credited as paid (capped by policy).
    pub paid_off_days: u32,
    /// Untaken paid offs credited as worked days.
    pub unused_paid_offs: u32,
    /// Days paying base salary.
    pub base_working_days: u32,
    /// Days paying overtime.
    pub overtime_day_count: u32,
    /// Total payable days (base + overtime).
    pub working_days: u32,

    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Conveyance allowance.
    pub conveyance: Decimal,
    /// Other allowances.
    pub other_allowances: Decimal,
    /// Overtime pay for the month.
    pub overtime_amount: Decimal,
    /// Gross salary before deductions.
    pub gross_salary: Decimal,
    /// Provident Fund deduction.
    pub pf: Decimal,
    /// Employee State Insurance deduction.
    pub esic: Decimal,
    /// Professional Tax deduction.
    pub pt: Decimal,
    /// Advance-loan EMI deduction for the month.
    pub advance_deduction: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Amount payable after deductions.
    pub net_pay: Decimal,
}

/// A doctor's computed billing for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorPayrollRecord {
    /// The doctor this record belongs to.
    pub doctor_id: String,
    /// Doctor name, denormalized for rendering.
    pub name: String,
    /// Department, denormalized for rendering.
    pub department: String,
    /// The reporting month.
    pub month: PayMonth,

    /// Days present with a shift selected.
    pub working_days: u32,
    /// Days present with no shift selected (incomplete entries, zero pay).
    pub incomplete_days: u32,
    /// Total shift hours across the month.
    pub regular_hours: u32,
    /// Total additional night hours across the month.
    pub night_hours: u32,
    /// Regular plus night hours.
    pub total_hours: u32,

    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for night hours.
    pub night_hours_pay: Decimal,
    /// Fixed monthly professional fee.
    pub professional_fee: Decimal,
    /// Gross professional-services pay.
    pub gross_pay: Decimal,
    /// Tax deducted at source (professional-services withholding).
    pub tds_amount: Decimal,
    /// Amount payable after TDS.
    pub net_pay: Decimal,
}

/// Severity of a payroll warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational only.
    Low,
    /// Worth review before publishing reports.
    Medium,
    /// Likely data-entry problem.
    High,
}

/// A non-fatal anomaly surfaced during calculation.
///
/// Warnings never stop a payroll run; they are collected alongside the
/// records for the surrounding report validator to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollWarning {
    /// A stable code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the anomaly.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

impl PayrollWarning {
    /// Creates a warning with the given code, message, and severity.
    pub fn new(code: &str, message: String, severity: WarningSeverity) -> Self {
        Self {
            code: code.to_string(),
            message,
            severity,
        }
    }
}
