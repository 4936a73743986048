//! Doctor model.
//!
//! Doctors are billed as professional-services contractors on hourly rates,
//! not as payroll employees. The two record types are disjoint and are only
//! merged at the reporting layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeStatus;

/// A consulting doctor billed per shift hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique identifier for the doctor.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Department the doctor is attached to.
    pub department: String,
    /// Medical specialization (e.g., "cardiology").
    pub specialization: String,
    /// Medical council registration number.
    #[serde(default)]
    pub registration_no: String,
    /// Rate paid per regular shift hour.
    pub hourly_rate: Decimal,
    /// Rate paid per additional night hour. Defaults to 1.5x the hourly
    /// rate when unset.
    #[serde(default)]
    pub night_rate: Option<Decimal>,
    /// Fixed monthly professional fee, independent of hours worked.
    #[serde(default)]
    pub professional_fee: Decimal,
    /// Per-consultation fee. Carried for the front desk; not used in
    /// payroll.
    #[serde(default)]
    pub consultation_fee: Decimal,
    /// Engagement status.
    pub status: EmployeeStatus,
    /// Bank account number for fee transfer.
    #[serde(default)]
    pub bank_account: String,
    /// IFSC code of the bank branch.
    #[serde(default)]
    pub ifsc: String,
    /// Name of the bank.
    #[serde(default)]
    pub bank_name: String,
}

impl Doctor {
    /// The effective night-hour rate: the explicit rate if set, otherwise
    /// 1.5x the regular hourly rate.
    pub fn effective_night_rate(&self) -> Decimal {
        self.night_rate
            .unwrap_or_else(|| self.hourly_rate * Decimal::new(15, 1))
    }

    /// Returns true if the doctor is included in payroll runs.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
