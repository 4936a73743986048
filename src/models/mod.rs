//! Data models for the payroll computation core.
//!
//! This module contains the employee, doctor, and attendance input types,
//! the reporting-month value type, and the derived payroll record types
//! produced by the calculators.

mod attendance;
mod doctor;
mod employee;
mod pay_month;
mod records;

pub use attendance::{DayStatus, DoctorAttendanceDay, DoctorDayStatus, Shift};
pub use doctor::Doctor;
pub use employee::{Employee, EmployeeStatus};
pub use pay_month::{ParsePayMonthError, PayMonth};
pub use records::{DoctorPayrollRecord, PayrollRecord, PayrollWarning, WarningSeverity};
