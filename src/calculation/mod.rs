//! Calculation logic for the payroll computation core.
//!
//! This module contains the pure calculators: attendance classification and
//! payable-day counting, overtime pay, employee wages with statutory
//! deductions, doctor shift-hour billing with TDS, and the batch payroll
//! run that ties them together for a reporting month.

mod attendance_summary;
mod doctor_billing;
mod employee_wages;
mod overtime;
mod payroll_run;

pub use attendance_summary::{
    AttendanceSummary, WorkingDays, calculate_working_days, summarize_attendance,
};
pub use doctor_billing::{DoctorMonthSummary, calculate_doctor_pay, summarize_doctor_month};
pub use employee_wages::calculate_employee_pay;
pub use overtime::calculate_overtime_amount;
pub use payroll_run::{
    DoctorPayrollRun, EmployeePayrollRun, RecordIssue, run_doctor_payroll, run_employee_payroll,
};
