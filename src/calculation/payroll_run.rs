//! Batch payroll runs for a reporting month.
//!
//! A run is a synchronous, single-threaded full recomputation over the
//! month's inputs: rerunning it on the same employees, attendance, and
//! ledger state yields identical records. The run reads advance deductions
//! through the ledger's non-mutating preview; posting the deductions to
//! loan histories is a separate, explicit ledger call, so recomputing a
//! month never double-collects an EMI.
//!
//! A record that fails validation is excluded and reported; one bad
//! employee must not block payroll for the whole organization.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::config::StatutoryConfig;
use crate::error::PayrollError;
use crate::ledger::AdvanceLedger;
use crate::models::{
    DayStatus, Doctor, DoctorAttendanceDay, DoctorPayrollRecord, Employee, PayMonth,
    PayrollRecord, PayrollWarning, WarningSeverity,
};

use super::attendance_summary::{calculate_working_days, summarize_attendance};
use super::doctor_billing::calculate_doctor_pay;
use super::employee_wages::calculate_employee_pay;
use super::overtime::calculate_overtime_amount;

/// A record excluded from a payroll run, with the reason.
#[derive(Debug)]
pub struct RecordIssue {
    /// The employee or doctor id.
    pub id: String,
    /// The name, for report display.
    pub name: String,
    /// Why the record was excluded.
    pub error: PayrollError,
}

/// The outcome of an employee payroll run.
#[derive(Debug)]
pub struct EmployeePayrollRun {
    /// The month that was computed.
    pub month: PayMonth,
    /// Computed records, in input order.
    pub records: Vec<PayrollRecord>,
    /// Excluded records with their data-integrity errors.
    pub issues: Vec<RecordIssue>,
    /// Non-fatal anomalies for the report validator.
    pub warnings: Vec<PayrollWarning>,
}

/// The outcome of a doctor payroll run.
#[derive(Debug)]
pub struct DoctorPayrollRun {
    /// The month that was computed.
    pub month: PayMonth,
    /// Computed records, in input order.
    pub records: Vec<DoctorPayrollRecord>,
    /// Excluded records with their data-integrity errors.
    pub issues: Vec<RecordIssue>,
    /// Non-fatal anomalies for the report validator.
    pub warnings: Vec<PayrollWarning>,
}

/// Computes payroll records for all active employees for one month.
///
/// `attendance` maps employee id to that employee's ordered day sequence;
/// the sequence length must equal the month's day count. Inactive
/// employees are skipped. Advance deductions come from the ledger preview
/// for each employee and month.
pub fn run_employee_payroll(
    month: PayMonth,
    employees: &[Employee],
    attendance: &HashMap<String, Vec<DayStatus>>,
    ledger: &AdvanceLedger,
    config: &StatutoryConfig,
) -> EmployeePayrollRun {
    info!(%month, employees = employees.len(), "starting employee payroll run");

    let mut records = Vec::new();
    let mut issues = Vec::new();
    let mut warnings = Vec::new();
    let expected_days = month.days_in_month();

    for employee in employees {
        if !employee.is_active() {
            continue;
        }

        let days = attendance
            .get(&employee.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        if days.len() != expected_days as usize {
            let error = PayrollError::AttendanceLengthMismatch {
                id: employee.id.clone(),
                expected: expected_days,
                actual: days.len(),
            };
            warn!(employee_id = %employee.id, %error, "excluding employee from run");
            issues.push(RecordIssue {
                id: employee.id.clone(),
                name: employee.name.clone(),
                error,
            });
            continue;
        }

        let summary = summarize_attendance(days);
        let allowance = config.attendance().paid_off_allowance;
        let working_days = calculate_working_days(&summary, allowance);

        let excess = summary.excess_off_days(allowance);
        if excess > 0 {
            warnings.push(PayrollWarning::new(
                "excess_off_days",
                format!(
                    "{} took {} offs, {excess} beyond the paid allowance of {allowance}",
                    employee.id, summary.off_days
                ),
                WarningSeverity::Low,
            ));
        }

        let overtime_amount = calculate_overtime_amount(
            employee.basic_salary,
            month,
            working_days.overtime_day_count,
            config.attendance().overtime_multiplier,
        );
        let advance_deduction = ledger.preview_employee_month(&employee.id, month);

        match calculate_employee_pay(
            employee,
            month,
            &summary,
            &working_days,
            overtime_amount,
            advance_deduction,
            config,
        ) {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(employee_id = %employee.id, %error, "excluding employee from run");
                issues.push(RecordIssue {
                    id: employee.id.clone(),
                    name: employee.name.clone(),
                    error,
                });
            }
        }
    }

    info!(
        %month,
        records = records.len(),
        issues = issues.len(),
        warnings = warnings.len(),
        "employee payroll run complete"
    );

    EmployeePayrollRun {
        month,
        records,
        issues,
        warnings,
    }
}

/// Computes billing records for all active doctors for one month.
///
/// `attendance` maps doctor id to the ordered day sequence; the length must
/// equal the month's day count. Present days with no shift selected are
/// billed at zero and surfaced as an `incomplete_attendance` warning.
pub fn run_doctor_payroll(
    month: PayMonth,
    doctors: &[Doctor],
    attendance: &HashMap<String, Vec<DoctorAttendanceDay>>,
    config: &StatutoryConfig,
) -> DoctorPayrollRun {
    info!(%month, doctors = doctors.len(), "starting doctor payroll run");

    let mut records = Vec::new();
    let mut issues = Vec::new();
    let mut warnings = Vec::new();
    let expected_days = month.days_in_month();

    for doctor in doctors {
        if !doctor.is_active() {
            continue;
        }

        let days = attendance
            .get(&doctor.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        if days.len() != expected_days as usize {
            let error = PayrollError::AttendanceLengthMismatch {
                id: doctor.id.clone(),
                expected: expected_days,
                actual: days.len(),
            };
            warn!(doctor_id = %doctor.id, %error, "excluding doctor from run");
            issues.push(RecordIssue {
                id: doctor.id.clone(),
                name: doctor.name.clone(),
                error,
            });
            continue;
        }

        match calculate_doctor_pay(doctor, days, month, config) {
            Ok(record) => {
                if record.incomplete_days > 0 {
                    warnings.push(PayrollWarning::new(
                        "incomplete_attendance",
                        format!(
                            "{} has {} present day(s) with no shift selected",
                            doctor.id, record.incomplete_days
                        ),
                        WarningSeverity::Medium,
                    ));
                }
                records.push(record);
            }
            Err(error) => {
                warn!(doctor_id = %doctor.id, %error, "excluding doctor from run");
                issues.push(RecordIssue {
                    id: doctor.id.clone(),
                    name: doctor.name.clone(),
                    error,
                });
            }
        }
    }

    info!(
        %month,
        records = records.len(),
        issues = issues.len(),
        warnings = warnings.len(),
        "doctor payroll run complete"
    );

    DoctorPayrollRun {
        month,
        records,
        issues,
        warnings,
    }
}
