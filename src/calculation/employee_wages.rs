//! Employee wage and statutory-deduction computation.
//!
//! Combines classified attendance with the employee's salary structure and
//! the month's advance deduction into a [`PayrollRecord`]. The deduction
//! formulas are fixed; an employee varies them only through the opt-out
//! flags.

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayMonth, PayrollRecord};

use super::attendance_summary::{AttendanceSummary, WorkingDays};

/// Computes one employee's payroll record for a month.
///
/// `overtime_amount` and `advance_deduction` are supplied by the caller:
/// the overtime amount from [`calculate_overtime_amount`]
/// (or an equivalent already-priced figure), and the advance deduction from
/// the loan ledger for this employee and month.
///
/// Deductions: PF at 12% of basic salary; ESIC at 0.75% of gross capped at
/// the wage base; PT as a flat amount from the gross-salary slab. Each is
/// floored to whole currency units before combination; historical records
/// were produced with this exact order, so it must be preserved.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidEmployee`] when the basic salary is not
/// positive; the record is rejected rather than zeroed so the batch runner
/// can surface it as a data-integrity issue.
///
/// [`calculate_overtime_amount`]: super::calculate_overtime_amount
pub fn calculate_employee_pay(
    employee: &Employee,
    month: PayMonth,
    summary: &AttendanceSummary,
    working_days: &WorkingDays,
    overtime_amount: Decimal,
    advance_deduction: Decimal,
    config: &StatutoryConfig,
) -> PayrollResult<PayrollRecord> {
    if employee.basic_salary <= Decimal::ZERO {
        return Err(PayrollError::InvalidEmployee {
            field: "basic_salary".to_string(),
            message: format!(
                "must be positive for '{}', got {}",
                employee.id, employee.basic_salary
            ),
        });
    }

    let rules = config.deductions();

    let gross_salary = employee.basic_salary
        + employee.hra
        + employee.conveyance
        + employee.other_allowances
        + overtime_amount;

    let pf = if employee.has_pf {
        (employee.basic_salary * rules.provident_fund.rate).floor()
    } else {
        Decimal::ZERO
    };

    let esic = if employee.has_esic {
        (gross_salary.min(rules.esic.wage_cap) * rules.esic.rate).floor()
    } else {
        Decimal::ZERO
    };

    let pt = if employee.has_pt {
        rules.professional_tax.amount_for(gross_salary)
    } else {
        Decimal::ZERO
    };

    let total_deductions = pf + esic + pt + advance_deduction;
    let net_pay = gross_salary - total_deductions;

    Ok(PayrollRecord {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        department: employee.department.clone(),
        month,
        present_days: summary.present_days,
        present_with_overtime_days: summary.present_with_overtime_days,
        overtime_only_days: summary.overtime_only_days,
        absent_days: summary.absent_days,
        off_days: summary.off_days,
        paid_off_days: working_days.paid_off_days,
        unused_paid_offs: working_days.unused_paid_offs,
        base_working_days: working_days.base_working_days,
        overtime_day_count: working_days.overtime_day_count,
        working_days: working_days.total_payable_days,
        basic_salary: employee.basic_salary,
        hra: employee.hra,
        conveyance: employee.conveyance,
        other_allowances: employee.other_allowances,
        overtime_amount,
        gross_salary,
        pf,
        esic,
        pt,
        advance_deduction,
        total_deductions,
        net_pay,
    })
}
