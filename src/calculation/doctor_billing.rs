//! Doctor shift-hour billing and TDS computation.
//!
//! Doctors are paid per shift hour, with additional night hours billed at
//! the night rate on top of whichever shift was worked. A flat 10% TDS is
//! withheld from gross pay as professional-services withholding. Doctors
//! carry no PF/ESIC/PT; they are contractors, not payroll employees.

use rust_decimal::Decimal;

use crate::config::{ShiftHoursTable, StatutoryConfig};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Doctor, DoctorAttendanceDay, DoctorDayStatus, DoctorPayrollRecord, PayMonth};

/// Hour and day totals for one doctor-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoctorMonthSummary {
    /// Days present with a shift selected.
    pub working_days: u32,
    /// Days present with no shift selected. Such a day contributes zero
    /// hours and zero pay; it is counted so reports can flag the entry as
    /// incomplete.
    pub incomplete_days: u32,
    /// Shift hours across the month.
    pub regular_hours: u32,
    /// Additional night hours across the month.
    pub night_hours: u32,
}

impl DoctorMonthSummary {
    /// Regular plus night hours.
    pub fn total_hours(&self) -> u32 {
        self.regular_hours + self.night_hours
    }
}

/// Aggregates a doctor's month of attendance into hour totals.
///
/// Only days with `Present` status and a selected shift contribute hours;
/// their night hours ride along. Absent and off days, and present days
/// with no shift, contribute nothing.
pub fn summarize_doctor_month(
    days: &[DoctorAttendanceDay],
    shift_hours: &ShiftHoursTable,
) -> DoctorMonthSummary {
    let mut summary = DoctorMonthSummary::default();

    for day in days {
        if day.status != DoctorDayStatus::Present {
            continue;
        }
        match day.shift {
            Some(shift) => {
                summary.working_days += 1;
                summary.regular_hours += shift_hours.hours_for(shift);
                summary.night_hours += day.night_hours;
            }
            None => summary.incomplete_days += 1,
        }
    }

    summary
}

/// Computes one doctor's billing record for a month.
///
/// Gross pay is regular hours at the hourly rate, night hours at the night
/// rate (1.5x hourly when no explicit rate is set), plus the fixed monthly
/// professional fee. TDS is floored to whole currency units.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidDoctor`] when the hourly rate is not
/// positive.
pub fn calculate_doctor_pay(
    doctor: &Doctor,
    days: &[DoctorAttendanceDay],
    month: PayMonth,
    config: &StatutoryConfig,
) -> PayrollResult<DoctorPayrollRecord> {
    if doctor.hourly_rate <= Decimal::ZERO {
        return Err(PayrollError::InvalidDoctor {
            field: "hourly_rate".to_string(),
            message: format!(
                "must be positive for '{}', got {}",
                doctor.id, doctor.hourly_rate
            ),
        });
    }

    let summary = summarize_doctor_month(days, config.shift_hours());

    let regular_pay = Decimal::from(summary.regular_hours) * doctor.hourly_rate;
    let night_hours_pay = Decimal::from(summary.night_hours) * doctor.effective_night_rate();
    let gross_pay = regular_pay + night_hours_pay + doctor.professional_fee;
    let tds_amount = (gross_pay * config.deductions().tds.rate).floor();
    let net_pay = gross_pay - tds_amount;

    Ok(DoctorPayrollRecord {
        doctor_id: doctor.id.clone(),
        name: doctor.name.clone(),
        department: doctor.department.clone(),
        month,
        working_days: summary.working_days,
        incomplete_days: summary.incomplete_days,
        regular_hours: summary.regular_hours,
        night_hours: summary.night_hours,
        total_hours: summary.total_hours(),
        regular_pay,
        night_hours_pay,
        professional_fee: doctor.professional_fee,
        gross_pay,
        tds_amount,
        net_pay,
    })
}
