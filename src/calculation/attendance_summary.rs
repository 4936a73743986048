//! Attendance classification and payable-day counting.
//!
//! The hospital runs 24-hour attendance: every calendar day carries a code,
//! an unmarked day counts as worked, employees are eligible for four paid
//! offs per month, and a present-with-overtime day pays as two days.

use crate::models::DayStatus;

/// Counts of each attendance code over one employee-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceSummary {
    /// Days marked present (including unmarked days).
    pub present_days: u32,
    /// Days marked present with overtime.
    pub present_with_overtime_days: u32,
    /// Days marked overtime only.
    pub overtime_only_days: u32,
    /// Days marked absent.
    pub absent_days: u32,
    /// Days marked off.
    pub off_days: u32,
}

impl AttendanceSummary {
    /// Total classified days; equals the length of the input sequence.
    pub fn total_days(&self) -> u32 {
        self.present_days
            + self.present_with_overtime_days
            + self.overtime_only_days
            + self.absent_days
            + self.off_days
    }

    /// Off days taken beyond the paid allowance. Informational only; the
    /// payable-days formula applies no penalty for them.
    pub fn excess_off_days(&self, paid_off_allowance: u32) -> u32 {
        self.off_days.saturating_sub(paid_off_allowance)
    }
}

/// Payable-day counts derived from an [`AttendanceSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingDays {
    /// Off days credited as paid (capped by the allowance).
    pub paid_off_days: u32,
    /// Untaken paid offs credited as worked days.
    pub unused_paid_offs: u32,
    /// Days paying base salary.
    pub base_working_days: u32,
    /// Days paying overtime.
    pub overtime_day_count: u32,
    /// Total payable days: base plus overtime.
    pub total_payable_days: u32,
}

/// Classifies one employee-month of attendance codes.
///
/// Unset entries are treated identically to `Present`: every day defaults
/// to worked unless it is explicitly marked otherwise.
pub fn summarize_attendance(days: &[DayStatus]) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();

    for day in days {
        match day {
            DayStatus::Present | DayStatus::Unset => summary.present_days += 1,
            DayStatus::PresentWithOvertime => summary.present_with_overtime_days += 1,
            DayStatus::Overtime => summary.overtime_only_days += 1,
            DayStatus::Off => summary.off_days += 1,
            DayStatus::Absent => summary.absent_days += 1,
        }
    }

    summary
}

/// Computes payable days from an attendance summary.
///
/// Only the first `paid_off_allowance` offs are paid, and untaken offs from
/// the allowance are paid out as worked days. Together the two credits
/// always total the full allowance, whatever the employee actually took;
/// historical payroll totals depend on this behavior, so it must not change
/// without a policy decision. Offs beyond the allowance reduce nothing;
/// they are surfaced through [`AttendanceSummary::excess_off_days`].
///
/// A present-with-overtime day is counted twice: once in the base days and
/// once in the overtime days.
pub fn calculate_working_days(
    summary: &AttendanceSummary,
    paid_off_allowance: u32,
) -> WorkingDays {
    let paid_off_days = summary.off_days.min(paid_off_allowance);
    let unused_paid_offs = paid_off_allowance.saturating_sub(summary.off_days);

    let base_working_days = summary.present_days
        + summary.present_with_overtime_days
        + paid_off_days
        + unused_paid_offs;

    let overtime_day_count = summary.overtime_only_days + summary.present_with_overtime_days;

    WorkingDays {
        paid_off_days,
        unused_paid_offs,
        base_working_days,
        overtime_day_count,
        total_payable_days: base_working_days + overtime_day_count,
    }
}
