//! Attendance input types.
//!
//! This module defines the per-day attendance codes for salaried employees
//! and the per-day shift entries for doctors. An employee's month attendance
//! is an ordered sequence of [`DayStatus`] values whose length equals the
//! number of days in the calendar month.

use serde::{Deserialize, Serialize};

/// Daily attendance code for a salaried employee.
///
/// `Unset` is the explicit "no entry made" variant; the classifier treats it
/// identically to `Present`: every day defaults to worked unless it is
/// explicitly marked otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Worked a regular day.
    Present,
    /// Did not work.
    Absent,
    /// Scheduled day off.
    Off,
    /// Worked an overtime-only day.
    Overtime,
    /// Worked a regular day plus overtime (pays as two days).
    PresentWithOvertime,
    /// No entry made; classified as present.
    Unset,
}

/// Daily status for a doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctorDayStatus {
    /// On duty.
    Present,
    /// Not on duty.
    Absent,
    /// Scheduled day off.
    Off,
}

/// A doctor's shift for one day.
///
/// The named shifts carry fixed hour counts (see the shift-hours table in
/// the statutory configuration); `Custom` carries its own hours, so there is
/// no separate custom-hours field to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Morning shift (9AM-3PM).
    Morning,
    /// Evening shift (3PM-9PM).
    Evening,
    /// Night shift, 12 hours (9PM-9AM).
    Night,
    /// Full 24-hour shift.
    Full24,
    /// Custom shift with an explicit hour count.
    Custom {
        /// Hours worked in the custom shift.
        hours: u32,
    },
}

/// One doctor-day of attendance.
///
/// `night_hours` are additional hours worked beyond the selected shift,
/// billed at the doctor's night rate independently of which shift was
/// worked. A day may be `Present` with no shift selected, an incomplete
/// entry that contributes zero hours and is counted for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorAttendanceDay {
    /// Whether the doctor was on duty.
    pub status: DoctorDayStatus,
    /// The shift worked, if one was selected.
    #[serde(default)]
    pub shift: Option<Shift>,
    /// Additional night-rate hours beyond the shift.
    #[serde(default)]
    pub night_hours: u32,
}

impl DoctorAttendanceDay {
    /// A day with no entry: absent, no shift, no night hours.
    pub fn absent() -> Self {
        Self {
            status: DoctorDayStatus::Absent,
            shift: None,
            night_hours: 0,
        }
    }

    /// A present day on the given shift.
    pub fn present(shift: Shift) -> Self {
        Self {
            status: DoctorDayStatus::Present,
            shift: Some(shift),
            night_hours: 0,
        }
    }

    /// A present day on the given shift with extra night hours.
    pub fn present_with_night_hours(shift: Shift, night_hours: u32) -> Self {
        Self {
            status: DoctorDayStatus::Present,
            shift: Some(shift),
            night_hours,
        }
    }
}
