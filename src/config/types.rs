//! Configuration types for statutory payroll rules.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML rule files, plus a [`Default`] implementation carrying the standard
//! figures the calculators are specified against.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Shift;

/// Provident Fund rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PfRules {
    /// Fraction of basic salary deducted (e.g., 0.12).
    pub rate: Decimal,
}

/// Employee State Insurance rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EsicRules {
    /// Fraction of the capped gross salary deducted (e.g., 0.0075).
    pub rate: Decimal,
    /// Gross-salary wage base cap the rate applies to.
    pub wage_cap: Decimal,
}

/// One Professional Tax slab.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PtSlab {
    /// The slab applies when gross salary exceeds this amount.
    pub gross_above: Decimal,
    /// Flat deduction for the slab.
    pub amount: Decimal,
}

/// Professional Tax rules: a tiered flat deduction on gross salary bands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PtRules {
    /// The slabs. Order does not matter; the highest matching threshold
    /// wins.
    pub slabs: Vec<PtSlab>,
}

impl PtRules {
    /// The flat deduction for a gross salary, or zero below every slab.
    pub fn amount_for(&self, gross_salary: Decimal) -> Decimal {
        self.slabs
            .iter()
            .filter(|slab| gross_salary > slab.gross_above)
            .max_by_key(|slab| slab.gross_above)
            .map(|slab| slab.amount)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Tax-deducted-at-source rules for doctor professional-services payments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TdsRules {
    /// Fraction of gross pay withheld (e.g., 0.10).
    pub rate: Decimal,
}

/// Statutory deduction rules, one section per deduction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeductionRules {
    /// Provident Fund.
    pub provident_fund: PfRules,
    /// Employee State Insurance.
    pub esic: EsicRules,
    /// Professional Tax.
    pub professional_tax: PtRules,
    /// Doctor TDS withholding.
    pub tds: TdsRules,
}

/// Hours credited for each named doctor shift.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShiftHoursTable {
    /// Morning shift hours.
    pub morning: u32,
    /// Evening shift hours.
    pub evening: u32,
    /// Night shift hours.
    pub night: u32,
    /// Full 24-hour shift hours.
    pub full24: u32,
}

impl ShiftHoursTable {
    /// Hours for a shift. Custom shifts carry their own hours.
    pub fn hours_for(&self, shift: Shift) -> u32 {
        match shift {
            Shift::Morning => self.morning,
            Shift::Evening => self.evening,
            Shift::Night => self.night,
            Shift::Full24 => self.full24,
            Shift::Custom { hours } => hours,
        }
    }
}

/// Attendance and overtime policy rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendanceRules {
    /// Paid offs an employee is eligible for per month.
    pub paid_off_allowance: u32,
    /// Multiplier applied to the daily rate for overtime days.
    pub overtime_multiplier: Decimal,
    /// Hours credited per named doctor shift.
    pub shift_hours: ShiftHoursTable,
}

/// The complete statutory configuration consumed by the calculators.
#[derive(Debug, Clone, PartialEq)]
pub struct StatutoryConfig {
    deductions: DeductionRules,
    attendance: AttendanceRules,
}

impl StatutoryConfig {
    /// Creates a configuration from its component parts.
    pub fn new(deductions: DeductionRules, attendance: AttendanceRules) -> Self {
        Self {
            deductions,
            attendance,
        }
    }

    /// The statutory deduction rules.
    pub fn deductions(&self) -> &DeductionRules {
        &self.deductions
    }

    /// The attendance and overtime rules.
    pub fn attendance(&self) -> &AttendanceRules {
        &self.attendance
    }

    /// The doctor shift-hours table.
    pub fn shift_hours(&self) -> &ShiftHoursTable {
        &self.attendance.shift_hours
    }
}

impl Default for StatutoryConfig {
    /// The standard figures: PF 12% of basic; ESIC 0.75% of gross capped at
    /// 21,000; PT 200 above 25,000 gross and 150 above 21,000; TDS 10%;
    /// 4 paid offs per month; overtime at 1.5x the daily rate; shifts of
    /// 6/6/12/24 hours.
    fn default() -> Self {
        Self {
            deductions: DeductionRules {
                provident_fund: PfRules {
                    rate: Decimal::new(12, 2),
                },
                esic: EsicRules {
                    rate: Decimal::new(75, 4),
                    wage_cap: Decimal::new(21_000, 0),
                },
                professional_tax: PtRules {
                    slabs: vec![
                        PtSlab {
                            gross_above: Decimal::new(25_000, 0),
                            amount: Decimal::new(200, 0),
                        },
                        PtSlab {
                            gross_above: Decimal::new(21_000, 0),
                            amount: Decimal::new(150, 0),
                        },
                    ],
                },
                tds: TdsRules {
                    rate: Decimal::new(10, 2),
                },
            },
            attendance: AttendanceRules {
                paid_off_allowance: 4,
                overtime_multiplier: Decimal::new(15, 1),
                shift_hours: ShiftHoursTable {
                    morning: 6,
                    evening: 6,
                    night: 12,
                    full24: 24,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pf_and_esic_rates() {
        let config = StatutoryConfig::default();
        assert_eq!(config.deductions().provident_fund.rate, Decimal::new(12, 2));
        assert_eq!(config.deductions().esic.rate, Decimal::new(75, 4));
        assert_eq!(config.deductions().esic.wage_cap, Decimal::new(21_000, 0));
        assert_eq!(config.deductions().tds.rate, Decimal::new(10, 2));
    }

    #[test]
    fn test_pt_slab_lookup_picks_highest_matching_threshold() {
        let config = StatutoryConfig::default();
        let pt = &config.deductions().professional_tax;

        assert_eq!(pt.amount_for(Decimal::new(48_300, 0)), Decimal::new(200, 0));
        assert_eq!(pt.amount_for(Decimal::new(23_000, 0)), Decimal::new(150, 0));
        assert_eq!(pt.amount_for(Decimal::new(18_000, 0)), Decimal::ZERO);
    }

    #[test]
    fn test_pt_slab_thresholds_are_exclusive() {
        let config = StatutoryConfig::default();
        let pt = &config.deductions().professional_tax;

        // Exactly at a threshold stays in the band below it.
        assert_eq!(pt.amount_for(Decimal::new(25_000, 0)), Decimal::new(150, 0));
        assert_eq!(pt.amount_for(Decimal::new(21_000, 0)), Decimal::ZERO);
    }

    #[test]
    fn test_pt_slab_lookup_is_order_independent() {
        let reversed = PtRules {
            slabs: vec![
                PtSlab {
                    gross_above: Decimal::new(21_000, 0),
                    amount: Decimal::new(150, 0),
                },
                PtSlab {
                    gross_above: Decimal::new(25_000, 0),
                    amount: Decimal::new(200, 0),
                },
            ],
        };
        assert_eq!(
            reversed.amount_for(Decimal::new(30_000, 0)),
            Decimal::new(200, 0)
        );
    }

    #[test]
    fn test_shift_hours_table() {
        let table = StatutoryConfig::default().shift_hours().clone();
        assert_eq!(table.hours_for(Shift::Morning), 6);
        assert_eq!(table.hours_for(Shift::Evening), 6);
        assert_eq!(table.hours_for(Shift::Night), 12);
        assert_eq!(table.hours_for(Shift::Full24), 24);
        assert_eq!(table.hours_for(Shift::Custom { hours: 10 }), 10);
    }

    #[test]
    fn test_default_attendance_policy() {
        let config = StatutoryConfig::default();
        assert_eq!(config.attendance().paid_off_allowance, 4);
        assert_eq!(config.attendance().overtime_multiplier, Decimal::new(15, 1));
    }
}
