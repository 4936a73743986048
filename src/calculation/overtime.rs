//! Overtime pay calculation.

use rust_decimal::Decimal;

use crate::models::PayMonth;

/// Computes the overtime amount for a month.
///
/// Overtime days are paid at the employee's daily rate (basic salary over
/// the month's calendar days) times the overtime multiplier, floored to
/// whole currency units like every other monetary intermediate.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_amount;
/// use payroll_engine::models::PayMonth;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let month = PayMonth::from_str("2025-07").unwrap();
/// let amount = calculate_overtime_amount(
///     Decimal::new(31000, 0),
///     month,
///     3,
///     Decimal::new(15, 1),
/// );
/// assert_eq!(amount, Decimal::new(4500, 0)); // 3 days x 1000/day x 1.5
/// ```
pub fn calculate_overtime_amount(
    basic_salary: Decimal,
    month: PayMonth,
    overtime_day_count: u32,
    multiplier: Decimal,
) -> Decimal {
    if overtime_day_count == 0 {
        return Decimal::ZERO;
    }

    let daily_rate = basic_salary / Decimal::from(month.days_in_month());
    (daily_rate * Decimal::from(overtime_day_count) * multiplier).floor()
}
