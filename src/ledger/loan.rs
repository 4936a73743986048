//! Advance-loan state and payment history.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PayMonth;

/// Lifecycle status of an advance loan.
///
/// `Active` loans accept deductions. `Completed` and `Cancelled` are
/// terminal: there is no transition out of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Repayment in progress.
    Active,
    /// Fully repaid.
    Completed,
    /// Cancelled; the remaining balance is written off, not collected.
    Cancelled,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoanStatus::Active => "active",
            LoanStatus::Completed => "completed",
            LoanStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// How a monthly deduction amount was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// The scheduled EMI.
    Regular,
    /// A one-off override of the EMI.
    Modified,
    /// Early settlement of the full remaining balance.
    Settlement,
}

/// One posted deduction in a loan's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    /// The month the deduction was posted for.
    pub month: PayMonth,
    /// The amount deducted.
    pub amount: Decimal,
    /// The balance remaining after this deduction.
    pub remaining_after: Decimal,
    /// How the amount was determined.
    pub payment_type: PaymentType,
}

/// An employee advance repaid through monthly payroll deductions.
///
/// Invariants maintained by the ledger: `remaining_amount` never increases
/// while the loan is active; `total_amount == remaining_amount` plus the sum
/// of history amounts at all times (cancellation writes off the remainder
/// without collecting or zeroing it); the status becomes `Completed` exactly
/// when `remaining_amount` reaches zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceLoan {
    /// Unique loan id.
    pub id: Uuid,
    /// The employee the advance was paid to.
    pub employee_id: String,
    /// The amount advanced.
    pub total_amount: Decimal,
    /// The scheduled monthly installment.
    pub emi_amount: Decimal,
    /// The number of scheduled installments.
    pub emi_months: u32,
    /// The first month a deduction applies.
    pub start_month: PayMonth,
    /// The balance still owed.
    pub remaining_amount: Decimal,
    /// Lifecycle status.
    pub status: LoanStatus,
    /// One-off override for the next deduction, cleared when consumed.
    #[serde(default)]
    pub next_deduction_amount: Option<Decimal>,
    /// The month requested for early settlement, if any.
    #[serde(default)]
    pub settlement_month: Option<PayMonth>,
    /// Posted deductions, in posting order.
    #[serde(default)]
    pub history: Vec<LoanPayment>,
}

impl AdvanceLoan {
    /// Creates a fresh loan with the EMI rounded up so the schedule covers
    /// the full amount in `emi_months` installments.
    pub(crate) fn new(
        id: Uuid,
        employee_id: &str,
        amount: Decimal,
        months: u32,
        start_month: PayMonth,
    ) -> Self {
        let emi_amount = (amount / Decimal::from(months)).ceil();
        Self {
            id,
            employee_id: employee_id.to_string(),
            total_amount: amount,
            emi_amount,
            emi_months: months,
            start_month,
            remaining_amount: amount,
            status: LoanStatus::Active,
            next_deduction_amount: None,
            settlement_month: None,
            history: Vec::new(),
        }
    }

    /// Returns true if the loan still accepts deductions.
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    /// The posted deduction for a month, if one exists.
    pub fn payment_for(&self, month: PayMonth) -> Option<&LoanPayment> {
        self.history.iter().find(|p| p.month == month)
    }

    /// The total amount collected so far.
    pub fn paid_amount(&self) -> Decimal {
        self.history.iter().map(|p| p.amount).sum()
    }

    /// The deduction the loan would take for a month, with its payment
    /// type, ignoring history.
    ///
    /// Settlement for the month wins over a pending override, which wins
    /// over the scheduled EMI; every amount is clamped to the remaining
    /// balance. Months before the start month, and loans in a terminal
    /// status, yield zero.
    pub(crate) fn planned_deduction(&self, month: PayMonth) -> (Decimal, PaymentType) {
        if !self.is_active() || month < self.start_month || self.remaining_amount <= Decimal::ZERO {
            return (Decimal::ZERO, PaymentType::Regular);
        }

        if self.settlement_month == Some(month) {
            return (self.remaining_amount, PaymentType::Settlement);
        }

        if let Some(override_amount) = self.next_deduction_amount {
            return (
                override_amount.min(self.remaining_amount),
                PaymentType::Modified,
            );
        }

        (
            self.emi_amount.min(self.remaining_amount),
            PaymentType::Regular,
        )
    }

    /// Recomputes the balance implied by the payment history.
    pub fn replayed_remaining(&self) -> Decimal {
        self.total_amount - self.paid_amount()
    }

    /// Checks the ledger invariants against the payment history.
    ///
    /// Verifies that the `remaining_after` chain in the history is
    /// consistent, that the stored balance matches the replayed balance,
    /// and that a completed loan carries a zero balance.
    pub fn verify(&self) -> bool {
        let mut running = self.total_amount;
        for payment in &self.history {
            running -= payment.amount;
            if payment.remaining_after != running {
                return false;
            }
        }

        if running != self.remaining_amount {
            return false;
        }

        match self.status {
            LoanStatus::Completed => self.remaining_amount == Decimal::ZERO,
            _ => self.remaining_amount >= Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn month(s: &str) -> PayMonth {
        PayMonth::from_str(s).unwrap()
    }

    fn make_loan(amount: i64, months: u32, start: &str) -> AdvanceLoan {
        AdvanceLoan::new(
            Uuid::new_v4(),
            "EMP001",
            Decimal::new(amount, 0),
            months,
            month(start),
        )
    }

    #[test]
    fn test_emi_is_amount_over_months_rounded_up() {
        let loan = make_loan(12000, 6, "2025-07");
        assert_eq!(loan.emi_amount, Decimal::new(2000, 0));

        let uneven = make_loan(10000, 3, "2025-07");
        assert_eq!(uneven.emi_amount, Decimal::new(3334, 0));
    }

    #[test]
    fn test_new_loan_is_active_with_full_balance() {
        let loan = make_loan(12000, 6, "2025-07");
        assert_eq!(loan.status, LoanStatus::Active);
        assert_eq!(loan.remaining_amount, Decimal::new(12000, 0));
        assert!(loan.history.is_empty());
        assert!(loan.verify());
    }

    #[test]
    fn test_planned_deduction_before_start_month_is_zero() {
        let loan = make_loan(12000, 6, "2025-07");
        let (amount, _) = loan.planned_deduction(month("2025-06"));
        assert_eq!(amount, Decimal::ZERO);
    }

    #[test]
    fn test_planned_deduction_regular_emi() {
        let loan = make_loan(12000, 6, "2025-07");
        let (amount, payment_type) = loan.planned_deduction(month("2025-07"));
        assert_eq!(amount, Decimal::new(2000, 0));
        assert_eq!(payment_type, PaymentType::Regular);
    }

    #[test]
    fn test_planned_deduction_clamps_to_remaining() {
        let mut loan = make_loan(12000, 6, "2025-07");
        loan.remaining_amount = Decimal::new(500, 0);
        let (amount, _) = loan.planned_deduction(month("2025-07"));
        assert_eq!(amount, Decimal::new(500, 0));
    }

    #[test]
    fn test_settlement_month_wins_over_override() {
        let mut loan = make_loan(12000, 6, "2025-07");
        loan.settlement_month = Some(month("2025-08"));
        loan.next_deduction_amount = Some(Decimal::new(100, 0));

        let (amount, payment_type) = loan.planned_deduction(month("2025-08"));
        assert_eq!(amount, Decimal::new(12000, 0));
        assert_eq!(payment_type, PaymentType::Settlement);

        // In a non-settlement month the override still applies.
        let (amount, payment_type) = loan.planned_deduction(month("2025-07"));
        assert_eq!(amount, Decimal::new(100, 0));
        assert_eq!(payment_type, PaymentType::Modified);
    }

    #[test]
    fn test_terminal_loans_plan_nothing() {
        let mut loan = make_loan(12000, 6, "2025-07");
        loan.status = LoanStatus::Cancelled;
        let (amount, _) = loan.planned_deduction(month("2025-07"));
        assert_eq!(amount, Decimal::ZERO);
    }

    #[test]
    fn test_verify_catches_broken_history_chain() {
        let mut loan = make_loan(12000, 6, "2025-07");
        loan.history.push(LoanPayment {
            month: month("2025-07"),
            amount: Decimal::new(2000, 0),
            remaining_after: Decimal::new(9000, 0), // should be 10000
            payment_type: PaymentType::Regular,
        });
        loan.remaining_amount = Decimal::new(9000, 0);
        assert!(!loan.verify());
    }

    #[test]
    fn test_replayed_remaining_matches_history() {
        let mut loan = make_loan(12000, 6, "2025-07");
        loan.history.push(LoanPayment {
            month: month("2025-07"),
            amount: Decimal::new(2000, 0),
            remaining_after: Decimal::new(10000, 0),
            payment_type: PaymentType::Regular,
        });
        loan.remaining_amount = Decimal::new(10000, 0);

        assert_eq!(loan.replayed_remaining(), Decimal::new(10000, 0));
        assert!(loan.verify());
    }

    #[test]
    fn test_serde_round_trip() {
        let loan = make_loan(12000, 6, "2025-07");
        let json = serde_json::to_string(&loan).unwrap();
        let back: AdvanceLoan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loan);
    }
}
