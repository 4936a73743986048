//! Advance-loan amortization engine.
//!
//! Employees can take salary advances repaid through equated monthly
//! installments deducted from payroll. This module owns the loan ledger:
//! loan creation, monthly deduction posting, one-off EMI overrides, early
//! settlement, cancellation, and multi-month deduction projection.
//!
//! The ledger is the only part of the core with cross-call mutable state.
//! Every mutating operation is a transaction against a single loan: the new
//! state is computed first and written back only on success, so a rejected
//! operation leaves the ledger exactly as it was.

mod engine;
mod loan;

pub use engine::{
    AdvanceLedger, AdvanceSummary, LedgerReport, LoanDeductionDetail, MonthDeduction,
    MonthProjection,
};
pub use loan::{AdvanceLoan, LoanPayment, LoanStatus, PaymentType};
