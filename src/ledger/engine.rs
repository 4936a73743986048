//! The advance-loan ledger and its operations.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayMonth;

use super::loan::{AdvanceLoan, LoanPayment, LoanStatus, PaymentType};

/// One loan's share of an employee's monthly deduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDeductionDetail {
    /// The loan deducted from.
    pub loan_id: Uuid,
    /// The amount deducted.
    pub amount: Decimal,
    /// The balance remaining on the loan afterwards.
    pub remaining_after: Decimal,
    /// How the amount was determined.
    pub payment_type: PaymentType,
}

/// The result of posting an employee's deductions for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthDeduction {
    /// The month posted.
    pub month: PayMonth,
    /// Total deducted across the employee's loans.
    pub total: Decimal,
    /// Per-loan breakdown.
    pub details: Vec<LoanDeductionDetail>,
}

/// A single month in a deduction projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthProjection {
    /// The projected month.
    pub month: PayMonth,
    /// The deduction expected in that month.
    pub amount: Decimal,
}

/// Aggregate loan position for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceSummary {
    /// Number of active loans.
    pub active_loans: usize,
    /// Number of completed loans.
    pub completed_loans: usize,
    /// Balance outstanding across active loans.
    pub total_active_amount: Decimal,
    /// Principal recovered across completed loans.
    pub total_completed_amount: Decimal,
}

/// Ledger-wide totals for advance reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerReport {
    /// Employees with at least one loan on the ledger.
    pub employees_with_loans: usize,
    /// Active loans across the ledger.
    pub total_active_loans: usize,
    /// Balance outstanding across all active loans.
    pub total_active_amount: Decimal,
    /// Completed loans across the ledger.
    pub total_completed_loans: usize,
    /// Principal recovered across all completed loans.
    pub total_completed_amount: Decimal,
}

/// The loan ledger: a loan-by-id arena owned by one service.
///
/// Mutating operations are transactions against a single loan id: the new
/// loan state is computed on a copy and written back only when the whole
/// operation succeeds. Iteration order is the id order of the map, so
/// reports and projections are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvanceLedger {
    loans: BTreeMap<Uuid, AdvanceLoan>,
}

impl AdvanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a ledger from previously persisted loans.
    pub fn from_loans(loans: impl IntoIterator<Item = AdvanceLoan>) -> Self {
        Self {
            loans: loans.into_iter().map(|l| (l.id, l)).collect(),
        }
    }

    /// All loans on the ledger, in id order.
    pub fn loans(&self) -> impl Iterator<Item = &AdvanceLoan> {
        self.loans.values()
    }

    /// The loan with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::LoanNotFound`] if no such loan exists.
    pub fn loan(&self, id: Uuid) -> PayrollResult<&AdvanceLoan> {
        self.loans
            .get(&id)
            .ok_or(PayrollError::LoanNotFound { id })
    }

    /// All loans belonging to an employee, in id order.
    pub fn loans_for_employee<'a>(
        &'a self,
        employee_id: &'a str,
    ) -> impl Iterator<Item = &'a AdvanceLoan> {
        self.loans
            .values()
            .filter(move |l| l.employee_id == employee_id)
    }

    /// Creates a new active loan and returns its id.
    ///
    /// The EMI is the amount divided by the month count, rounded up, so the
    /// schedule always covers the full amount.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidLoanTerms`] when the amount is not
    /// positive or the month count is zero.
    pub fn create_loan(
        &mut self,
        employee_id: &str,
        amount: Decimal,
        months: u32,
        start_month: PayMonth,
    ) -> PayrollResult<Uuid> {
        if amount <= Decimal::ZERO {
            return Err(PayrollError::InvalidLoanTerms {
                message: format!("loan amount must be positive, got {amount}"),
            });
        }
        if months == 0 {
            return Err(PayrollError::InvalidLoanTerms {
                message: "loan must run for at least one month".to_string(),
            });
        }

        let id = Uuid::new_v4();
        let loan = AdvanceLoan::new(id, employee_id, amount, months, start_month);
        info!(
            %id,
            employee_id,
            %amount,
            months,
            emi = %loan.emi_amount,
            start = %start_month,
            "created advance loan"
        );
        self.loans.insert(id, loan);
        Ok(id)
    }

    /// Posts the deduction for one loan and month, appending to its
    /// history.
    ///
    /// Returns the posted payment, or `None` when the month yields no
    /// deduction (before the start month, or the loan is in a terminal
    /// status). Consuming a one-off EMI override clears it; a balance
    /// reaching zero completes the loan.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::DuplicateDeduction`] if the month already
    /// has a history entry (the ledger is left unchanged), and
    /// [`PayrollError::LoanNotFound`] for an unknown id.
    pub fn process_month_deduction(
        &mut self,
        id: Uuid,
        month: PayMonth,
    ) -> PayrollResult<Option<LoanPayment>> {
        let loan = self.loan(id)?;
        let outcome = deduction_transaction(loan, month)?;

        match outcome {
            None => Ok(None),
            Some((updated, payment)) => {
                info!(
                    %id,
                    employee_id = %updated.employee_id,
                    %month,
                    amount = %payment.amount,
                    remaining = %updated.remaining_amount,
                    status = %updated.status,
                    "posted advance deduction"
                );
                self.loans.insert(id, updated);
                Ok(Some(payment))
            }
        }
    }

    /// Posts deductions for all of an employee's loans for one month.
    ///
    /// The operation is all-or-nothing across the employee's loans: if any
    /// loan rejects the month (duplicate entry), nothing is written.
    pub fn process_employee_month(
        &mut self,
        employee_id: &str,
        month: PayMonth,
    ) -> PayrollResult<MonthDeduction> {
        let mut staged = Vec::new();
        for loan in self.loans_for_employee(employee_id) {
            if let Some((updated, payment)) = deduction_transaction(loan, month)? {
                staged.push((updated, payment));
            }
        }

        let mut total = Decimal::ZERO;
        let mut details = Vec::with_capacity(staged.len());
        for (updated, payment) in staged {
            total += payment.amount;
            details.push(LoanDeductionDetail {
                loan_id: updated.id,
                amount: payment.amount,
                remaining_after: payment.remaining_after,
                payment_type: payment.payment_type,
            });
            self.loans.insert(updated.id, updated);
        }

        if !details.is_empty() {
            info!(employee_id, %month, %total, loans = details.len(), "posted employee advance deductions");
        }

        Ok(MonthDeduction {
            month,
            total,
            details,
        })
    }

    /// The deduction one loan would take for a month, without mutating the
    /// ledger.
    ///
    /// If the month is already posted in the loan's history, the recorded
    /// amount is returned, so recomputing a payroll month after posting
    /// yields the same figures.
    pub fn preview_month_deduction(&self, id: Uuid, month: PayMonth) -> PayrollResult<Decimal> {
        let loan = self.loan(id)?;
        Ok(preview_amount(loan, month))
    }

    /// The total deduction an employee would see for a month, without
    /// mutating the ledger. An employee with no loans yields zero.
    pub fn preview_employee_month(&self, employee_id: &str, month: PayMonth) -> Decimal {
        self.loans_for_employee(employee_id)
            .map(|loan| preview_amount(loan, month))
            .sum()
    }

    /// Requests early settlement: the full remaining balance will be
    /// collected by the deduction for `target_month`.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::LoanNotActive`] for a terminal loan and
    /// [`PayrollError::InvalidLoanTerms`] for a target before the loan
    /// starts.
    pub fn request_settlement(&mut self, id: Uuid, target_month: PayMonth) -> PayrollResult<()> {
        let loan = self.active_loan(id)?;
        if target_month < loan.start_month {
            return Err(PayrollError::InvalidLoanTerms {
                message: format!(
                    "settlement month {target_month} is before the loan starts in {}",
                    loan.start_month
                ),
            });
        }

        let mut updated = loan.clone();
        updated.settlement_month = Some(target_month);
        info!(%id, employee_id = %updated.employee_id, month = %target_month, "settlement requested");
        self.loans.insert(id, updated);
        Ok(())
    }

    /// Overrides the next deduction with a one-off amount, consumed by the
    /// next posted month.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::LoanNotActive`] for a terminal loan and
    /// [`PayrollError::InvalidLoanTerms`] for a non-positive amount.
    pub fn modify_next_emi(&mut self, id: Uuid, amount: Decimal) -> PayrollResult<()> {
        if amount <= Decimal::ZERO {
            return Err(PayrollError::InvalidLoanTerms {
                message: format!("EMI override must be positive, got {amount}"),
            });
        }

        let loan = self.active_loan(id)?;
        let mut updated = loan.clone();
        updated.next_deduction_amount = Some(amount);
        info!(%id, employee_id = %updated.employee_id, %amount, "next EMI overridden");
        self.loans.insert(id, updated);
        Ok(())
    }

    /// Cancels a loan. The remaining balance is written off; it stays on
    /// the loan as the uncollected figure and no further month deducts it.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::LoanNotActive`] for a terminal loan.
    pub fn cancel(&mut self, id: Uuid) -> PayrollResult<()> {
        let loan = self.active_loan(id)?;
        let mut updated = loan.clone();
        updated.status = LoanStatus::Cancelled;
        info!(%id, employee_id = %updated.employee_id, written_off = %updated.remaining_amount, "loan cancelled");
        self.loans.insert(id, updated);
        Ok(())
    }

    /// Projects an employee's deductions for the next `horizon_months`
    /// months starting at `from_month`, without mutating the ledger.
    ///
    /// The projection simulates the deduction schedule on copies of the
    /// loans: settlements and EMI overrides land in the months they would
    /// really land in, and already-posted months report their recorded
    /// amounts.
    pub fn project_upcoming(
        &self,
        employee_id: &str,
        from_month: PayMonth,
        horizon_months: u32,
    ) -> Vec<MonthProjection> {
        let mut simulated: Vec<AdvanceLoan> =
            self.loans_for_employee(employee_id).cloned().collect();

        let mut projection = Vec::with_capacity(horizon_months as usize);
        let mut month = from_month;
        for _ in 0..horizon_months {
            let mut total = Decimal::ZERO;
            for loan in simulated.iter_mut() {
                if let Some(payment) = loan.payment_for(month) {
                    total += payment.amount;
                    continue;
                }
                // A simulated month can never duplicate: posted months are
                // handled above.
                if let Ok(Some((updated, payment))) = deduction_transaction(loan, month) {
                    total += payment.amount;
                    *loan = updated;
                }
            }
            projection.push(MonthProjection { month, amount: total });
            month = month.succ();
        }

        projection
    }

    /// Aggregate loan position for one employee.
    pub fn employee_summary(&self, employee_id: &str) -> AdvanceSummary {
        let mut summary = AdvanceSummary {
            active_loans: 0,
            completed_loans: 0,
            total_active_amount: Decimal::ZERO,
            total_completed_amount: Decimal::ZERO,
        };

        for loan in self.loans_for_employee(employee_id) {
            match loan.status {
                LoanStatus::Active => {
                    summary.active_loans += 1;
                    summary.total_active_amount += loan.remaining_amount;
                }
                LoanStatus::Completed => {
                    summary.completed_loans += 1;
                    summary.total_completed_amount += loan.total_amount;
                }
                LoanStatus::Cancelled => {}
            }
        }

        summary
    }

    /// Ledger-wide totals for advance reporting.
    pub fn report(&self) -> LedgerReport {
        let mut employees: Vec<&str> = self.loans.values().map(|l| l.employee_id.as_str()).collect();
        employees.sort_unstable();
        employees.dedup();

        let mut report = LedgerReport {
            employees_with_loans: employees.len(),
            total_active_loans: 0,
            total_active_amount: Decimal::ZERO,
            total_completed_loans: 0,
            total_completed_amount: Decimal::ZERO,
        };

        for loan in self.loans.values() {
            match loan.status {
                LoanStatus::Active => {
                    report.total_active_loans += 1;
                    report.total_active_amount += loan.remaining_amount;
                }
                LoanStatus::Completed => {
                    report.total_completed_loans += 1;
                    report.total_completed_amount += loan.total_amount;
                }
                LoanStatus::Cancelled => {}
            }
        }

        report
    }

    fn active_loan(&self, id: Uuid) -> PayrollResult<&AdvanceLoan> {
        let loan = self.loan(id)?;
        if !loan.is_active() {
            return Err(PayrollError::LoanNotActive {
                id,
                status: loan.status.to_string(),
            });
        }
        Ok(loan)
    }
}

/// Computes the posted state for one loan and month without touching the
/// ledger: the updated loan plus the payment entry, or `None` when the
/// month yields no deduction.
fn deduction_transaction(
    loan: &AdvanceLoan,
    month: PayMonth,
) -> PayrollResult<Option<(AdvanceLoan, LoanPayment)>> {
    if loan.payment_for(month).is_some() {
        return Err(PayrollError::DuplicateDeduction { id: loan.id, month });
    }

    let (amount, payment_type) = loan.planned_deduction(month);
    if amount == Decimal::ZERO {
        return Ok(None);
    }
    if amount > loan.remaining_amount {
        return Err(PayrollError::LedgerOverdraft {
            id: loan.id,
            attempted: amount,
            remaining: loan.remaining_amount,
        });
    }

    let mut updated = loan.clone();
    updated.remaining_amount -= amount;
    if payment_type == PaymentType::Modified {
        updated.next_deduction_amount = None;
    }
    if updated.remaining_amount == Decimal::ZERO {
        updated.status = LoanStatus::Completed;
    }

    let payment = LoanPayment {
        month,
        amount,
        remaining_after: updated.remaining_amount,
        payment_type,
    };
    updated.history.push(payment.clone());

    Ok(Some((updated, payment)))
}

/// The non-mutating preview of one loan's deduction for a month: the
/// recorded amount when the month is already posted, otherwise the planned
/// amount.
fn preview_amount(loan: &AdvanceLoan, month: PayMonth) -> Decimal {
    if let Some(payment) = loan.payment_for(month) {
        return payment.amount;
    }
    loan.planned_deduction(month).0
}
