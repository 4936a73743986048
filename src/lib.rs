//! Payroll computation core for hospital payroll administration.
//!
//! This crate turns raw time-tracking inputs (daily attendance codes, doctor
//! shift logs, advance-loan state) into monetary records for a reporting
//! month: salaried-employee payroll with statutory deductions (PF, ESIC,
//! Professional Tax), hourly doctor billing with TDS withholding, and
//! EMI-based advance-loan recovery.
//!
//! The crate is a library-level computation layer: it owns no storage and no
//! network surface. Callers hand it the current month's attendance and loan
//! state and persist the records it returns. Recomputation is idempotent:
//! running a calculator twice on the same inputs yields identical records.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
