//! Statutory configuration for payroll calculation.
//!
//! The deduction formulas themselves are fixed; this module holds their
//! constants (rates, caps, slabs, shift-hour tables) as typed configuration.
//! [`StatutoryConfig::default`] reproduces the standard figures, so the
//! crate works with no files on disk; [`ConfigLoader`] reads the same
//! structure from YAML so a deployment can restate a slab without a code
//! change.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceRules, DeductionRules, EsicRules, PfRules, PtRules, PtSlab, ShiftHoursTable,
    StatutoryConfig, TdsRules,
};
