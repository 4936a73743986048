//! Integration tests for the payroll computation core.
//!
//! This suite covers cross-module scenarios:
//! - Employee wage calculation with statutory deductions
//! - Doctor hourly billing with TDS
//! - Advance-loan amortization, settlement, and projection
//! - Batch payroll runs with partial-failure semantics
//! - Algebraic properties of the calculators (property tests)

use std::collections::HashMap;
use std::str::FromStr;

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    calculate_employee_pay, calculate_working_days, run_doctor_payroll, run_employee_payroll,
    summarize_attendance,
};
use payroll_engine::config::StatutoryConfig;
use payroll_engine::ledger::{AdvanceLedger, LoanStatus, PaymentType};
use payroll_engine::models::{
    DayStatus, Doctor, DoctorAttendanceDay, Employee, EmployeeStatus, PayMonth, Shift,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(n: i64) -> Decimal {
    Decimal::new(n, 0)
}

fn month(s: &str) -> PayMonth {
    PayMonth::from_str(s).unwrap()
}

fn create_employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {id}"),
        department: "Nursing".to_string(),
        designation: "Staff Nurse".to_string(),
        basic_salary: dec(32000),
        hra: dec(12800),
        conveyance: dec(1500),
        other_allowances: dec(2000),
        bank_account: String::new(),
        ifsc: String::new(),
        bank_name: String::new(),
        status: EmployeeStatus::Active,
        has_pf: true,
        has_esic: true,
        has_pt: true,
    }
}

fn create_doctor(id: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: format!("Dr. {id}"),
        department: "Pediatrics".to_string(),
        specialization: "pediatrics".to_string(),
        registration_no: String::new(),
        hourly_rate: dec(2800),
        night_rate: Some(dec(4200)),
        professional_fee: Decimal::ZERO,
        consultation_fee: Decimal::ZERO,
        status: EmployeeStatus::Active,
        bank_account: String::new(),
        ifsc: String::new(),
        bank_name: String::new(),
    }
}

fn present_month(days: u32) -> Vec<DayStatus> {
    vec![DayStatus::Present; days as usize]
}

// =============================================================================
// Employee wage scenarios
// =============================================================================

/// The reference employee: 32000 basic, 12800 HRA, 1500 conveyance, 2000
/// other, all deductions on, no overtime, no advance.
#[test]
fn employee_reference_scenario_nets_44103() {
    let employees = vec![create_employee("EMP001")];
    let mut attendance = HashMap::new();
    attendance.insert("EMP001".to_string(), present_month(31));

    let run = run_employee_payroll(
        month("2025-07"),
        &employees,
        &attendance,
        &AdvanceLedger::new(),
        &StatutoryConfig::default(),
    );

    assert!(run.issues.is_empty());
    let record = &run.records[0];
    assert_eq!(record.gross_salary, dec(48300));
    assert_eq!(record.pf, dec(3840));
    assert_eq!(record.esic, dec(157));
    assert_eq!(record.pt, dec(200));
    assert_eq!(record.advance_deduction, Decimal::ZERO);
    assert_eq!(record.net_pay, dec(44103));
}

#[test]
fn employee_record_survives_json_round_trip() {
    let employees = vec![create_employee("EMP001")];
    let mut attendance = HashMap::new();
    attendance.insert("EMP001".to_string(), present_month(31));

    let run = run_employee_payroll(
        month("2025-07"),
        &employees,
        &attendance,
        &AdvanceLedger::new(),
        &StatutoryConfig::default(),
    );

    let json = serde_json::to_string(&run.records).unwrap();
    let back: Vec<payroll_engine::models::PayrollRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, run.records);
}

// =============================================================================
// Doctor billing scenarios
// =============================================================================

/// The reference doctor: 2800/hr, 4200 night rate, 10 morning shifts with
/// 2 extra night hours on 5 of them.
#[test]
fn doctor_reference_scenario_nets_189000() {
    let doctors = vec![create_doctor("DOC001")];
    let mut days = vec![DoctorAttendanceDay::absent(); 31];
    for day in days.iter_mut().take(10) {
        *day = DoctorAttendanceDay::present(Shift::Morning);
    }
    for day in days.iter_mut().take(5) {
        day.night_hours = 2;
    }
    let mut attendance = HashMap::new();
    attendance.insert("DOC001".to_string(), days);

    let run = run_doctor_payroll(
        month("2025-07"),
        &doctors,
        &attendance,
        &StatutoryConfig::default(),
    );

    assert!(run.issues.is_empty());
    let record = &run.records[0];
    assert_eq!(record.regular_hours, 60);
    assert_eq!(record.night_hours, 10);
    assert_eq!(record.regular_pay, dec(168_000));
    assert_eq!(record.night_hours_pay, dec(42_000));
    assert_eq!(record.gross_pay, dec(210_000));
    assert_eq!(record.tds_amount, dec(21_000));
    assert_eq!(record.net_pay, dec(189_000));
}

/// Doctors carry no PF/ESIC/PT fields at all; the record types are
/// disjoint and TDS is the only withholding.
#[test]
fn doctor_withholding_is_tds_only() {
    let doctors = vec![create_doctor("DOC001")];
    let mut attendance = HashMap::new();
    attendance.insert(
        "DOC001".to_string(),
        vec![DoctorAttendanceDay::present(Shift::Night); 31],
    );

    let run = run_doctor_payroll(
        month("2025-07"),
        &doctors,
        &attendance,
        &StatutoryConfig::default(),
    );

    let record = &run.records[0];
    assert_eq!(record.gross_pay - record.tds_amount, record.net_pay);

    let json = serde_json::to_value(record).unwrap();
    assert!(json.get("pf").is_none());
    assert!(json.get("esic").is_none());
    assert!(json.get("pt").is_none());
}

// =============================================================================
// Advance-loan scenarios
// =============================================================================

/// The reference loan: 12000 over 6 months, settled in month 4.
#[test]
fn loan_settlement_scenario() {
    let mut ledger = AdvanceLedger::new();
    let id = ledger
        .create_loan("EMP001", dec(12000), 6, month("2025-07"))
        .unwrap();
    assert_eq!(ledger.loan(id).unwrap().emi_amount, dec(2000));

    for m in ["2025-07", "2025-08", "2025-09"] {
        let payment = ledger.process_month_deduction(id, month(m)).unwrap().unwrap();
        assert_eq!(payment.amount, dec(2000));
    }
    assert_eq!(ledger.loan(id).unwrap().remaining_amount, dec(6000));

    ledger.request_settlement(id, month("2025-10")).unwrap();
    let payment = ledger
        .process_month_deduction(id, month("2025-10"))
        .unwrap()
        .unwrap();
    assert_eq!(payment.amount, dec(6000));
    assert_eq!(payment.payment_type, PaymentType::Settlement);

    let loan = ledger.loan(id).unwrap();
    assert_eq!(loan.remaining_amount, Decimal::ZERO);
    assert_eq!(loan.status, LoanStatus::Completed);
    assert_eq!(loan.history.len(), 4);
    assert_eq!(loan.paid_amount(), dec(12000));
}

/// The payroll run previews the deduction; posting it afterwards leaves a
/// recomputed month byte-identical.
#[test]
fn payroll_recompute_after_posting_is_identical() {
    let employees = vec![create_employee("EMP001")];
    let mut attendance = HashMap::new();
    attendance.insert("EMP001".to_string(), present_month(31));
    let config = StatutoryConfig::default();
    let m = month("2025-07");

    let mut ledger = AdvanceLedger::new();
    ledger.create_loan("EMP001", dec(12000), 6, m).unwrap();

    let before = run_employee_payroll(m, &employees, &attendance, &ledger, &config);
    assert_eq!(before.records[0].advance_deduction, dec(2000));

    let posted = ledger.process_employee_month("EMP001", m).unwrap();
    assert_eq!(posted.total, dec(2000));

    let after = run_employee_payroll(m, &employees, &attendance, &ledger, &config);
    assert_eq!(before.records, after.records);

    // The next month moves on to the next EMI against the new balance.
    let next = run_employee_payroll(m.succ(), &employees, &attendance, &ledger, &config);
    assert_eq!(next.records[0].advance_deduction, dec(2000));
    assert_eq!(ledger.loan(posted.details[0].loan_id).unwrap().remaining_amount, dec(10000));
}

#[test]
fn six_month_projection_feeds_advance_reporting() {
    let mut ledger = AdvanceLedger::new();
    ledger
        .create_loan("EMP001", dec(12000), 6, month("2025-07"))
        .unwrap();
    ledger
        .create_loan("EMP001", dec(3000), 2, month("2025-09"))
        .unwrap();

    let projection = ledger.project_upcoming("EMP001", month("2025-07"), 6);
    let amounts: Vec<Decimal> = projection.iter().map(|p| p.amount).collect();

    // First loan: 2000/month from July. Second: 1500/month in Sep and Oct.
    assert_eq!(
        amounts,
        vec![
            dec(2000),
            dec(2000),
            dec(3500),
            dec(3500),
            dec(2000),
            dec(2000)
        ]
    );
}

// =============================================================================
// Property tests
// =============================================================================

fn day_status_strategy() -> impl Strategy<Value = DayStatus> {
    prop_oneof![
        Just(DayStatus::Present),
        Just(DayStatus::Absent),
        Just(DayStatus::Off),
        Just(DayStatus::Overtime),
        Just(DayStatus::PresentWithOvertime),
        Just(DayStatus::Unset),
    ]
}

proptest! {
    /// The off credits always sum to the allowance when offs stay within
    /// it, and classification loses no days.
    #[test]
    fn prop_off_credit_sums_to_allowance(
        days in prop::collection::vec(day_status_strategy(), 28..=31)
    ) {
        let summary = summarize_attendance(&days);
        prop_assert_eq!(summary.total_days() as usize, days.len());

        let working = calculate_working_days(&summary, 4);
        if summary.off_days <= 4 {
            prop_assert_eq!(working.paid_off_days + working.unused_paid_offs, 4);
        } else {
            prop_assert_eq!(working.paid_off_days, 4);
            prop_assert_eq!(working.unused_paid_offs, 0);
        }
        prop_assert_eq!(
            working.total_payable_days,
            working.base_working_days + working.overtime_day_count
        );
    }

    /// An employee who opted out of PF never has a PF deduction, whatever
    /// the salary.
    #[test]
    fn prop_pf_opt_out_is_always_zero(basic in 1i64..200_000) {
        let mut employee = create_employee("EMP001");
        employee.basic_salary = dec(basic);
        employee.has_pf = false;

        let days = present_month(31);
        let summary = summarize_attendance(&days);
        let working = calculate_working_days(&summary, 4);
        let record = calculate_employee_pay(
            &employee,
            month("2025-07"),
            &summary,
            &working,
            Decimal::ZERO,
            Decimal::ZERO,
            &StatutoryConfig::default(),
        ).unwrap();

        prop_assert_eq!(record.pf, Decimal::ZERO);
        prop_assert_eq!(record.total_deductions, record.esic + record.pt);
    }

    /// The wage calculator is a pure function: identical inputs give
    /// identical records.
    #[test]
    fn prop_wage_calculation_is_idempotent(
        basic in 1i64..100_000,
        days in prop::collection::vec(day_status_strategy(), 31..=31)
    ) {
        let mut employee = create_employee("EMP001");
        employee.basic_salary = dec(basic);

        let summary = summarize_attendance(&days);
        let working = calculate_working_days(&summary, 4);
        let config = StatutoryConfig::default();

        let first = calculate_employee_pay(
            &employee, month("2025-07"), &summary, &working,
            dec(1000), dec(500), &config,
        ).unwrap();
        let second = calculate_employee_pay(
            &employee, month("2025-07"), &summary, &working,
            dec(1000), dec(500), &config,
        ).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Conservation: total == remaining + collected after every posting,
    /// and the loan completes exactly when the balance hits zero.
    #[test]
    fn prop_loan_conservation(
        amount in 1i64..100_000,
        months in 1u32..24,
        postings in 1u32..30
    ) {
        let mut ledger = AdvanceLedger::new();
        let start = month("2025-01");
        let id = ledger.create_loan("EMP001", dec(amount), months, start).unwrap();

        let mut m = start;
        for _ in 0..postings {
            ledger.process_month_deduction(id, m).unwrap();
            let loan = ledger.loan(id).unwrap();
            prop_assert_eq!(
                loan.total_amount,
                loan.remaining_amount + loan.paid_amount()
            );
            prop_assert!(loan.verify());
            prop_assert_eq!(
                loan.status == LoanStatus::Completed,
                loan.remaining_amount == Decimal::ZERO
            );
            m = m.succ();
        }
    }

    /// Settlement empties the loan in the target month regardless of the
    /// EMI or how many installments already ran.
    #[test]
    fn prop_settlement_completes_loan(
        amount in 100i64..50_000,
        months in 2u32..12,
        paid_installments in 0u32..6
    ) {
        let mut ledger = AdvanceLedger::new();
        let start = month("2025-01");
        let id = ledger.create_loan("EMP001", dec(amount), months, start).unwrap();

        let mut m = start;
        for _ in 0..paid_installments {
            ledger.process_month_deduction(id, m).unwrap();
            m = m.succ();
        }

        if ledger.loan(id).unwrap().is_active() {
            ledger.request_settlement(id, m).unwrap();
            ledger.process_month_deduction(id, m).unwrap();
        }

        let loan = ledger.loan(id).unwrap();
        prop_assert_eq!(loan.status, LoanStatus::Completed);
        prop_assert_eq!(loan.remaining_amount, Decimal::ZERO);
        prop_assert_eq!(loan.paid_amount(), dec(amount));
    }
}
