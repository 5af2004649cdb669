//! Benefits Engine CLI
//!
//! Command-line walkthrough of a single veteran's buy-back estimate

use benefits_engine::{
    calculate_mra, calculate_sick_leave, BuyBackEngine, GradePeriod, MilitaryBuyBackInput,
    MraInput, RateTables, RetirementPlan, SickLeaveInput,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn main() {
    env_logger::init();

    println!("Benefits Engine v0.1.0");
    println!("======================\n");

    // Sample veteran - Army E-6, separated 2016, now a FERS employee
    let input = MilitaryBuyBackInput {
        branch: "army".to_string(),
        pay_entry_date: date(2008, 6, 15),
        separation_date: date(2016, 3, 1),
        separation_grade: "e6".to_string(),
        fed_start_date: date(2016, 4, 15),
        retirement_plan: RetirementPlan::Fers,
        years_to_retirement: 10.0,
        annual_base_pay: 88_000.0,
        grade_periods: Some(vec![
            GradePeriod {
                grade: "e3".to_string(),
                from_date: date(2008, 6, 15),
                to_date: date(2011, 6, 15),
            },
            GradePeriod {
                grade: "e5".to_string(),
                from_date: date(2011, 6, 15),
                to_date: date(2014, 6, 15),
            },
            GradePeriod {
                grade: "e6".to_string(),
                from_date: date(2014, 6, 15),
                to_date: date(2016, 3, 1),
            },
        ]),
    };

    println!("Veteran: {} / {}", input.branch, input.separation_grade);
    println!("  Service: {} to {}", input.pay_entry_date, input.separation_date);
    println!("  Federal start: {}", input.fed_start_date);
    println!("  Plan: {}", input.retirement_plan.as_str());
    println!("  Current salary: ${:.2}", input.annual_base_pay);
    println!();

    let engine = BuyBackEngine::new(RateTables::default_published());
    let result = engine.calculate(&input);

    println!("Buy-Back Estimate:");
    println!("  Military Service: {:.2} years", result.total_military_service);
    println!("  Base Deposit: ${:.2}", result.base_deposit);
    println!("  Accrued Interest: ${:.2}", result.interest_amount);
    println!("  Total Deposit: ${:.2}", result.deposit_amount);
    println!("  Monthly Payment ({}y): ${:.2}",
        input.years_to_retirement, result.monthly_payment_option);
    println!("  Annuity Increase: ${:.2}/year", result.annuity_increase);
    println!("  Break-Even: {:.1} years", result.break_even_years);
    println!("  Lifetime Benefit: ${:.2}", result.lifetime_benefit);

    if let Some(breakdown) = &result.period_breakdown {
        println!("\nDeposit by Grade Period:");
        for period in breakdown {
            println!("  {:>4}: {:>5.2} years  ${:>10.2}",
                period.grade, period.years, period.deposit);
        }
    }

    println!("\n{}", result.recommendation);

    // MRA for the same veteran
    let mra = calculate_mra(&MraInput {
        date_of_birth: date(1968, 9, 20),
        start_date: input.fed_start_date,
        has_military_service: true,
        has_special_provisions: false,
    });

    println!("\nMinimum Retirement Age:");
    println!("  MRA: {}y {}m", mra.mra_years, mra.mra_months);
    println!("  Eligible: {}", mra.retirement_eligibility_date);
    println!("  Service Needed: {}y {}m",
        mra.years_of_service_needed, mra.months_of_service_needed);
    println!("  Can retire at: {}", mra.can_retire_at);

    // Sick leave balance carried into retirement
    let sick = calculate_sick_leave(&SickLeaveInput {
        hours: 1250.0,
        current_salary: Some(input.annual_base_pay),
    });

    println!("\nSick Leave Credit (1250.0 hours):");
    println!("  Days: {}", sick.days_equivalent);
    println!("  Credit: {}y {}m", sick.years_credit, sick.months_credit);
    println!("  Pension Increase: {}", sick.pension_increase_percent);
    println!("  Estimated Benefit: ${:.2}/year", sick.estimated_annual_benefit);
}
