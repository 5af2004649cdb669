//! Batch buy-back estimates for a roster CSV
//!
//! Reads a roster of veterans, runs every estimate in parallel, and
//! writes one result row per employee.

use anyhow::Context;
use benefits_engine::{load_roster, RosterRunner};
use chrono::{Local, NaiveDate};
use clap::Parser;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Run buy-back estimates for a roster CSV")]
struct Args {
    /// Roster CSV to process
    roster: PathBuf,

    /// Directory holding military_pay.csv and composite_rates.csv
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Accrual cutoff date (defaults to today)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Output CSV path
    #[arg(long, default_value = "roster_results.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading roster from {}...", args.roster.display());

    let entries = load_roster(&args.roster)
        .with_context(|| format!("failed to load roster {}", args.roster.display()))?;
    println!("Loaded {} employees in {:?}", entries.len(), start.elapsed());

    let runner = match &args.tables {
        Some(dir) => RosterRunner::from_csv_path(dir)
            .with_context(|| format!("failed to load tables from {}", dir.display()))?,
        None => RosterRunner::new(),
    };
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());

    println!("Running estimates as of {}...", as_of);
    let calc_start = Instant::now();

    // Run estimates in parallel
    let results: Vec<_> = entries
        .par_iter()
        .map(|entry| (entry.employee_id, runner.run(&entry.input, as_of)))
        .collect();

    println!("Estimates complete in {:?}", calc_start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    writeln!(file, "EmployeeID,TotalService,BaseDeposit,Interest,DepositTotal,MonthlyPayment,AnnuityIncrease,BreakEvenYears,LifetimeBenefit,Tier")?;

    for (employee_id, result) in &results {
        writeln!(
            file,
            "{},{:.4},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:?}",
            employee_id,
            result.total_military_service,
            result.base_deposit,
            result.interest_amount,
            result.deposit_amount,
            result.monthly_payment_option,
            result.annuity_increase,
            result.break_even_years,
            result.lifetime_benefit,
            result.tier,
        )?;
    }

    println!("Output written to {}", args.output.display());

    // Print summary stats
    let total_deposits: f64 = results.iter().map(|(_, r)| r.deposit_amount).sum();
    let total_interest: f64 = results.iter().map(|(_, r)| r.interest_amount).sum();
    let mean_break_even = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|(_, r)| r.break_even_years).sum::<f64>() / results.len() as f64
    };

    println!("\nRoster Summary:");
    println!("  Employees: {}", results.len());
    println!("  Total Deposits: ${:.2}", total_deposits);
    println!("  Total Interest: ${:.2}", total_interest);
    println!("  Mean Break-Even: {:.1} years", mean_break_even);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
