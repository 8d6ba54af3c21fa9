//! Property Projection CLI
//!
//! Runs a single projection and prints the summary panel and yearly table

use anyhow::{Context, Result};
use clap::Parser;
use property_projection::{LoanInputs, ProjectionEngine};

#[derive(Debug, Parser)]
#[command(version, about = "Loan amortization and rental wealth projection")]
struct Args {
    /// Purchase price
    #[arg(long, default_value_t = 31_200_000.0)]
    price: f64,

    /// Down payment
    #[arg(long, default_value_t = 5_000_000.0)]
    down_payment: f64,

    /// Annual interest rate (%)
    #[arg(long, default_value_t = 8.25)]
    interest_rate: f64,

    /// Loan tenure (years)
    #[arg(long, default_value_t = 20)]
    loan_tenure: u32,

    /// Monthly rent in year 1
    #[arg(long, default_value_t = 170_000.0)]
    monthly_rent: f64,

    /// Annual rent escalation (%)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    rent_escalation: f64,

    /// Annual property tax
    #[arg(long, default_value_t = 95_000.0)]
    property_tax: f64,

    /// Annual property appreciation (%)
    #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
    property_appreciation: f64,

    /// Print the full result as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Write the yearly dataset to this CSV file
    #[arg(long)]
    output: Option<std::path::PathBuf>,

    /// Also print the monthly amortization schedule
    #[arg(long)]
    schedule: bool,
}

impl Args {
    fn inputs(&self) -> LoanInputs {
        LoanInputs {
            price: self.price,
            down_payment: self.down_payment,
            interest_rate: self.interest_rate,
            loan_tenure: self.loan_tenure,
            monthly_rent: self.monthly_rent,
            rent_escalation: self.rent_escalation,
            property_tax: self.property_tax,
            property_appreciation: self.property_appreciation,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let engine = ProjectionEngine::new(args.inputs());
    let result = engine.compute().context("Invalid inputs")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let summary = result.summary();
        println!("Property Projection v0.1.0");
        println!("==========================\n");
        println!("  Monthly EMI:          {:>16.2}", summary.monthly_emi);
        println!("  Total Interest:       {:>16.2}", summary.total_interest);
        println!("  Total Paid:           {:>16.2}", summary.total_paid);
        println!("  Total Rental:         {:>16.2}", summary.total_rental);
        println!("  Total Tax:            {:>16.2}", summary.total_tax);
        println!("  Total Out-of-Pocket:  {:>16.2}", summary.total_out_of_pocket);
        println!("  Final Property Value: {:>16.2}", summary.final_property_value);
        println!("  Net Wealth Gain:      {:>16.2}", summary.net_wealth_gain);
        match summary.break_even_year {
            Some(year) => println!("  Break-even Year:      {:>16}", year),
            None => println!("  Break-even Year:      {:>16}", "none"),
        }
        if let Some(irr) = result.equity_irr() {
            println!("  Equity IRR:           {:>15.2}%", irr * 100.0);
        }
        println!();

        println!("{:>4} {:>16} {:>14} {:>14} {:>14} {:>14} {:>8} {:>16}",
            "Year", "Principal Left", "Interest", "EMI", "Rental", "Out-of-Pocket", "Yield%", "Net Position");
        println!("{}", "-".repeat(108));
        for row in result.dataset.rows() {
            println!("{:>4} {:>16.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>8.2} {:>16.2}",
                row.year,
                row.principal_remaining,
                row.yearly_interest,
                row.yearly_emi,
                row.yearly_rental_income,
                row.out_of_pocket_emi,
                row.rental_yield,
                row.net_position,
            );
        }
    }

    if args.schedule {
        println!("\n{:>5} {:>14} {:>14} {:>14} {:>16}", "Month", "EMI", "Interest", "Principal", "Remaining");
        println!("{}", "-".repeat(67));
        for month in engine.amortization_schedule()? {
            println!("{:>5} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
                month.month, month.emi, month.interest, month.principal, month.remaining_principal);
        }
    }

    if let Some(path) = &args.output {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        for row in result.dataset.rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        println!("\nYearly dataset written to: {}", path.display());
    }

    Ok(())
}
