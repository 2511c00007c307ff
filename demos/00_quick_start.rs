/// quick start - minimal example to get started
use loan_amortization_rs::{Account, LoanFactory, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // an account with $1,000 backs an annuity loan at 3% per month
    let account = Account::shared("mauricio", Money::from_major(1_000))?;
    let loan = LoanFactory::create("annuity", account, Rate::from_percentage(3), 12)?;

    // ask for $10,000; the approval is bounded by 3x the balance
    let summary = loan.summary(Money::from_major(10_000))?;

    println!("{}", summary.to_json_pretty()?);

    Ok(())
}
