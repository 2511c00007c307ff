/// loan comparison - the same request under each repayment system
use loan_amortization_rs::{Account, LoanFactory, Money, Rate, TransactionOutcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let account = Account::shared("mauricio", Money::from_major(1_000))?;

    // rejected operations are reported, not fatal
    let deposit = account.borrow_mut().deposit(Money::from_major(500));
    report(deposit);
    let withdrawal = account.borrow_mut().withdraw(Money::from_major(50_000));
    report(withdrawal);
    println!("{}", account.borrow());

    let requested = Money::from_major(10_000);
    let rate = Rate::from_percentage(3);

    for kind in ["alemán", "americano", "francés"] {
        let loan = LoanFactory::create(kind, account.clone(), rate, 12)?;
        let info = loan.summary(requested)?;

        println!("\n==========================");
        println!("type: {} (strategy: {})", info.loan_type, info.strategy);
        println!("account balance: {:.2}", account.borrow().balance());
        println!("requested: {:.2}", requested);
        println!("approved: {:.2} ({:?})", info.approved_principal, info.approval);
        println!("rate: {} per period - term: {} periods", info.rate, info.periods);
        println!("total paid: {:.2} | total interest: {:.2}", info.total_paid, info.total_interest);

        println!("first periods:");
        for row in info.preview(3) {
            println!(
                "  t={:02} | payment={:.2} (interest={:.2}, amort={:.2}) remaining={:.2}",
                row.period, row.payment, row.interest, row.amortization, row.remaining
            );
        }
    }

    Ok(())
}

fn report(outcome: TransactionOutcome) {
    if let TransactionOutcome::Rejected { reason } = outcome {
        println!("notice: {}", reason);
    }
}
