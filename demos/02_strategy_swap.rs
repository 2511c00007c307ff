/// strategy swap - change how a loan repays without touching its limit
use loan_amortization_rs::{Account, Annuity, InterestOnly, LoanBuilder, LoanKind, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let account = Account::shared("ana", Money::from_major(2_000))?;
    let mut loan = LoanBuilder::new()
        .kind(LoanKind::ConstantAmortization)
        .account(account.clone())
        .rate(Rate::from_bps(150))
        .periods(6)
        .build()?;

    let requested = Money::from_major(3_000);
    print_schedule("constant amortization", &loan.summary(requested)?);

    loan.set_strategy(Box::new(InterestOnly));
    print_schedule("interest only", &loan.summary(requested)?);

    loan.set_strategy(Box::new(Annuity));
    print_schedule("annuity", &loan.summary(requested)?);

    // the limit follows the live balance
    account.borrow_mut().try_withdraw(Money::from_major(1_500))?;
    let approval = loan.approve(requested)?;
    println!(
        "\nafter withdrawal: max {:.2}, approved {:.2}, shortfall {:.2}",
        approval.max_allowed,
        approval.approved,
        approval.shortfall()
    );

    for event in loan.take_events() {
        println!("event: {:?}", event);
    }

    Ok(())
}

fn print_schedule(title: &str, summary: &loan_amortization_rs::LoanSummary) {
    println!("\n{} ({})", title, summary.strategy);
    println!("{:-<60}", "");
    for row in &summary.schedule {
        println!(
            "{:>3} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            row.period, row.payment, row.interest, row.amortization, row.remaining
        );
    }
    println!("total paid {:.2}, interest {:.2}", summary.total_paid, summary.total_interest);
}
