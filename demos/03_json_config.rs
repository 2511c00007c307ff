/// json config - quote several loans from a document
use loan_amortization_rs::QuoteConfig;

const DOCUMENT: &str = r#"{
    "owner": "luna",
    "balance": "800",
    "requested_principal": "5000",
    "deposits": ["200"],
    "loans": [
        { "kind": "German", "interest_rate": "0.02", "periods": 6 },
        { "kind": " AMERICANO ", "interest_rate": "0.02", "periods": 6 },
        { "kind": "Francés", "interest_rate": "0", "periods": 6 }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = QuoteConfig::from_json(DOCUMENT)?;
    for summary in config.quote()? {
        println!(
            "{:<26} approved {:>8.2}  paid {:>8.2}  interest {:>7.2}",
            summary.loan_type, summary.approved_principal, summary.total_paid, summary.total_interest
        );
    }

    Ok(())
}
