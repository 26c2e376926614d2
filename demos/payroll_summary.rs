use payday::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=payday=debug shows defaulted records and dropped residue
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let eur = Currency::from_code("EUR").expect("EUR is in the built-in table");
    let cash = Cash::new(&eur);

    let payroll = vec![
        json!({"employee": "Employee 1", "amount": 1523.17}),
        json!({"employee": "Employee 2", "amount": 1874.50}),
        json!({"employee": "Employee 3", "amount": 1009.99}),
        json!({"employee": "Employee 4", "amount": "n/a"}),
    ];

    println!("Payroll ({})", eur.code());
    for row in &payroll {
        println!(
            "  {:<12} {:>10}",
            row["employee"].as_str().unwrap_or("?"),
            row["amount"].to_string()
        );
    }

    let report = CollectionAggregator::new(&cash).report(&payroll);

    println!();
    println!("Breakdown");
    for line in &report.lines {
        println!(
            "  {:>5} x {:>7.2}  {:<4}  {:>10.2}",
            line.count, line.denomination, line.kind, line.amount
        );
    }
    println!();
    println!("  {}", report.summary);
    if report.defaulted > 0 {
        println!("  {} of {} records had no usable amount", report.defaulted, report.records);
    }
}
