use payday::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn eur() -> Currency {
    Currency::from_code("EUR").unwrap()
}

fn paid(lines: &[BreakdownLine]) -> Vec<(i64, u64)> {
    lines
        .iter()
        .filter(|line| line.count > 0)
        .map(|line| (line.denomination, line.count))
        .collect()
}

fn tiled(lines: &[BreakdownLine]) -> i64 {
    lines
        .iter()
        .map(|line| line.denomination * line.count as i64)
        .sum()
}

// --- Single amounts ---

#[test]
fn payslip_breakdown() {
    let eur = eur();
    let cash = Cash::new(&eur);
    let lines = cash.breakdown(dec!(1888.88));
    assert_eq!(
        paid(&lines),
        vec![
            (50_000, 3),
            (20_000, 1),
            (10_000, 1),
            (5_000, 1),
            (2_000, 1),
            (1_000, 1),
            (500, 1),
            (200, 1),
            (100, 1),
            (50, 1),
            (20, 1),
            (10, 1),
            (5, 1),
            (2, 1),
            (1, 1),
        ]
    );
    assert_eq!(tiled(&lines), 188_888);
}

#[test]
fn one_line_per_denomination() {
    let eur = eur();
    let cash = Cash::new(&eur);
    let lines = cash.breakdown(dec!(42.42));
    assert_eq!(lines.len(), eur.coins().len() + eur.notes().len());
    let order: Vec<i64> = lines.iter().map(|line| line.denomination).collect();
    assert_eq!(order, eur.denominations());
}

#[test]
fn zero_amount_all_zero_lines() {
    let eur = eur();
    let lines = Cash::new(&eur).breakdown(Decimal::ZERO);
    assert_eq!(lines.len(), 15);
    assert!(lines.iter().all(|line| line.count == 0));
}

#[test]
fn calls_do_not_leak_state() {
    let eur = eur();
    let cash = Cash::new(&eur);
    let first = cash.breakdown(dec!(987.65));
    let second = cash.breakdown(dec!(12.30));
    assert_eq!(second, Cash::new(&eur).breakdown(dec!(12.30)));
    assert_eq!(tiled(&second), 1230);
    assert_eq!(first, cash.breakdown(dec!(987.65)));
}

#[test]
fn largest_denomination_multiple_times() {
    let eur = eur();
    let lines = Cash::new(&eur).breakdown(dec!(10000));
    assert_eq!(paid(&lines), vec![(50_000, 20)]);
}

#[test]
fn configuration_order_does_not_matter() {
    let shuffled = Currency::new(
        "XTS",
        vec![dec!(2), dec!(0.01), dec!(1), dec!(0.50)],
        vec![dec!(50), dec!(5), dec!(20)],
    )
    .unwrap();
    let lines = Cash::new(&shuffled).breakdown(dec!(78.51));
    assert_eq!(
        paid(&lines),
        vec![(5_000, 1), (2_000, 1), (500, 1), (200, 1), (100, 1), (50, 1), (1, 1)]
    );
}

#[test]
fn engine_exposes_working_order() {
    let usd = Currency::from_code("USD").unwrap();
    let cash = Cash::new(&usd);
    assert_eq!(cash.currency().code(), "USD");
    assert_eq!(cash.denominations(), &[10_000, 5_000, 2_000, 1_000, 500, 200, 100, 50, 25, 10, 5, 1]);
    assert_eq!(paid(&cash.breakdown(dec!(0.41))), vec![(25, 1), (10, 1), (5, 1), (1, 1)]);
}

#[test]
fn engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cash<'static>>();
}
