use payday::core::*;
use rust_decimal_macros::dec;

// --- Built-in table ---

#[test]
fn euro_from_table() {
    let eur = Currency::from_code("EUR").unwrap();
    assert_eq!(eur.code(), "EUR");
    assert_eq!(eur.coins().len(), 8);
    assert_eq!(eur.notes().len(), 7);
    assert_eq!(
        eur.denominations(),
        vec![50_000, 20_000, 10_000, 5_000, 2_000, 1_000, 500, 200, 100, 50, 20, 10, 5, 2, 1]
    );
}

#[test]
fn unknown_code() {
    let err = Currency::from_code("XYZ").unwrap_err();
    assert_eq!(err, CurrencyError::UnknownCode("XYZ".into()));
    assert_eq!(err.to_string(), "unknown currency code: XYZ");
}

#[test]
fn supported_list() {
    let codes: Vec<&str> = supported_currencies().collect();
    assert_eq!(codes, vec!["CHF", "EUR", "GBP", "JPY", "USD"]);
}

#[test]
fn table_currencies_classify_every_denomination() {
    for code in supported_currencies() {
        let currency = Currency::from_code(code).unwrap();
        let units = currency.denominations();
        assert_eq!(units.len(), currency.coins().len() + currency.notes().len());
        for unit in units {
            let kind = currency.classify(unit);
            assert!(kind.is_known(), "{code}: {unit} classified as {kind}");
        }
    }
}

#[test]
fn usd_dollar_is_a_note() {
    let usd = Currency::from_code("USD").unwrap();
    assert_eq!(usd.classify(100), DenominationKind::Note);
    assert_eq!(usd.classify(25), DenominationKind::Coin);
}

// --- Custom configuration ---

#[test]
fn custom_currency() {
    let config = CurrencyConfig {
        code: "XTS".into(),
        coins: vec![dec!(0.10), dec!(1)],
        notes: vec![dec!(10)],
    };
    let currency = Currency::from_config(config.clone()).unwrap();
    assert_eq!(currency.to_config(), config);
    assert_eq!(currency.to_string(), "XTS");
    assert_eq!(currency.denominations(), vec![1000, 100, 10]);
    assert_eq!(currency.classify(1), DenominationKind::Unknown(1));
}

#[test]
fn construction_errors_name_the_value() {
    let err = Currency::new("XTS", vec![dec!(0.001)], vec![dec!(5)]).unwrap_err();
    assert_eq!(err.to_string(), "XTS: denomination 0.001 is not a whole number of cents");

    let err = Currency::new("XTS", vec![dec!(1)], vec![dec!(0)]).unwrap_err();
    assert_eq!(err.to_string(), "XTS: denomination 0 must be positive");

    let err = Currency::new("XTS", vec![dec!(5)], vec![dec!(5)]).unwrap_err();
    assert_eq!(err.to_string(), "XTS: denomination 5 is listed more than once");
}

#[test]
fn trailing_zeros_are_not_sub_cent() {
    let currency = Currency::new("XTS", vec![dec!(0.5000)], vec![dec!(5.000)]).unwrap();
    assert_eq!(currency.denominations(), vec![500, 50]);
}

#[test]
fn huge_value_out_of_range() {
    let err = Currency::new("XTS", vec![dec!(1)], vec![rust_decimal::Decimal::MAX]).unwrap_err();
    assert!(matches!(err, CurrencyError::OutOfRange { .. }));
}

#[cfg(feature = "json")]
#[test]
fn config_from_json() {
    let config = CurrencyConfig::from_json(
        r#"{"code": "EUR", "coins": [0.01, 0.02, "0.05"], "notes": [5, 10]}"#,
    )
    .unwrap();
    assert_eq!(config.coins, vec![dec!(0.01), dec!(0.02), dec!(0.05)]);
    assert_eq!(config.notes, vec![dec!(5), dec!(10)]);
    assert!(Currency::from_config(config).is_ok());
}

#[cfg(feature = "json")]
#[test]
fn config_from_bad_json() {
    let err = CurrencyConfig::from_json(r#"{"code": "EUR", "coins": "lots"}"#).unwrap_err();
    assert!(matches!(err, CurrencyError::Parse(_)));
}
