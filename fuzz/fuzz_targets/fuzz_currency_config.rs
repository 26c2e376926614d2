#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic: invalid configurations are errors, not crashes.
        if let Ok(config) = payday::CurrencyConfig::from_json(s) {
            if let Ok(currency) = payday::Currency::from_config(config) {
                let _ = payday::Cash::new(&currency).breakdown(rust_decimal::Decimal::new(123_456, 2));
            }
        }
    }
});
