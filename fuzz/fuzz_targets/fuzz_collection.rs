#![no_main]

use libfuzzer_sys::fuzz_target;
use payday::*;

fuzz_target!(|data: &[u8]| {
    let Ok(records) = serde_json::from_slice::<Vec<serde_json::Value>>(data) else {
        return;
    };
    let Ok(eur) = Currency::from_code("EUR") else {
        return;
    };
    // Any collection must aggregate without panicking.
    let report = CollectionAggregator::new(&Cash::new(&eur)).report(&records);
    assert!(report.lines.iter().all(|line| line.count > 0));
});
