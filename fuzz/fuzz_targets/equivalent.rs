#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_equiv::{equivalent, try_equivalent};

fuzz_target!(|data: (&str, &str)| {
    let (a, b) = data;

    assert_eq!(equivalent(a, b), equivalent(b, a));
    assert_eq!(equivalent(a, a), !a.is_empty());

    match try_equivalent(a, b) {
        Ok(eq) => assert_eq!(eq, equivalent(a, b)),
        Err(_) => assert!(a.is_empty() || b.is_empty()),
    }
});
