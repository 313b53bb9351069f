#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_equiv::pct_enc::decode;

fuzz_target!(|data: &str| {
    let decoded = decode(data);

    // Each escape shrinks from three bytes to at most one byte per octet.
    assert!(decoded.len() <= data.len());

    if !data.contains('%') {
        assert_eq!(decoded, data);
    }
});
