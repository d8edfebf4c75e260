#![no_main]
use libfuzzer_sys::fuzz_target;
use timehash::{decode_exactly, encode, validate, TimeHash};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Never panics; accepts exactly what validate accepts
    let decoded = decode_exactly(s);
    assert_eq!(decoded.is_ok(), validate(s));

    if let Ok((value, error)) = decoded {
        assert!(error > 0.0);
        // The centre of a window encodes back to the same hash
        assert_eq!(encode(value, s.len()).ok().as_deref(), Some(s));

        let parsed = TimeHash::parse(s).expect("validated hash parses");
        assert!(parsed.contains(value));
    }
});
