#![no_main]
use libfuzzer_sys::fuzz_target;
use timehash::{decode_exactly, encode, TimeDomain, ALPHABET, MAX_PRECISION};

fuzz_target!(|input: (f64, u8)| {
    let (timestamp, raw_precision) = input;
    let precision = usize::from(raw_precision) % (MAX_PRECISION + 2);

    let Ok(hash) = encode(timestamp, precision) else {
        return;
    };
    assert_eq!(hash.len(), precision);
    assert!(hash.bytes().all(|b| ALPHABET.contains(&b)));

    if TimeDomain::STANDARD.contains(timestamp) {
        let (value, error) = decode_exactly(&hash).expect("encoded hash decodes");
        assert!((value - timestamp).abs() <= error);
    }
});
