#![no_main]
use libfuzzer_sys::fuzz_target;
use timehash::{after, before, shift, TimeHashError};

fuzz_target!(|input: (&str, i64)| {
    let (hash, steps) = input;

    // Single steps are inverse to each other wherever both exist
    if let Ok(next) = after(hash) {
        assert_eq!(before(&next).as_deref(), Ok(hash));
        assert!(next.as_str() > hash);
    }
    if let Ok(previous) = before(hash) {
        assert_eq!(after(&previous).as_deref(), Ok(hash));
    }

    match shift(hash, steps) {
        Ok(moved) => {
            assert_eq!(moved.len(), hash.len());
            if let Some(back) = steps.checked_neg() {
                assert_eq!(shift(&moved, back).as_deref(), Ok(hash));
            }
        }
        Err(TimeHashError::DomainUnderflow { .. }) => assert!(steps < 0),
        Err(TimeHashError::DomainOverflow { .. }) => assert!(steps > 0),
        Err(_) => {}
    }
});
