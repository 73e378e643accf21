#![no_main]
use badlang::{Similarity, Validator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if !data.is_empty() {
        let flags = data[0];
        let input = &data[1..];

        if let Ok(text) = std::str::from_utf8(input) {
            let forbidden: Vec<&str> = text.split_whitespace().step_by(3).collect();

            let mut validator = Validator::new();
            validator
                .with_strip_accents(flag(flags, 0))
                .with_similarity(if flag(flags, 1) {
                    Similarity::QuickRatio
                } else {
                    Similarity::JaroWinkler
                })
                .with_censor_replacement(if flag(flags, 2) { '#' } else { '*' });
            let _ = validator.with_threshold((flags >> 3) as f64 / 31.0);

            let validation = validator.validate(text, &forbidden).unwrap();
            assert_eq!(
                validator.clean(text, &forbidden).is_err(),
                validation.has_violation()
            );
        }
    }
});

fn flag(flags: u8, index: u8) -> bool {
    ((flags >> index) & 1) == 1
}
