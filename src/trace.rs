use badlang::Validator;
use std::env::args;

pub fn main() {
    let mut args = args().skip(1);
    let forbidden: Vec<String> = args
        .next()
        .map(|words| words.split(',').map(|w| w.trim().to_owned()).collect())
        .unwrap_or_default();
    let input = args.collect::<Vec<_>>().join(" ");

    match Validator::new().validate(&input, &forbidden) {
        Ok(validation) => {
            println!(
                "\"{}\" -> \"{}\" ({})",
                input,
                validation.redacted,
                validation.has_violation()
            );
            for detection in &validation.detections {
                println!("  {}", detection);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
