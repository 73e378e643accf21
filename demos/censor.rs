use badlang::validate;

fn main() {
    let forbidden = ["спам", "дурак"];

    // Clean text is unaffected (except for spacing around punctuation).
    show("Привет , мир!", &forbidden);

    // Forbidden words are masked.
    show("Это спам.", &forbidden);

    // So are their inflected forms.
    show("Хватит слать спамом, дураками!", &forbidden);

    // And near misspellings.
    show("Ну ты и дуррак", &forbidden);
}

fn show(text: &str, forbidden: &[&str]) {
    let (redacted, violation) = validate(text, forbidden, 0.8).unwrap();
    println!("{} -> {} ({})", text, redacted, violation);
}
