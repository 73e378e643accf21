use badlang::{DictionaryLemmatizer, ForbiddenWords, Rejection, Similarity, Validator};

fn main() {
    let forbidden = ForbiddenWords::from_lines("# moderated list\nидти\n").unwrap();

    let mut validator = Validator::new();
    validator
        .with_lemmatizer(DictionaryLemmatizer::from_lines("шла,идти\nпошел,идти").unwrap())
        .with_similarity(Similarity::NormalizedLevenshtein)
        .with_censor_replacement('#')
        .with_strip_accents(true)
        .with_threshold(0.9)
        .unwrap();

    let rejection = validator
        .clean("Она шла, он пошёл.", forbidden.as_slice())
        .unwrap_err();

    assert_eq!(rejection.redacted(), Some("Она ###, он #####."));
    assert!(matches!(rejection, Rejection::BadLanguage { .. }));
    println!("{}", rejection);
}
