use diceware_wordlist::{DiceCode, WordlistConfig, WordlistError, MAX_WORDS};

#[test]
fn test_default_config() {
    let config = WordlistConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.alphabet.len(), 29);
    assert_eq!(config.alphabet[26..], ['æ', 'ø', 'å']);
    assert_eq!(config.max_words, MAX_WORDS);
    assert_eq!((config.min_word_length, config.max_word_length), (4, 9));
    assert!(config.is_excluded_category("PROPN"));
    assert!(!config.is_excluded_category("noun"));
    assert!(config.has_forbidden_char("a.b"));
    assert!(!config.has_forbidden_char("blåbær"));
}

#[test]
fn test_length_range() {
    let config = WordlistConfig::new().with_word_length(2, 3);
    assert!(!config.accepts_length(1));
    assert!(config.accepts_length(2));
    assert!(config.accepts_length(3));
    assert!(!config.accepts_length(4));
}

#[test]
fn test_rejects_empty_alphabet() {
    let config = WordlistConfig::default().with_alphabet("");
    assert!(matches!(config.validate(), Err(WordlistError::Config(_))));
}

#[test]
fn test_rejects_duplicate_letters() {
    let config = WordlistConfig::default().with_alphabet("abca");
    assert!(matches!(config.validate(), Err(WordlistError::Config(_))));
}

#[test]
fn test_rejects_bad_lengths() {
    assert!(WordlistConfig::default().with_word_length(6, 5).validate().is_err());
    assert!(WordlistConfig::default().with_word_length(0, 5).validate().is_err());
    assert!(WordlistConfig::default().with_word_length(5, 5).validate().is_ok());
}

#[test]
fn test_rejects_oversized_target() {
    let config = WordlistConfig::default().with_max_words(DiceCode::CAPACITY + 1);
    assert!(config.validate().is_err());
    let config = WordlistConfig::default().with_max_words(DiceCode::CAPACITY);
    assert!(config.validate().is_ok());
}
