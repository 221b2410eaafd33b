use diceware_wordlist::{number, write_numbered, DiceCode, MAX_WORDS};

fn code(digits: [u8; 5]) -> DiceCode {
    DiceCode::from_digits(digits).unwrap()
}

#[test]
fn test_first_code() {
    assert_eq!(DiceCode::FIRST.to_string(), "11111");
    assert_eq!(DiceCode::default(), DiceCode::FIRST);
    assert_eq!(DiceCode::FIRST.index(), 0);
}

#[test]
fn test_increment_least_significant() {
    let mut c = code([1, 1, 1, 1, 1]);
    c.increment();
    assert_eq!(c.digits(), [1, 1, 1, 1, 2]);
}

#[test]
fn test_increment_carries() {
    let mut c = code([1, 1, 1, 1, 6]);
    c.increment();
    assert_eq!(c.digits(), [1, 1, 1, 2, 1]);

    let mut c = code([1, 6, 6, 6, 6]);
    c.increment();
    assert_eq!(c.digits(), [2, 1, 1, 1, 1]);
}

#[test]
fn test_increment_wraps_at_last_code() {
    let mut c = DiceCode::LAST;
    c.increment();
    assert_eq!(c, DiceCode::FIRST);
}

#[test]
fn test_from_digits_rejects_out_of_range() {
    assert!(DiceCode::from_digits([0, 1, 1, 1, 1]).is_none());
    assert!(DiceCode::from_digits([1, 1, 7, 1, 1]).is_none());
    assert!(DiceCode::from_digits([6, 6, 6, 6, 6]).is_some());
}

#[test]
fn test_parse() {
    assert_eq!("35462".parse::<DiceCode>().unwrap(), code([3, 5, 4, 6, 2]));
    assert!("3546".parse::<DiceCode>().is_err());
    assert!("354621".parse::<DiceCode>().is_err());
    assert!("35472".parse::<DiceCode>().is_err());
    assert!("3a462".parse::<DiceCode>().is_err());
}

#[test]
fn test_number_three_words() {
    let words = ["anna", "bella", "cesar"];
    let lines: Vec<String> = number(&words).iter().map(|n| n.to_string()).collect();
    assert_eq!(lines, vec!["11111\tanna", "11112\tbella", "11113\tcesar"]);
}

#[test]
fn test_write_numbered_format() {
    let words = vec!["Ørret".to_string(), "blåbær".to_string()];
    let mut out = Vec::new();
    write_numbered(&words, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "11111\tØrret\n11112\tblåbær\n"
    );
}

#[test]
fn test_write_numbered_empty() {
    let words: Vec<String> = Vec::new();
    let mut out = Vec::new();
    write_numbered(&words, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_full_code_space() {
    let words: Vec<String> = (0..MAX_WORDS).map(|i| format!("w{}", i)).collect();
    let numbered = number(&words);

    assert_eq!(DiceCode::CAPACITY, MAX_WORDS);
    assert_eq!(numbered.len(), MAX_WORDS);
    assert_eq!(numbered[0].code, DiceCode::FIRST);
    assert_eq!(numbered[MAX_WORDS - 1].code.to_string(), "66666");
    assert_eq!(numbered[MAX_WORDS - 1].code, DiceCode::LAST);

    for (i, n) in numbered.iter().enumerate() {
        assert_eq!(n.code.index(), i);
        assert_eq!(n.word, words[i]);
    }
    assert!(numbered.windows(2).all(|w| w[0].code < w[1].code));
}
