use hardnumber::{evaluate, Code, GuessResult};
use proptest::prelude::*;

fn arbitrary_code() -> impl Strategy<Value = Code> {
    Just((0u8..=9).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|digits| {
            Code::from_digits([digits[0], digits[1], digits[2], digits[3]])
                .expect("shuffled digits are unique")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A position contributes to at most one of the two counts, so their
    /// sum never exceeds the code length.
    #[test]
    fn property_counts_bounded((guess, secret) in (arbitrary_code(), arbitrary_code())) {
        let result = evaluate(&guess, &secret);
        prop_assert!(result.correct + result.present <= 4);
    }

    /// Four correct digits happen exactly when guess and secret are equal.
    #[test]
    fn property_full_match_iff_equal((guess, secret) in (arbitrary_code(), arbitrary_code())) {
        let result = evaluate(&guess, &secret);
        prop_assert_eq!(result.correct == 4, guess == secret);
        if result.correct == 4 {
            prop_assert_eq!(result.present, 0);
        }
    }

    /// Correct is symmetric and present counts shared digits minus the
    /// positional matches; evaluating in either direction agrees on both.
    #[test]
    fn property_counts_are_symmetric((guess, secret) in (arbitrary_code(), arbitrary_code())) {
        let forward = evaluate(&guess, &secret);
        let backward = evaluate(&secret, &guess);
        prop_assert_eq!(forward, backward);
    }

    /// Scoring a code against itself is always a win.
    #[test]
    fn property_self_evaluation_wins(code in arbitrary_code()) {
        let result = evaluate(&code, &code);
        prop_assert!(result.is_win());
    }
}

#[test]
fn test_displaced_pair() {
    let secret = Code::parse("1234").unwrap();
    let guess = Code::parse("1243").unwrap();
    assert_eq!(
        evaluate(&guess, &secret),
        GuessResult {
            correct: 2,
            present: 2
        }
    );
}
