use super::*;

#[test]
fn table_is_sorted_and_unique() {
    assert!(TRUTHY_TOKENS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn every_truthy_token_parses_true() {
    for token in TRUTHY_TOKENS {
        assert!(parse_flag(token), "{token}");
    }
}

#[test]
fn matching_ignores_case_and_surrounding_whitespace() {
    assert!(parse_flag("TRUE"));
    assert!(parse_flag("  Yes\n"));
    assert!(parse_flag("\tUh-Huh "));
    assert!(parse_flag("T"));
}

#[test]
fn everything_else_is_false() {
    for token in [
        "", " ", "false", "f", "no", "0", "1", "truee", "ye", "yess", "uh huh", "sure", "t r",
        "nope",
    ] {
        assert!(!parse_flag(token), "{token:?}");
    }
}
