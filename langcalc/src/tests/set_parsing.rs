use crate::set::{format_set, format_word, parse_set, parse_word, Set};

#[test]
fn test_parse_empty_input() {
    assert!(parse_set("").is_empty());
    assert!(parse_set("   \t ").is_empty());
    assert!(parse_set("{}").is_empty());
    assert!(parse_set(" { } ").is_empty());
}

#[test]
fn test_parse_deduplicates_and_trims() {
    let set = parse_set(" a , b ,a");
    assert_eq!(set, Set::from(["a", "b"]));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_parse_strips_one_brace_pair() {
    assert_eq!(parse_set("{a, b}"), Set::from(["a", "b"]));
    assert_eq!(parse_set("  {x}  "), Set::from(["x"]));
    // Only one pair is removed
    assert_eq!(parse_set("{{a}}"), Set::from(["{a}"]));
}

#[test]
fn test_parse_unbalanced_braces_are_tokens() {
    assert_eq!(parse_set("{a, b"), Set::from(["{a", "b"]));
    assert_eq!(parse_set("a, b}"), Set::from(["a", "b}"]));
}

#[test]
fn test_parse_drops_empty_pieces() {
    assert_eq!(parse_set(",,a,, ,b,"), Set::from(["a", "b"]));
    assert!(parse_set(", ,").is_empty());
}

#[test]
fn test_parse_keeps_inner_spaces() {
    assert_eq!(parse_set("hello world, x"), Set::from(["hello world", "x"]));
}

#[test]
fn test_parse_epsilon_token() {
    let set = parse_set("ε, a");
    assert!(set.contains(""));
    assert!(set.contains("a"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_format_empty_set() {
    assert_eq!(format_set(&Set::new()), "∅");
}

#[test]
fn test_format_is_sorted() {
    assert_eq!(format_set(&Set::from(["b", "a"])), "{a, b}");
    assert_eq!(format_set(&Set::from(["c", "a", "b"])), "{a, b, c}");
}

#[test]
fn test_format_epsilon_language() {
    assert_eq!(format_set(&Set::epsilon()), "{ε}");
    assert_ne!(format_set(&Set::epsilon()), format_set(&Set::new()));
    assert_eq!(format_set(&Set::from(["b", "", "a"])), "{ε, a, b}");
}

#[test]
fn test_format_then_parse_restores_set() {
    let set = Set::from(["", "ab", "b"]);
    assert_eq!(parse_set(&format_set(&set)), set);
}

#[test]
fn test_from_str_matches_parse() {
    let set: Set = "{x, y}".parse().unwrap();
    assert_eq!(set, parse_set("x,y"));
}

#[test]
fn test_words() {
    assert_eq!(parse_word("ε"), "");
    assert_eq!(parse_word(" ab "), " ab ");
    assert_eq!(format_word(""), "ε");
    assert_eq!(format_word("ab"), "ab");
}

#[test]
fn test_parse_empty_set_symbol() {
    assert!(parse_set("∅").is_empty());
    assert!(parse_set(" ∅ ").is_empty());
    // Inside a list it is an ordinary token
    assert_eq!(parse_set("∅, a"), Set::from(["∅", "a"]));
}

#[test]
fn test_epsilon_and_empty_set_symbols_are_not_plain_tokens() {
    let set = parse_set("ε");
    assert!(!set.contains("ε"));
    assert_eq!(set, Set::epsilon());

    assert!(parse_set("∅").is_empty());
    assert_eq!(crate::word_length(&parse_word("ε")), 0);
}
