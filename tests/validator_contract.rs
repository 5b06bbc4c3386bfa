//! Purpose: Lock validator verdict expectations with corpus coverage.
//! Exports: Integration tests only (no runtime exports).
//! Role: Pin grammar verdicts end to end, including deliberate compatibility rules.
//! Invariants: Accepted and rejected corpora stay representative of the grammar.
//! Invariants: Rule quirks (leading zero, span depth) stay pinned until an upgrade is called out.

use jsonvet::api::validate;

#[test]
fn corpus_accepted_objects() {
    let corpus = [
        "{}",
        "{ }",
        r#"{"a":"b"}"#,
        r#"{"a":"b","c":"d"}"#,
        r#"{"n":42}"#,
        r#"{"ok":true}"#,
        r#"{"ok":false}"#,
        r#"{"v":null}"#,
        r#"{"arr":["x","y"]}"#,
        r#"{"arr":[1,2,3]}"#,
        r#"{"arr":[]}"#,
        r#"{"a":{"b":"c"}}"#,
        r#"{"a":{},"b":"c"}"#,
        "{\n\"a\" : \"b\"\n}",
    ];

    for case in corpus {
        assert!(validate(case), "expected valid: {case}");
    }
}

#[test]
fn corpus_rejected_objects() {
    let corpus = [
        "",
        "null",
        "[]",
        r#""a""#,
        r#"{"a":"b""#,
        r#""a":"b"}"#,
        r#"{"a":"b",}"#,
        r#"{"a" "b"}"#,
        r#"{a:"b"}"#,
        r#"{"n":042}"#,
        r#"{"arr":["x",01]}"#,
        r#"{"v":none}"#,
    ];

    for case in corpus {
        assert!(!validate(case), "expected invalid: {case}");
    }
}

#[test]
fn leading_zero_rule_rejects_bare_zero() {
    // The integer rule rejects any leading zero, including the literal 0.
    assert!(!validate(r#"{"n":0}"#));
    assert!(validate(r#"{"n":10}"#));
    assert!(!validate(r#"{"n":010}"#));
}

#[test]
fn nesting_beyond_one_level_is_rejected() {
    assert!(validate(r#"{"a":{"b":"c"}}"#));
    assert!(!validate(r#"{"a":{"b":{"c":"d"}}}"#));
}

#[test]
fn escaped_quotes_terminate_strings_early() {
    // Strings are captured verbatim between quotes; a backslash does not
    // escape the closing quote, so the remainder falls out of balance.
    assert!(!validate(r#"{"a":"x\"y"}"#));
}

#[test]
fn trailing_garbage_after_balanced_object_is_ignored() {
    assert!(validate("{}garbage"));
    assert!(validate(r#"{"a":"b"}   "#));
}

#[test]
fn verdicts_are_idempotent() {
    let mixed = [
        (r#"{"a":{"b":"c"},"n":42}"#, true),
        (r#"{"a":"b",}"#, false),
    ];
    for (case, expected) in mixed {
        for _ in 0..5 {
            assert_eq!(validate(case), expected, "verdict drifted: {case}");
        }
    }
}
