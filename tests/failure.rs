use fluent_pattern_match as fpm;
use fpm::{Animal, Cat, Dog, MatchError};
use pretty_assertions::assert_eq;

#[test]
fn test_unmatched_chain_ending_in_throw_fails() {
    let purdy: Animal = Dog::new("Purdy").into();
    let err = fpm::pattern_match(&purdy)
        .case_do(|_: &Cat| panic!("a dog is not a cat"))
        .otherwise_throw()
        .unwrap_err();
    assert_eq!(err, MatchError::MatchFailure);
    assert_eq!(err.to_string(), "The pattern did not match any cases.");
}

#[test]
fn test_resolved_chain_ending_in_throw_keeps_result() {
    let purdy: Animal = Dog::new("Purdy").into();
    let out = fpm::pattern_match(&purdy)
        .returns::<String>()
        .unwrap()
        .case(|dog: &Dog| dog.name.to_uppercase())
        .otherwise_throw()
        .unwrap()
        .result();
    assert_eq!(out.as_deref(), Some("PURDY"));
}

#[test]
fn test_unmatched_chain_without_default_is_not_an_error() {
    let purdy: Animal = Dog::new("Purdy").into();
    let out = fpm::pattern_match(&purdy)
        .returns::<Option<u32>>()
        .unwrap()
        .case(|_: &Cat| Some(1))
        .result_or_default();
    assert_eq!(out, None);
}

#[test]
fn test_retyping_after_a_match_is_refused() {
    let purdy: Animal = Dog::new("Purdy").into();
    let err = fpm::pattern_match(&purdy)
        .case_do(|_: &Dog| ())
        .returns::<String>()
        .unwrap_err();
    assert!(matches!(err, MatchError::InvalidState(_)));
    assert!(err.to_string().starts_with("invalid state"));
}

#[test]
fn test_strict_description_reports_failure() {
    let grace: Animal = fpm::Skunk::new("Grace").into();
    assert_eq!(fpm::describe_strict(&grace), Err(MatchError::MatchFailure));
}
