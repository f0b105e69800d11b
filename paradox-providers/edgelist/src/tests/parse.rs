use rstest::rstest;

use super::EdgeListError;
use crate::parse::parse_line;

#[rstest]
#[case::plain("1 2", Some((1, 2)))]
#[case::tabs("7\t9", Some((7, 9)))]
#[case::extra_columns("4 5 1.0 weight", Some((4, 5)))]
#[case::trailing_comment("4 5 # note", Some((4, 5)))]
#[case::blank("   ", None)]
#[case::hash_comment("# 1 2", None)]
#[case::percent_comment("% bip unweighted", None)]
fn parses_accepted_lines(#[case] line: &str, #[case] expected: Option<(u64, u64)>) {
    assert_eq!(parse_line(line, 1).expect("line is valid"), expected);
}

#[rstest]
fn single_token_is_missing_an_endpoint() {
    let err = parse_line("42", 3).expect_err("second endpoint absent");
    assert!(matches!(err, EdgeListError::MissingEndpoint { line: 3 }));
}

#[rstest]
#[case("a 2", "a")]
#[case("1 -2", "-2")]
#[case("1.5 2", "1.5")]
fn non_integer_tokens_are_rejected(#[case] line: &str, #[case] bad: &str) {
    let err = parse_line(line, 8).expect_err("token is not a node id");
    match err {
        EdgeListError::InvalidNodeId { line, token } => {
            assert_eq!(line, 8);
            assert_eq!(token, bad);
        }
        other => panic!("unexpected error: {other}"),
    }
}
