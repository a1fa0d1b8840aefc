use super::*;
use crate::error::Error;
use crate::types::Sample;

#[test]
fn parses_log_with_header_and_blank_lines() {
    let text = "Camera Path \n0,0,10\n \n1.5,-2,359.5\n\n";
    let samples = parse_samples(text).expect("valid log");
    assert_eq!(
        samples,
        vec![Sample::new(0.0, 0.0, 10.0), Sample::new(1.5, -2.0, 359.5)]
    );
}

#[test]
fn tolerates_spaces_around_fields() {
    let sample = parse_sample_line(" 3.25 , 4 ,  90 ", 1).expect("valid line");
    assert_eq!(sample, Sample::new(3.25, 4.0, 90.0));
}

#[test]
fn rejects_wrong_field_count() {
    let err = parse_samples("0,0,10\n1,2\n").unwrap_err();
    match err {
        Error::MalformedSample { line, content, .. } => {
            assert_eq!(line, 2);
            assert_eq!(content, "1,2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_non_numeric_field() {
    let err = parse_samples("0,abc,10\n").unwrap_err();
    assert!(
        matches!(err, Error::MalformedSample { line: 1, .. }),
        "got {err}"
    );
    assert!(err.to_string().contains("z is not a number"));
}

#[test]
fn rejects_non_finite_values() {
    let err = parse_sample_line("NaN,0,10", 7).unwrap_err();
    assert!(matches!(err, Error::MalformedSample { line: 7, .. }));
}

#[test]
fn empty_text_yields_no_samples() {
    assert!(parse_samples("").expect("empty log").is_empty());
    assert!(parse_samples("Camera Path\n").expect("header only").is_empty());
}
