use super::*;

const SAMPLE: &str = "\
x,y,heading,interpolated
0.0,1.0,0.0,false
0.5,1.5,0.1,true
1.0,2.0,0.2,False
1.25,2.5,0.3,YES
2.0,3.0,0.4,
total,5,,
";

#[test]
fn splits_rows_by_flag_preserving_order() {
    let trace = parse_trace(SAMPLE.as_bytes()).unwrap();
    assert_eq!(
        trace.actual,
        vec![
            Point::new(0.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 3.0)
        ]
    );
    assert_eq!(
        trace.interpolated,
        vec![Point::new(0.5, 1.5), Point::new(1.25, 2.5)]
    );
    assert_eq!(trace.len(), 5);
}

#[test]
fn rows_carry_source_line_numbers() {
    let rows = parse_rows(SAMPLE.as_bytes()).unwrap();
    let lines: Vec<_> = rows.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 3, 4, 5, 6]);
    assert!(rows[1].interpolated);
    assert!(!rows[0].interpolated);
}

#[test]
fn header_and_footer_only_is_empty() {
    for src in ["", "x,y,h,i\n", "x,y,h,i\nsummary\n", "x,y,h,i\n1,2,3,true"] {
        let trace = parse_trace(src.as_bytes()).unwrap();
        assert!(trace.is_empty(), "{src:?}");
    }
}

#[test]
fn footer_is_dropped_even_when_it_looks_like_data() {
    let src = "x,y,h,i\n1,2,0,false\n3,4,0,false\n";
    let trace = parse_trace(src.as_bytes()).unwrap();
    assert_eq!(trace.actual, vec![Point::new(1.0, 2.0)]);
}

#[test]
fn whitespace_around_fields_is_ignored() {
    let src = "x,y,h,i\n 1.5 , -2 , 0 ,  Uh-Huh \nend\n";
    let trace = parse_trace(src.as_bytes()).unwrap();
    assert_eq!(trace.interpolated, vec![Point::new(1.5, -2.0)]);
}

#[test]
fn extra_fields_are_allowed() {
    let src = "x,y,h,i\n1,2,3,no,extra,more\nend\n";
    let trace = parse_trace(src.as_bytes()).unwrap();
    assert_eq!(trace.actual, vec![Point::new(1.0, 2.0)]);
}

#[test]
fn short_row_reports_its_line() {
    let src = "x,y,h,i\n1,2,0,true\n3,4\nend\n";
    match parse_trace(src.as_bytes()).unwrap_err() {
        PathvizError::Parse { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("at least 4 fields"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_coordinates_are_rejected() {
    let src = "x,y,h,i\n1,abc,0,true\nend\n";
    match parse_trace(src.as_bytes()).unwrap_err() {
        PathvizError::Parse { line, message } => {
            assert_eq!(line, 2);
            assert!(message.starts_with("y is not a number"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }

    let src = "x,y,h,i\nNaN,1,0,true\nend\n";
    assert!(matches!(
        parse_trace(src.as_bytes()),
        Err(PathvizError::Parse { line: 2, .. })
    ));
}

#[test]
fn non_utf8_flag_is_false() {
    let mut src = b"x,y,h,i\n1,2,0,".to_vec();
    src.extend_from_slice(&[0xff, 0xfe]);
    src.extend_from_slice(b"\nend\n");
    let trace = parse_trace(src.as_slice()).unwrap();
    assert_eq!(trace.actual, vec![Point::new(1.0, 2.0)]);
}

#[test]
fn load_trace_reports_missing_file() {
    let err = load_trace(Path::new("target/definitely/missing.csv")).unwrap_err();
    assert!(err.to_string().contains("open trace"), "{err}");
}

#[test]
fn quotes_do_not_group_fields() {
    // split on commas the flag field is `b"`, which is not truthy
    let src = "x,y,h,i\n0,0,\"a,b\",true\nend\n";
    let trace = parse_trace(src.as_bytes()).unwrap();
    assert_eq!(trace.actual, vec![Point::new(0.0, 0.0)]);
    assert!(trace.interpolated.is_empty());
}

#[test]
fn unbalanced_quote_does_not_swallow_following_rows() {
    let src = "x,y,h,i\n0,0,\"h,false\n1,0,0,false\n2,0,0,true\nend\n";
    let rows = parse_rows(src.as_bytes()).unwrap();
    let lines: Vec<_> = rows.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 3, 4]);

    let trace = parse_trace(src.as_bytes()).unwrap();
    assert_eq!(
        trace.actual,
        vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]
    );
    assert_eq!(trace.interpolated, vec![Point::new(2.0, 0.0)]);
}
