use jtl_latency::aggregator::summarize;
use jtl_latency::parser::{parse_samples, read_samples, Sample};
use jtl_latency::utils::error::ParseError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const JMETER_LOG: &str = "\
timeStamp,elapsed,label,responseCode,responseMessage,threadName,dataType,success,failureMessage,bytes,sentBytes,grpThreads,allThreads,URL,Latency,IdleTime,Connect
1700000000000,120,Generator Energy Submit,200,OK,Thread Group 1-1,text,true,,512,210,1,1,http://localhost:3000/api/energy,118,0,3
1700000000500,340,Issuer Energy Verify,200,OK,Thread Group 1-1,text,true,,480,190,1,1,http://localhost:3000/api/energy/verify,338,0,1
1700000001000,95,Buyer Energy Query,500,Internal Server Error,Thread Group 1-1,text,false,Bad response,120,150,1,1,http://localhost:3000/api/energy,94,0,1
";

#[test]
fn test_parse_jmeter_log() {
    let samples = parse_samples(JMETER_LOG.as_bytes()).unwrap();

    assert_eq!(samples.len(), 3);
    assert_eq!(
        samples.as_slice(),
        &[
            Sample::new("Generator Energy Submit", 120.0, true, 1_700_000_000_000),
            Sample::new("Issuer Energy Verify", 340.0, true, 1_700_000_000_500),
            Sample::new("Buyer Energy Query", 95.0, false, 1_700_000_001_000),
        ]
    );
}

#[test]
fn test_parse_header_only() {
    let samples = parse_samples("label,elapsed,success,timeStamp\n".as_bytes()).unwrap();
    assert!(samples.is_empty());
}

#[test]
fn test_parse_trims_values_but_keeps_label() {
    let input = "label, elapsed, success, timeStamp\n Login , 42 , TRUE , 1000\n";
    let samples = parse_samples(input.as_bytes()).unwrap();
    assert_eq!(samples.as_slice(), &[Sample::new(" Login ", 42.0, true, 1000)]);
}

#[test]
fn test_labels_differing_in_whitespace_stay_separate() {
    let input = "label,elapsed,success,timeStamp\nLogin,10,true,1000\n\" Login\",1000,true,2000\n";
    let samples = parse_samples(input.as_bytes()).unwrap();

    let labels: Vec<&str> = samples.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Login", " Login"]);

    let summaries = summarize(&samples).unwrap();
    assert_eq!(summaries.groups.len(), 2);
    assert_eq!(summaries.groups[0].summary.mean, 10.0);
    assert_eq!(summaries.groups[1].summary.mean, 1000.0);
}

#[test]
fn test_parse_quoted_label_with_comma() {
    let input = "label,elapsed,success,timeStamp\n\"Query, All\",10,false,1000\n";
    let samples = parse_samples(input.as_bytes()).unwrap();
    assert_eq!(samples.as_slice()[0].label, "Query, All");
}

#[test]
fn test_missing_columns() {
    let input = "label,elapsed,Latency\nLogin,42,40\n";
    match parse_samples(input.as_bytes()) {
        Err(ParseError::MissingColumns(missing)) => {
            assert_eq!(missing, vec!["success".to_string(), "timeStamp".to_string()]);
        }
        other => panic!("expected MissingColumns, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_elapsed() {
    let input = "label,elapsed,success,timeStamp\nLogin,42,true,1000\nLogin,slow,true,2000\n";
    match parse_samples(input.as_bytes()) {
        Err(ParseError::MalformedValue { line, column, value, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(column, "elapsed");
            assert_eq!(value, "slow");
        }
        other => panic!("expected MalformedValue, got {:?}", other),
    }
}

#[test]
fn test_negative_elapsed() {
    let input = "label,elapsed,success,timeStamp\nLogin,-5,true,1000\n";
    assert!(matches!(
        parse_samples(input.as_bytes()),
        Err(ParseError::MalformedValue { column: "elapsed", .. })
    ));
}

#[test]
fn test_invalid_success_flag() {
    let input = "label,elapsed,success,timeStamp\nLogin,5,maybe,1000\n";
    assert!(matches!(
        parse_samples(input.as_bytes()),
        Err(ParseError::MalformedValue { column: "success", .. })
    ));
}

#[test]
fn test_invalid_timestamp() {
    let input = "label,elapsed,success,timeStamp\nLogin,5,true,2024-01-01\n";
    assert!(matches!(
        parse_samples(input.as_bytes()),
        Err(ParseError::MalformedValue { column: "timeStamp", .. })
    ));
}

#[test]
fn test_ragged_row_is_csv_error() {
    let input = "label,elapsed,success,timeStamp\nLogin,5,true\n";
    assert!(matches!(
        parse_samples(input.as_bytes()),
        Err(ParseError::Csv(_))
    ));
}

#[test]
fn test_read_samples_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(JMETER_LOG.as_bytes()).unwrap();

    let samples = read_samples(file.path()).unwrap();
    assert_eq!(samples.len(), 3);
}

#[test]
fn test_read_samples_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_samples(dir.path().join("absent.jtl"));
    assert!(matches!(result, Err(ParseError::Io(_))));
}
