use super::*;
use crate::error::Error;
use crate::types::SegmentRecord;

#[test]
fn formats_in_fixed_field_order() {
    let record = SegmentRecord::new(2.0, -10.0, 1.0, 0.5);
    assert_eq!(format_record(&record), "2.0,-10.0,1.0,0.5,2.0");
}

#[test]
fn written_records_parse_back() {
    let records = vec![
        SegmentRecord::new(0.1 + 0.2, 370.25, 1.5, 0.0),
        SegmentRecord::new(12.345678901234, -45.0, 3.0, 2.5),
    ];
    let mut writer = SegmentWriter::new(Vec::new(), "memory");
    writer.write_header().unwrap();
    for record in &records {
        writer.write_record(record).unwrap();
    }
    assert_eq!(writer.records_written(), 2);
    let bytes = writer.finish().unwrap();
    let text = String::from_utf8(bytes).unwrap();

    let parsed = parse_segments(&text).expect("parse");
    assert_eq!(parsed, records);
}

#[test]
fn drops_zero_length_records() {
    let text = "0.0,10.0,0.0,0.0,0\n2.0,10.0,1.0,0.5,2.0\n";
    let parsed = parse_segments(text).expect("parse");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].length, 2.0);
}

#[test]
fn skips_headers_and_blank_lines() {
    let text = "Camera Path\nlength,headingChange,flightTime,pauseTime,speed\n\n 1.0 , 5.0 , 0.5 , 0 , 2.0 \n";
    let parsed = parse_segments(text).expect("parse");
    assert_eq!(parsed, vec![SegmentRecord::new(1.0, 5.0, 0.5, 0.0)]);
}

#[test]
fn keeps_stored_speed() {
    let record = parse_segment_line("4.0,0.0,2.0,0.0,7.5", 1).expect("parse");
    assert_eq!(record.speed, 7.5);
}

#[test]
fn rejects_short_lines() {
    let err = parse_segments("1.0,2.0,3.0\n").unwrap_err();
    assert!(
        matches!(err, Error::MalformedSegment { line: 1, .. }),
        "got {err}"
    );
}

#[test]
fn write_segments_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("Flights_And_Pauses_0.txt");
    let records = [SegmentRecord::new(3.0, 15.0, 1.5, 0.5)];
    write_segments(&path, &records, false).expect("write");
    assert_eq!(read_segments(&path).expect("read"), records.to_vec());
}
