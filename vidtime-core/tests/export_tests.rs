// vidtime-core/tests/export_tests.rs

use calamine::{Data, Reader, Xlsx, open_workbook};
use tempfile::tempdir;
use vidtime_core::error::CoreError;
use vidtime_core::export::{RUNTIME_HEADER, TITLE_HEADER, write_spreadsheet};
use vidtime_core::VideoRecord;

fn sample_records() -> Vec<VideoRecord> {
    vec![
        VideoRecord {
            name: "episode one.mp4".to_string(),
            minutes: 42.5,
        },
        VideoRecord {
            name: "short.avi".to_string(),
            minutes: 0.63,
        },
        VideoRecord {
            name: "broken.mkv".to_string(),
            minutes: 0.0,
        },
    ]
}

#[test]
fn test_export_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let records = sample_records();

    let destination = dir.path().join("durations.xlsx");
    let written = write_spreadsheet(&destination, &records)?;
    assert_eq!(written, destination);

    let mut workbook: Xlsx<_> = open_workbook(&written)?;
    let range = workbook.worksheet_range("Sheet1")?;
    let rows: Vec<_> = range.rows().collect();

    assert_eq!(rows.len(), records.len() + 1);
    assert_eq!(rows[0][0], Data::String(TITLE_HEADER.to_string()));
    assert_eq!(rows[0][1], Data::String(RUNTIME_HEADER.to_string()));

    for (row, record) in rows[1..].iter().zip(&records) {
        assert_eq!(row[0], Data::String(record.name.clone()));
        assert_eq!(row[1], Data::Float(record.minutes));
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_export_appends_missing_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let destination = dir.path().join("durations");
    let written = write_spreadsheet(&destination, &sample_records())?;

    assert_eq!(written, dir.path().join("durations.xlsx"));
    assert!(written.exists());
    assert!(!destination.exists());

    dir.close()?;
    Ok(())
}

#[test]
fn test_export_empty_collection_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let destination = dir.path().join("durations.xlsx");
    let result = write_spreadsheet(&destination, &[]);

    assert!(matches!(result, Err(CoreError::NoRecords)));
    assert!(!destination.exists());

    dir.close()?;
    Ok(())
}

#[test]
fn test_export_failure_surfaces_error() {
    let destination =
        std::path::Path::new("surely_this_does_not_exist_42_integration/durations.xlsx");
    let result = write_spreadsheet(destination, &sample_records());

    match result.err().unwrap() {
        CoreError::Spreadsheet(_) => {} // Expected error type
        e => panic!("Unexpected error type: {:?}", e),
    }
}
