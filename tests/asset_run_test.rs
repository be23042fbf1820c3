use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use sample_asset::core::{Clock, ConfigProvider};
use sample_asset::{AssetPipeline, AssetRunner, CliConfig, LocalStorage, SampleDataGenerator};
use std::sync::Mutex;
use tempfile::TempDir;

struct SteppedClock {
    next: Mutex<NaiveDateTime>,
}

impl SteppedClock {
    fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> NaiveDateTime {
        let mut next = self.next.lock().unwrap();
        let current = *next;
        *next = current + Duration::microseconds(10);
        current
    }
}

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_micro_opt(12, 0, 0, 0)
        .unwrap()
}

#[test]
fn test_generate_with_stepped_clock() {
    let batch = SampleDataGenerator::new(SteppedClock::starting_at(start())).generate();

    assert_eq!(batch.len(), 5);
    assert_eq!(batch.rows[2].result_id, 3);
    assert_eq!(batch.rows[2].processed_data, "c_processed");
    assert_eq!(batch.rows[4].timestamp, start() + Duration::microseconds(40));
}

#[tokio::test]
async fn test_run_without_export_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("out");

    let config = CliConfig {
        output_path: output_path.to_string_lossy().into_owned(),
        ..CliConfig::default()
    };
    let storage = LocalStorage::new(&output_path);
    let pipeline = AssetPipeline::new(storage, config, SteppedClock::starting_at(start()));

    let outcome = AssetRunner::new(pipeline).run().await?;

    assert_eq!(outcome.row_count, 5);
    assert!(outcome.export_path.is_none());
    assert!(!output_path.exists());

    let first_row = outcome.preview.lines().nth(1).unwrap();
    assert!(first_row.contains(" 1 "));
    assert!(first_row.contains("a_processed"));
    assert!(first_row.contains("2026-10-16 12:00:00.000000"));
    Ok(())
}

#[tokio::test]
async fn test_run_exports_csv_to_output_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let config = CliConfig {
        output_path: output_path.clone(),
        export_csv: true,
        preview_rows: 3,
        ..CliConfig::default()
    };
    assert_eq!(config.preview_rows(), 3);

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = AssetPipeline::new(storage, config, SteppedClock::starting_at(start()))
        .with_asset_name("exported_asset")?;

    let outcome = AssetRunner::new(pipeline).run().await?;

    assert_eq!(
        outcome.export_path,
        Some(format!("{}/exported_asset.csv", output_path))
    );
    assert_eq!(outcome.preview.lines().count(), 4);

    let csv_path = temp_dir.path().join("exported_asset.csv");
    let mut reader = csv::Reader::from_path(&csv_path)?;
    let headers = reader.headers()?.clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["result_id", "processed_data", "timestamp"]
    );

    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    assert_eq!(records.len(), 5);
    let processed: Vec<&str> = records.iter().map(|r| &r[1]).collect();
    assert_eq!(
        processed,
        vec![
            "a_processed",
            "b_processed",
            "c_processed",
            "d_processed",
            "e_processed"
        ]
    );
    Ok(())
}
