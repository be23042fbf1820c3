//! Builds the fixed five-row sample batch.
//!
//! Every row reads its own timestamp from the injected [`Clock`], so rows
//! carry distinct readings rather than one shared value.

use crate::domain::model::{ResultBatch, ResultRow};
use crate::domain::ports::Clock;
use chrono::{Local, NaiveDateTime};
use std::sync::Mutex;

pub const LABELS: [&str; 5] = ["A", "B", "C", "D", "E"];
pub const PROCESSED_SUFFIX: &str = "_processed";

/// Naive local wall time. It can step backwards when the local offset
/// changes (DST fall-back) or the system clock is adjusted; wrap it in
/// [`MonotonicClock`] when readings must not decrease.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Never returns a reading earlier than the previous one: a backwards step of
/// the inner clock repeats the last value instead.
pub struct MonotonicClock<K: Clock> {
    inner: K,
    last: Mutex<Option<NaiveDateTime>>,
}

impl<K: Clock> MonotonicClock<K> {
    pub fn new(inner: K) -> Self {
        Self {
            inner,
            last: Mutex::new(None),
        }
    }
}

impl<K: Clock> Clock for MonotonicClock<K> {
    fn now(&self) -> NaiveDateTime {
        let reading = self.inner.now();
        // A poisoned lock still holds a valid reading.
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        let clamped = match *last {
            Some(previous) if previous > reading => previous,
            _ => reading,
        };
        *last = Some(clamped);
        clamped
    }
}

/// `"A"` becomes `"a_processed"`. Not idempotent.
pub fn process_label(label: &str) -> String {
    format!("{}{}", label.to_lowercase(), PROCESSED_SUFFIX)
}

pub fn process_batch(batch: ResultBatch) -> ResultBatch {
    let rows = batch
        .rows
        .into_iter()
        .map(|row| ResultRow {
            processed_data: process_label(&row.processed_data),
            ..row
        })
        .collect();
    ResultBatch::new(rows)
}

pub struct SampleDataGenerator<K: Clock> {
    clock: K,
}

impl<K: Clock> SampleDataGenerator<K> {
    pub fn new(clock: K) -> Self {
        Self { clock }
    }

    /// Rows 1..=5 labelled "A".."E", before any processing.
    pub fn raw_batch(&self) -> ResultBatch {
        let rows = (1_i64..)
            .zip(LABELS)
            .map(|(result_id, label)| ResultRow {
                result_id,
                processed_data: label.to_string(),
                timestamp: self.clock.now(),
            })
            .collect();
        ResultBatch::new(rows)
    }

    pub fn generate(&self) -> ResultBatch {
        let batch = process_batch(self.raw_batch());
        tracing::debug!("Generated batch of {} rows", batch.len());
        batch
    }
}

impl Default for SampleDataGenerator<MonotonicClock<SystemClock>> {
    fn default() -> Self {
        Self::new(MonotonicClock::new(SystemClock))
    }
}
