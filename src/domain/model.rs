use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the generated batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub result_id: i64,
    pub processed_data: String,
    pub timestamp: NaiveDateTime,
}

/// Rows in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBatch {
    pub rows: Vec<ResultRow>,
}

impl ResultBatch {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, or all of them when the batch is shorter.
    pub fn head(&self, n: usize) -> &[ResultRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn result_ids(&self) -> Vec<i64> {
        self.rows.iter().map(|r| r.result_id).collect()
    }

    pub fn processed_data(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.processed_data.as_str()).collect()
    }

    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.rows.iter().map(|r| r.timestamp).collect()
    }
}

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub preview: String,
    pub export_path: Option<String>,
    pub row_count: usize,
}
