use crate::domain::model::ResultRow;

pub const COLUMN_NAMES: [&str; 3] = ["result_id", "processed_data", "timestamp"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Renders rows as a dataframe-style table: a header line, then one line per
/// row prefixed with its zero-based index. Cells are right-aligned.
pub fn render_preview(rows: &[ResultRow]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|row| {
            [
                row.result_id.to_string(),
                row.processed_data.clone(),
                row.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            ]
        })
        .collect();

    let index_width = rows.len().saturating_sub(1).to_string().len();
    let mut widths = COLUMN_NAMES.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);

    let mut header = " ".repeat(index_width);
    for (name, width) in COLUMN_NAMES.iter().zip(widths) {
        header.push_str(&format!("  {:>width$}", name, width = width));
    }
    lines.push(header);

    for (index, row) in cells.iter().enumerate() {
        let mut line = format!("{:<width$}", index, width = index_width);
        for (cell, width) in row.iter().zip(widths) {
            line.push_str(&format!("  {:>width$}", cell, width = width));
        }
        lines.push(line);
    }

    lines.join("\n")
}
