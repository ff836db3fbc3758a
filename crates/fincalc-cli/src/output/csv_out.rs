use serde_json::Value;
use std::io;

use super::{format_value, row_headers, split_result};

/// Write CSV to stdout. Results with a period series are written one row per
/// period (ready for charting); otherwise a two-column field/value listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match split_result(value) {
        Some(parts) => match parts.sections.first() {
            Some((_, rows)) if !rows.is_empty() => write_rows(&mut wtr, rows),
            _ => {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in &parts.scalars {
                    let _ = wtr.write_record([*key, format_value(val).as_str()]);
                }
            }
        },
        None => {
            let _ = wtr.write_record([format_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let headers = row_headers(rows);
    if headers.is_empty() {
        return;
    }
    let _ = wtr.write_record(&headers);

    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}
