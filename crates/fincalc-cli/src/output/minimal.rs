use serde_json::Value;

use super::format_value;

/// Result fields that best answer "what's the number?", in priority order.
const PRIORITY_KEYS: [&str; 10] = [
    "emi",
    "maturity",
    "corpus",
    "required_sip",
    "months_survived",
    "total_tax",
    "gross",
    "rate_pct",
    "total_withdrawn",
    "inflated_goal",
];

/// Print just the headline value of a calculator result.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if let Some(val) = PRIORITY_KEYS.iter().find_map(|k| map.get(*k)) {
            println!("{}", format_value(val));
            return;
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_value(val));
            return;
        }
    }

    println!("{}", format_value(result_obj));
}
