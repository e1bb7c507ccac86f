use serde_json::{Value, json};

/// Body for `POST /api/monteur/absences`.
pub fn absence(kind: &str, start: &str, end: &str) -> Value {
    json!({ "absence_type": kind, "start_date": start, "end_date": end })
}
