//! CSV and JSON export of the committed calendar.

use crate::clock::format_hm;
use crate::error::StoreError;
use crate::schedule::CommittedTask;

const CSV_HEADER: &str = "id,title,category,date,start,end,duration_minutes,owner";

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn sorted(tasks: &[CommittedTask]) -> Vec<&CommittedTask> {
    let mut rows: Vec<&CommittedTask> = tasks.iter().collect();
    rows.sort_by_key(|t| (t.date, t.start_minute));
    rows
}

/// CSV with a header row, ordered by date then start.
pub fn to_csv(tasks: &[CommittedTask]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for t in sorted(tasks) {
        let row = [
            csv_field(&t.id),
            csv_field(&t.title),
            t.category.to_string(),
            t.date.to_string(),
            format_hm(t.start_minute),
            format_hm(t.end_minute),
            t.duration_minutes.to_string(),
            csv_field(t.owner.as_deref().unwrap_or("")),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Pretty JSON array in the calendar file format, ordered by date then start.
pub fn to_json(tasks: &[CommittedTask]) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(&sorted(tasks))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn task(id: &str, title: &str, day: u32, start: u32) -> CommittedTask {
        CommittedTask {
            id: id.into(),
            title: title.into(),
            category: Default::default(),
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            start_minute: start,
            end_minute: start + 30,
            duration_minutes: 30,
            owner: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn csv_rows_are_sorted_and_quoted() {
        let tasks = vec![
            task("b", "Read \"Dune\", ch. 2", 20, 1140),
            task("a", "Algebra", 19, 1200),
        ];
        let csv = to_csv(&tasks);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "a,Algebra,assignment,2026-10-19,20:00,20:30,30,");
        assert_eq!(lines[2], "b,\"Read \"\"Dune\"\", ch. 2\",assignment,2026-10-20,19:00,19:30,30,");
    }

    #[test]
    fn empty_calendar_exports_header_only() {
        assert_eq!(to_csv(&[]), format!("{CSV_HEADER}\n"));
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn json_export_reads_back() {
        let tasks = vec![task("b", "B", 20, 1140), task("a", "A", 19, 1140)];
        let json = to_json(&tasks).unwrap();
        let back: Vec<CommittedTask> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0].id, "a");
        assert_eq!(back[1].id, "b");
    }
}
