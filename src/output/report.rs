use chrono::{DateTime, Duration, Utc};

use crate::grouping::Grouping;
use crate::model::AggregateRecord;

/// Ages above this many hours are shown in days.
const HOURS_BEFORE_DAYS: i64 = 72;

/// Render the grouping as the markdown digest, one line per pull request.
pub fn render_markdown(grouping: &Grouping, now: DateTime<Utc>) -> String {
    let mut content = String::new();

    content.push_str("## PR per base:\n");

    for (base, records) in grouping {
        content.push_str(&format!("### {}: {}\n", base, records.len()));
        for record in records {
            content.push_str(&format_line(record, now));
            content.push('\n');
        }
    }

    content
}

fn format_line(record: &AggregateRecord, now: DateTime<Utc>) -> String {
    let pr = record.pull_request();
    let activity = record.activity();
    let draft = if pr.draft { "📌" } else { "" };

    let mut line = format!(
        "* ⏳ {} {}`@{}` **{} {}** 💬 {}/👤 {} ➕ {} ➖ {} 📄 {} | {}",
        format_age(now.signed_duration_since(pr.updated_at)),
        draft,
        pr.author,
        record.repository().name,
        pr.number,
        activity.review_count,
        activity.distinct_reviewer_count,
        pr.additions,
        pr.deletions,
        pr.changed_files,
        pr.title,
    );

    if !pr.labels.is_empty() {
        line.push_str(&format!(" [{}]", pr.labels.join(", ")));
    }

    line
}

/// Hours rounded half-up, clamped at zero for timestamps in the future.
pub(crate) fn rounded_hours(since: Duration) -> i64 {
    let secs = since.num_seconds().max(0);
    (secs + 1800) / 3600
}

/// Right-aligned age: `" 12h"` up to 72 hours, `"  4d"` beyond.
pub fn format_age(since: Duration) -> String {
    let hours = rounded_hours(since);
    if hours > HOURS_BEFORE_DAYS {
        format!("{:3}d", hours / 24)
    } else {
        format!("{:3}h", hours)
    }
}
