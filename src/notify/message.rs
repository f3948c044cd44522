use chrono::NaiveDateTime;

use crate::types::stock_listing::NewListings;

pub const HEADER: &str = "📈 今日新股认购信息";

/// Header, numbered listing lines, then the send time.
pub fn format_message(listings: &NewListings, sent_at: NaiveDateTime) -> String {
    let body = listings
        .lines()
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{}. {line}", index + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{HEADER}\n{body}\n\n发送时间：{}",
        sent_at.format("%Y-%m-%d %H:%M:%S")
    )
}
