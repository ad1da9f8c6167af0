//! Reading date shown in the browsing screen's footer.

use chrono::{Local, NaiveDate};

/// Footer motto, repeated as the browsing screen's title.
pub const MOTTO: &str = "잠들기 전, 오늘 하필...";

/// Korean long-form date, e.g. `2026년 10월 17일`.
pub fn format_korean_date(date: NaiveDate) -> String {
    date.format("%Y년 %-m월 %-d일").to_string()
}

/// Today's local date in Korean long form.
pub fn today() -> String {
    format_korean_date(Local::now().date_naive())
}

/// Footer line: motto, current book, and the reading date.
pub fn footer_line(book: &str, date: &str) -> String {
    format!("{MOTTO} | {book} | {date}")
}
