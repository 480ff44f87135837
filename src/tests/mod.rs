mod extract;

use crate::extract::VideoId;
use crate::metadata::VideoRecord;
use chrono::NaiveDate;

pub fn record(id: &str, title: &str, duration: u64, date: (i32, u32, u32)) -> VideoRecord {
    VideoRecord::new(
        VideoId::parse(id).expect("test id must be valid"),
        title,
        duration,
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("test date must be valid"),
        "Test Channel",
    )
}
