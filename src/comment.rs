//! The repaired, enriched, output-ready record. A `Comment` derives 1:1
//! from a `RawRecord` that passed extraction and is immutable once built.

use crate::classify::{color_hex, color_name, font_label, mode_label, time_position};
use crate::extract::RawRecord;
use crate::repair::repair_mojibake;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

#[derive(Debug, Clone)]
pub struct Comment {
    pub send_date: String, // YYYY-MM-DD
    pub send_time: String, // HH:MM:SS
    pub send_year: i32,
    pub time_position: String,
    pub appear_offset_secs: f64,
    pub content: String,
    pub user_id_masked: String,
    pub color_name: &'static str,
    pub color_hex: String,
    pub mode_label: String,
    pub font_label: &'static str,
    pub content_length: usize,
}

impl Comment {
    /// Assemble the output record from an extracted span and its repaired
    /// send time. Content repair happens here; timestamp repair is the
    /// caller's job so anomaly accounting stays with the pipeline.
    pub fn from_raw(raw: &RawRecord, send_at: OffsetDateTime) -> Self {
        let content = repair_mojibake(&raw.content);
        let content_length = content.chars().count();
        Self {
            send_date: send_at
                .format(DATE_FORMAT)
                .expect("date components always format"),
            send_time: send_at
                .format(TIME_FORMAT)
                .expect("time components always format"),
            send_year: send_at.year(),
            time_position: time_position(raw.appear_offset_secs),
            appear_offset_secs: raw.appear_offset_secs,
            content,
            user_id_masked: mask_user_hash(&raw.user_hash),
            color_name: color_name(raw.color),
            color_hex: color_hex(raw.color),
            mode_label: mode_label(raw.mode),
            font_label: font_label(raw.font_size),
            content_length,
        }
    }
}

/// Keep only a truncated prefix of the opaque user hash.
fn mask_user_hash(hash: &str) -> String {
    let prefix: String = hash.chars().take(8).collect();
    format!("{prefix}...")
}
