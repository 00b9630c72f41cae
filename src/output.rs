//! CSV serialization of the accepted comment set. UTF-8 with a byte-order
//! mark so spreadsheet applications pick the right encoding, fixed column
//! order, all-or-nothing per run.

use crate::comment::Comment;
use crate::error::CrawlError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Fixed output column order. No raw-timestamp or debug columns are ever
/// persisted here; those are run-time diagnostics only.
pub const CSV_HEADERS: [&str; 12] = [
    "send_date",
    "send_time",
    "send_year",
    "time_position",
    "appear_offset_secs",
    "content",
    "user_id",
    "color_name",
    "color_hex",
    "mode",
    "font_size",
    "content_length",
];

/// Output file name encodes the video identifier and the accepted count.
pub fn output_file_name(bvid: &str, count: usize) -> String {
    format!("danmu_{bvid}_{count}.csv")
}

pub fn write_csv(path: &Path, comments: &[Comment]) -> Result<(), CrawlError> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(CSV_HEADERS)?;
    for c in comments {
        writer.write_record([
            c.send_date.as_str(),
            c.send_time.as_str(),
            &c.send_year.to_string(),
            c.time_position.as_str(),
            &format!("{:.2}", c.appear_offset_secs),
            c.content.as_str(),
            c.user_id_masked.as_str(),
            c.color_name,
            c.color_hex.as_str(),
            c.mode_label.as_str(),
            c.font_label,
            &c.content_length.to_string(),
        ])?;
    }
    writer.flush().map_err(CrawlError::Io)?;
    Ok(())
}
