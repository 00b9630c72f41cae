//! Deterministic code-to-label lookups. Every function here is total:
//! unknown inputs map to a generic label, never to an error.

/// The platform's default comment font size.
pub const DEFAULT_FONT_SIZE: u32 = 25;

pub fn mode_label(mode: u32) -> String {
    match mode {
        1 => "scroll".to_string(),
        5 => "top".to_string(),
        4 => "bottom".to_string(),
        n => format!("mode {n}"),
    }
}

pub fn font_label(size: u32) -> &'static str {
    use std::cmp::Ordering;
    match size.cmp(&DEFAULT_FONT_SIZE) {
        Ordering::Equal => "normal",
        Ordering::Greater => "larger",
        Ordering::Less => "smaller",
    }
}

/// Exact-match table of the named colors the platform's picker offers.
pub fn color_name(color: u32) -> &'static str {
    match color {
        0xFFFFFF => "white",
        0x000000 => "black",
        0xFF0000 => "red",
        0xFF5E5E => "light red",
        0xE70012 => "deep red",
        0xFFAEC9 => "pink",
        0xFF7F27 => "orange",
        0xFFC90E => "yellow",
        0xFEF102 => "bright yellow",
        0x22B14C => "green",
        0x90C320 => "light green",
        0x00A2E8 => "blue",
        0x3F48CC => "deep blue",
        0x1D9AA5 => "cyan",
        0xA349A4 => "purple",
        0xB97A57 => "brown",
        0x7F7F7F => "gray",
        0xC3C3C3 => "light gray",
        _ => "other color",
    }
}

pub fn color_hex(color: u32) -> String {
    format!("#{color:06X}")
}

/// Minutes:zero-padded-seconds position within the video.
pub fn time_position(appear_secs: f64) -> String {
    let minutes = (appear_secs / 60.0) as u64;
    let seconds = (appear_secs % 60.0) as u64;
    format!("{minutes}:{seconds:02}")
}
