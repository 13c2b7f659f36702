use std::io::{self, Write};

use crate::transcript::Segment;

/// Format a non-negative seconds offset as `HH:MM:SS.mmm`.
///
/// Whole seconds and milliseconds are truncated from the input
/// independently, never rounded: `3661.9996` formats as `01:01:01.999`,
/// and `8.1` (a float just below its decimal) as `00:00:08.099`. Hours
/// widen beyond two digits when needed.
pub fn format_timestamp(seconds: f64) -> String {
    format_timestamp_sep(seconds, '.')
}

/// Shared formatter. WebVTT separates milliseconds with `.`, SubRip with `,`.
fn format_timestamp_sep(seconds: f64, sep: char) -> String {
    let whole_secs = seconds as u64;
    let hours = whole_secs / 3600;
    let minutes = (whole_secs % 3600) / 60;
    let secs = whole_secs % 60;
    let millis = (seconds.fract() * 1000.0) as u64;
    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours, minutes, secs, sep, millis
    )
}

/// Write a complete WebVTT document: `WEBVTT` header, blank line, then one
/// cue per segment in input order. Segment text is trimmed; empty segments
/// still produce a cue.
pub fn write_vtt<W: Write>(out: &mut W, segments: &[Segment]) -> io::Result<()> {
    writeln!(out, "WEBVTT")?;
    writeln!(out)?;

    for segment in segments {
        writeln!(
            out,
            "{} --> {}",
            format_timestamp_sep(segment.start, '.'),
            format_timestamp_sep(segment.end, '.')
        )?;
        writeln!(out, "{}", segment.text.trim())?;
        writeln!(out)?;
    }

    Ok(())
}

/// Write a complete SubRip document: 1-based cue index, timestamps with `,`
/// before the milliseconds, trimmed text, blank separator line.
pub fn write_srt<W: Write>(out: &mut W, segments: &[Segment]) -> io::Result<()> {
    for (index, segment) in segments.iter().enumerate() {
        writeln!(out, "{}", index + 1)?;
        writeln!(
            out,
            "{} --> {}",
            format_timestamp_sep(segment.start, ','),
            format_timestamp_sep(segment.end, ',')
        )?;
        writeln!(out, "{}", segment.text.trim())?;
        writeln!(out)?;
    }

    Ok(())
}
