//! Plain-text note tables

use std::fmt::Write;

use super::result::SegmentNote;

/// Render notes as a text table, one line per segment
///
/// Segment numbers are 1-based. Lines look like:
///
/// ```text
/// segment 3: A4 measured 441.43 Hz, ideal 440.00 Hz, +5.6 cents
/// ```
///
/// Segments without a pitch are listed as `no pitch`.
pub fn format_note_table<'a, I>(notes: I) -> String
where
    I: IntoIterator<Item = &'a SegmentNote>,
{
    let mut table = String::new();

    for segment in notes {
        // Writing to a String cannot fail
        let _ = match &segment.note {
            Some(note) => writeln!(
                table,
                "segment {}: {} measured {:.2} Hz, ideal {:.2} Hz, {:+.1} cents",
                segment.index + 1,
                note.label(),
                segment.frequency_hz(),
                note.ideal_frequency_hz,
                note.deviation_cents
            ),
            None => writeln!(
                table,
                "segment {}: no pitch, measured {:.2} Hz",
                segment.index + 1,
                segment.frequency_hz()
            ),
        };
    }

    table
}
