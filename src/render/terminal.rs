//! Plain-text surface for the CLI.

use std::io::Write;

use super::{Artwork, PlaylistRows, RenderSurface, Row};

/// Prints the playlist to stdout whenever it changes.
pub struct TerminalSurface {
    rows: PlaylistRows,
    /// Print at most this many rows per refresh
    max_rows: usize,
}

impl TerminalSurface {
    pub fn new(rows: PlaylistRows, max_rows: usize) -> Self {
        Self { rows, max_rows }
    }

    /// Print rows `[start, end)`.
    fn print_range(&self, start: usize, end: usize) {
        let mut out = std::io::stdout().lock();
        let end = end.min(self.rows.row_count()).min(self.max_rows);
        for position in start..end {
            if let Some(row) = self.rows.row(position) {
                let _ = writeln!(out, "{:>3}  {}", self.rows.row_id(position), format_row(&row));
            }
        }
        let _ = out.flush();
    }
}

impl RenderSurface for TerminalSurface {
    fn notify_range_changed(&mut self, start: usize, count: usize) {
        println!("── updated rows {}..{} ──", start, start + count);
        self.print_range(start, start + count);
    }

    fn notify_all_changed(&mut self) {
        println!("── playlist ({} entries) ──", self.rows.row_count());
        self.print_range(0, usize::MAX);
    }
}

/// One-line rendering of a row.
pub fn format_row(row: &Row) -> String {
    match row {
        Row::Song {
            title,
            artist,
            artwork,
        } => {
            let art = match artwork {
                Artwork::Url(url) => url.as_str(),
                Artwork::Placeholder => "(placeholder)",
            };
            format!("♪ {} — {}  [{}]", title, artist, art)
        }
        Row::Marker(label) => format!("   · {} ·", label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_song_row() {
        let row = Row::Song {
            title: "Marquee Moon".to_string(),
            artist: "Television".to_string(),
            artwork: Artwork::Placeholder,
        };
        let line = format_row(&row);
        assert!(line.contains("Marquee Moon"));
        assert!(line.contains("Television"));
        assert!(line.contains("placeholder"));
    }

    #[test]
    fn test_format_marker_row() {
        assert!(format_row(&Row::Marker("3 PM".to_string())).contains("3 PM"));
    }
}
