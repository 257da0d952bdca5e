/// Player card rendered as text
use mango_playback::{PlaybackPhase, PlayerSnapshot, PlayerView};
use std::io::Write;
use tracing::debug;

const BAR_WIDTH: usize = 24;

/// Writes the player card to a terminal (or any writer)
///
/// A header is printed whenever the shown track changes; otherwise only the
/// status line is rewritten in place.
pub struct TerminalView<W: Write> {
    out: W,
    last_header: Option<String>,
    backdrop: Option<String>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_header: None,
            backdrop: None,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Show a new background image
    pub fn show_backdrop(&mut self, url: Option<&str>) {
        self.backdrop = url.map(str::to_string);
        let line = match url {
            Some(url) => format!("\n  background: {url}\n"),
            None => "\n  no backgrounds configured\n".to_string(),
        };
        self.write(&line);
    }

    /// Print a one-off message on its own line
    pub fn message(&mut self, text: &str) {
        self.write(&format!("\n  {text}\n"));
    }

    /// Print the full card regardless of what was shown before
    pub fn status(&mut self, snapshot: &PlayerSnapshot) {
        self.last_header = None;
        self.render(snapshot);
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            debug!(error = %e, "Failed to write to terminal");
        }
    }
}

fn header(snapshot: &PlayerSnapshot) -> String {
    let Some(title) = snapshot.title.as_deref() else {
        return "\n  No songs available\n".to_string();
    };

    let mut text = format!("\n  {title}\n");
    let artist = snapshot.artist.as_deref().unwrap_or_default();
    let album = snapshot.album.as_deref().unwrap_or_default();
    match (artist.is_empty(), album.is_empty()) {
        (false, false) => text.push_str(&format!("  {artist} - {album}\n")),
        (false, true) => text.push_str(&format!("  {artist}\n")),
        (true, false) => text.push_str(&format!("  {album}\n")),
        (true, true) => {}
    }
    if let Some(picture) = snapshot.picture_url.as_deref().filter(|p| !p.is_empty()) {
        text.push_str(&format!("  cover: {picture}\n"));
    }
    if let Some(index) = snapshot.index {
        text.push_str(&format!("  track {} of {}\n", index + 1, snapshot.track_count));
    }
    text
}

/// Status line: transport glyph, time labels, progress bar, volume
pub fn status_line(snapshot: &PlayerSnapshot) -> String {
    let glyph = match snapshot.phase {
        PlaybackPhase::Empty => "-",
        PlaybackPhase::Uninitialized | PlaybackPhase::LoadedPaused => "||",
        PlaybackPhase::LoadedPlaying => ">",
    };
    let filled = ((snapshot.progress_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "  {glyph:<2} {} [{}{}] {}  vol {:>3}%",
        snapshot.elapsed_label,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        snapshot.duration_label,
        (snapshot.volume * 100.0).round() as u32,
    )
}

impl<W: Write> PlayerView for TerminalView<W> {
    fn render(&mut self, snapshot: &PlayerSnapshot) {
        let header = header(snapshot);
        if self.last_header.as_deref() != Some(header.as_str()) {
            self.write(&header);
            self.last_header = Some(header);
        }
        let line = status_line(snapshot);
        self.write(&format!("\r{line}"));
    }
}
