/// Keyboard commands read from stdin, one per line
use crate::error::{PlayerError, Result};

pub const HELP: &str =
    "p/space play-pause  n next  b previous  v <0-1> volume  ] [ background  s status  q quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    TogglePlayPause,
    Next,
    Previous,
    Volume(f32),
    BackdropForward,
    BackdropBack,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// A blank line (or just spaces) toggles playback.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(Command::TogglePlayPause);
        };

        let command = match word {
            "p" | "play" | "pause" => Command::TogglePlayPause,
            "n" | "next" => Command::Next,
            "b" | "prev" | "previous" => Command::Previous,
            "]" => Command::BackdropForward,
            "[" => Command::BackdropBack,
            "s" | "status" => Command::Status,
            "h" | "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            "v" | "vol" | "volume" => {
                let raw = parts
                    .next()
                    .ok_or_else(|| PlayerError::InvalidVolume("missing value".to_string()))?;
                // Range is the controller's call: it clamps
                let volume: f32 = raw
                    .parse()
                    .map_err(|_| PlayerError::InvalidVolume(raw.to_string()))?;
                Command::Volume(volume)
            }
            other => return Err(PlayerError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_keys() {
        assert_eq!(Command::parse("p").unwrap(), Command::TogglePlayPause);
        assert_eq!(Command::parse(" ").unwrap(), Command::TogglePlayPause);
        assert_eq!(Command::parse("").unwrap(), Command::TogglePlayPause);
        assert_eq!(Command::parse("n\n").unwrap(), Command::Next);
        assert_eq!(Command::parse("b").unwrap(), Command::Previous);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn backdrop_keys() {
        assert_eq!(Command::parse("]").unwrap(), Command::BackdropForward);
        assert_eq!(Command::parse("[").unwrap(), Command::BackdropBack);
    }

    #[test]
    fn volume_takes_a_fraction() {
        assert_eq!(Command::parse("v 0.5").unwrap(), Command::Volume(0.5));
        assert_eq!(Command::parse("v 1.5").unwrap(), Command::Volume(1.5));
        assert_eq!(Command::parse("vol -1").unwrap(), Command::Volume(-1.0));
        assert!(matches!(
            Command::parse("v loud"),
            Err(PlayerError::InvalidVolume(_))
        ));
        assert!(matches!(Command::parse("v"), Err(PlayerError::InvalidVolume(_))));
    }

    #[test]
    fn unknown_word_is_rejected() {
        assert!(matches!(
            Command::parse("shuffle"),
            Err(PlayerError::UnknownCommand(word)) if word == "shuffle"
        ));
    }
}
