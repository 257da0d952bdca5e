/// Interactive playback session
///
/// One task serializes everything. Each stdin command and each clock tick,
/// with the notifications it raised, is handled to completion before the
/// next.
use crate::{
    backdrop::Backdrop,
    clock_audio::{clock_audio, ClockAudio, ClockDriver},
    command::{Command, HELP},
    terminal_view::TerminalView,
};
use mango_core::PlaylistSource;
use mango_playback::{
    AudioNotification, PlaybackConfig, PlaybackController, PlaybackEvent, PlayerSnapshot,
    PlayerView,
};
use std::{io::Write, time::Duration};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
    time::MissedTickBehavior,
};
use tracing::{debug, info, warn};

pub struct Session<W: Write> {
    controller: PlaybackController<ClockAudio>,
    driver: ClockDriver,
    notifications: mpsc::UnboundedReceiver<AudioNotification>,
    view: TerminalView<W>,
    backdrop: Backdrop,
    tick: Duration,
}

impl<W: Write> Session<W> {
    pub fn new(config: PlaybackConfig, tick: Duration, backdrop: Backdrop, out: W) -> Self {
        let (audio, driver, notifications) = clock_audio();
        Self {
            controller: PlaybackController::new(audio, config),
            driver,
            notifications,
            view: TerminalView::new(out),
            backdrop,
            tick,
        }
    }

    /// Fetch the playlist once
    ///
    /// A failure is logged and leaves the session with an empty, inert
    /// playlist.
    pub async fn load_playlist<S: PlaylistSource + ?Sized>(&mut self, source: &S) -> usize {
        match self.controller.refresh_from(source).await {
            Ok(count) => {
                self.driver.register_tracks(self.controller.playlist().iter());
                info!(songs = count, "Playlist ready");
                count
            }
            Err(e) => {
                warn!(error = %e, "Starting with an empty playlist");
                0
            }
        }
    }

    pub fn controller(&self) -> &PlaybackController<ClockAudio> {
        &self.controller
    }

    pub fn driver(&self) -> &ClockDriver {
        &self.driver
    }

    pub fn view(&self) -> &TerminalView<W> {
        &self.view
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.controller.snapshot()
    }

    /// Run until `q` or end of input
    pub async fn run<R>(&mut self, input: R) -> anyhow::Result<PlayerSnapshot>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.view.message(HELP);
        if let Some(url) = self.backdrop.current().map(str::to_string) {
            self.view.show_backdrop(Some(&url));
        }
        self.controller.drain_events();
        self.controller.render(&mut self.view);

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        break;
                    };
                    if !self.handle_line(&line) {
                        break;
                    }
                }
                _ = ticker.tick() => self.advance(self.tick),
            }
            self.flush_events();
        }

        self.controller.teardown();
        self.view.message("bye");
        Ok(self.controller.snapshot())
    }

    /// Apply one input line; returns false on quit
    pub fn handle_line(&mut self, line: &str) -> bool {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                self.view.message(&format!("{e} ({HELP})"));
                return true;
            }
        };
        debug!(?command, "Command");

        match command {
            Command::TogglePlayPause => {
                self.controller.toggle_play_pause();
            }
            Command::Next => {
                self.controller.next();
            }
            Command::Previous => {
                self.controller.previous();
            }
            Command::Volume(volume) => {
                if let Err(e) = self.controller.set_volume(volume) {
                    self.view.message(&e.to_string());
                }
            }
            Command::BackdropForward => {
                let url = self.backdrop.forward().map(str::to_string);
                self.view.show_backdrop(url.as_deref());
            }
            Command::BackdropBack => {
                let url = self.backdrop.back().map(str::to_string);
                self.view.show_backdrop(url.as_deref());
            }
            Command::Status => {
                let snapshot = self.controller.snapshot();
                self.view.status(&snapshot);
            }
            Command::Help => self.view.message(HELP),
            Command::Quit => return false,
        }
        true
    }

    /// Move the clock and deliver what it raised
    pub fn advance(&mut self, elapsed: Duration) {
        self.driver.tick(elapsed);
        while let Ok(notification) = self.notifications.try_recv() {
            self.controller.handle_notification(notification);
        }
        self.flush_events();
    }

    /// Render if anything changed since the last step
    pub fn flush_events(&mut self) {
        if !self.controller.has_pending_events() {
            return;
        }
        for event in self.controller.drain_events() {
            if let PlaybackEvent::Error { message } = event {
                self.view.message(&message);
            }
        }
        self.controller.render(&mut self.view);
    }
}
