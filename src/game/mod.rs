//! Game lifecycle controller: init → run → cleanup → (restart | shutdown).

pub mod title;

use std::time::{Duration, Instant};

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use crate::constants::{DEFAULT_TITLE_FORMAT, LOOP_TIME, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::{EngineError, EngineResult};
use crate::log::{Logger, CORE_ENGINE};
use crate::platform::dialog::{self, AlertLevel};
use crate::platform::display::DisplaySurface;
use crate::platform::sleep;
use title::{format_title, GraphicsApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotRunning,
    Running,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub name: String,
    /// Window title format; see [`title::format_title`] for tokens.
    pub title_format: String,
    pub width: u32,
    pub height: u32,
    pub api: GraphicsApi,
    /// Whether `close()` is permitted to end the run loop.
    pub closeable: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            title_format: DEFAULT_TITLE_FORMAT.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            api: GraphicsApi::Software,
            closeable: true,
        }
    }
}

/// Owns the display surface and drives the blocking run loop.
///
/// The logger is constructed and opened by the owner (the entry point) and
/// handed in by handle; `run()` shuts it down when the loop exits for good.
pub struct Game {
    config: GameConfig,
    logger: Logger,
    state: RunState,
    restart_requested: bool,
    close_requested: bool,
    display: Option<DisplaySurface>,
    fps: u32,
}

impl Game {
    pub fn new(config: GameConfig, logger: Logger) -> Self {
        Self {
            config,
            logger,
            state: RunState::NotRunning,
            restart_requested: false,
            close_requested: false,
            display: None,
            fps: 0,
        }
    }

    /// Runs until close is requested and no restart is pending, then shuts
    /// the logger down. Window creation failure is the one fatal branch: it
    /// is logged at Fatal and returned.
    pub fn run(&mut self) -> EngineResult<()> {
        loop {
            if let Err(error) = self.init() {
                let _ = self
                    .logger
                    .fatal(&CORE_ENGINE, &format!("Failed to initialize: {error}"));
                return Err(error);
            }

            self.event_loop()?;
            self.cleanup();
            self.logger.flush()?;

            if !std::mem::take(&mut self.restart_requested) {
                break;
            }
            self.logger.info(&CORE_ENGINE, "Restart requested; reinitializing")?;
        }

        self.logger.close()?;
        Ok(())
    }

    /// Requests the event loop to exit, if closing is permitted.
    pub fn close(&mut self) {
        if !self.config.closeable {
            let _ = self.logger.warn(&CORE_ENGINE, "Close requested, but closing is disabled");
            return;
        }
        self.close_requested = true;
    }

    /// Clears any pending restart, then closes.
    pub fn full_close(&mut self) {
        self.restart_requested = false;
        self.close();
    }

    /// Schedules a restart and closes the current surface.
    pub fn restart(&mut self) {
        self.restart_requested = true;
        self.close();
    }

    /// Tears down a leftover display surface outside the run loop.
    ///
    /// Refused while the game is running: the error is logged and nothing is
    /// cleaned up.
    pub fn shutdown(&mut self) -> EngineResult<()> {
        if self.state == RunState::Running {
            self.logger
                .error(&CORE_ENGINE, "Shutdown requested while still running; ignoring")?;
            return Err(EngineError::InvalidState(
                "shutdown requested while running".to_string(),
            ));
        }
        self.cleanup();
        Ok(())
    }

    /// Shows a modal alert. Without an explicit title, `"<name> Alert"` is
    /// used.
    pub fn alert(&self, level: AlertLevel, message: &str, title: Option<&str>) -> EngineResult<()> {
        let title = dialog::resolve_title(&self.config.name, title);
        dialog::alert(level, message, &title)?;
        Ok(())
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_restart_requested(&self) -> bool {
        self.restart_requested
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// The current window title, per the configured format.
    pub fn formatted_title(&self) -> String {
        format_title(&self.config.title_format, &self.config.name, self.config.api, self.fps)
    }

    /// Creates the display surface if absent and marks the game running.
    fn init(&mut self) -> EngineResult<()> {
        if self.display.is_none() {
            let title = self.formatted_title();
            let display = DisplaySurface::create(&title, self.config.width, self.config.height)?;
            self.display = Some(display);
            self.logger.info(&CORE_ENGINE, "Display surface created")?;
        }
        self.state = RunState::Running;
        self.close_requested = false;
        Ok(())
    }

    /// Marks the game not-running and destroys the display surface.
    fn cleanup(&mut self) {
        self.state = RunState::NotRunning;
        self.display = None;
    }

    /// Blocks until `close()` succeeds, pacing frames at 60 Hz and refreshing
    /// the title with the measured FPS once per second.
    fn event_loop(&mut self) -> EngineResult<()> {
        let mut focused = true;
        let mut frames = 0u32;
        let mut window_start = Instant::now();

        while !self.close_requested {
            let frame_start = Instant::now();

            let events: Vec<Event> = match self.display.as_mut() {
                Some(display) => display.events().collect(),
                None => {
                    return Err(EngineError::InvalidState(
                        "event loop entered without a display surface".to_string(),
                    ))
                }
            };

            for event in events {
                match event {
                    Event::Quit { .. } => {
                        self.logger.info(&CORE_ENGINE, "Exit requested. Exiting...")?;
                        self.close();
                    }
                    Event::KeyDown {
                        keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                        ..
                    } => {
                        self.logger.info(&CORE_ENGINE, "Exit requested. Exiting...")?;
                        self.full_close();
                    }
                    Event::KeyDown {
                        keycode: Some(Keycode::R),
                        ..
                    } => {
                        self.restart();
                    }
                    Event::Window { win_event, .. } => match win_event {
                        WindowEvent::Hidden | WindowEvent::FocusLost => {
                            self.logger.trace(&CORE_ENGINE, "Window lost focus")?;
                            focused = false;
                        }
                        WindowEvent::Shown | WindowEvent::FocusGained => {
                            self.logger.trace(&CORE_ENGINE, "Window gained focus")?;
                            focused = true;
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }

            if let Some(display) = self.display.as_mut() {
                display.present();
            }
            frames += 1;

            if window_start.elapsed() >= Duration::from_secs(1) {
                self.fps = (frames as f32 / window_start.elapsed().as_secs_f32()).round() as u32;
                frames = 0;
                window_start = Instant::now();

                let new_title = self.formatted_title();
                if let Some(display) = self.display.as_mut() {
                    display.set_title(&new_title)?;
                }
            }

            let elapsed = frame_start.elapsed();
            if elapsed < LOOP_TIME {
                sleep(LOOP_TIME - elapsed, focused);
            }
        }

        Ok(())
    }
}
