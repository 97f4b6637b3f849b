//! The display surface: window creation, event pump, and teardown.

use sdl2::event::EventPollIterator;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

use crate::error::PlatformError;

/// An open window with its canvas and event pump.
///
/// Dropping the surface tears the window down. The rest of the engine treats
/// this as an opaque capability; there is no rendering pipeline behind it.
pub struct DisplaySurface {
    _sdl: Sdl,
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

impl DisplaySurface {
    /// Creates a centered, resizable window with the given title.
    pub fn create(title: &str, width: u32, height: u32) -> Result<Self, PlatformError> {
        let sdl = sdl2::init().map_err(PlatformError::Init)?;
        let video = sdl.video().map_err(PlatformError::Init)?;

        let window = video
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| PlatformError::WindowCreate(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| PlatformError::WindowCreate(e.to_string()))?;

        let event_pump = sdl.event_pump().map_err(PlatformError::Init)?;

        Ok(Self {
            _sdl: sdl,
            canvas,
            event_pump,
        })
    }

    /// Drains pending window and input events.
    pub fn events(&mut self) -> EventPollIterator<'_> {
        self.event_pump.poll_iter()
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), PlatformError> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| PlatformError::Window(e.to_string()))
    }

    /// Clears to black and presents. The whole frame, for now.
    pub fn present(&mut self) {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
        self.canvas.present();
    }
}
