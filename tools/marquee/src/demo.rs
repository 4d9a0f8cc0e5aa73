//! The two display modes: scrolling marquee and interactive panning.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use lumatrix_core::{draw_text, Surface};
use lumatrix_fonts::NINEPIN_5X8;

use crate::config::Settings;
use crate::term::{MatrixScreen, RawTerm};

/// Runs the scrolling marquee until the user quits.
pub fn run_scroll(settings: &Settings) -> Result<()> {
    let font = &NINEPIN_5X8;
    let mut surface = Surface::new(settings.width, settings.height);
    let mut screen = MatrixScreen::new(settings.height);
    let _guard = RawTerm::enter()?;

    // Vertically centered; tall surfaces leave the slack above.
    let y = (settings.height as i32 - font.char_height() as i32) / 2;
    let mut x = settings.width as i32 - 1;

    loop {
        surface.clear();
        let visible = draw_text(&mut surface, font, settings.spacing, &settings.text, x, y);
        screen.present(&surface, "q quits")?;

        if wait_frame(settings.frame)? {
            return Ok(());
        }

        // Slide left until the text box has left the surface, then wrap
        // back in from the right edge.
        if visible {
            x -= 1;
        } else {
            x = settings.width as i32 - 1;
        }
    }
}

/// Runs the arrow-key panning mode until the user quits.
pub fn run_pan(settings: &Settings) -> Result<()> {
    let font = &NINEPIN_5X8;
    let mut surface = Surface::new(settings.width, settings.height);
    let mut screen = MatrixScreen::new(settings.height);
    let _guard = RawTerm::enter()?;

    let mut x = 0i32;
    let mut y = 0i32;
    let mut spacing = settings.spacing;

    loop {
        surface.clear();
        draw_text(&mut surface, font, spacing, &settings.text, x, y);
        let status =
            format!("x {x:>4}  y {y:>4}  spacing {spacing}  (arrows move, s spacing, q quits)");
        screen.present(&surface, &status)?;

        if let Event::Key(key) = event::read()? {
            if is_quit(&key) {
                return Ok(());
            }
            match key.code {
                KeyCode::Up => y += 1,
                KeyCode::Down => y -= 1,
                KeyCode::Right => x += 1,
                KeyCode::Left => x -= 1,
                KeyCode::Char('s') => spacing = (spacing + 1) % 6,
                _ => {}
            }
        }
    }
}

/// Sleeps out one frame period, returning `true` if the user quit.
fn wait_frame(frame: Duration) -> Result<bool> {
    let deadline = Instant::now() + frame;
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Ok(false);
        }
        if event::poll(deadline - now)? {
            if let Event::Key(key) = event::read()? {
                if is_quit(&key) {
                    return Ok(true);
                }
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
