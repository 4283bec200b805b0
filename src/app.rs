use std::io;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use tracing::info;

use crate::events::Event;
use crate::game::Control;
use crate::game::Game;
use crate::render::Frame;
use crate::render::Glyphs;

/// How long to wait for input while paused. Only bounds how often we look at the clock.
const IDLE_FRAMETIME: Duration = Duration::from_millis(250);

/// Where events come from. Must not block longer than `timeout`.
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Where frames go.
pub trait Display {
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Run the interaction loop until [`Event::Quit`] comes in.
pub fn run<I, D>(
    game: &mut Game,
    input: &mut I,
    display: &mut D,
    glyphs: &Glyphs,
) -> anyhow::Result<()>
where
    I: EventSource,
    D: Display,
{
    let mut frame = Frame::new();

    draw(game, &mut frame, display, glyphs)?;

    loop {
        let now = Instant::now();
        let timeout = game.time_to_next_tick(now).unwrap_or(IDLE_FRAMETIME);

        let mut redraw = false;

        if let Some(event) = input.poll(timeout).context("Failed to read input")? {
            let control = game
                .handle(event, Instant::now())
                .context("Failed to apply input")?;

            match control {
                Control::Quit => break,
                Control::Redraw => redraw = true,
            }
        }

        redraw |= game.tick(Instant::now());

        if redraw {
            draw(game, &mut frame, display, glyphs)?;
        }
    }

    info!(generation = game.grid().generation(), "quit");

    Ok(())
}

fn draw<D: Display>(
    game: &Game,
    frame: &mut Frame,
    display: &mut D,
    glyphs: &Glyphs,
) -> anyhow::Result<()> {
    frame.render(game.grid(), game.viewport(), game.is_playing(), glyphs);
    display.draw(frame).context("Failed to draw frame")
}
