use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use textcube::config::Args;
use textcube::display::{overlay, TerminalDisplay};
use textcube::input::command_for;
use textcube::state::{AppState, FpsCounter};
use textcube::Renderer;

/// Main function
fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.render_settings()?;
    let mut renderer = Renderer::new(&settings)?;
    log::info!(
        "rendering {}x{} at {} fps, palette {:?}",
        settings.columns,
        settings.rows,
        args.fps,
        settings.palette
    );

    let mut display = TerminalDisplay::new();
    display.enter()?;

    let result = run(&mut display, &mut renderer, &args);

    // Always try to restore terminal state.
    let _ = display.exit();
    result
}

fn run(display: &mut TerminalDisplay, renderer: &mut Renderer, args: &Args) -> Result<()> {
    let frame_time = args.frame_duration();
    let mut state = AppState::new(args.step, args.debug, args.wireframe);
    let mut fps = FpsCounter::new();
    let mut frames: u64 = 0;

    while state.running {
        let frame_start = Instant::now();

        // Render
        renderer.set_mode(state.mode());
        let frame = renderer.render_frame(state.rotation);
        let labels = overlay(&state, fps.fps(), frame.columns(), frame.rows());
        display.draw(frame, &labels)?;
        fps.tick();

        frames += 1;
        if args.frames.is_some_and(|limit| frames >= limit) {
            break;
        }

        // Update
        state.advance();

        // Handle input until the next frame is due
        while state.running {
            let timeout = frame_time
                .checked_sub(frame_start.elapsed())
                .unwrap_or(Duration::ZERO);
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if let Some(command) = command_for(key) {
                    state.apply(command);
                }
            }
        }
    }

    Ok(())
}
