use std::time::{Duration, Instant};

use crate::input::Command;
use crate::renderer::RenderMode;
use crate::transform::Rotation;

/// Application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Current rotation of the cube
    pub rotation: Rotation,
    /// Angle added to every axis each frame
    pub step: f64,
    /// Enable debug mode
    pub debug: bool,
    /// Simulation paused
    pub paused: bool,
    /// Wireframe mode enabled
    pub wireframe: bool,
    /// Cleared when the user asks to quit
    pub running: bool,
}

impl AppState {
    pub fn new(step: f64, debug: bool, wireframe: bool) -> Self {
        Self {
            rotation: Rotation::default(),
            step,
            debug,
            paused: false,
            wireframe,
            running: true,
        }
    }

    /// Moves the rotation on by one frame unless paused
    pub fn advance(&mut self) {
        if !self.paused {
            self.rotation.rotate(self.step, self.step, self.step);
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => self.running = false,
            Command::TogglePause => self.paused = !self.paused,
            Command::ToggleDebug => self.debug = !self.debug,
            Command::ToggleWireframe => self.wireframe = !self.wireframe,
        }
    }

    pub fn mode(&self) -> RenderMode {
        if self.wireframe {
            RenderMode::Wireframe
        } else {
            RenderMode::Filled
        }
    }
}

/// Frames-per-second counter, recomputed about once a second
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        FpsCounter {
            frames_since_last_update: 0,
            last_fps_calculation: now,
            fps: 0.0,
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.frames_since_last_update += 1;
        let duration = now.duration_since(self.last_fps_calculation);
        if duration >= Duration::from_secs(1) {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_pause() {
        let mut state = AppState::new(0.1, false, false);
        state.advance();
        assert!((state.rotation.x - 0.1).abs() < 1e-12);
        assert_eq!(state.rotation.x, state.rotation.y);
        assert_eq!(state.rotation.y, state.rotation.z);

        state.apply(Command::TogglePause);
        let before = state.rotation;
        state.advance();
        assert_eq!(state.rotation, before);
    }

    #[test]
    fn test_commands_toggle_flags() {
        let mut state = AppState::new(0.1, false, false);
        assert_eq!(state.mode(), RenderMode::Filled);

        state.apply(Command::ToggleWireframe);
        assert_eq!(state.mode(), RenderMode::Wireframe);
        state.apply(Command::ToggleDebug);
        assert!(state.debug);
        state.apply(Command::Quit);
        assert!(!state.running);
    }

    #[test]
    fn test_fps_counter() {
        let start = Instant::now();
        let mut counter = FpsCounter::starting_at(start);
        for i in 1..10 {
            counter.tick_at(start + Duration::from_millis(100 * i));
        }
        assert_eq!(counter.fps(), 0.0);

        counter.tick_at(start + Duration::from_secs(1));
        assert!((counter.fps() - 10.0).abs() < 1e-9);
    }
}
