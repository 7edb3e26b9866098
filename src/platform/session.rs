//! Session loop
//!
//! One tick per frame until the clock reports a close request.

use serde::Serialize;

use super::input::JumpInput;
use super::time::Clock;
use crate::error::SimError;
use crate::renderer::RenderSink;
use crate::sim::{GameState, Outcome, TickInput, tick};

/// Summary of a finished session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub ticks: u64,
    pub elapsed: f64,
    pub outcome: Outcome,
    pub collided: bool,
}

/// Drive `state` until `clock` asks to close. The first invalid frame time
/// ends the session with an error.
pub fn run_session(
    state: &mut GameState,
    clock: &mut impl Clock,
    input: &mut impl JumpInput,
    sink: &mut impl RenderSink,
) -> Result<SessionReport, SimError> {
    log::info!("Session starting");

    while !clock.close_requested() {
        let dt = clock.elapsed_seconds();
        let tick_input = TickInput {
            jump: input.jump_pressed_this_tick(state),
        };
        let frame = tick(state, &tick_input, dt)?;
        sink.submit(&frame);
    }

    let report = SessionReport {
        ticks: state.time_ticks,
        elapsed: state.elapsed,
        outcome: state.outcome,
        collided: state.collided,
    };
    log::info!(
        "Session closed after {} ticks ({:.2}s): {:?}",
        report.ticks,
        report.elapsed,
        report.outcome
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::platform::{Autopilot, FixedClock, ScriptedInput};
    use crate::renderer::{DrawIntent, RecordingSink};

    /// Clock that hands out a bad frame time after a few good ones
    struct GlitchClock {
        frames: u32,
    }

    impl Clock for GlitchClock {
        fn elapsed_seconds(&mut self) -> f32 {
            self.frames += 1;
            if self.frames > 3 { -0.016 } else { 0.016 }
        }

        fn close_requested(&self) -> bool {
            false
        }
    }

    fn new_state() -> GameState {
        GameState::new(&Settings::default()).expect("valid settings")
    }

    #[test]
    fn test_idle_session_loses() {
        let mut state = new_state();
        let mut clock = FixedClock::for_duration(60, 8.0);
        let mut sink = RecordingSink::default();
        let report = run_session(&mut state, &mut clock, &mut ScriptedInput::default(), &mut sink)
            .expect("session runs");

        assert_eq!(report.ticks, 480);
        assert_eq!(report.outcome, Outcome::Lost);
        assert_eq!(sink.frames_submitted, 480);
        assert!(sink.frame.iter().any(|i| matches!(
            i,
            DrawIntent::Text { text, .. } if text == "Game Over!"
        )));
    }

    #[test]
    fn test_autopilot_session_wins() {
        let mut state = new_state();
        let mut clock = FixedClock::for_duration(60, 8.0);
        let mut sink = RecordingSink::default();
        let report = run_session(&mut state, &mut clock, &mut Autopilot::default(), &mut sink)
            .expect("session runs");

        assert_eq!(report.outcome, Outcome::Won);
        assert!(!report.collided);
    }

    #[test]
    fn test_invalid_frame_time_is_fatal() {
        let mut state = new_state();
        let mut clock = GlitchClock { frames: 0 };
        let mut sink = RecordingSink::default();
        let result = run_session(&mut state, &mut clock, &mut ScriptedInput::default(), &mut sink);

        assert!(matches!(result, Err(SimError::InvalidElapsed(_))));
        assert_eq!(state.time_ticks, 3);
        assert_eq!(sink.frames_submitted, 3);
    }
}
