//! Nebula Dash entry point
//!
//! Runs a headless session with the demo autopilot. A real front end supplies
//! its own `Clock`, `JumpInput` and `RenderSink` and calls `run_session`.

use nebula_dash::platform::{Autopilot, FixedClock, run_session};
use nebula_dash::renderer::LogSink;
use nebula_dash::sim::GameState;
use nebula_dash::{Settings, SimError};

/// Optional path to a JSON settings file
const SETTINGS_ENV: &str = "NEBULA_DASH_SETTINGS";

/// Length of the headless demo run
const DEMO_SECONDS: f32 = 10.0;

fn run() -> Result<(), SimError> {
    let settings = Settings::load_optional(std::env::var_os(SETTINGS_ENV))?;
    let mut state = GameState::new(&settings)?;

    let mut clock = FixedClock::for_duration(settings.target_fps, DEMO_SECONDS);
    let report = run_session(&mut state, &mut clock, &mut Autopilot::default(), &mut LogSink)?;

    println!(
        "{}: {:?} after {} ticks ({:.2}s)",
        nebula_dash::consts::WINDOW_TITLE,
        report.outcome,
        report.ticks,
        report.elapsed
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Nebula Dash (headless) starting...");

    if let Err(e) = run() {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
