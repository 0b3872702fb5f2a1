use std::process::ExitCode;
use std::time::{Duration, Instant};

use christmas_defense_app::autopilot::{self, Autopilot};
use christmas_defense_app::cli::{Options, USAGE};
use christmas_defense_app::state::{AppError, AppState};
use christmas_defense_core::state::GameStateSnapshot;
use christmas_defense_sim::engine::{SimConfig, SimulationEngine};

/// Fixed step for the headless run.
const HEADLESS_DT: f64 = 1.0 / 60.0;

fn main() -> ExitCode {
    env_logger::init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&options) {
        Ok(snapshot) => {
            report(&snapshot);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<GameStateSnapshot, AppError> {
    let config = options.sim_config()?;
    match options.realtime_secs {
        Some(secs) => run_realtime(config, Duration::from_secs_f64(secs)),
        None => {
            let mut engine = SimulationEngine::new(config);
            let mut pilot = Autopilot::new();
            Ok(autopilot::play(&mut engine, &mut pilot, HEADLESS_DT, options.max_ticks))
        }
    }
}

/// Drive the threaded loop from the autopilot, polling snapshots.
fn run_realtime(config: SimConfig, duration: Duration) -> Result<GameStateSnapshot, AppError> {
    let state = AppState::new();
    state.start_simulation(config)?;

    let mut pilot = Autopilot::new();
    let deadline = Instant::now() + duration;
    let mut last = None;
    while Instant::now() < deadline {
        if let Some(snapshot) = state.get_snapshot()? {
            for command in pilot.decide(&snapshot) {
                state.send_command(command)?;
            }
            let over = snapshot.phase.is_game_over();
            last = Some(snapshot);
            if over {
                break;
            }
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    state.stop_simulation()?;
    Ok(last.unwrap_or_default())
}

fn report(snapshot: &GameStateSnapshot) {
    let hud = &snapshot.hud;
    log::info!(
        "{:?} on level {}/{} ('{}') wave {}/{} after {:.1}s: {} lives, {} cookies, {} kills, {} leaks",
        snapshot.phase,
        hud.level,
        hud.level_count,
        hud.level_name,
        hud.wave,
        hud.max_waves,
        snapshot.time.elapsed_secs,
        hud.lives,
        hud.cookies,
        hud.enemies_killed,
        hud.enemies_leaked
    );
    match serde_json::to_string_pretty(hud) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize summary: {err}"),
    }
}
