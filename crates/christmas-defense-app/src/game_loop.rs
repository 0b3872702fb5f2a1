//! Game loop thread. Drives the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never has to cross a
//! thread boundary. Commands arrive via `mpsc` channel. Snapshots are stored
//! in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use christmas_defense_core::state::GameStateSnapshot;
use christmas_defense_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Loop frequency. The engine derives its own clamped dt from wall time,
/// so this only sets how often snapshots are published.
pub const TICK_RATE: u32 = 60;

/// Nominal duration of one loop iteration.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("christmas-defense-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let started = Instant::now();
    let mut next_tick_time = started;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::debug!("Game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance to the current wall time (engine clamps the delta)
        let snapshot = engine.advance_to(started.elapsed().as_secs_f64());
        for event in &snapshot.events {
            log::trace!("{event:?}");
        }

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use christmas_defense_core::commands::PlayerCommand;
    use christmas_defense_core::enums::{GamePhase, TowerType};

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::CastBlizzard))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::AdvanceLevel))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::CastBlizzard)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::AdvanceLevel)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::PlaceTower {
            tile_x: 0,
            tile_y: 5,
            tower: TowerType::Cannon,
        });

        // Run long enough for enemies and shots to be on the field
        for _ in 0..300 {
            engine.tick(1.0 / 60.0);
        }

        let snapshot = engine.tick(1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_applies_commands_and_publishes() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::PlaceTower {
            tile_x: 0,
            tile_y: 5,
            tower: TowerType::Cannon,
        }))
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        let mut placed = false;
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                assert_eq!(snap.phase, GamePhase::Active);
                if snap.towers.len() == 1 {
                    placed = true;
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(placed, "Tower never appeared in a published snapshot");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
