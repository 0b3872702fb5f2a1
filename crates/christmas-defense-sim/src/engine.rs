//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and all run state, applies
//! player commands, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing: build an engine,
//! apply N ticks, assert on the result.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use christmas_defense_core::commands::{CommandError, PlayerCommand};
use christmas_defense_core::components::Enemy;
use christmas_defense_core::constants::*;
use christmas_defense_core::enums::{GamePhase, TowerType};
use christmas_defense_core::events::GameEvent;
use christmas_defense_core::level::{validate_levels, LevelDefinition};
use christmas_defense_core::state::{GameStateSnapshot, HudView};
use christmas_defense_core::types::SimTime;

use crate::clock::{clamp_dt, FrameClock};
use crate::ledger::Ledger;
use crate::placement;
use crate::scenario;
use crate::systems;
use crate::systems::snapshot::RunView;
use crate::systems::towers::apply_slow;
use crate::systems::wave_spawner::SpawnDirector;
use crate::world_setup;

/// Configuration for starting a new run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    /// Levels in play order. An empty or invalid list falls back to the default campaign.
    pub levels: Vec<LevelDefinition>,
    pub starting_cookies: u32,
    pub starting_lives: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            levels: scenario::default_campaign(),
            starting_cookies: STARTING_COOKIES,
            starting_lives: STARTING_LIVES,
        }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    clock: FrameClock,
    levels: Vec<LevelDefinition>,
    level_index: usize,
    wave: u32,
    director: SpawnDirector,
    ledger: Ledger,
    blizzard_cooldown: f64,
    next_spawn_order: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine and load the first level.
    pub fn new(config: SimConfig) -> Self {
        let levels = match validate_levels(&config.levels) {
            Ok(()) => config.levels,
            Err(err) => {
                log::warn!("Invalid level list ({err}), using the default campaign");
                scenario::default_campaign()
            }
        };

        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::Active,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            clock: FrameClock::default(),
            levels,
            level_index: 0,
            wave: 1,
            director: SpawnDirector::default(),
            ledger: Ledger::new(config.starting_cookies, config.starting_lives.max(1)),
            blizzard_cooldown: 0.0,
            next_spawn_order: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        log::info!(
            "New run: seed {}, {} levels",
            config.seed,
            engine.levels.len()
        );
        engine.load_level(0);
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds (clamped to `MAX_FRAME_DT`)
    /// and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = clamp_dt(dt, MAX_FRAME_DT);
            self.run_systems(dt);
            self.time.advance(dt);
        }

        self.snapshot()
    }

    /// Advance to the monotonic timestamp `now_secs`, deriving a clamped dt
    /// from the previous call.
    pub fn advance_to(&mut self, now_secs: f64) -> GameStateSnapshot {
        let dt = self.clock.delta(now_secs);
        self.tick(dt)
    }

    /// Build the current snapshot and drain pending events into it.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        let level = self.current_level();
        let hud = HudView {
            cookies: self.ledger.cookies,
            lives: self.ledger.lives,
            level: self.level_index + 1,
            level_count: self.levels.len(),
            level_name: level.name.clone(),
            wave: self.wave,
            max_waves: level.max_waves,
            pending_spawns: self.director.pending(),
            blizzard_cooldown: self.blizzard_cooldown,
            enemies_killed: self.ledger.enemies_killed,
            enemies_leaked: self.ledger.enemies_leaked,
        };
        systems::snapshot::build_snapshot(
            &self.world,
            RunView {
                time: self.time,
                phase: self.phase,
                hud,
                path: &level.path.waypoints,
                corridor_width: level.path.corridor_width,
            },
            events,
        )
    }

    // --- Player actions (applied between ticks) ---

    /// Buy a tower and place it on the centre of a tile.
    pub fn place_tower(
        &mut self,
        tile_x: i32,
        tile_y: i32,
        tower: TowerType,
    ) -> Result<hecs::Entity, CommandError> {
        self.require_active()?;
        let position = placement::validate_placement(
            &self.world,
            &self.current_level().path,
            tile_x,
            tile_y,
            tower,
            self.ledger.cookies,
        )?;
        if !self.ledger.try_spend(tower.cost()) {
            return Err(CommandError::InsufficientFunds {
                cost: tower.cost(),
                available: self.ledger.cookies,
            });
        }
        let entity = world_setup::spawn_tower(&mut self.world, tower, position);
        self.events.push(GameEvent::TowerPlaced { tower, position });
        log::debug!("Placed {tower:?} at tile ({tile_x}, {tile_y})");
        Ok(entity)
    }

    /// Slow every live enemy. Returns how many enemies were affected.
    pub fn cast_blizzard(&mut self) -> Result<u32, CommandError> {
        self.require_active()?;
        if self.blizzard_cooldown > 0.0 {
            return Err(CommandError::AbilityOnCooldown {
                remaining_secs: self.blizzard_cooldown,
            });
        }
        let mut affected = 0;
        for (_entity, enemy) in self.world.query_mut::<&mut Enemy>() {
            if enemy.fate.is_alive() {
                apply_slow(enemy, BLIZZARD_SLOW_FACTOR, BLIZZARD_DURATION);
                affected += 1;
            }
        }
        self.blizzard_cooldown = BLIZZARD_COOLDOWN;
        self.events.push(GameEvent::BlizzardCast { affected });
        log::debug!("Blizzard slowed {affected} enemies");
        Ok(affected)
    }

    /// Move on to the next level after `LevelComplete`.
    pub fn advance_level(&mut self) -> Result<(), CommandError> {
        if self.phase != GamePhase::LevelComplete {
            return Err(CommandError::NoLevelToAdvance(self.phase));
        }
        self.ledger.cookies = self.ledger.cookies.saturating_add(LEVEL_COMPLETE_BONUS);
        self.load_level(self.level_index + 1);
        Ok(())
    }

    // --- Read-only accessors for UI collaborators ---

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn cookies(&self) -> u32 {
        self.ledger.cookies
    }

    pub fn lives(&self) -> u32 {
        self.ledger.lives
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// 0-based index of the level in play.
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn current_level(&self) -> &LevelDefinition {
        &self.levels[self.level_index]
    }

    pub fn blizzard_cooldown(&self) -> f64 {
        self.blizzard_cooldown
    }

    pub fn pending_spawns(&self) -> u32 {
        self.director.pending()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scenario setup in tests.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable ledger access for scenario setup in tests.
    #[cfg(test)]
    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Replace the pending spawn queue (tests that need an empty field).
    #[cfg(test)]
    pub(crate) fn director_mut(&mut self) -> &mut SpawnDirector {
        &mut self.director
    }

    /// Spawn an enemy of the current wave right now, bypassing the queue.
    #[cfg(test)]
    pub(crate) fn spawn_test_enemy(
        &mut self,
        kind: christmas_defense_core::enums::EnemyKind,
    ) -> hecs::Entity {
        let level = self.levels[self.level_index].clone();
        let entity = world_setup::spawn_enemy(
            &mut self.world,
            &mut self.rng,
            kind,
            self.wave,
            &level,
            self.next_spawn_order,
        );
        self.next_spawn_order += 1;
        entity
    }

    // --- Internals ---

    fn require_active(&self) -> Result<(), CommandError> {
        if self.phase == GamePhase::Active {
            Ok(())
        } else {
            Err(CommandError::NotActive(self.phase))
        }
    }

    /// Process all queued commands. Rejections are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(&command) {
                log::debug!("Rejected {command:?}: {err}");
            }
        }
    }

    fn handle_command(&mut self, command: &PlayerCommand) -> Result<(), CommandError> {
        match *command {
            PlayerCommand::PlaceTower {
                tile_x,
                tile_y,
                tower,
            } => self.place_tower(tile_x, tile_y, tower).map(|_| ()),
            PlayerCommand::CastBlizzard => self.cast_blizzard().map(|_| ()),
            PlayerCommand::AdvanceLevel => self.advance_level(),
        }
    }

    /// Clear the field and start wave 1 of level `index`.
    fn load_level(&mut self, index: usize) {
        self.level_index = index.min(self.levels.len() - 1);
        self.world.clear();
        self.wave = 1;
        self.blizzard_cooldown = 0.0;
        self.phase = GamePhase::Active;
        log::info!(
            "Level {} '{}' loaded",
            self.level_index + 1,
            self.current_level().name
        );
        self.start_wave();
    }

    fn start_wave(&mut self) {
        let level = &self.levels[self.level_index];
        let composition = self.director.prepare_wave(self.wave, level, &mut self.rng);
        log::info!(
            "Wave {}/{} on level {}: {:?}",
            self.wave,
            level.max_waves,
            self.level_index + 1,
            composition
        );
        self.events.push(GameEvent::WaveStarted {
            level: self.level_index + 1,
            wave: self.wave,
            enemies: composition.total(),
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let level = &self.levels[self.level_index];

        // 1. Spawn directive
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.director,
            level,
            self.wave,
            dt,
            &mut self.next_spawn_order,
            &mut self.events,
        );
        // 2. Enemy movement (may end the run)
        let defeated = systems::movement::run(
            &mut self.world,
            &level.path.waypoints,
            dt,
            &mut self.ledger,
            &mut self.events,
        );
        if defeated {
            self.phase = GamePhase::Defeat;
            self.events.push(GameEvent::Defeat);
            log::info!(
                "Defeat on level {} wave {}",
                self.level_index + 1,
                self.wave
            );
        } else {
            // 3. Towers
            systems::towers::run(
                &mut self.world,
                dt,
                &mut self.next_spawn_order,
                &mut self.ledger,
                &mut self.events,
            );
            // 4. Projectiles
            systems::projectiles::run(&mut self.world, dt, &mut self.ledger, &mut self.events);
        }
        // 5. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Wave / level / game completion
        if self.phase == GamePhase::Active {
            self.evaluate_progression();
        }
        // 7. Ability cooldown
        self.blizzard_cooldown = (self.blizzard_cooldown - dt).max(0.0);
    }

    /// Start the next wave, complete the level, or win, once the field is clear.
    fn evaluate_progression(&mut self) {
        if !self.director.is_exhausted() || systems::cleanup::remaining_enemies(&self.world) > 0 {
            return;
        }

        let max_waves = self.current_level().max_waves;
        if self.wave < max_waves {
            self.wave += 1;
            self.ledger.cookies = self.ledger.cookies.saturating_add(WAVE_CLEAR_BONUS);
            self.start_wave();
        } else if self.level_index + 1 < self.levels.len() {
            self.phase = GamePhase::LevelComplete;
            self.events.push(GameEvent::LevelComplete {
                level: self.level_index + 1,
                bonus: LEVEL_COMPLETE_BONUS,
            });
            log::info!("Level {} complete", self.level_index + 1);
        } else {
            self.phase = GamePhase::Victory;
            self.events.push(GameEvent::Victory);
            log::info!(
                "Victory with {} lives and {} cookies",
                self.ledger.lives,
                self.ledger.cookies
            );
        }
    }
}
