#[cfg(test)]
mod tests {
    use crate::commands::{CommandError, PlayerCommand};
    use crate::components::{Enemy, TowerWeapon};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::geometry::{distance, point_polyline_distance, point_segment_distance};
    use crate::level::{levels_from_json, validate_levels, LevelDefinition, LevelError, PathDef};
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime};

    fn meadow_path() -> PathDef {
        PathDef::new(
            vec![
                Position::new(0.0, 300.0),
                Position::new(140.0, 300.0),
                Position::new(200.0, 200.0),
                Position::new(340.0, 200.0),
            ],
            DEFAULT_CORRIDOR_WIDTH,
        )
    }

    fn level(name: &str, path: PathDef) -> LevelDefinition {
        LevelDefinition {
            name: name.to_string(),
            path,
            spawn_interval: 1.5,
            max_waves: 5,
            difficulty: 1.0,
            fast_bonus: 0,
            extra_tank_wave: 4,
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_segment_distance_projects_onto_interior() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 0.0);
        let p = Position::new(5.0, 7.0);
        assert!((point_segment_distance(&p, &a, &b) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_segment_distance_clamps_to_endpoints() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 0.0);
        let beyond = Position::new(13.0, 4.0);
        assert!((point_segment_distance(&beyond, &a, &b) - 5.0).abs() < 1e-10);
        let before = Position::new(-3.0, -4.0);
        assert!((point_segment_distance(&before, &a, &b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_segment_distance_degenerate_segment() {
        let a = Position::new(2.0, 2.0);
        let p = Position::new(5.0, 6.0);
        assert!((point_segment_distance(&p, &a, &a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_polyline_distance_picks_nearest_segment() {
        let path = meadow_path();
        // Directly above the third segment (200,200)-(340,200).
        let p = Position::new(260.0, 150.0);
        assert!((point_polyline_distance(&p, &path.waypoints) - 50.0).abs() < 1e-10);
        assert!(point_polyline_distance(&p, &path.waypoints[..1]).is_infinite());
    }

    #[test]
    fn test_step_toward_never_overshoots() {
        let from = Position::new(0.0, 0.0);
        let to = Position::new(10.0, 0.0);
        let mid = from.step_toward(&to, 4.0);
        assert!((mid.x - 4.0).abs() < 1e-10);
        assert_eq!(from.step_toward(&to, 25.0), to);
    }

    // ---- Path / level ----

    #[test]
    fn test_path_blocks_placement_inside_corridor() {
        let path = meadow_path();
        // 46 px from the first segment: exactly corridor/2 + clearance.
        assert!(path.blocks_placement(&Position::new(60.0, 346.0), PATH_CLEARANCE));
        assert!(!path.blocks_placement(&Position::new(60.0, 347.0), PATH_CLEARANCE));
    }

    #[test]
    fn test_path_length() {
        let path = PathDef::new(
            vec![
                Position::new(0.0, 0.0),
                Position::new(30.0, 40.0),
                Position::new(30.0, 100.0),
            ],
            10.0,
        );
        assert!((path.length() - 110.0).abs() < 1e-10);
        assert_eq!(path.start(), Position::new(0.0, 0.0));
    }

    #[test]
    fn test_level_validation() {
        assert!(level("ok", meadow_path()).validate().is_ok());

        let short = level("short", PathDef::new(vec![Position::new(0.0, 0.0)], 80.0));
        assert_eq!(
            short.validate(),
            Err(LevelError::PathTooShort("short".to_string()))
        );

        let repeated = level(
            "repeat",
            PathDef::new(
                vec![
                    Position::new(0.0, 0.0),
                    Position::new(5.0, 5.0),
                    Position::new(5.0, 5.0),
                ],
                80.0,
            ),
        );
        assert_eq!(
            repeated.validate(),
            Err(LevelError::RepeatedWaypoint {
                name: "repeat".to_string(),
                index: 1
            })
        );

        let mut no_waves = level("none", meadow_path());
        no_waves.max_waves = 0;
        assert!(matches!(no_waves.validate(), Err(LevelError::NoWaves(_))));

        let mut bad_interval = level("pace", meadow_path());
        bad_interval.spawn_interval = 0.0;
        assert!(matches!(
            bad_interval.validate(),
            Err(LevelError::BadSpawnInterval(_))
        ));

        assert_eq!(validate_levels(&[]), Err(LevelError::Empty));
    }

    #[test]
    fn test_levels_from_json() {
        let json = r#"[
            {
                "name": "Tiny",
                "path": {
                    "waypoints": [{"x": 0.0, "y": 100.0}, {"x": 800.0, "y": 100.0}],
                    "corridor_width": 60.0
                },
                "spawn_interval": 1.0,
                "max_waves": 2,
                "difficulty": 1.2,
                "extra_tank_wave": 2
            }
        ]"#;
        let levels = levels_from_json(json).unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].name, "Tiny");
        assert_eq!(levels[0].fast_bonus, 0, "fast_bonus defaults to zero");

        assert!(matches!(levels_from_json("{"), Err(LevelError::Parse(_))));
        assert_eq!(levels_from_json("[]"), Err(LevelError::Empty));
    }

    // ---- Enums / components ----

    #[test]
    fn test_tower_costs() {
        assert_eq!(TowerType::Cannon.cost(), 50);
        assert!(TowerType::Frost.cost() > TowerType::Cannon.cost());
        assert!(TowerType::Mortar.cost() > TowerType::Frost.cost());
    }

    #[test]
    fn test_game_phase_flags() {
        assert!(!GamePhase::Active.is_game_over());
        assert!(!GamePhase::LevelComplete.is_game_over());
        assert!(GamePhase::Victory.is_game_over() && GamePhase::Victory.is_win());
        assert!(GamePhase::Defeat.is_game_over() && !GamePhase::Defeat.is_win());
    }

    #[test]
    fn test_enemy_flags_and_ratio() {
        let mut enemy = Enemy {
            kind: EnemyKind::Normal,
            base_speed: 50.0,
            speed_multiplier: 0.5,
            slow_remaining: 1.0,
            max_health: 10.0,
            health: -3.0,
            regen_per_sec: 0.0,
            reward: 5,
            fate: EnemyFate::Dead,
        };
        assert!(enemy.is_dead());
        assert!(!enemy.reached_end());
        assert_eq!(enemy.health_ratio(), 0.0);
        assert!((enemy.current_speed() - 25.0).abs() < 1e-10);

        enemy.fate = EnemyFate::ReachedEnd;
        assert!(enemy.reached_end() && !enemy.is_dead());
    }

    #[test]
    fn test_tower_weapon_type() {
        let mortar = TowerWeapon::Mortar {
            damage: 8.0,
            splash_radius: 50.0,
            projectile_speed: 160.0,
        };
        assert_eq!(mortar.tower_type(), TowerType::Mortar);
    }

    // ---- Serde shapes seen by collaborators ----

    #[test]
    fn test_player_command_tagged_json() {
        let cmd = PlayerCommand::PlaceTower {
            tile_x: 3,
            tile_y: 2,
            tower: TowerType::Frost,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""type":"PlaceTower""#), "got {json}");

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"CastBlizzard"}"#).unwrap();
        assert!(matches!(back, PlayerCommand::CastBlizzard));
    }

    #[test]
    fn test_command_error_messages() {
        let err = CommandError::InsufficientFunds {
            cost: 90,
            available: 40,
        };
        assert_eq!(err.to_string(), "Not enough cookies: need 90, have 40");
    }

    #[test]
    fn test_snapshot_serde() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.events.push(GameEvent::Victory);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Active);
        assert_eq!(back.events, vec![GameEvent::Victory]);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.05);
        time.advance(0.1);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.15).abs() < 1e-10);
    }
}
