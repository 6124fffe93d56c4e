use rand::rngs::StdRng;

use crate::models::errors::{GameError, GameResult};
use crate::models::grid_map::GridMap;
use crate::models::monster::{OceanEntity, SeaMonster};
use crate::models::pirate::PirateShip;
use crate::models::position::Position;
use crate::models::treasure::Treasure;
use crate::services::strategy::MovementStrategy;

/// Scatter islands, keeping the spawn cell and at least one treasure cell open.
pub fn generate_map(
    dimension: i32,
    island_count: usize,
    spawn: Position,
    rng: &mut StdRng,
) -> GameResult<GridMap> {
    let cells = (dimension.max(0) as usize).pow(2);
    // spawn + treasure must stay open
    let available = cells.saturating_sub(2);
    if island_count > available {
        return Err(GameError::IslandCapacity {
            requested: island_count,
            available,
        });
    }

    let mut map = GridMap::new(dimension);
    map.place_islands(island_count, spawn, rng)?;
    Ok(map)
}

pub fn bury_treasure(map: &GridMap, spawn: Position, rng: &mut StdRng) -> Treasure {
    Treasure::bury(map, spawn, rng)
}

/// Pirate i starts on the diagonal at (3 + 3i, 3 + 3i); even slots chase, odd slots patrol.
pub fn spawn_pirates(count: usize, dimension: i32) -> Vec<PirateShip> {
    let edge = Position::new(dimension - 1, dimension - 1);
    (0..count)
        .map(|i| {
            let offset = 3 + 3 * i as i32;
            let position = Position::new(offset, offset).clamped(Position::new(0, 0), edge);
            PirateShip::new(position, MovementStrategy::for_fleet_index(i))
        })
        .collect()
}

/// Monsters gather around the treasure, starting three cells up-left of it.
pub fn spawn_monsters(count: usize, treasure: Position, dimension: i32) -> Vec<OceanEntity> {
    let edge = Position::new(dimension - 1, dimension - 1);
    (0..count)
        .map(|i| {
            let position = treasure
                .offset(i as i32 - 3, i as i32 - 3)
                .clamped(Position::new(0, 0), edge);
            OceanEntity::Monster(SeaMonster::new(format!("Monster_{}", i + 1), position))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn pirates_alternate_strategies_along_diagonal() {
        let pirates = spawn_pirates(4, 20);
        let positions: Vec<Position> = pirates.iter().map(|p| p.position()).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(3, 3),
                Position::new(6, 6),
                Position::new(9, 9),
                Position::new(12, 12),
            ]
        );
        assert_eq!(pirates[0].strategy().name(), "chase");
        assert_eq!(pirates[1].strategy().name(), "patrol");
    }

    #[test]
    fn monsters_are_clamped_near_corner_treasure() {
        let monsters = spawn_monsters(2, Position::new(1, 0), 20);
        assert_eq!(monsters[0].positions(), vec![Position::new(0, 0)]);
        assert_eq!(monsters[1].positions(), vec![Position::new(0, 0)]);
        assert_eq!(monsters[1].name(), "Monster_2");

        let monsters = spawn_monsters(2, Position::new(10, 10), 20);
        assert_eq!(monsters[0].positions(), vec![Position::new(7, 7)]);
        assert_eq!(monsters[1].positions(), vec![Position::new(8, 8)]);
    }

    #[test]
    fn map_generation_leaves_room_for_treasure() {
        let mut rng = StdRng::seed_from_u64(2);
        let err = generate_map(3, 8, Position::new(1, 1), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GameError::IslandCapacity {
                requested: 8,
                available: 7
            }
        ));

        let map = generate_map(3, 7, Position::new(1, 1), &mut rng).unwrap();
        let treasure = bury_treasure(&map, Position::new(1, 1), &mut rng);
        assert!(map.is_passable(treasure.position()));
        assert_ne!(treasure.position(), Position::new(1, 1));
    }
}
