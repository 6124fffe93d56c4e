//! Session snapshots
//!
//! Flattens a running game into plain data for the outside world: the
//! rendered grid plus the scalar state. Field names follow the web client's
//! JSON (`shipX`, `moves`, ...).

use serde::{Serialize, Serializer};

use crate::game_engine::{GameEngine, GameState};
use crate::models::constants::CellContent;
use crate::models::difficulty::Difficulty;
use crate::models::loadout::ShipStats;

impl Serialize for CellContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.marker())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub session_id: String,
    /// Row-major: grid[y][x].
    pub grid: Vec<Vec<CellContent>>,
    pub ship_x: i32,
    pub ship_y: i32,
    pub treasure_x: i32,
    pub treasure_y: i32,
    pub score: u32,
    pub lives: i32,
    pub status: GameState,
    pub level: u32,
    pub pirates: usize,
    pub monsters: usize,
    pub moves: u32,
    pub difficulty: Difficulty,
    pub ship: ShipStats,
    pub monsters_active: bool,
}

/// Render the grid, lowest precedence first:
/// island, treasure, monster, pirate, ship.
pub fn render_grid(engine: &GameEngine) -> Vec<Vec<CellContent>> {
    let ocean = engine.ocean();
    let map = ocean.map();
    let size = map.dimension().max(0) as usize;

    let mut grid: Vec<Vec<CellContent>> = (0..size as i32)
        .map(|y| {
            (0..size as i32)
                .map(|x| {
                    if map.is_island(x, y) {
                        CellContent::Island
                    } else {
                        CellContent::Empty
                    }
                })
                .collect()
        })
        .collect();

    let mut paint = |x: i32, y: i32, content: CellContent| {
        if map.in_bounds(x, y) {
            grid[y as usize][x as usize] = content;
        }
    };

    let treasure = ocean.treasure().position();
    paint(treasure.x, treasure.y, CellContent::Treasure);
    for pos in ocean.entities().iter().flat_map(|e| e.positions()) {
        paint(pos.x, pos.y, CellContent::Monster);
    }
    for pirate in ocean.pirates() {
        paint(pirate.position().x, pirate.position().y, CellContent::Pirate);
    }
    let ship = ocean.ship_position();
    paint(ship.x, ship.y, CellContent::Ship);

    grid
}

pub fn snapshot(session_id: &str, engine: &GameEngine, moves: u32) -> Snapshot {
    let ocean = engine.ocean();
    let ship = ocean.ship_position();
    let treasure = ocean.treasure().position();

    Snapshot {
        session_id: session_id.to_string(),
        grid: render_grid(engine),
        ship_x: ship.x,
        ship_y: ship.y,
        treasure_x: treasure.x,
        treasure_y: treasure.y,
        score: engine.score(),
        lives: engine.lives(),
        status: engine.state(),
        level: engine.level(),
        pirates: ocean.pirates().len(),
        monsters: ocean.monster_count(),
        moves,
        difficulty: engine.difficulty(),
        ship: engine.ship_stats(),
        monsters_active: engine.monsters_active(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid_map::GridMap;
    use crate::models::monster::{OceanEntity, SeaMonster};
    use crate::models::ocean::Ocean;
    use crate::models::pirate::PirateShip;
    use crate::models::position::Position;
    use crate::services::strategy::MovementStrategy;

    fn crowded_engine() -> GameEngine {
        let mut map = GridMap::new(20);
        map.set_island(Position::new(0, 3));
        map.set_island(Position::new(9, 9));
        let mut ocean = Ocean::with_layout(map, Position::new(2, 2), Position::new(4, 4), 0);
        // pirate on the ship, pirate on a monster, monster on the treasure and on an island
        ocean.add_pirate(PirateShip::new(Position::new(2, 2), MovementStrategy::Chase));
        ocean.add_pirate(PirateShip::new(Position::new(6, 6), MovementStrategy::Chase));
        ocean.add_entity(OceanEntity::Monster(SeaMonster::new("A", Position::new(6, 6))));
        ocean.add_entity(OceanEntity::Monster(SeaMonster::new("B", Position::new(4, 4))));
        ocean.add_entity(OceanEntity::Monster(SeaMonster::new("C", Position::new(9, 9))));
        GameEngine::with_ocean(ocean, Difficulty::Easy)
    }

    #[test]
    fn markers_follow_precedence() {
        let grid = render_grid(&crowded_engine());
        assert_eq!(grid[2][2], CellContent::Ship);
        assert_eq!(grid[6][6], CellContent::Pirate);
        assert_eq!(grid[4][4], CellContent::Monster);
        assert_eq!(grid[9][9], CellContent::Monster);
        assert_eq!(grid[3][0], CellContent::Island);
        assert_eq!(grid[0][0], CellContent::Empty);
    }

    #[test]
    fn ship_on_treasure_renders_as_ship() {
        let ocean =
            Ocean::with_layout(GridMap::new(20), Position::new(4, 4), Position::new(4, 4), 0);
        let engine = GameEngine::with_ocean(ocean, Difficulty::Easy);
        assert_eq!(render_grid(&engine)[4][4], CellContent::Ship);
    }

    #[test]
    fn grid_is_row_major() {
        let ocean =
            Ocean::with_layout(GridMap::new(20), Position::new(7, 2), Position::new(15, 11), 0);
        let engine = GameEngine::with_ocean(ocean, Difficulty::Easy);
        let grid = render_grid(&engine);
        assert_eq!(grid.len(), 20);
        assert_eq!(grid[2][7], CellContent::Ship);
        assert_eq!(grid[11][15], CellContent::Treasure);
    }

    #[test]
    fn snapshot_serializes_with_client_field_names() {
        let snap = snapshot("session_1", &crowded_engine(), 3);
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["sessionId"], "session_1");
        assert_eq!(json["shipX"], 2);
        assert_eq!(json["treasureY"], 4);
        assert_eq!(json["status"], "PLAYING");
        assert_eq!(json["difficulty"], "EASY");
        assert_eq!(json["moves"], 3);
        assert_eq!(json["pirates"], 2);
        assert_eq!(json["monsters"], 3);
        assert_eq!(json["grid"][2][2], "S");
        assert_eq!(json["grid"][3][0], "W");
        assert_eq!(json["grid"][0][0], "");
        assert_eq!(json["ship"]["shield"], true);
    }
}
