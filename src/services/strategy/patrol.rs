use rand::rngs::StdRng;
use rand::Rng;

use crate::models::constants::PATROL_INTERVAL;
use crate::models::grid_map::GridMap;
use crate::models::navigation_types::Direction;
use crate::models::position::Position;

/// Random wandering that only acts on every `PATROL_INTERVAL`th call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatrolStrategy {
    calls: u32,
}

impl PatrolStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> u32 {
        self.calls
    }

    /// One random cardinal step on acting calls; a blocked step is not retried.
    pub fn next_position(
        &mut self,
        current: Position,
        map: &GridMap,
        rng: &mut StdRng,
    ) -> Position {
        self.calls += 1;
        if self.calls % PATROL_INTERVAL != 0 {
            return current;
        }

        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        let candidate = current.step(direction);
        if map.is_passable(candidate) {
            candidate
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn only_every_fifth_call_moves() {
        let map = GridMap::new(20);
        let mut rng = StdRng::seed_from_u64(9);
        let mut patrol = PatrolStrategy::new();
        let mut pos = Position::new(10, 10);

        for call in 1..=20 {
            let next = patrol.next_position(pos, &map, &mut rng);
            if call % 5 == 0 {
                assert_eq!(pos.distance_to(next), 1.0, "call {} should move", call);
            } else {
                assert_eq!(next, pos, "call {} should hold", call);
            }
            pos = next;
        }
        assert_eq!(patrol.calls(), 20);
    }

    #[test]
    fn boxed_in_patrol_holds_on_acting_call() {
        let mut map = GridMap::new(20);
        for pos in [
            Position::new(4, 5),
            Position::new(6, 5),
            Position::new(5, 4),
            Position::new(5, 6),
        ] {
            map.set_island(pos);
        }
        let mut rng = StdRng::seed_from_u64(1);
        let mut patrol = PatrolStrategy::new();
        let start = Position::new(5, 5);
        for _ in 0..10 {
            assert_eq!(patrol.next_position(start, &map, &mut rng), start);
        }
    }
}
