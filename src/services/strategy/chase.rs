use crate::models::constants::{CHASE_BAND_MAX, CHASE_BAND_MIN, CHASE_PERPENDICULAR_LIMIT};
use crate::models::grid_map::GridMap;
use crate::models::position::Position;

/// One Chase decision: close in when far, back off when too close, and
/// drift sideways while inside the band.
///
/// Distance is recomputed on every call; nothing is remembered between turns.
pub fn chase_step(current: Position, target: Position, map: &GridMap) -> Position {
    let distance = current.distance_to(target);

    if distance > CHASE_BAND_MAX {
        move_toward(current, target, map)
    } else if distance < CHASE_BAND_MIN {
        move_away(current, target, map)
    } else {
        keep_station(current, target, map)
    }
}

/// Step along the axis with the larger gap, then the other one.
/// An axis with no gap is never used, so the step cannot increase the distance.
fn move_toward(current: Position, target: Position, map: &GridMap) -> Position {
    let dx = target.x - current.x;
    let dy = target.y - current.y;
    let horizontal = current.offset(dx.signum(), 0);
    let vertical = current.offset(0, dy.signum());

    let candidates = if dx.abs() > dy.abs() {
        [(dx != 0, horizontal), (dy != 0, vertical)]
    } else {
        [(dy != 0, vertical), (dx != 0, horizontal)]
    };

    candidates
        .into_iter()
        .find(|&(useful, pos)| useful && map.is_passable(pos))
        .map_or(current, |(_, pos)| pos)
}

/// Mirror of `move_toward`. A zero gap retreats in the positive direction.
fn move_away(current: Position, target: Position, map: &GridMap) -> Position {
    let dx = target.x - current.x;
    let dy = target.y - current.y;
    let horizontal = current.offset(retreat(dx), 0);
    let vertical = current.offset(0, retreat(dy));

    let candidates = if dx.abs() > dy.abs() {
        [horizontal, vertical]
    } else {
        [vertical, horizontal]
    };

    candidates
        .into_iter()
        .find(|&pos| map.is_passable(pos))
        .unwrap_or(current)
}

fn retreat(delta: i32) -> i32 {
    if delta > 0 {
        -1
    } else {
        1
    }
}

/// Inside the band: try left/right while the horizontal gap is small,
/// then up/down while the vertical gap is small.
fn keep_station(current: Position, target: Position, map: &GridMap) -> Position {
    let dx = target.x - current.x;
    let dy = target.y - current.y;

    let mut candidates = Vec::with_capacity(4);
    if dx.abs() < CHASE_PERPENDICULAR_LIMIT {
        candidates.push(current.offset(-1, 0));
        candidates.push(current.offset(1, 0));
    }
    if dy.abs() < CHASE_PERPENDICULAR_LIMIT {
        candidates.push(current.offset(0, -1));
        candidates.push(current.offset(0, 1));
    }

    candidates
        .into_iter()
        .find(|&pos| map.is_passable(pos))
        .unwrap_or(current)
}
