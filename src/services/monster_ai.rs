//! Sea monster behaviour
//!
//! Monsters are not pirates: they ignore strategies and pick between pursuit
//! and random patrol every tick, based only on how far away the player is.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::models::constants::MONSTER_PATROL_ATTEMPTS;
use crate::models::errors::{GameError, GameResult};
use crate::models::grid_map::GridMap;
use crate::models::monster::{MonsterGroup, OceanEntity, SeaMonster};
use crate::models::navigation_types::Direction;
use crate::models::position::Position;

/// Advance any ocean entity by one tick.
pub fn advance_entity(
    entity: &mut OceanEntity,
    player: Position,
    map: &GridMap,
    rng: &mut StdRng,
) -> GameResult<()> {
    match entity {
        OceanEntity::Monster(monster) => advance_monster(monster, player, map, rng),
        OceanEntity::Group(group) => advance_group(group, player, map, rng),
    }
}

/// Chase when the player is in detection range, otherwise patrol.
///
/// # Errors
///
/// `EntityOutOfBounds` if the monster is not on the grid when its turn starts.
pub fn advance_monster(
    monster: &mut SeaMonster,
    player: Position,
    map: &GridMap,
    rng: &mut StdRng,
) -> GameResult<()> {
    let here = monster.position();
    if !map.in_bounds(here.x, here.y) {
        return Err(GameError::EntityOutOfBounds {
            entity: monster.name().to_string(),
            x: here.x,
            y: here.y,
        });
    }

    let next = if monster.can_see(player) {
        debug!(monster = monster.name(), "chasing");
        pursue(here, player, map)
    } else {
        debug!(monster = monster.name(), "patrolling");
        wander(here, map, rng)
    };
    monster.set_position(next);
    Ok(())
}

/// Advance every member, then pull it back inside the group rectangle.
/// The clamp applies even when the member's own move failed. A failing
/// member does not stop the rest; the first failure is returned.
pub fn advance_group(
    group: &mut MonsterGroup,
    player: Position,
    map: &GridMap,
    rng: &mut StdRng,
) -> GameResult<()> {
    let mut first_error = None;

    for index in 0..group.len() {
        if let Err(err) = advance_monster(&mut group.members_mut()[index], player, map, rng) {
            first_error.get_or_insert(err);
        }
        let clamped = group.clamp(group.members()[index].position());
        group.members_mut()[index].set_position(clamped);
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Greedy pursuit: larger-gap axis, then the other axis, then the diagonal.
/// A zero gap steps in the negative direction, which lets a blocked monster
/// slide around an island.
fn pursue(here: Position, player: Position, map: &GridMap) -> Position {
    let dx = player.x - here.x;
    let dy = player.y - here.y;
    if dx == 0 && dy == 0 {
        return here;
    }

    let sx = if dx > 0 { 1 } else { -1 };
    let sy = if dy > 0 { 1 } else { -1 };
    let horizontal = here.offset(sx, 0);
    let vertical = here.offset(0, sy);
    let diagonal = here.offset(sx, sy);

    let candidates = if dx.abs() > dy.abs() {
        [horizontal, vertical, diagonal]
    } else {
        [vertical, horizontal, diagonal]
    };

    candidates
        .into_iter()
        .find(|&pos| map.is_passable(pos))
        .unwrap_or(here)
}

/// Up to `MONSTER_PATROL_ATTEMPTS` random cardinal steps, resampled each try.
fn wander(here: Position, map: &GridMap, rng: &mut StdRng) -> Position {
    for _ in 0..MONSTER_PATROL_ATTEMPTS {
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        let candidate = here.step(direction);
        if map.is_passable(candidate) {
            return candidate;
        }
    }
    here
}
