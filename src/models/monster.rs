use super::constants::DEFAULT_DETECTION_RANGE;
use super::position::Position;

/// A single sea monster. Whether it chases or patrols is decided fresh each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SeaMonster {
    name: String,
    position: Position,
    detection_range: i32,
}

impl SeaMonster {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        SeaMonster {
            name: name.into(),
            position,
            detection_range: DEFAULT_DETECTION_RANGE,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn detection_range(&self) -> i32 {
        self.detection_range
    }

    /// Ranges below 1 are raised to 1.
    pub fn set_detection_range(&mut self, range: i32) {
        self.detection_range = range.max(1);
    }

    /// True when the player is within detection range (inclusive).
    pub fn can_see(&self, player: Position) -> bool {
        self.position.distance_to(player) <= self.detection_range as f64
    }

    pub fn collides_with(&self, pos: Position) -> bool {
        self.position == pos
    }
}

/// Monsters confined to a shared rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterGroup {
    name: String,
    /// Inclusive corners, normalized so that min <= max on both axes.
    min: Position,
    max: Position,
    members: Vec<SeaMonster>,
}

impl MonsterGroup {
    /// Corners may be given in any order.
    pub fn new(name: impl Into<String>, corner_a: Position, corner_b: Position) -> Self {
        MonsterGroup {
            name: name.into(),
            min: Position::new(corner_a.x.min(corner_b.x), corner_a.y.min(corner_b.y)),
            max: Position::new(corner_a.x.max(corner_b.x), corner_a.y.max(corner_b.y)),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> (Position, Position) {
        (self.min, self.max)
    }

    /// An exact duplicate of an existing member is ignored. Names need not be unique.
    pub fn add_member(&mut self, monster: SeaMonster) {
        if !self.members.contains(&monster) {
            self.members.push(monster);
        }
    }

    pub fn remove_member(&mut self, name: &str) -> Option<SeaMonster> {
        let index = self.members.iter().position(|m| m.name() == name)?;
        Some(self.members.remove(index))
    }

    pub fn members(&self) -> &[SeaMonster] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [SeaMonster] {
        &mut self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_within_boundary(&self, pos: Position) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }

    pub fn clamp(&self, pos: Position) -> Position {
        pos.clamped(self.min, self.max)
    }

    pub fn boundary_info(&self) -> String {
        format!(
            "Zone: ({},{}) to ({},{})",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }

    pub fn collides_with(&self, pos: Position) -> bool {
        self.members.iter().any(|m| m.collides_with(pos))
    }
}

/// Anything the engine advances once per tick.
#[derive(Debug, Clone, PartialEq)]
pub enum OceanEntity {
    Monster(SeaMonster),
    Group(MonsterGroup),
}

impl OceanEntity {
    pub fn kind(&self) -> &'static str {
        match self {
            OceanEntity::Monster(_) => "SeaMonster",
            OceanEntity::Group(_) => "MonsterGroup",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OceanEntity::Monster(monster) => monster.name(),
            OceanEntity::Group(group) => group.name(),
        }
    }

    pub fn positions(&self) -> Vec<Position> {
        match self {
            OceanEntity::Monster(monster) => vec![monster.position()],
            OceanEntity::Group(group) => group.members().iter().map(|m| m.position()).collect(),
        }
    }

    pub fn collides_with(&self, pos: Position) -> bool {
        match self {
            OceanEntity::Monster(monster) => monster.collides_with(pos),
            OceanEntity::Group(group) => group.collides_with(pos),
        }
    }

    pub fn monster_count(&self) -> usize {
        match self {
            OceanEntity::Monster(_) => 1,
            OceanEntity::Group(group) => group.len(),
        }
    }
}
