// Lookup tables: activity state -> action group, facing -> direction index

use super::state::{ActivityState, Direction};
use super::AnimationError;
use serde::Deserialize;

/// Number of facing directions authored per action group
pub const DIRECTIONS_PER_ACTION: usize = 8;

/// Action group index inside a character action file
///
/// Each group holds one action per facing direction, so the raw action
/// index is `group * 8 + direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionIndex(pub usize);

impl ActionIndex {
    pub const IDLE: Self = Self(0);
    pub const WALKING: Self = Self(1);
    pub const SITTING: Self = Self(2);
    pub const PICKING_UP: Self = Self(3);
    pub const STAND_BY: Self = Self(4);
    pub const ATTACKING_1: Self = Self(5);
    pub const RECEIVING_DAMAGE: Self = Self(6);
    pub const FREEZE_1: Self = Self(7);
    pub const DEAD: Self = Self(8);
    pub const FREEZE_2: Self = Self(9);
    pub const ATTACKING_2: Self = Self(10);
    pub const ATTACKING_3: Self = Self(11);
    pub const CASTING_SPELL: Self = Self(12);

    /// Raw (unwrapped) action index for a facing within this group
    pub fn raw(self, direction: DirectionIndex) -> usize {
        self.0 * DIRECTIONS_PER_ACTION + direction.0
    }
}

/// Direction index (0-7) after applying the camera rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionIndex(pub usize);

/// Fixed camera rotation, in eighth turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct CameraRotation(u8);

impl CameraRotation {
    /// Create a rotation of `steps` eighth turns
    pub fn new(steps: u8) -> Self {
        Self(steps % DIRECTIONS_PER_ACTION as u8)
    }

    /// Rotation that makes a camera looking toward `facing` render that
    /// facing as the authored south view
    pub fn facing(facing: Direction) -> Self {
        Self::new(((DIRECTIONS_PER_ACTION - facing.index()) % DIRECTIONS_PER_ACTION) as u8)
    }

    pub fn steps(self) -> u8 {
        self.0 % DIRECTIONS_PER_ACTION as u8
    }
}

/// Map a logical facing to the authored direction index under `rotation`
pub fn direction_index(direction: Direction, rotation: CameraRotation) -> DirectionIndex {
    DirectionIndex((direction.index() + rotation.steps() as usize) % DIRECTIONS_PER_ACTION)
}

/// Activity state to action group mapping
///
/// Construction checks that every `ActivityState` has an entry, so a lookup
/// can never fall through to a default.
#[derive(Debug, Clone)]
pub struct ActionTable {
    entries: [ActionIndex; ActivityState::COUNT],
}

impl ActionTable {
    /// Build a table, failing on the first activity state without an entry
    ///
    /// Later entries for the same state replace earlier ones.
    pub fn new(
        entries: impl IntoIterator<Item = (ActivityState, ActionIndex)>,
    ) -> Result<Self, AnimationError> {
        let mut slots = [None; ActivityState::COUNT];
        for (state, index) in entries {
            slots[state.index()] = Some(index);
        }

        let mut table = [ActionIndex::IDLE; ActivityState::COUNT];
        for state in ActivityState::ALL {
            table[state.index()] =
                slots[state.index()].ok_or(AnimationError::MissingActionIndex(state))?;
        }

        Ok(Self { entries: table })
    }

    /// The player character layout used by the stock action files
    pub fn standard() -> Result<Self, AnimationError> {
        Self::new([
            (ActivityState::Idle, ActionIndex::IDLE),
            (ActivityState::Walking, ActionIndex::WALKING),
            (ActivityState::Sitting, ActionIndex::SITTING),
            (ActivityState::PickingUp, ActionIndex::PICKING_UP),
            (ActivityState::StandBy, ActionIndex::STAND_BY),
            (ActivityState::Attacking, ActionIndex::ATTACKING_1),
            (ActivityState::ReceivingDamage, ActionIndex::RECEIVING_DAMAGE),
            (ActivityState::Freezing, ActionIndex::FREEZE_1),
            (ActivityState::Dead, ActionIndex::DEAD),
            (ActivityState::CastingSpell, ActionIndex::CASTING_SPELL),
        ])
    }

    /// Action group for `state`
    pub fn action_index(&self, state: ActivityState) -> ActionIndex {
        self.entries[state.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_every_state() {
        let table = ActionTable::standard().unwrap();
        let rebuilt = ActionTable::new(
            ActivityState::ALL
                .iter()
                .map(|s| (*s, table.action_index(*s))),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_standard_indices() {
        let table = ActionTable::standard().unwrap();
        assert_eq!(table.action_index(ActivityState::Idle), ActionIndex(0));
        assert_eq!(table.action_index(ActivityState::Walking), ActionIndex(1));
        assert_eq!(table.action_index(ActivityState::Sitting), ActionIndex(2));
        assert_eq!(table.action_index(ActivityState::Attacking), ActionIndex(5));
        assert_eq!(table.action_index(ActivityState::Dead), ActionIndex(8));
        assert_eq!(
            table.action_index(ActivityState::CastingSpell),
            ActionIndex(12)
        );
    }

    #[test]
    fn test_missing_entry_fails_fast() {
        let result = ActionTable::new([
            (ActivityState::Idle, ActionIndex::IDLE),
            (ActivityState::Walking, ActionIndex::WALKING),
        ]);

        match result {
            Err(AnimationError::MissingActionIndex(state)) => {
                assert_eq!(state, ActivityState::Sitting)
            }
            other => panic!("expected missing entry error, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_table_overrides() {
        let table = ActionTable::new(
            ActivityState::ALL
                .iter()
                .map(|s| (*s, ActionIndex::IDLE))
                .chain([(ActivityState::Dead, ActionIndex(2))]),
        )
        .unwrap();

        assert_eq!(table.action_index(ActivityState::Dead), ActionIndex(2));
        assert_eq!(table.action_index(ActivityState::Walking), ActionIndex(0));
    }

    #[test]
    fn test_lookup_returns_own_entry_for_every_state() {
        let table = ActionTable::new(
            ActivityState::ALL
                .iter()
                .enumerate()
                .map(|(i, s)| (*s, ActionIndex(i + 20))),
        )
        .unwrap();

        for (i, state) in ActivityState::ALL.iter().enumerate() {
            assert_eq!(table.action_index(*state), ActionIndex(i + 20));
        }
    }

    #[test]
    fn test_direction_index_without_rotation() {
        let rotation = CameraRotation::default();
        for direction in Direction::ALL {
            assert_eq!(
                direction_index(direction, rotation),
                DirectionIndex(direction.index())
            );
        }
    }

    #[test]
    fn test_direction_index_wraps() {
        let rotation = CameraRotation::new(3);
        assert_eq!(
            direction_index(Direction::East, rotation),
            DirectionIndex(1)
        );
        assert_eq!(
            direction_index(Direction::South, rotation),
            DirectionIndex(3)
        );
    }

    #[test]
    fn test_camera_rotation_reduces_steps() {
        assert_eq!(CameraRotation::new(9).steps(), 1);
        assert_eq!(CameraRotation::new(8).steps(), 0);
    }

    #[test]
    fn test_camera_facing_maps_back_to_south() {
        for facing in Direction::ALL {
            let rotation = CameraRotation::facing(facing);
            assert_eq!(direction_index(facing, rotation), DirectionIndex(0));
        }
    }

    #[test]
    fn test_raw_action_index() {
        assert_eq!(ActionIndex::WALKING.raw(DirectionIndex(3)), 11);
        assert_eq!(ActionIndex::IDLE.raw(DirectionIndex(0)), 0);
    }
}
