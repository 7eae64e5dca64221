// Character activity state, facing and action timing

use glam::Vec3;
use serde::Deserialize;

/// What the character is currently doing; drives action selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityState {
    /// Standing still
    #[default]
    Idle,
    /// Moving
    Walking,
    /// Sitting on the ground
    Sitting,
    /// Picking up an item
    PickingUp,
    /// Battle-ready stance
    StandBy,
    /// Attacking a target
    Attacking,
    /// Flinching from a hit
    ReceivingDamage,
    /// Frozen in place
    Freezing,
    /// Character is dead
    Dead,
    /// Casting a spell
    CastingSpell,
}

impl ActivityState {
    pub const COUNT: usize = 10;

    /// Every activity state, in declaration order
    pub const ALL: [ActivityState; Self::COUNT] = [
        Self::Idle,
        Self::Walking,
        Self::Sitting,
        Self::PickingUp,
        Self::StandBy,
        Self::Attacking,
        Self::ReceivingDamage,
        Self::Freezing,
        Self::Dead,
        Self::CastingSpell,
    ];

    /// Position of this state in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Facing direction, in the order actions are authored (8 per action group)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    South = 0,
    SouthWest = 1,
    West = 2,
    NorthWest = 3,
    North = 4,
    NorthEast = 5,
    East = 6,
    SouthEast = 7,
}

impl Direction {
    /// All directions, clockwise from south
    pub const ALL: [Direction; 8] = [
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
    ];

    /// Position within an action group (0-7)
    pub fn index(self) -> usize {
        self as usize
    }
}

/// How the frame index advances over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Loop forever
    #[default]
    Repeat,
    /// Play through once, then hold the last frame
    PlayOnce,
}

/// Per-tick snapshot of a character, supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterState {
    pub direction: Direction,
    pub activity: ActivityState,
    pub play_mode: PlayMode,
    /// Milliseconds since the current action started
    pub elapsed_ms: f64,
    /// World-space anchor of the character
    pub position: Vec3,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            direction: Direction::South,
            activity: ActivityState::Idle,
            play_mode: PlayMode::Repeat,
            elapsed_ms: 0.0,
            position: Vec3::ZERO,
        }
    }
}

impl CharacterState {
    pub fn new(activity: ActivityState, direction: Direction) -> Self {
        Self {
            activity,
            direction,
            ..Self::default()
        }
    }

    pub fn with_play_mode(mut self, play_mode: PlayMode) -> Self {
        self.play_mode = play_mode;
        self
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: f64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

/// Caller-side clock tracking time since the current action started
///
/// The compositor itself keeps no timing state. Game code that does not
/// already track action start times can own one of these per character and
/// feed `snapshot()` into the compositor each tick.
#[derive(Debug, Clone)]
pub struct ActionClock {
    activity: ActivityState,
    direction: Direction,
    play_mode: PlayMode,
    elapsed_ms: f64,
}

impl Default for ActionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionClock {
    pub fn new() -> Self {
        Self {
            activity: ActivityState::Idle,
            direction: Direction::South,
            play_mode: PlayMode::Repeat,
            elapsed_ms: 0.0,
        }
    }

    /// Get the current activity state
    pub fn activity(&self) -> ActivityState {
        self.activity
    }

    /// Get the current facing direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Milliseconds since the current action started
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Switch action; restarts the clock if anything changed
    pub fn transition(&mut self, activity: ActivityState, direction: Direction, play_mode: PlayMode) {
        if self.activity != activity || self.direction != direction || self.play_mode != play_mode {
            self.activity = activity;
            self.direction = direction;
            self.play_mode = play_mode;
            self.elapsed_ms = 0.0;
        }
    }

    /// Switch action and restart the clock even if nothing changed
    pub fn restart(&mut self, activity: ActivityState, direction: Direction, play_mode: PlayMode) {
        self.activity = activity;
        self.direction = direction;
        self.play_mode = play_mode;
        self.elapsed_ms = 0.0;
    }

    /// Advance by `dt` seconds (called every frame)
    pub fn update(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed_ms += f64::from(dt) * 1000.0;
        }
    }

    /// Build the per-tick snapshot for a character at `position`
    pub fn snapshot(&self, position: Vec3) -> CharacterState {
        CharacterState {
            direction: self.direction,
            activity: self.activity,
            play_mode: self.play_mode,
            elapsed_ms: self.elapsed_ms,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_indices_follow_authoring_order() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), i);
        }
    }

    #[test]
    fn test_activity_indices_follow_declaration_order() {
        for (i, state) in ActivityState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn test_clock_starts_idle() {
        let clock = ActionClock::new();
        assert_eq!(clock.activity(), ActivityState::Idle);
        assert_eq!(clock.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_clock_accumulates_milliseconds() {
        let mut clock = ActionClock::new();
        clock.update(0.25);
        clock.update(0.125);
        assert_relative_eq!(clock.elapsed_ms(), 375.0, epsilon = 1e-3);
    }

    #[test]
    fn test_clock_ignores_negative_dt() {
        let mut clock = ActionClock::new();
        clock.update(0.1);
        clock.update(-1.0);
        assert_relative_eq!(clock.elapsed_ms(), 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_transition_resets_on_change() {
        let mut clock = ActionClock::new();
        clock.update(0.5);
        clock.transition(ActivityState::Walking, Direction::South, PlayMode::Repeat);
        assert_eq!(clock.activity(), ActivityState::Walking);
        assert_eq!(clock.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_transition_keeps_time_when_unchanged() {
        let mut clock = ActionClock::new();
        clock.update(0.5);
        clock.transition(ActivityState::Idle, Direction::South, PlayMode::Repeat);
        assert!(clock.elapsed_ms() > 0.0);
    }

    #[test]
    fn test_turning_restarts_the_action() {
        let mut clock = ActionClock::new();
        clock.update(0.5);
        clock.transition(ActivityState::Idle, Direction::North, PlayMode::Repeat);
        assert_eq!(clock.direction(), Direction::North);
        assert_eq!(clock.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_restart_always_resets() {
        let mut clock = ActionClock::new();
        clock.update(0.5);
        clock.restart(ActivityState::Idle, Direction::South, PlayMode::Repeat);
        assert_eq!(clock.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_snapshot_carries_clock_and_position() {
        let mut clock = ActionClock::new();
        clock.transition(ActivityState::Attacking, Direction::East, PlayMode::PlayOnce);
        clock.update(0.2);

        let snapshot = clock.snapshot(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(snapshot.activity, ActivityState::Attacking);
        assert_eq!(snapshot.direction, Direction::East);
        assert_eq!(snapshot.play_mode, PlayMode::PlayOnce);
        assert_eq!(snapshot.position, Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(snapshot.elapsed_ms, 200.0, epsilon = 1e-3);
    }
}
