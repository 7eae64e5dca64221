// Layered 2D character sprite resolver and compositor
//
// Given a character's facing, activity and the time since its current action
// started, resolves which frame each sprite element (shadow, body, head)
// shows and turns the frame's layers into world-space draw descriptors.

pub mod core;
pub mod engine;
pub mod game;

pub use engine::assets::{SpriteFrame, SpriteSheet, SpriteSource, TextureHandle};
pub use engine::renderer::{DrawDescriptor, SpriteInstance};
pub use game::characters::{
    ActionClock, ActionSet, ActivityState, AnimationError, CharacterCompositor, CharacterState,
    CompositeCharacterSprite, CompositorConfig, Direction, ElementSprites, PlayMode,
    SpriteElement,
};
