// Renderer-facing output types
//
// Draw submission belongs to the host renderer. This module only defines what
// the compositor hands over each tick.

mod draw;
mod instance;

pub use draw::DrawDescriptor;
pub use instance::SpriteInstance;
