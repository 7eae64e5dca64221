// Frame selection: which frame of an action is visible at a given time

use super::action::{Action, Frame};
use super::config::CompositorConfig;
use super::state::PlayMode;
use crate::core::math::whole_steps;
use log::trace;

/// Duration of one frame of `action`, in milliseconds
///
/// The authored delay is scaled by the configured animation speed and then
/// floored at the minimum frame duration. Zero, negative or NaN delays end
/// up at the floor.
pub fn frame_duration_ms(action: &Action, config: &CompositorConfig) -> f64 {
    let scaled = action.delay_ms * config.animation_speed_scale;
    if scaled.is_nan() || scaled < config.min_frame_duration_ms {
        trace!(
            "Clamping frame delay {}ms to {}ms",
            scaled,
            config.min_frame_duration_ms
        );
        return config.min_frame_duration_ms;
    }
    scaled
}

/// Time for one full pass through `action`, in milliseconds
pub fn cycle_duration_ms(action: &Action, config: &CompositorConfig) -> f64 {
    frame_duration_ms(action, config) * action.frame_count() as f64
}

/// The frame visible at a point in time
#[derive(Debug, Clone, Copy)]
pub struct FrameSelection<'a> {
    pub frame: &'a Frame,
    /// Index of `frame` within its action
    pub frame_index: usize,
    /// A `PlayOnce` action has run past its last frame
    pub finished: bool,
}

/// Pick the frame of `action` visible `elapsed_ms` after it started
///
/// Returns `None` for an action without frames; the caller skips the element.
pub fn select_frame<'a>(
    action: &'a Action,
    elapsed_ms: f64,
    play_mode: PlayMode,
    config: &CompositorConfig,
) -> Option<FrameSelection<'a>> {
    let frame_count = action.frame_count();
    if frame_count == 0 {
        return None;
    }

    let raw = whole_steps(elapsed_ms, frame_duration_ms(action, config));

    let (frame_index, finished) = match play_mode {
        PlayMode::Repeat => ((raw % frame_count as u64) as usize, false),
        PlayMode::PlayOnce => {
            let last = frame_count - 1;
            let index = usize::try_from(raw).map_or(last, |r| r.min(last));
            (index, raw >= frame_count as u64)
        }
    };

    Some(FrameSelection {
        frame: &action.frames[frame_index],
        frame_index,
        finished,
    })
}
