//! Player vitals touched by the core loop.
//!
//! Only stamina regenerates here. Health, gold, score, level, and experience
//! belong to the gameplay-event collaborators (combat, pickups, leveling)
//! and pass through each step untouched.

use crate::constants::STAMINA_REGEN_PER_SECOND;

/// Regenerate stamina at 1% of maximum per real second, clamped at the
/// ceiling. Regeneration alone never pulls stamina below its prior value.
#[must_use]
pub fn regenerate_stamina(stamina: f32, max_stamina: f32, delta_secs: f32) -> f32 {
    (stamina + max_stamina * STAMINA_REGEN_PER_SECOND * delta_secs).min(max_stamina)
}
