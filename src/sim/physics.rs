//! Avatar vertical motion
//!
//! Fixed-step: one call is one tick. No bounds clamping happens here; leaving
//! the screen is reported by the collision detector.

use super::state::AvatarState;

/// Accelerate by `g`, then move by the new velocity
#[inline]
pub fn apply_gravity(state: &mut AvatarState, g: f32) {
    state.velocity += g;
    state.y += state.velocity;
}

/// Override velocity with the flap velocity `v` (not additive)
#[inline]
pub fn apply_impulse(state: &mut AvatarState, v: f32) {
    state.velocity = v;
}

/// Advance one tick. A pending impulse lands first, then gravity acts as usual.
pub fn integrate(state: &mut AvatarState, g: f32, impulse: Option<f32>) {
    if let Some(v) = impulse {
        apply_impulse(state, v);
    }
    apply_gravity(state, g);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_closed_form() {
        // y_n = y0 + g * n(n+1)/2, v_n = g * n (starting at rest)
        let mut avatar = AvatarState::new(50.0);
        for _ in 0..20 {
            apply_gravity(&mut avatar, 0.5);
        }
        let n = 20.0_f32;
        assert!((avatar.velocity - 0.5 * n).abs() < 1e-4);
        assert!((avatar.y - (50.0 + 0.5 * n * (n + 1.0) / 2.0)).abs() < 1e-3);
        assert!((avatar.y - 155.0).abs() < 1e-3);
    }

    #[test]
    fn test_impulse_overrides_velocity() {
        let mut avatar = AvatarState {
            y: 300.0,
            velocity: 12.5,
        };
        apply_impulse(&mut avatar, -8.0);
        assert_eq!(avatar.velocity, -8.0);
        assert_eq!(avatar.y, 300.0);

        // Repeated impulses do not stack
        apply_impulse(&mut avatar, -8.0);
        assert_eq!(avatar.velocity, -8.0);
    }

    #[test]
    fn test_integrate_with_impulse_still_applies_gravity() {
        let mut avatar = AvatarState {
            y: 300.0,
            velocity: 4.0,
        };
        integrate(&mut avatar, 0.5, Some(-8.0));
        assert_eq!(avatar.velocity, -7.5);
        assert_eq!(avatar.y, 292.5);

        integrate(&mut avatar, 0.5, None);
        assert_eq!(avatar.velocity, -7.0);
        assert_eq!(avatar.y, 285.5);
    }

    proptest! {
        #[test]
        fn prop_gravity_step(y in -1000.0f32..1000.0, v in -50.0f32..50.0, g in 0.0f32..2.0) {
            let mut avatar = AvatarState { y, velocity: v };
            apply_gravity(&mut avatar, g);
            prop_assert_eq!(avatar.velocity, v + g);
            prop_assert_eq!(avatar.y, y + (v + g));
        }

        #[test]
        fn prop_impulse_step(y in -1000.0f32..1000.0, v in -50.0f32..50.0, flap in -20.0f32..-0.1) {
            let mut avatar = AvatarState { y, velocity: v };
            integrate(&mut avatar, 0.5, Some(flap));
            prop_assert_eq!(avatar.velocity, flap + 0.5);
            prop_assert_eq!(avatar.y, y + (flap + 0.5));
        }
    }
}
