//! Pure math behind the animated pieces: reveal presets, the pointer
//! overlay's spring, and the clamped backdrop parameters. Kept free of
//! DOM types so it compiles and tests on every target.

pub const REVEAL_DURATION_MS: u32 = 400;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "50px 0px";

pub const DOT_SPRING_OMEGA: f64 = 18.0;
pub const RING_SPRING_OMEGA: f64 = 9.0;
const SPRING_MAX_STEP_SECONDS: f64 = 0.05;

pub const POINTER_THROTTLE_MS: i32 = 50;

const PARTICLE_COUNT_BOUNDS: (f64, f64) = (40.0, 100.0);
const PARTICLE_SPEED_CEILING: f64 = 3.0;
const PARTICLE_OPACITY_BASE: f64 = 0.3;
const PARTICLE_OPACITY_EXTRA_CAP: f64 = 0.2;
const PARTICLE_SIZE_BASE: f64 = 3.0;
const PARTICLE_SIZE_EXTRA_CAP: f64 = 2.0;

const PARALLAX_SCROLL_RANGE: f64 = 1_000.0;
const PARALLAX_LAYER_SCROLL: [f64; 3] = [-150.0, -100.0, -50.0];
const PARALLAX_LAYER_POINTER: [f64; 3] = [-30.0, -20.0, -10.0];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealPreset {
    Fade,
    #[default]
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    ZoomIn,
    ZoomOut,
    Flip,
    Expand,
}

impl RevealPreset {
    /// Transform applied while the element is still hidden; the visible
    /// state is always the identity transform at full opacity.
    pub fn hidden_transform(self) -> &'static str {
        match self {
            Self::Fade => "none",
            Self::SlideUp => "translateY(50px)",
            Self::SlideDown => "translateY(-50px)",
            Self::SlideLeft => "translateX(-50px)",
            Self::SlideRight => "translateX(50px)",
            Self::ZoomIn => "scale(0.8)",
            Self::ZoomOut => "scale(1.2)",
            Self::Flip => "rotateY(90deg)",
            Self::Expand => "scale(0)",
        }
    }

    /// A reduced-motion environment collapses every preset to the plain
    /// opacity fade.
    pub fn effective(self, reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::Fade
        } else {
            self
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

impl SpringState {
    pub fn at_rest(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }
}

/// One step of a critically-damped spring toward `target`, using the
/// closed-form solution so large frame gaps stay stable.
pub fn spring_step(state: SpringState, target: f64, omega: f64, dt_seconds: f64) -> SpringState {
    let dt = dt_seconds.clamp(0.0, SPRING_MAX_STEP_SECONDS);
    let offset = state.position - target;
    let damped = state.velocity + omega * offset;
    let decay = (-omega * dt).exp();

    SpringState {
        position: target + (offset + damped * dt) * decay,
        velocity: (state.velocity - omega * damped * dt) * decay,
    }
}

/// Scroll position expressed in viewport heights, floored at zero.
pub fn scroll_factor(scroll_y: f64, viewport_height: f64) -> f64 {
    (scroll_y / viewport_height.max(1.0)).max(0.0)
}

pub fn particle_count(scroll_factor: f64) -> usize {
    let raw = 80.0 - scroll_factor.max(0.0) * 10.0;
    raw.clamp(PARTICLE_COUNT_BOUNDS.0, PARTICLE_COUNT_BOUNDS.1) as usize
}

pub fn particle_speed(scroll_factor: f64) -> f64 {
    (1.0 + scroll_factor.max(0.0) * 0.5).min(PARTICLE_SPEED_CEILING)
}

pub fn particle_opacity(scroll_factor: f64) -> f64 {
    PARTICLE_OPACITY_BASE + (scroll_factor.max(0.0) * 0.05).min(PARTICLE_OPACITY_EXTRA_CAP)
}

pub fn particle_max_size(scroll_factor: f64) -> f64 {
    PARTICLE_SIZE_BASE + (scroll_factor.max(0.0) * 0.2).min(PARTICLE_SIZE_EXTRA_CAP)
}

/// Pointer coordinate re-centered around the viewport midpoint, in
/// [-0.5, 0.5].
pub fn centered_pointer(client: f64, extent: f64) -> f64 {
    (client / extent.max(1.0) - 0.5).clamp(-0.5, 0.5)
}

pub fn parallax_scroll_shift(scroll_y: f64, layer: usize) -> f64 {
    let progress = (scroll_y / PARALLAX_SCROLL_RANGE).clamp(0.0, 1.0);
    PARALLAX_LAYER_SCROLL
        .get(layer)
        .copied()
        .unwrap_or(0.0)
        * progress
}

pub fn parallax_pointer_shift(centered: f64, layer: usize) -> f64 {
    PARALLAX_LAYER_POINTER
        .get(layer)
        .copied()
        .unwrap_or(0.0)
        * centered.clamp(-0.5, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_collapses_every_preset_to_fade() {
        let presets = [
            RevealPreset::Fade,
            RevealPreset::SlideUp,
            RevealPreset::SlideDown,
            RevealPreset::SlideLeft,
            RevealPreset::SlideRight,
            RevealPreset::ZoomIn,
            RevealPreset::ZoomOut,
            RevealPreset::Flip,
            RevealPreset::Expand,
        ];

        for preset in presets {
            assert_eq!(preset.effective(true), RevealPreset::Fade);
            assert_eq!(preset.effective(false), preset);
        }
    }

    #[test]
    fn hidden_state_of_fade_has_no_transform() {
        assert_eq!(RevealPreset::Fade.hidden_transform(), "none");
        assert_eq!(RevealPreset::default(), RevealPreset::SlideUp);
    }

    #[test]
    fn spring_converges_without_overshoot() {
        let mut state = SpringState::at_rest(0.0);
        let target = 240.0;
        let mut previous = state.position;

        for _ in 0..600 {
            state = spring_step(state, target, DOT_SPRING_OMEGA, 1.0 / 60.0);
            assert!(
                state.position <= target + 1e-6,
                "critically damped spring crossed its target"
            );
            assert!(state.position >= previous - 1e-6, "position regressed");
            previous = state.position;
        }

        assert!((state.position - target).abs() < 0.5);
        assert!(state.velocity.abs() < 1.0);
    }

    #[test]
    fn spring_tolerates_huge_frame_gaps() {
        let state = SpringState::at_rest(0.0);
        let stepped = spring_step(state, 100.0, DOT_SPRING_OMEGA, 5.0);
        assert!(stepped.position.is_finite());
        assert!(stepped.position <= 100.0 + 1e-6);
    }

    #[test]
    fn particle_parameters_stay_inside_bounds() {
        for factor in [-3.0, 0.0, 0.5, 1.0, 4.0, 25.0, 1_000.0] {
            let count = particle_count(factor);
            assert!((40..=100).contains(&count), "count {count} out of bounds");

            let speed = particle_speed(factor);
            assert!((0.0..=3.0).contains(&speed));

            let opacity = particle_opacity(factor);
            assert!((0.3..=0.5).contains(&opacity));

            let size = particle_max_size(factor);
            assert!((3.0..=5.0).contains(&size));
        }
    }

    #[test]
    fn particle_count_scales_down_with_scroll() {
        assert_eq!(particle_count(0.0), 80);
        assert!(particle_count(2.0) < particle_count(0.0));
        assert_eq!(particle_count(50.0), 40);
    }

    #[test]
    fn scroll_factor_never_negative_and_survives_zero_viewport() {
        assert_eq!(scroll_factor(-300.0, 800.0), 0.0);
        assert_eq!(scroll_factor(400.0, 800.0), 0.5);
        assert!(scroll_factor(400.0, 0.0).is_finite());
    }

    #[test]
    fn parallax_shifts_are_clamped() {
        assert_eq!(parallax_scroll_shift(0.0, 0), 0.0);
        assert_eq!(parallax_scroll_shift(1_000.0, 0), -150.0);
        assert_eq!(parallax_scroll_shift(50_000.0, 0), -150.0);
        assert_eq!(parallax_scroll_shift(500.0, 2), -25.0);
        assert_eq!(parallax_scroll_shift(500.0, 9), 0.0);

        assert_eq!(parallax_pointer_shift(0.5, 0), -15.0);
        assert_eq!(parallax_pointer_shift(8.0, 0), -15.0);
        assert_eq!(parallax_pointer_shift(-8.0, 1), 10.0);
    }

    #[test]
    fn centered_pointer_is_bounded() {
        assert_eq!(centered_pointer(0.0, 1_000.0), -0.5);
        assert_eq!(centered_pointer(500.0, 1_000.0), 0.0);
        assert_eq!(centered_pointer(1_000.0, 1_000.0), 0.5);
        assert_eq!(centered_pointer(9_999.0, 1_000.0), 0.5);
    }
}
