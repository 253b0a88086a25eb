//! Damped spring integrator driving the camera position.
//!
//! Each axis is an independent mass-spring-damper pulled toward its target:
//! `a = (tension * (target - x) - friction * v) / mass`. The state is
//! advanced by semi-implicit Euler in fixed substeps so the result does not
//! depend on the frame rate.

use bevy::math::Vec3;
use thiserror::Error;

const SUBSTEP: f32 = 0.001;
const MAX_TICK: f32 = 0.064;
const REST_EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            tension: 170.0,
            friction: 26.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SpringError {
    #[error("spring target {0} is not finite")]
    NonFiniteTarget(Vec3),
    #[error("spring position {0} is not finite")]
    NonFinitePosition(Vec3),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring3 {
    config: SpringConfig,
    position: Vec3,
    velocity: Vec3,
    target: Vec3,
    settled: bool,
}

impl Spring3 {
    /// A spring resting at `position`.
    pub fn at_rest(position: Vec3, config: SpringConfig) -> Self {
        Self {
            config,
            position,
            velocity: Vec3::ZERO,
            target: position,
            settled: true,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Moves the destination. Position and velocity carry over unchanged.
    pub fn retarget(&mut self, target: Vec3) -> Result<(), SpringError> {
        if !target.is_finite() {
            return Err(SpringError::NonFiniteTarget(target));
        }
        self.target = target;
        self.settled = self.is_resting();
        Ok(())
    }

    /// Places the spring somewhere else without touching its velocity.
    pub fn set_position(&mut self, position: Vec3) -> Result<(), SpringError> {
        if !position.is_finite() {
            return Err(SpringError::NonFinitePosition(position));
        }
        self.position = position;
        self.settled = self.is_resting();
        Ok(())
    }

    /// Advances the spring by `dt` seconds. Returns whether it is still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.settled {
            return false;
        }
        let mut remaining = if dt.is_finite() { dt.clamp(0.0, MAX_TICK) } else { 0.0 };
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let SpringConfig {
                mass,
                tension,
                friction,
            } = self.config;
            let accel = (tension * (self.target - self.position) - friction * self.velocity) / mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_resting() {
            self.position = self.target;
            self.velocity = Vec3::ZERO;
            self.settled = true;
        }
        !self.settled
    }

    fn is_resting(&self) -> bool {
        let error = (self.target - self.position).abs();
        let speed = self.velocity.abs();
        error.max_element() < REST_EPSILON && speed.max_element() < REST_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run(spring: &mut Spring3, frames: usize) {
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn converges_to_target_and_stays() {
        let mut spring = Spring3::at_rest(Vec3::new(0.0, 3.0, 12.0), SpringConfig::default());
        let target = Vec3::new(-2.5, 1.5, 0.5);
        spring.retarget(target).unwrap();

        run(&mut spring, 300);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), target);

        run(&mut spring, 120);
        assert_eq!(spring.position(), target);
        assert_eq!(spring.velocity(), Vec3::ZERO);
    }

    #[test]
    fn overshoot_stays_small() {
        let mut spring = Spring3::at_rest(Vec3::ZERO, SpringConfig::default());
        spring.retarget(Vec3::new(10.0, 0.0, 0.0)).unwrap();

        let mut max_x = 0.0f32;
        for _ in 0..600 {
            spring.step(FRAME);
            max_x = max_x.max(spring.position().x);
        }
        assert!(max_x < 10.05, "overshoot too large: {max_x}");
    }

    #[test]
    fn retarget_mid_flight_keeps_position_and_velocity() {
        let mut spring = Spring3::at_rest(Vec3::new(0.0, 3.0, 12.0), SpringConfig::default());
        spring.retarget(Vec3::new(-2.5, 1.5, 0.5)).unwrap();
        run(&mut spring, 10);

        let position = spring.position();
        let velocity = spring.velocity();
        assert!(velocity.length() > 0.0);

        spring.retarget(Vec3::new(2.5, 1.5, 0.5)).unwrap();
        assert_eq!(spring.position(), position);
        assert_eq!(spring.velocity(), velocity);
        assert!(!spring.is_settled());

        spring.step(FRAME);
        assert!(spring.position().distance(position) < 1.5);

        run(&mut spring, 300);
        assert_eq!(spring.position(), Vec3::new(2.5, 1.5, 0.5));
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let mut spring = Spring3::at_rest(Vec3::ONE, SpringConfig::default());
        let err = spring.retarget(Vec3::new(f32::NAN, 0.0, 0.0)).unwrap_err();

        assert!(matches!(err, SpringError::NonFiniteTarget(_)));
        assert_eq!(spring.target(), Vec3::ONE);
        assert!(spring.position().is_finite());
    }

    #[test]
    fn bad_dt_does_not_move_the_spring() {
        let mut spring = Spring3::at_rest(Vec3::ZERO, SpringConfig::default());
        spring.retarget(Vec3::X).unwrap();

        spring.step(f32::NAN);
        spring.step(f32::INFINITY);
        spring.step(-1.0);

        assert_eq!(spring.position(), Vec3::ZERO);
        assert!(!spring.is_settled());
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut spring = Spring3::at_rest(Vec3::ZERO, SpringConfig::default());
        spring.retarget(Vec3::new(10.0, 0.0, 0.0)).unwrap();
        spring.step(5.0);

        let mut reference = Spring3::at_rest(Vec3::ZERO, SpringConfig::default());
        reference.retarget(Vec3::new(10.0, 0.0, 0.0)).unwrap();
        reference.step(MAX_TICK);

        assert_eq!(spring.position(), reference.position());
    }

    #[test]
    fn step_result_is_frame_rate_independent() {
        let target = Vec3::new(4.0, -2.0, 1.0);
        let mut coarse = Spring3::at_rest(Vec3::ZERO, SpringConfig::default());
        let mut fine = coarse.clone();
        coarse.retarget(target).unwrap();
        fine.retarget(target).unwrap();

        for _ in 0..15 {
            coarse.step(0.032);
        }
        for _ in 0..60 {
            fine.step(0.008);
        }
        assert!(coarse.position().distance(fine.position()) < 1e-3);
    }
}
