//! Moving entity model - position/velocity integration with configurable
//! forces and bounds policies
//!
//! Shared by the continuous-plane game variants (ball, bird, ship, bullets).
//! Integration follows the observed per-frame convention:
//! `dx += ax*dt; dy += ay*dt; x += dx*dt; y += dy*dt`, with friction applied
//! as a plain damping multiplier once per tick.

use serde::Serialize;

use crate::geometry::{clamp, wrap_coordinate};

/// A point-mass entity on a continuous plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entity {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    /// Heading in radians, used by thrust
    pub angle: f64,
    pub radius: f64,
    /// Boundary behavior, configured per entity
    pub bounds: BoundsPolicy,
    /// Inactive entities are excluded from collision checks and removed at
    /// the next compaction pass
    pub active: bool,
}

impl Entity {
    /// Create a resting entity at the given position
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            dx: 0.0,
            dy: 0.0,
            angle: 0.0,
            radius: 0.0,
            bounds: BoundsPolicy::Clamp,
            active: true,
        }
    }

    pub fn with_velocity(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Integrate one tick under the configured forces.
    ///
    /// Order: thrust and gravity accelerate the velocity, friction damps it,
    /// then velocity moves the position.
    pub fn integrate(&mut self, forces: &Forces, dt: f64) {
        self.dx += self.angle.cos() * forces.thrust * dt;
        self.dy += self.angle.sin() * forces.thrust * dt;
        self.dy += forces.gravity * dt;
        self.dx *= forces.friction;
        self.dy *= forces.friction;
        self.x += self.dx * dt;
        self.y += self.dy * dt;
    }

    /// Overwrite both velocity components directly (flap-style impulse)
    pub fn apply_impulse(&mut self, dx: f64, dy: f64) {
        self.dx = dx;
        self.dy = dy;
    }

    /// Enforce this entity's bounds policy against a `[0, width] x [0, height]`
    /// world. Only `Collide` produces an event, reporting which axes bounced.
    pub fn apply_bounds(&mut self, width: f64, height: f64) -> Option<WallHit> {
        match self.bounds {
            BoundsPolicy::Wrap => {
                self.x = wrap_coordinate(self.x, width);
                self.y = wrap_coordinate(self.y, height);
                None
            }
            BoundsPolicy::Clamp => {
                self.x = clamp(self.x, 0.0, width);
                self.y = clamp(self.y, 0.0, height);
                None
            }
            BoundsPolicy::Collide => {
                let mut hit = WallHit {
                    horizontal: false,
                    vertical: false,
                };
                if self.x < 0.0 || self.x > width {
                    self.x = clamp(self.x, 0.0, width);
                    self.dx = -self.dx;
                    hit.horizontal = true;
                }
                if self.y < 0.0 || self.y > height {
                    self.y = clamp(self.y, 0.0, height);
                    self.dy = -self.dy;
                    hit.vertical = true;
                }
                if hit.horizontal || hit.vertical {
                    Some(hit)
                } else {
                    None
                }
            }
        }
    }
}

/// Forces applied during integration. `friction` is a per-tick damping
/// multiplier in (0, 1]; 1.0 means no damping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forces {
    pub gravity: f64,
    pub friction: f64,
    pub thrust: f64,
}

impl Default for Forces {
    fn default() -> Self {
        Self {
            gravity: 0.0,
            friction: 1.0,
            thrust: 0.0,
        }
    }
}

/// Per-entity boundary behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Teleport to the opposite edge (asteroids-style)
    Wrap,
    /// Stop at the boundary (paddle-style)
    Clamp,
    /// Reverse the offending velocity component and report the hit
    Collide,
}

/// Wall collision report from `BoundsPolicy::Collide`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallHit {
    pub horizontal: bool,
    pub vertical: bool,
}

/// Compaction pass: drop every inactive entity
pub fn retain_active(entities: &mut Vec<Entity>) {
    entities.retain(|e| e.active);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_integration() {
        // bird at y=300 under 0.3 gravity, one unit tick
        let mut bird = Entity::at(100.0, 300.0);
        let forces = Forces {
            gravity: 0.3,
            ..Forces::default()
        };

        bird.integrate(&forces, 1.0);
        assert!((bird.dy - 0.3).abs() < 1e-9);
        assert!((bird.y - 300.3).abs() < 1e-9);
    }

    #[test]
    fn test_flap_impulse_overwrites_velocity() {
        let mut bird = Entity::at(100.0, 300.0).with_velocity(0.0, 2.0);
        bird.apply_impulse(0.0, -7.0);
        assert_eq!(bird.dy, -7.0);
    }

    #[test]
    fn test_thrust_along_angle() {
        let mut ship = Entity::at(0.0, 0.0);
        ship.angle = 0.0;
        let forces = Forces {
            thrust: 0.5,
            ..Forces::default()
        };

        ship.integrate(&forces, 1.0);
        assert!((ship.dx - 0.5).abs() < 1e-9);
        assert!(ship.dy.abs() < 1e-9);
    }

    #[test]
    fn test_friction_damping() {
        let mut ship = Entity::at(0.0, 0.0).with_velocity(5.0, 3.0);
        let forces = Forces {
            friction: 0.99,
            ..Forces::default()
        };

        ship.integrate(&forces, 1.0);
        assert!((ship.dx - 4.95).abs() < 1e-9);
        assert!((ship.dy - 2.97).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_bounds() {
        let mut ship = Entity::at(-1.0, 300.0).with_bounds(BoundsPolicy::Wrap);
        let hit = ship.apply_bounds(600.0, 600.0);
        assert!(hit.is_none());
        assert_eq!(ship.x, 600.0);

        ship.x = 601.0;
        ship.apply_bounds(600.0, 600.0);
        assert_eq!(ship.x, 0.0);
    }

    #[test]
    fn test_clamp_bounds() {
        let mut paddle = Entity::at(490.0, 0.0);
        paddle.apply_bounds(380.0, 300.0);
        assert_eq!(paddle.x, 380.0);
    }

    #[test]
    fn test_collide_bounds_reverses_and_reports() {
        let mut ball = Entity::at(300.0, -1.0)
            .with_velocity(3.0, -2.0)
            .with_bounds(BoundsPolicy::Collide);
        let hit = ball
            .apply_bounds(600.0, 300.0)
            .expect("should report a wall hit");

        assert!(hit.vertical);
        assert!(!hit.horizontal);
        assert_eq!(ball.y, 0.0);
        assert_eq!(ball.dy, 2.0);
        assert_eq!(ball.dx, 3.0);
    }

    #[test]
    fn test_retain_active_compaction() {
        let mut entities: Vec<Entity> = (0..100)
            .map(|i| Entity::at(i as f64, i as f64))
            .collect();
        for e in entities.iter_mut().take(50) {
            e.active = false;
        }

        retain_active(&mut entities);
        assert_eq!(entities.len(), 50);
        assert!(entities.iter().all(|e| e.active));
    }
}
