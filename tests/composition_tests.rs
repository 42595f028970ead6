//! Scenario tests for the game variants carried by the shared components
//! rather than a dedicated rule set: breakout, asteroids and memory.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use arcade_core::entity::{retain_active, BoundsPolicy, Entity, Forces};
use arcade_core::geometry::{circle_overlap, clamp, rect_overlap, Rect};
use arcade_core::scoring::{ScoreEvent, ScoreTracker};
use arcade_core::sequence::shuffled_pairs;

/// The 5x8 brick field from the breakout variant: 55x15 bricks on a 60x20
/// lattice starting 30px down
fn brick_field() -> Vec<Rect> {
    (0..5)
        .flat_map(|r| (0..8).map(move |c| Rect::new(c as f64 * 60.0, r as f64 * 20.0 + 30.0, 55.0, 15.0)))
        .collect()
}

#[test]
fn test_breakout_brick_field_layout() {
    let bricks = brick_field();
    assert_eq!(bricks.len(), 40);
    assert!(bricks.iter().all(|b| b.width == 55.0 && b.height == 15.0));
}

#[test]
fn test_breakout_ball_destroys_bricks_in_its_lane() {
    let mut bricks = brick_field();
    let mut ball = Entity::at(30.0, 200.0)
        .with_velocity(0.0, -4.0)
        .with_radius(8.0)
        .with_bounds(BoundsPolicy::Collide);
    let mut tracker = ScoreTracker::new();

    for _ in 0..60 {
        ball.integrate(&Forces::default(), 1.0);
        ball.apply_bounds(480.0, 320.0);

        let ball_rect = Rect::new(
            ball.x - ball.radius,
            ball.y - ball.radius,
            ball.radius * 2.0,
            ball.radius * 2.0,
        );
        bricks.retain(|brick| {
            if rect_overlap(&ball_rect, brick) {
                tracker.apply(ScoreEvent::BrickDestroyed);
                false
            } else {
                true
            }
        });
    }

    // The ball's lane covers the first column only: five bricks, ten points
    // each
    assert_eq!(bricks.len(), 35);
    assert_eq!(tracker.score(), 50);
}

#[test]
fn test_breakout_paddle_stays_on_the_canvas() {
    // 100-wide paddle on a 480 canvas, 5px per move
    let mut paddle_x = 190.0;

    for _ in 0..100 {
        paddle_x = clamp(paddle_x + 5.0, 0.0, 480.0 - 100.0);
    }
    assert_eq!(paddle_x, 380.0);

    for _ in 0..100 {
        paddle_x = clamp(paddle_x - 5.0, 0.0, 380.0);
    }
    assert_eq!(paddle_x, 0.0);
}

#[test]
fn test_asteroids_ship_thrusts_coasts_and_wraps() {
    let mut ship = Entity::at(300.0, 200.0).with_bounds(BoundsPolicy::Wrap);
    let thrusting = Forces {
        thrust: 0.5,
        ..Forces::default()
    };
    let coasting = Forces {
        friction: 0.99,
        ..Forces::default()
    };

    for _ in 0..20 {
        ship.integrate(&thrusting, 1.0);
        ship.apply_bounds(600.0, 400.0);
    }
    let speed = ship.dx;
    assert!(speed > 0.0);

    // Coast off the right edge; the wrap policy teleports the ship back to
    // the left while friction bleeds speed
    let mut wrapped = false;
    for _ in 0..100 {
        ship.integrate(&coasting, 1.0);
        ship.apply_bounds(600.0, 400.0);
        if ship.x < 300.0 {
            wrapped = true;
            break;
        }
    }
    assert!(wrapped);
    assert!(ship.dx < speed);
}

#[test]
fn test_asteroids_bullet_hit_deactivates_and_compacts() {
    let asteroid = (95.0, 95.0);
    let mut bullets = vec![
        Entity::at(100.0, 100.0).with_bounds(BoundsPolicy::Wrap),
        Entity::at(300.0, 300.0).with_bounds(BoundsPolicy::Wrap),
    ];

    for bullet in &mut bullets {
        if circle_overlap((bullet.x, bullet.y), asteroid, 20.0) {
            bullet.active = false;
        }
    }
    retain_active(&mut bullets);

    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].x, 300.0);
}

#[test]
fn test_memory_clearing_every_pair_scores_each_once() {
    let mut rng = Pcg32::seed_from_u64(4);
    let deck = shuffled_pairs(8, &mut rng).unwrap();
    let mut matched = vec![false; deck.len()];
    let mut tracker = ScoreTracker::new();

    // Flip each unmatched card, then its equal-symbol partner
    for i in 0..deck.len() {
        if matched[i] {
            continue;
        }
        let partner = (i + 1..deck.len())
            .find(|&j| !matched[j] && deck[j] == deck[i])
            .expect("every card has a partner");
        matched[i] = true;
        matched[partner] = true;
        tracker.apply(ScoreEvent::PairMatched);
    }

    assert!(matched.iter().all(|&m| m));
    assert_eq!(tracker.score(), 8);
}
