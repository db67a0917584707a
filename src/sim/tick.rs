//! Fixed-step world update
//!
//! One tick runs, in order: motion integration (unless paused), reflective
//! boundary handling, collision-flag reset, and the pairwise SAT pass.
//! `tick` is pure over the state and `dt`, so a seeded world replays
//! identically.

use log::{trace, warn};

use super::state::WorldState;

/// Advance the world by one step of `dt` seconds
pub fn tick(state: &mut WorldState, dt: f32) {
    if !state.paused {
        for asteroid in state.asteroids.iter_mut() {
            asteroid.advance(dt);
        }
    }

    reflect_at_bounds(state);
    update_collision_flags(state);

    trace!(
        "tick dt={dt:.4}s asteroids={} colliding={}",
        state.asteroids.len(),
        state.colliding.iter().filter(|&&hit| hit).count()
    );
}

/// Negate any velocity component still carrying a body outward past the
/// bounding square. Sign flip only; the magnitude is preserved.
fn reflect_at_bounds(state: &mut WorldState) {
    let bound = state.bound;
    for asteroid in state.asteroids.iter_mut() {
        let body = &mut asteroid.body;
        if (body.position.x > bound && body.velocity.x > 0.0)
            || (body.position.x < -bound && body.velocity.x < 0.0)
        {
            body.velocity.x = -body.velocity.x;
        }
        if (body.position.y > bound && body.velocity.y > 0.0)
            || (body.position.y < -bound && body.velocity.y < 0.0)
        {
            body.velocity.y = -body.velocity.y;
        }
    }
}

/// Recompute every collision flag from scratch with an O(n²) SAT pass over
/// the world polygons. A pair whose members are both already flagged is
/// skipped; the flags it would set are set already.
fn update_collision_flags(state: &mut WorldState) {
    for flag in state.colliding.iter_mut() {
        *flag = false;
    }

    let n = state.asteroids.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let flagged = |k: usize| state.colliding.get(k).copied().unwrap_or(false);
            if flagged(i) && flagged(j) {
                continue;
            }
            let (Some(a), Some(b)) = (state.asteroids.get(i), state.asteroids.get(j)) else {
                continue;
            };
            match a.world().overlaps(b.world()) {
                Ok(true) => {
                    if let Some(flag) = state.colliding.get_mut(i) {
                        *flag = true;
                    }
                    if let Some(flag) = state.colliding.get_mut(j) {
                        *flag = true;
                    }
                }
                Ok(false) => {}
                Err(err) => warn!("skipping degenerate pair ({i}, {j}): {err}"),
            }
        }
    }
}
