//! Collision pass - all-pairs narrow phase plus world bounds
//!
//! For each body A in insertion order: resolve A against every overlapping
//! body, then clamp A to the bounds. Boundary resolution is per body and
//! interleaved, not a separate global pass.

mod bounds;
mod contact;

pub use bounds::{collide_bounds, Bounds};
pub use contact::{collide, is_colliding, ContactOutcome, ContactParams};

use crate::domain::{Body, PairSweep};
use crate::spatial::BodyArena;

/// Work done by one collision pass. Counts saturate at `u32::MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionCounters {
    pub pairs_tested: u32,
    pub contacts: u32,
    pub impulses: u32,
    pub boundary_hits: u32,
}

#[inline]
fn tally(counter: &mut u32, n: u32) {
    *counter = counter.saturating_add(n);
}

pub fn resolve_collisions(
    bodies: &mut BodyArena<Body>,
    bounds: Bounds,
    params: ContactParams,
    sweep: PairSweep,
) -> CollisionCounters {
    let mut counters = CollisionCounters::default();
    let slots = bodies.slot_count();

    for i in 0..slots {
        if bodies.slot(i).is_none() {
            continue;
        }

        let first = match sweep {
            PairSweep::Ordered => 0,
            PairSweep::Unordered => i + 1,
        };
        for j in first..slots {
            // Skips i == j and holes
            let Some((a, b)) = bodies.slot_pair_mut(i, j) else {
                continue;
            };
            tally(&mut counters.pairs_tested, 1);
            if !is_colliding(a, b) {
                continue;
            }
            tally(&mut counters.contacts, 1);
            if collide(a, b, params) == ContactOutcome::Impulse {
                tally(&mut counters.impulses, 1);
            }
        }

        if let Some(body) = bodies.slot_mut(i) {
            tally(&mut counters.boundary_hits, collide_bounds(body, bounds, params.restitution));
        }
    }

    counters
}
