use crate::domain::Body;

/// Axis-aligned world rectangle with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Keep a body inside the world, reflecting the velocity of each axis whose
/// edge it touches or crosses. Returns how many axes were reflected (0..=2).
pub fn collide_bounds(body: &mut Body, bounds: Bounds, restitution: f64) -> u32 {
    let r = body.radius();
    let mut hits = 0;

    if body.position.x - r <= 0.0 {
        body.velocity.x = -body.velocity.x * restitution;
        body.position.x = r;
        hits += 1;
    } else if body.position.x + r >= bounds.width {
        body.velocity.x = -body.velocity.x * restitution;
        body.position.x = bounds.width - r;
        hits += 1;
    }

    if body.position.y - r <= 0.0 {
        body.velocity.y = -body.velocity.y * restitution;
        body.position.y = r;
        hits += 1;
    } else if body.position.y + r >= bounds.height {
        body.velocity.y = -body.velocity.y * restitution;
        body.position.y = bounds.height - r;
        hits += 1;
    }

    hits
}
