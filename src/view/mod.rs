//! The render boundary.
//!
//! The simulation never reaches into rendering internals. What it does need
//! from the visual layer fits in three small pieces:
//!
//! - [`SpriteId`]: an opaque handle a pawn carries so the render layer can
//!   find its visual asset
//! - [`PawnView`]: the per-pawn capability the core drives - report
//!   dimensions, move to a position, advance one tick
//! - [`arrange_on_axis`]: lay a row of views out equidistantly along a line
//!   segment, the one piece of placement logic the simulation owns
//!
//! Drawing itself, input, and asset manifests live entirely outside this
//! crate.

use serde::{Deserialize, Serialize};

/// Opaque handle to a visual asset, resolved by the render layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

impl SpriteId {
    /// Create a new sprite id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A position or extent in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn dist(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// The point `distance` further along the line from here toward
    /// `toward`. Returns `self` when the two points coincide.
    #[must_use]
    pub fn add_vec(self, distance: f64, toward: Point) -> Point {
        let span = self.dist(toward);
        if span == 0.0 {
            return self;
        }
        Point::new(
            self.x + (toward.x - self.x) / span * distance,
            self.y + (toward.y - self.y) / span * distance,
        )
    }
}

/// The per-pawn visual capability the core calls.
///
/// Implemented by whatever sprite type the embedding game uses. The core
/// only ever reports where a view should sit and ticks it forward.
pub trait PawnView {
    /// Width and height of the view's footprint.
    fn dims(&self) -> Point;

    /// Move the view so its origin sits at `to`.
    fn translate(&mut self, to: Point);

    /// Advance the view by one tick (animation frame, etc.).
    fn update(&mut self);
}

/// Place each view equidistantly along the segment from `start` to `end`,
/// accounting for each view's own width.
///
/// The gap between neighbors (and at both ends) is the segment length left
/// over after all view widths, split evenly.
pub fn arrange_on_axis<V: PawnView>(views: &mut [V], start: Point, end: Point) {
    let total_width: f64 = views.iter().map(|v| v.dims().x).sum();
    let spacer = (start.dist(end) - total_width) / (views.len() + 1) as f64;

    let mut cursor = start;
    for view in views.iter_mut() {
        cursor = cursor.add_vec(spacer, end);
        view.translate(cursor);
        cursor = cursor.add_vec(view.dims().x, end);
    }
}

/// Tick every view forward once.
pub fn update_all<V: PawnView>(views: &mut [V]) {
    for view in views.iter_mut() {
        view.update();
    }
}
