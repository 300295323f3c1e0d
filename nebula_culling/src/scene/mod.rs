//! Scene object module
//!
//! Read-only per-frame snapshots of renderable entities and their
//! bounding volumes. Cullers only ever borrow these — the caller owns
//! the object list and passes a fresh slice every frame.

mod render_object;

pub use render_object::{RenderObject, Bounds, AABB};
