//! # Lattice core
//!
//! The building blocks the UI engine in `lattice-ui` is assembled from.
//! Everything here is deliberately small and allocation-predictable:
//!
//! - [`Arena`] — chunked bump allocator, reset wholesale between frames.
//! - [`BoundedVec`] — fixed-capacity sequence for per-frame collections.
//! - [`SlotMap`] — generational handles over reusable storage.
//! - [`Style`] — enum-indexed numeric/color/font tables.
//! - [`Renderer`] / [`PointerHost`] — the seams toward the rendering
//!   backend and the host window, which this crate never implements.
//!
//! ```rust
//! use lattice_core::*;
//!
//! let mut arena = Arena::new(4096);
//! let span = arena.write_str("per-frame text");
//! assert_eq!(arena.str(span), "per-frame text");
//! arena.reset(); // span is now dangling-by-construction, not by memory
//! ```

pub mod arena;
pub mod array;
pub mod color;
pub mod error;
pub mod geometry;
pub mod render_api;
pub mod slotmap;
pub mod style;

pub use arena::{Arena, Span};
pub use array::BoundedVec;
pub use color::Color;
pub use error::CapacityError;
pub use geometry::{Rect, Vec2};
pub use render_api::{PointerHost, Renderer};
pub use slotmap::{Key, SlotMap};
pub use style::{ColorVar, Font, FontVar, NumVar, Style};
