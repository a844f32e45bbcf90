//! # planemap-types
//!
//! Planar geometric value types for the planemap point store.
//!
//! This crate provides the two leaf types the store is built on:
//!
//! - [`Point`]: an immutable 2D coordinate pair with a total order, exact
//!   equality, and squared-distance computation, usable as a sorted-map key.
//! - [`Rect`]: an immutable axis-aligned rectangle with inclusive
//!   containment.
//!
//! Both types are serializable with Serde and built on top of the `geo`
//! crate's geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use planemap_types::{Point, Rect};
//!
//! let p = Point::new(0.5, 0.5);
//! let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
//! assert!(unit.contains(&p));
//! ```

pub mod point;
pub mod rect;

pub use point::Point;
pub use rect::Rect;
