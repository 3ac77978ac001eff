//! The spatial and sharing core of the hamlet world builder.
//!
//! Three pieces, leaves first:
//!
//! - [`geometry`]: cube-coordinate hex math and the grid's world-space
//!   embedding.
//! - [`tiles`]: the closed registry of placeable kinds, their trait tags,
//!   and connected-region analysis over a placed map.
//! - [`sharing`]: the compact URL-safe codec for passing a build around as
//!   a string.
//!
//! Everything here is a pure, synchronous computation over immutable inputs;
//! rendering, assets, audio and networking live elsewhere and only consume
//! what this crate produces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::doc_markdown)]

pub mod geometry;
pub mod sharing;
pub mod tiles;
