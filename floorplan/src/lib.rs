//! Floor-plan geometry and canvas rendering for the craft-room viewer.
//!
//! This crate is the pure half of the application: it turns a directional
//! wall-instruction list into connected segments, computes padded bounds
//! over them, and draws the fitted result onto a 2D canvas context. The
//! `client` crate compiles it to WebAssembly and feeds it live size/offset
//! values; `cargo test` runs it natively. Only [`render`] touches
//! `web_sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, directions, wall instructions, and the cursor walk |
//! | [`plan`] | The fixed craft-room plan and JSON plan loading |
//! | [`viewport`] | Deduplicating point set and padded axis-aligned bounds |
//! | [`render`] | Frame drawing: fit transform, clipped grid, wall strokes |
//! | [`consts`] | Shared numeric constants (padding, grid spacing) |

pub mod consts;
pub mod geometry;
pub mod plan;
pub mod render;
pub mod viewport;
