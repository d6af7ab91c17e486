//! # input_core
//!
//! UI-agnostic edit surface layer for scene-graph text fields.
//!
//! A rendered text field never edits text itself. Raw keyboard/IME state (value,
//! caret, selection, native focus) is owned by a hidden *edit surface*; the
//! field controller mirrors that state onto glyphs every frame. This crate
//! provides:
//! - [`EditSurface`]: the contract every edit surface fulfils
//! - [`MemorySurface`]: a software edit surface for hosts without a native
//!   text element (and for tests)
//! - [`SelectionRange`]: a normalized `[start, end)` character range
//! - [`InputId`]: an opaque identifier for a surface
//!
//! ## Design Principles
//!
//! This crate does not depend on:
//! - Any graphics framework (egui, wgpu, etc.)
//! - Text measurement or layout
//! - The field controller
//!
//! All offsets are *character* offsets (Unicode scalar values), matching the
//! way native text elements report caret and selection positions.

mod id;
mod kind;
mod memory;
mod selection;
mod state;
mod text;
mod traits;

pub use id::InputId;
pub use kind::FieldKind;
pub use memory::MemorySurface;
pub use selection::SelectionRange;
pub use traits::{EditSurface, Key, SurfaceConfig, SurfaceEvent};

// Re-export text utilities for layout and rendering layers that map character
// offsets onto byte slices.
pub use text::{
    byte_index_for_char, char_len, char_prefix, char_slice, filter_numeric, filter_single_line,
    normalize_newlines,
};
