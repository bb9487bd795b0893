//! Building Script — procedural Blender scripts from building descriptions.
//!
//! Turns a free-text prompt such as "a modern 5-story building" into a
//! Python construction script for Blender. The pipeline is fixed keyword
//! matching: numeric dimensions are pulled out by ordered patterns, one of
//! six styles is chosen by keyword precedence, and that style's template
//! writes the script. Nothing here runs the script.

pub mod core;
pub mod schema;
pub mod styles;
