//! Flowsheet Core Types and Definitions
//!
//! This crate provides the foundational types used to draw Flowsheet process
//! diagrams. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawing primitives, render layers and the shape renderer ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
