//! Cogviz Core Types and Definitions
//!
//! This crate provides the foundational types shared by the cogviz layout
//! engine and its command-line tool. It includes:
//!
//! - **Identifiers**: String-interned node identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and bounds ([`geometry`] module)
//! - **Mode**: Force or hierarchical layout selection ([`mode::LayoutMode`])
//! - **Objects**: The cognitive object model ([`object`] module)
//! - **State**: Upstream cognitive state documents ([`state`] module)
//! - **Style**: Type-to-style mapping for rendered nodes ([`style`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod mode;
pub mod object;
pub mod state;
pub mod style;
