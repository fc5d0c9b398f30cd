//! Canvas Sankey diagram: data model, layout engine, renderer, and the
//! Leptos component tying them to the DOM.

mod component;
pub mod layout;
mod render;
pub mod state;
pub mod types;

pub use component::SankeyCanvas;
pub use types::{FlowGraph, FlowLink, FlowNode, GraphError, NodeKind};
