//! Flow-graph data model consumed by the Sankey layout engine.

use thiserror::Error;

/// Which side of the bipartite flow a node sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	/// A source vocabulary contributing codes; drawn in the left column.
	Source,
	/// A curated collection receiving codes; drawn in the right column.
	Target,
}

/// A terminology node, defined once at load time and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowNode {
	/// Unique identifier referenced by links.
	pub id: String,
	/// Human-readable display name.
	pub name: String,
	/// Column assignment.
	pub kind: NodeKind,
	/// Free text shown in the hover tooltip.
	pub description: String,
	/// Explicit fill color; falls back to the palette when `None`.
	pub color: Option<String>,
}

impl FlowNode {
	/// Create a node with an empty description and no explicit color.
	pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			kind,
			description: String::new(),
			color: None,
		}
	}

	/// Set the tooltip description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Set an explicit fill color.
	pub fn with_color(mut self, color: impl Into<String>) -> Self {
		self.color = Some(color.into());
		self
	}
}

/// A weighted edge between a source node and a target node.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowLink {
	/// Id of the contributing node.
	pub source: String,
	/// Id of the receiving node.
	pub target: String,
	/// Relative flow magnitude; must be positive and finite.
	pub value: f64,
}

impl FlowLink {
	/// Create a link between two node ids.
	pub fn new(source: impl Into<String>, target: impl Into<String>, value: f64) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			value,
		}
	}
}

/// Why a flow dataset was rejected at construction time.
///
/// Validation rejects the whole dataset rather than silently dropping the
/// offending link, so a malformed dataset surfaces as a configuration error
/// instead of a partially drawn diagram.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
	/// A link endpoint does not resolve to any node id.
	#[error("link {index} references unknown node id `{id}`")]
	UnknownNode {
		/// Position of the offending link in the link list.
		index: usize,
		/// The id that failed to resolve.
		id: String,
	},
	/// A link value is zero, negative, or not a finite number.
	#[error("link {index} (`{source_id}` -> `{target_id}`) has invalid value {value}: flows must be positive and finite")]
	InvalidValue {
		/// Position of the offending link in the link list.
		index: usize,
		/// Source id of the offending link.
		source_id: String,
		/// Target id of the offending link.
		target_id: String,
		/// The rejected value.
		value: f64,
	},
}

/// An immutable bipartite flow graph: the input to every layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowGraph {
	/// All nodes, in dataset order. Order determines the stable base layout.
	pub nodes: Vec<FlowNode>,
	/// All weighted links.
	pub links: Vec<FlowLink>,
}

impl FlowGraph {
	/// Build a graph from parts.
	pub fn new(nodes: Vec<FlowNode>, links: Vec<FlowLink>) -> Self {
		Self { nodes, links }
	}

	/// Index of the node with the given id, if any.
	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	/// Check dataset self-consistency: every link endpoint must resolve to a
	/// known node id and every link value must be positive and finite.
	///
	/// The first defect found rejects the dataset.
	pub fn validate(&self) -> Result<(), GraphError> {
		for (index, link) in self.links.iter().enumerate() {
			if self.node_index(&link.source).is_none() {
				return Err(GraphError::UnknownNode {
					index,
					id: link.source.clone(),
				});
			}
			if self.node_index(&link.target).is_none() {
				return Err(GraphError::UnknownNode {
					index,
					id: link.target.clone(),
				});
			}
			if !(link.value > 0.0 && link.value.is_finite()) {
				return Err(GraphError::InvalidValue {
					index,
					source_id: link.source.clone(),
					target_id: link.target.clone(),
					value: link.value,
				});
			}
		}
		Ok(())
	}
}
