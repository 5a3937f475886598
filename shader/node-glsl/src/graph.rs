use petgraph::{
  graph::{EdgeReference, NodeIndex},
  visit::{DfsPostOrder, EdgeFiltered, EdgeRef, Reversed, VisitMap},
  Graph,
};

use crate::*;

/// Identify one data flow value, rendered as `v<index>`.
pub type VariableIndex = usize;

/// One invocation of a node in `main()`, with the variables bound to its ports.
///
/// `inputs` and `outputs` follow the order of the node's input and output ports, `None`
/// marks an unconnected port.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement<'a> {
  pub node: &'a Node,
  pub inputs: SmallVec<[Option<VariableIndex>; 4]>,
  pub outputs: SmallVec<[Option<VariableIndex>; 2]>,
}

impl<'a> Statement<'a> {
  /// Create a statement with every port unconnected.
  pub fn new(node: &'a Node) -> Self {
    Self {
      node,
      inputs: SmallVec::from_elem(None, node.port_count(PortDirection::Input)),
      outputs: SmallVec::from_elem(None, node.port_count(PortDirection::Output)),
    }
  }

  pub fn port_index(&self, direction: PortDirection, name: &str) -> Option<usize> {
    self.node.port_index(direction, name)
  }

  pub fn variable_of(&self, port: &Port) -> Option<VariableIndex> {
    let index = self.port_index(port.direction, &port.name)?;
    match port.direction {
      PortDirection::Input => self.inputs.get(index).copied().flatten(),
      PortDirection::Output => self.outputs.get(index).copied().flatten(),
    }
  }
}

/// What the generator requires from a node graph.
pub trait ShaderNodeGraph {
  /// every node, in a stable order
  fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_>;
  /// The statements of the visible part of the graph. A variable must be produced by a
  /// statement before any statement reading it.
  fn create_statements(&self, enabled_layers: &[String]) -> Vec<Statement<'_>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(NodeIndex);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
  pub source: NodeHandle,
  pub source_port: String,
  pub target: NodeHandle,
  pub target_port: String,
  pub layers: Vec<String>,
}

impl Edge {
  pub fn new(
    source: NodeHandle,
    source_port: impl Into<String>,
    target: NodeHandle,
    target_port: impl Into<String>,
  ) -> Self {
    Self {
      source,
      source_port: source_port.into(),
      target,
      target_port: target_port.into(),
      layers: Vec::new(),
    }
  }

  pub fn with_layers(mut self, layers: impl IntoIterator<Item = impl Into<String>>) -> Self {
    self.layers = layers.into_iter().map(Into::into).collect();
    self
  }
}

/// The weight of a graph edge, the endpoints are kept by the graph itself.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Link {
  source_port: String,
  target_port: String,
  layers: Vec<String>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ShaderGraphBuildError {
  #[error("node {0:?} is not in the graph")]
  UnknownNode(NodeHandle),
  #[error("node {node:?} has no port named `{port}`")]
  UnknownPort { node: NodeHandle, port: String },
  #[error("port `{port}` of node {node:?} is not an {expected:?} port")]
  WrongPortDirection {
    node: NodeHandle,
    port: String,
    expected: PortDirection,
  },
  #[error("edge {0:?} is already in the graph")]
  DuplicatedEdge(Edge),
}

/// A node graph owning its nodes and edges, ordering statements by data dependency.
#[derive(Debug, Clone, Default)]
pub struct ShaderGraph {
  graph: Graph<Node, Link>,
}

impl ShaderGraph {
  pub fn add_node(&mut self, node: Node) -> NodeHandle {
    NodeHandle(self.graph.add_node(node))
  }

  pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
    self.graph.node_weight(handle.0)
  }

  pub fn add_edge(&mut self, edge: Edge) -> Result<(), ShaderGraphBuildError> {
    self.check_port(edge.source, &edge.source_port, PortDirection::Output)?;
    self.check_port(edge.target, &edge.target_port, PortDirection::Input)?;

    let link = Link {
      source_port: edge.source_port.clone(),
      target_port: edge.target_port.clone(),
      layers: edge.layers.clone(),
    };
    let duplicated = self
      .graph
      .edges_connecting(edge.source.0, edge.target.0)
      .any(|e| *e.weight() == link);
    if duplicated {
      return Err(ShaderGraphBuildError::DuplicatedEdge(edge));
    }

    self.graph.add_edge(edge.source.0, edge.target.0, link);
    Ok(())
  }

  fn check_port(
    &self,
    handle: NodeHandle,
    port: &str,
    expected: PortDirection,
  ) -> Result<(), ShaderGraphBuildError> {
    let node = self
      .node(handle)
      .ok_or(ShaderGraphBuildError::UnknownNode(handle))?;
    let port_info = node
      .port(port)
      .ok_or_else(|| ShaderGraphBuildError::UnknownPort {
        node: handle,
        port: port.to_owned(),
      })?;
    if port_info.direction != expected {
      return Err(ShaderGraphBuildError::WrongPortDirection {
        node: handle,
        port: port.to_owned(),
        expected,
      });
    }
    Ok(())
  }

  fn is_node_visible(&self, index: NodeIndex, enabled_layers: &[String]) -> bool {
    self
      .graph
      .node_weight(index)
      .is_some_and(|node| is_visible_in_layers(node.layers(), enabled_layers))
  }

  /// Visible nodes feeding an output node, every dependency before its dependants.
  fn dependency_order(&self, enabled_layers: &[String]) -> Vec<NodeIndex> {
    let visible = EdgeFiltered::from_fn(&self.graph, |e: EdgeReference<Link>| {
      is_visible_in_layers(&e.weight().layers, enabled_layers)
        && self.is_node_visible(e.source(), enabled_layers)
        && self.is_node_visible(e.target(), enabled_layers)
    });
    let upstream = Reversed(&visible);

    let mut order = Vec::new();
    let mut dfs = DfsPostOrder::empty(upstream);
    for output in self.graph.node_indices() {
      let node = &self.graph[output];
      if node.kind != NodeKind::Output || !is_visible_in_layers(node.layers(), enabled_layers) {
        continue;
      }
      if dfs.finished.is_visited(&output) {
        continue;
      }
      dfs.move_to(output);
      while let Some(index) = dfs.next(upstream) {
        order.push(index);
      }
    }
    order
  }
}

impl ShaderNodeGraph for ShaderGraph {
  fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
    Box::new(self.graph.raw_nodes().iter().map(|node| &node.weight))
  }

  fn create_statements(&self, enabled_layers: &[String]) -> Vec<Statement<'_>> {
    let order = self.dependency_order(enabled_layers);

    let mut position = vec![None; self.graph.node_count()];
    for (i, index) in order.iter().enumerate() {
      position[index.index()] = Some(i);
    }
    let mut statements: Vec<_> = order
      .iter()
      .map(|index| Statement::new(&self.graph[*index]))
      .collect();

    let mut next_variable: VariableIndex = 0;

    for edge in self.graph.edge_references() {
      let link = edge.weight();
      if !is_visible_in_layers(&link.layers, enabled_layers) {
        continue;
      }
      let (Some(source), Some(target)) = (
        position[edge.source().index()],
        position[edge.target().index()],
      ) else {
        continue;
      };
      if source >= target {
        log::warn!(
          "shader graph has a cycle through {:?} -> {:?}, the edge is ignored",
          edge.source(),
          edge.target()
        );
        continue;
      }

      let (Some(source_index), Some(target_index)) = (
        statements[source]
          .node
          .port_index(PortDirection::Output, &link.source_port),
        statements[target]
          .node
          .port_index(PortDirection::Input, &link.target_port),
      ) else {
        continue;
      };

      let variable = *statements[source].outputs[source_index].get_or_insert_with(|| {
        next_variable += 1;
        next_variable - 1
      });
      statements[target].inputs[target_index] = Some(variable);
    }

    statements
  }
}
