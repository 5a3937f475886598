mod tokens;

use crate::*;

/// A graph with statements given as is, as a graph ordering them elsewhere would.
pub struct FixedStatementGraph {
  pub nodes: Vec<Node>,
  /// node index, inputs, outputs
  pub statements: Vec<(usize, Vec<Option<usize>>, Vec<Option<usize>>)>,
}

impl ShaderNodeGraph for FixedStatementGraph {
  fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
    Box::new(self.nodes.iter())
  }

  fn create_statements(&self, _: &[String]) -> Vec<Statement<'_>> {
    self
      .statements
      .iter()
      .map(|(node, inputs, outputs)| Statement {
        node: &self.nodes[*node],
        inputs: inputs.iter().copied().collect(),
        outputs: outputs.iter().copied().collect(),
      })
      .collect()
  }
}

pub fn gl_core_33(stage: ShaderStage) -> TargetFormat {
  TargetFormat::new(GraphicsApi::GLCore, ShaderVersion::new(3, 3), stage)
}

pub fn gles_20(stage: ShaderStage) -> TargetFormat {
  TargetFormat::new(GraphicsApi::GLES, ShaderVersion::new(2, 0), stage)
}

/// An input node declaring a global and copying it into its output port.
pub fn global_input_node(
  name: &str,
  ty: VariableType,
  qualifier: StorageQualifier,
  formats: &[TargetFormat],
) -> Node {
  let mut node = Node::new(NodeKind::Input);
  node
    .add_port(Port::output("value"))
    .set_parameter("name", name)
    .set_parameter("qualifier", qualifier)
    .set_parameter("type", ty);
  for format in formats {
    node.add_rule(
      format.clone(),
      Rule::new(["$qualifier $type $name;"], "$type $value = $name;"),
    );
  }
  node
}

pub fn function_node(
  inputs: &[&str],
  output: &str,
  body: &str,
  formats: &[TargetFormat],
) -> Node {
  let mut node = Node::new(NodeKind::Function);
  for input in inputs {
    node.add_port(Port::input(*input));
  }
  node.add_port(Port::output(output));
  for format in formats {
    node.add_rule(format.clone(), Rule::body(body));
  }
  node
}

pub fn output_node(name: &str, ty: VariableType, formats: &[TargetFormat]) -> Node {
  let mut node = Node::new(NodeKind::Output);
  node
    .add_port(Port::input("value"))
    .set_parameter("name", name)
    .set_parameter("type", ty);
  for format in formats {
    node.add_rule(
      format.clone(),
      Rule::new(["out $type $name;"], "$name = $value;"),
    );
  }
  node
}
