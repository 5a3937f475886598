use std::collections::BTreeMap;

use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortDirection {
  Input,
  Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
  pub direction: PortDirection,
  pub name: String,
}

impl Port {
  pub fn input(name: impl Into<String>) -> Self {
    Self {
      direction: PortDirection::Input,
      name: name.into(),
    }
  }

  pub fn output(name: impl Into<String>) -> Self {
    Self {
      direction: PortDirection::Output,
      name: name.into(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeKind {
  /// reads a global (attribute, varying, uniform, builtin...) into the graph
  Input,
  /// writes a value to a global
  Output,
  #[default]
  Function,
}

/// The code templates of a node for one target format.
///
/// `$name` placeholders refer to a port name or a parameter name of the node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rule {
  /// emitted once per node, before `main()`
  #[serde(default)]
  pub header_snippets: Vec<String>,
  /// one statement inside `main()`
  pub substitution: String,
}

impl Rule {
  pub fn new(
    header_snippets: impl IntoIterator<Item = impl Into<String>>,
    substitution: impl Into<String>,
  ) -> Self {
    Self {
      header_snippets: header_snippets.into_iter().map(Into::into).collect(),
      substitution: substitution.into(),
    }
  }

  pub fn body(substitution: impl Into<String>) -> Self {
    Self {
      header_snippets: Vec::new(),
      substitution: substitution.into(),
    }
  }
}

/// A reusable shader fragment: ports to connect, parameters to configure, and the
/// code rules for every target format it has been authored for.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
  pub kind: NodeKind,
  #[serde(default)]
  ports: Vec<Port>,
  #[serde(default)]
  parameters: BTreeMap<String, ParameterValue>,
  #[serde(default)]
  layers: Vec<String>,
  #[serde(default)]
  rules: Vec<(TargetFormat, Rule)>,
}

impl Node {
  pub fn new(kind: NodeKind) -> Self {
    Self {
      kind,
      ..Default::default()
    }
  }

  pub fn ports(&self) -> &[Port] {
    &self.ports
  }

  /// A port with the same name is replaced.
  pub fn add_port(&mut self, port: Port) -> &mut Self {
    match self.ports.iter_mut().find(|p| p.name == port.name) {
      Some(existing) => *existing = port,
      None => self.ports.push(port),
    }
    self
  }

  pub fn port(&self, name: &str) -> Option<&Port> {
    self.ports.iter().find(|p| p.name == name)
  }

  /// The position of the port among the node's ports of the same direction.
  ///
  /// This is the position of its variable in [Statement::inputs] or [Statement::outputs].
  pub fn port_index(&self, direction: PortDirection, name: &str) -> Option<usize> {
    self
      .ports
      .iter()
      .filter(|p| p.direction == direction)
      .position(|p| p.name == name)
  }

  pub fn port_count(&self, direction: PortDirection) -> usize {
    self
      .ports
      .iter()
      .filter(|p| p.direction == direction)
      .count()
  }

  pub fn parameters(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
    self.parameters.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn set_parameter(
    &mut self,
    name: impl Into<String>,
    value: impl Into<ParameterValue>,
  ) -> &mut Self {
    self.parameters.insert(name.into(), value.into());
    self
  }

  pub fn layers(&self) -> &[String] {
    &self.layers
  }

  pub fn set_layers(&mut self, layers: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
    self.layers = layers.into_iter().map(Into::into).collect();
    self
  }

  /// Register the rule used for `format`, replacing the one previously registered for
  /// the same format.
  pub fn add_rule(&mut self, format: TargetFormat, rule: Rule) -> &mut Self {
    self.remove_rule(&format);
    self.rules.push((format, rule));
    self
  }

  pub fn remove_rule(&mut self, format: &TargetFormat) {
    self.rules.retain(|(f, _)| f != format);
  }

  pub fn available_formats(&self) -> impl Iterator<Item = &TargetFormat> {
    self.rules.iter().map(|(f, _)| f)
  }

  /// The most recently added rule the `format` supports. A node without a matching
  /// rule produces no code.
  pub fn rule(&self, format: &TargetFormat) -> Rule {
    self
      .rules
      .iter()
      .rev()
      .find(|(f, _)| format.supports(f))
      .map(|(_, rule)| rule.clone())
      .unwrap_or_default()
  }
}

/// A node is visible if it has no layer, or if one of its layers is enabled. No enabled
/// layer at all means every layer is enabled.
pub fn is_visible_in_layers(layers: &[String], enabled_layers: &[String]) -> bool {
  layers.is_empty()
    || enabled_layers.is_empty()
    || layers.iter().any(|layer| enabled_layers.contains(layer))
}
