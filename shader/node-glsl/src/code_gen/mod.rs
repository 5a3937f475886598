mod alias;
mod body;
mod code_builder;
mod header;
mod substitute;
mod token;

pub use alias::*;
pub use body::*;
pub use code_builder::*;
pub use header::*;
pub use substitute::*;
pub use token::*;

use crate::*;

/// Generate the glsl code of a node graph for one target format.
pub struct ShaderGenerator<'a, G: ?Sized> {
  pub format: TargetFormat,
  pub graph: &'a G,
}

impl<'a, G: ShaderNodeGraph + ?Sized> ShaderGenerator<'a, G> {
  pub fn new(format: TargetFormat, graph: &'a G) -> Self {
    Self { format, graph }
  }

  /// An empty `enabled_layers` enables every layer.
  pub fn create_shader_code(&self, enabled_layers: &[String]) -> String {
    let mut builder = CodeBuilder::default();

    let global_inputs = gen_header(
      &mut builder,
      self.graph.nodes(),
      &self.format,
      enabled_layers,
    );
    builder.write_empty_ln();

    let statements = self.graph.create_statements(enabled_layers);
    let aliases = gen_body(&mut builder, &statements, &self.format, &global_inputs);

    elide_aliases(&builder.output(), &aliases)
  }
}

pub(crate) fn is_identifier_byte(b: u8) -> bool {
  b.is_ascii_alphanumeric() || b == b'_'
}

pub(crate) fn is_identifier_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}

/// A line ending by `;`, optionally followed by one line break which is stripped.
pub(crate) fn single_statement_line(line: &str) -> Option<&str> {
  let line = line.strip_suffix('\n').unwrap_or(line);
  (!line.contains('\n') && line.ends_with(';')).then_some(line)
}

/// The identifier starting at byte `start`, which must be a char boundary.
pub(crate) fn identifier_at(text: &str, start: usize) -> &str {
  let rest = &text[start..];
  let len = rest.find(|c| !is_identifier_char(c)).unwrap_or(rest.len());
  &rest[..len]
}
