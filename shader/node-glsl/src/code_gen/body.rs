use crate::*;

/// Locals which only copy a global input, mapped to that global.
pub type AliasMap = FxHashMap<String, String>;

/// Write `main()` with one line per statement, in the statements order.
///
/// Input node statements copying a known global input into a local are not written,
/// the local is recorded in the returned map instead, see [elide_aliases].
pub fn gen_body(
  builder: &mut CodeBuilder,
  statements: &[Statement],
  format: &TargetFormat,
  global_inputs: &GlobalInputNames,
) -> AliasMap {
  let mut aliases = AliasMap::default();

  builder.write_ln("void main() {").tab();

  for statement in statements {
    let line = gen_statement(statement, format);

    if statement.node.kind == NodeKind::Input {
      if let Some((local, global)) = assignment_operands(&line) {
        if global_inputs.contains(global) {
          log::debug!("local {local} aliases global input {global}, declaration elided");
          aliases.insert(local.to_owned(), global.to_owned());
          continue;
        }
      }
    }

    log::trace!("{line}");
    builder.write_ln(line);
  }

  builder.un_tab().write_ln("}").write_empty_ln();

  log::debug!(
    "generated {} statements, {} aliases of global inputs",
    statements.len(),
    aliases.len()
  );

  aliases
}

/// Render one statement: connected ports become `v<index>`, then the parameters are
/// substituted. Placeholders of unconnected ports are left untouched.
pub fn gen_statement(statement: &Statement, format: &TargetFormat) -> String {
  let node = statement.node;
  let mut line = node.rule(format).substitution;

  for port in node.ports() {
    if let Some(variable) = statement.variable_of(port) {
      let placeholder = format!("${}", port.name);
      line = line.replace(&placeholder, &gen_variable_name(variable));
    }
  }

  substitute_parameters(&line, node, format)
}

pub fn gen_variable_name(index: VariableIndex) -> String {
  format!("v{index}")
}

/// Extract `(local, global)` from a single line like `vec3 v2 = position;`.
///
/// The right side is the first identifier after `=`, so `mat4 v1 = bones[3];` gives
/// `bones` too.
pub fn assignment_operands(line: &str) -> Option<(&str, &str)> {
  let line = single_statement_line(line)?;

  let bytes = line.as_bytes();
  let skip_whitespace = |mut i: usize| {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
      i += 1;
    }
    i
  };

  (0..bytes.len().saturating_sub(1))
    .rev()
    .filter(|&i| bytes[i].is_ascii_whitespace() && is_identifier_byte(bytes[i + 1]))
    .find_map(|i| {
      let local = identifier_at(line, i + 1);
      let equal = skip_whitespace(i + 1 + local.len());
      if bytes.get(equal) != Some(&b'=') {
        return None;
      }
      let global_start = skip_whitespace(equal + 1);
      if !bytes.get(global_start).copied().is_some_and(is_identifier_byte) {
        return None;
      }
      Some((local, identifier_at(line, global_start)))
    })
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn assignments() {
    assert_eq!(
      assignment_operands("vec3 v3 = vertexPosition;"),
      Some(("v3", "vertexPosition"))
    );
    assert_eq!(
      assignment_operands("mat4 v1=bones[3];"),
      Some(("v1", "bones"))
    );
    // a whitespace must precede the local
    assert_eq!(assignment_operands("v1 = position;"), None);
    assert_eq!(
      assignment_operands("bool v4 = v1 == v2;"),
      Some(("v4", "v1"))
    );
    assert_eq!(assignment_operands("vec3 v3 = -position;"), None);
    assert_eq!(assignment_operands("vec3 v3 = position"), None);
    assert_eq!(
      assignment_operands("vec3 v3 = position;\n"),
      Some(("v3", "position"))
    );
    assert_eq!(assignment_operands("vec3 v3 = position;\nv3 = a;"), None);
    assert_eq!(assignment_operands("gl_Position = v3;"), None);
  }
}
