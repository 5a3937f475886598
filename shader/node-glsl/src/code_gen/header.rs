use crate::*;

/// The number of the `#version` directive, the glsl version matching the api version.
pub fn glsl_version_number(format: &TargetFormat) -> u32 {
  let ShaderVersion { major, minor } = format.version;
  match (format.api.is_es(), major) {
    (true, 2) => 100,
    (true, 3) => 300,
    (false, 2) => 100 + 10 * (minor + 1),
    (false, 3) if minor <= 2 => 100 + 10 * (minor + 3),
    _ => major * 100 + minor * 10,
  }
}

pub fn glsl_profile_suffix(api: GraphicsApi, version: u32) -> &'static str {
  match api {
    GraphicsApi::GLES if version > 100 => " es",
    GraphicsApi::GLCore if version >= 150 => " core",
    GraphicsApi::GLCompat if version >= 150 => " compatibility",
    _ => "",
  }
}

/// `None` if the format is not valid, the code is then generated without directive.
pub fn gen_version_directive(format: &TargetFormat) -> Option<String> {
  if !format.is_valid() {
    return None;
  }
  let version = glsl_version_number(format);
  let profile = glsl_profile_suffix(format.api, version);
  format!("#version {version}{profile}").into()
}

pub type GlobalInputNames = FxHashSet<String>;

/// Write the version directive and the header snippets of every visible node.
///
/// Returns the names declared by the snippets of input nodes, the body generation
/// uses them to find locals that only copy a global input.
pub fn gen_header<'a>(
  builder: &mut CodeBuilder,
  nodes: impl IntoIterator<Item = &'a Node>,
  format: &TargetFormat,
  enabled_layers: &[String],
) -> GlobalInputNames {
  match gen_version_directive(format) {
    Some(directive) => {
      builder.write_ln(directive).write_empty_ln();
    }
    None => log::debug!("target format {format:?} is not valid, version directive omitted"),
  }

  let mut global_inputs = GlobalInputNames::default();

  for node in nodes {
    if !is_visible_in_layers(node.layers(), enabled_layers) {
      log::debug!("node not in enabled layers {enabled_layers:?}: {node:?}");
      continue;
    }

    for snippet in &node.rule(format).header_snippets {
      let line = substitute_parameters(snippet, node, format);

      if node.kind == NodeKind::Input {
        if let Some(name) = declared_name(&line) {
          global_inputs.insert(name.to_owned());
        }
      }

      builder.write_ln(line);
    }
  }

  global_inputs
}

/// The last identifier following a whitespace, in a single line ending by `;`.
///
/// `in vec3 position;` gives `position`, `uniform mat4 bones[100];` gives `bones`.
pub fn declared_name(line: &str) -> Option<&str> {
  let line = single_statement_line(line)?;

  let bytes = line.as_bytes();
  (0..bytes.len().saturating_sub(1))
    .rev()
    .filter(|&i| bytes[i].is_ascii_whitespace() && is_identifier_byte(bytes[i + 1]))
    .map(|i| identifier_at(line, i + 1))
    .next()
}

#[cfg(test)]
mod test {
  use super::*;

  fn format(api: GraphicsApi, major: u32, minor: u32) -> TargetFormat {
    TargetFormat::new(
      api,
      ShaderVersion::new(major, minor),
      ShaderStage::Fragment,
    )
  }

  fn directive(api: GraphicsApi, major: u32, minor: u32) -> Option<String> {
    gen_version_directive(&format(api, major, minor))
  }

  #[test]
  fn version_numbers() {
    use GraphicsApi::*;
    assert_eq!(glsl_version_number(&format(GLES, 2, 0)), 100);
    assert_eq!(glsl_version_number(&format(GLES, 2, 1)), 100);
    assert_eq!(glsl_version_number(&format(GLES, 3, 0)), 300);
    assert_eq!(glsl_version_number(&format(GLES, 3, 1)), 300);
    assert_eq!(glsl_version_number(&format(GL, 2, 0)), 110);
    assert_eq!(glsl_version_number(&format(GL, 2, 1)), 120);
    assert_eq!(glsl_version_number(&format(GL, 3, 0)), 130);
    assert_eq!(glsl_version_number(&format(GLCore, 3, 2)), 150);
    assert_eq!(glsl_version_number(&format(GLCore, 3, 3)), 330);
    assert_eq!(glsl_version_number(&format(GLCore, 4, 5)), 450);
  }

  #[test]
  fn directives() {
    use GraphicsApi::*;
    assert_eq!(directive(GLES, 2, 0).unwrap(), "#version 100");
    assert_eq!(directive(GLES, 3, 0).unwrap(), "#version 300 es");
    assert_eq!(directive(GL, 2, 0).unwrap(), "#version 110");
    assert_eq!(directive(GLCore, 3, 1).unwrap(), "#version 140");
    assert_eq!(directive(GLCore, 3, 2).unwrap(), "#version 150 core");
    assert_eq!(directive(GLCompat, 3, 2).unwrap(), "#version 150 compatibility");
    assert_eq!(directive(GL, 4, 0).unwrap(), "#version 400");
    assert_eq!(directive(Unspecified, 4, 0), None);
    assert_eq!(directive(GLCore, 0, 0), None);
  }

  #[test]
  fn declared_names() {
    assert_eq!(declared_name("in vec3 vertexPosition;"), Some("vertexPosition"));
    assert_eq!(declared_name("uniform mat4 bones[100];"), Some("bones"));
    assert_eq!(declared_name("attribute\tvec2 uv;"), Some("uv"));
    assert_eq!(declared_name("in vec3 position ;"), Some("position"));
    assert_eq!(declared_name("in vec3 position"), None);
    assert_eq!(declared_name("position;"), None);
    assert_eq!(declared_name("in vec3 a;\nin vec3 b;"), None);
    assert_eq!(declared_name("in vec3 normal;\n"), Some("normal"));
    assert_eq!(declared_name("in vec3 normal;\n\n"), None);
  }
}
