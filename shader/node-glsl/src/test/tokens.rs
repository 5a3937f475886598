use crate::*;

use super::*;

#[test]
fn qualifier_tokens_switch_at_version_three() {
  let legacy_vertex = TargetFormat::new(
    GraphicsApi::GL,
    ShaderVersion::new(2, 1),
    ShaderStage::Vertex,
  );
  let legacy_fragment = gles_20(ShaderStage::Fragment);
  let modern = gl_core_33(ShaderStage::Vertex);

  use StorageQualifier::*;
  assert_eq!(gen_qualifier_token(Input, &legacy_vertex), "attribute");
  assert_eq!(gen_qualifier_token(Input, &legacy_fragment), "varying");
  assert_eq!(gen_qualifier_token(Output, &legacy_fragment), "");
  assert_eq!(gen_qualifier_token(Input, &modern), "in");
  assert_eq!(gen_qualifier_token(Output, &modern), "out");

  for format in [&legacy_vertex, &legacy_fragment, &modern] {
    assert_eq!(gen_qualifier_token(Const, format), "const");
    assert_eq!(gen_qualifier_token(Uniform, format), "uniform");
    assert_eq!(gen_qualifier_token(BuiltIn, format), "//");
  }

  // legacy does not depend on the api
  let es_vertex = gles_20(ShaderStage::Vertex);
  assert_eq!(gen_qualifier_token(Input, &es_vertex), "attribute");
  let es3 = TargetFormat::new(
    GraphicsApi::GLES,
    ShaderVersion::new(3, 0),
    ShaderStage::Fragment,
  );
  assert_eq!(gen_qualifier_token(Input, &es3), "in");
}

#[test]
fn every_qualifier_has_a_token() {
  for major in 1..=4 {
    let format = TargetFormat::new(
      GraphicsApi::GL,
      ShaderVersion::new(major, 0),
      ShaderStage::Fragment,
    );
    for qualifier in StorageQualifier::ALL {
      let token = gen_qualifier_token(qualifier, &format);
      if qualifier != StorageQualifier::Output || major > 2 {
        assert!(!token.is_empty());
      }
    }
  }
}

#[test]
fn type_tokens_are_unique() {
  let mut seen = FxHashSet::default();
  for ty in VariableType::ALL {
    let token = gen_type_token(ty);
    assert!(!token.is_empty());
    assert!(seen.insert(token), "{token} is used twice");
  }
  assert_eq!(seen.len(), VariableType::ALL.len());

  assert_eq!(gen_type_token(VariableType::Mat2), "mat2");
  assert_eq!(gen_type_token(VariableType::DVec3), "dvec3");
  assert_eq!(
    gen_type_token(VariableType::Sampler2DArrayShadow),
    "sampler2DArrayShadow"
  );
  assert!(VariableType::USamplerBuffer.is_sampler());
  assert!(!VariableType::Mat4.is_sampler());
}

#[test]
fn parameter_substitution() {
  let format = gles_20(ShaderStage::Vertex);
  let mut node = Node::new(NodeKind::Function);
  node
    .set_parameter("qualifier", StorageQualifier::Input)
    .set_parameter("type", VariableType::Vec2)
    .set_parameter("name", "texCoord")
    .set_parameter("scale", 2.5f32)
    .set_parameter("count", 3);

  assert_eq!(
    substitute_parameters("$qualifier $type $name; // $name", &node, &format),
    "attribute vec2 texCoord; // texCoord"
  );
  assert_eq!(
    substitute_parameters("$type v = $name * $scale + float($count);", &node, &format),
    "vec2 v = texCoord * 2.5 + float(3);"
  );
  // unknown placeholders are kept
  assert_eq!(
    substitute_parameters("$missing = $name;", &node, &format),
    "$missing = texCoord;"
  );
}
