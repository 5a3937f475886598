use crate::*;

/// Replace every `$<parameter>` placeholder of `template` by the node's parameter values.
///
/// Parameters are applied in name order. A parameter name being the prefix of another
/// one is a rule authoring error, the shorter one would eat the longer placeholders.
pub fn substitute_parameters(template: &str, node: &Node, format: &TargetFormat) -> String {
  let mut result = template.to_owned();
  for (name, value) in node.parameters() {
    let placeholder = format!("${name}");
    if !result.contains(&placeholder) {
      continue;
    }
    let value = match value {
      ParameterValue::Qualifier(qualifier) => gen_qualifier_token(*qualifier, format),
      ParameterValue::Type(ty) => gen_type_token(*ty),
      ParameterValue::Text(text) => text.as_str(),
    };
    result = result.replace(&placeholder, value);
  }
  result
}
