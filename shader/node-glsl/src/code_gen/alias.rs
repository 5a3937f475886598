use crate::*;

/// Replace every whole identifier being a key of `aliases` by its global.
///
/// Identifiers are maximal runs of `[A-Za-z0-9_]`, so eliding `pos` never touches
/// `position` or `pos2`. Globals are never keys, running this twice with the same map
/// changes nothing the second time.
pub fn elide_aliases(code: &str, aliases: &AliasMap) -> String {
  if aliases.is_empty() {
    return code.to_owned();
  }

  let mut result = String::with_capacity(code.len());
  let mut rest = code;

  while let Some(start) = rest.find(is_identifier_char) {
    result.push_str(&rest[..start]);
    let identifier = identifier_at(rest, start);
    match aliases.get(identifier) {
      Some(global) => result.push_str(global),
      None => result.push_str(identifier),
    }
    rest = &rest[start + identifier.len()..];
  }
  result.push_str(rest);

  result
}
