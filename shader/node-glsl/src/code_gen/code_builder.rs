/// Line based text writer with indentation.
#[derive(Default)]
pub struct CodeBuilder {
  lines: Vec<String>,
  indent: usize,
}

const INDENT: &str = "    ";

impl CodeBuilder {
  pub fn write_ln(&mut self, line: impl AsRef<str>) -> &mut Self {
    self
      .lines
      .push(format!("{}{}", INDENT.repeat(self.indent), line.as_ref()));
    self
  }

  /// Unlike `write_ln("")`, never indented.
  pub fn write_empty_ln(&mut self) -> &mut Self {
    self.lines.push(String::new());
    self
  }

  pub fn tab(&mut self) -> &mut Self {
    self.indent += 1;
    self
  }

  pub fn un_tab(&mut self) -> &mut Self {
    self.indent = self.indent.saturating_sub(1);
    self
  }

  pub fn line_count(&self) -> usize {
    self.lines.len()
  }

  /// Lines are joined by `\n`, end with an empty line to get a trailing line break.
  pub fn output(&self) -> String {
    self.lines.join("\n")
  }
}
