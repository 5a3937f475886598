use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GraphicsApi {
  /// no target is selected, generated code will have no version directive
  #[default]
  Unspecified,
  /// desktop OpenGL without an explicit profile
  GL,
  GLCore,
  GLCompat,
  GLES,
}

impl GraphicsApi {
  pub fn is_es(self) -> bool {
    matches!(self, GraphicsApi::GLES)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShaderStage {
  #[default]
  Vertex,
  TessellationControl,
  TessellationEvaluation,
  Geometry,
  Fragment,
  Compute,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct ShaderVersion {
  pub major: u32,
  pub minor: u32,
}

impl ShaderVersion {
  pub const fn new(major: u32, minor: u32) -> Self {
    Self { major, minor }
  }
}

/// Describe what the generated code will be compiled for.
///
/// The format decides the token spelling of storage qualifiers, the version directive,
/// and which of a node's rules is selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TargetFormat {
  pub api: GraphicsApi,
  pub version: ShaderVersion,
  pub stage: ShaderStage,
  /// kept sorted, see [TargetFormat::with_extension]
  #[serde(default)]
  pub extensions: Vec<String>,
  #[serde(default)]
  pub vendor: String,
}

impl TargetFormat {
  pub fn new(api: GraphicsApi, version: ShaderVersion, stage: ShaderStage) -> Self {
    Self {
      api,
      version,
      stage,
      extensions: Vec::new(),
      vendor: String::new(),
    }
  }

  pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
    let extension = extension.into();
    if let Err(position) = self.extensions.binary_search(&extension) {
      self.extensions.insert(position, extension);
    }
    self
  }

  pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
    self.vendor = vendor.into();
    self
  }

  pub fn is_valid(&self) -> bool {
    self.api != GraphicsApi::Unspecified && self.version.major > 0
  }

  /// Check if code authored for `other` can be used when targeting `self`.
  pub fn supports(&self, other: &TargetFormat) -> bool {
    if !self.is_valid() || !other.is_valid() {
      return false;
    }

    if self.api == GraphicsApi::GLES && other.api != GraphicsApi::GLES {
      return false;
    }

    if self.api == GraphicsApi::GLCore && other.api != GraphicsApi::GLCore {
      return false;
    }

    if self.version < other.version {
      return false;
    }

    if self.stage != other.stage {
      return false;
    }

    let has_all_extensions = other
      .extensions
      .iter()
      .all(|ext| self.extensions.binary_search(ext).is_ok());
    if !has_all_extensions {
      return false;
    }

    other.vendor.is_empty() || other.vendor == self.vendor
  }
}
