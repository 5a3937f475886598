use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageQualifier {
  Const,
  Input,
  /// variables provided by the pipeline, like gl_FragCoord, they should never be declared
  BuiltIn,
  Output,
  Uniform,
}

impl StorageQualifier {
  pub const ALL: [StorageQualifier; 5] = [
    StorageQualifier::Const,
    StorageQualifier::Input,
    StorageQualifier::BuiltIn,
    StorageQualifier::Output,
    StorageQualifier::Uniform,
  ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableType {
  Bool,
  Int,
  Uint,
  Float,
  Double,
  Vec2,
  Vec3,
  Vec4,
  DVec2,
  DVec3,
  DVec4,
  BVec2,
  BVec3,
  BVec4,
  IVec2,
  IVec3,
  IVec4,
  UVec2,
  UVec3,
  UVec4,
  Mat2,
  Mat3,
  Mat4,
  Mat2x2,
  Mat2x3,
  Mat2x4,
  Mat3x2,
  Mat3x3,
  Mat3x4,
  Mat4x2,
  Mat4x3,
  Mat4x4,
  DMat2,
  DMat3,
  DMat4,
  DMat2x2,
  DMat2x3,
  DMat2x4,
  DMat3x2,
  DMat3x3,
  DMat3x4,
  DMat4x2,
  DMat4x3,
  DMat4x4,
  Sampler1D,
  Sampler2D,
  Sampler3D,
  SamplerCube,
  Sampler2DRect,
  Sampler2DMs,
  SamplerBuffer,
  Sampler1DArray,
  Sampler2DArray,
  Sampler2DMsArray,
  SamplerCubeArray,
  Sampler1DShadow,
  Sampler2DShadow,
  Sampler2DRectShadow,
  Sampler1DArrayShadow,
  Sampler2DArrayShadow,
  SamplerCubeShadow,
  SamplerCubeArrayShadow,
  ISampler1D,
  ISampler2D,
  ISampler3D,
  ISamplerCube,
  ISampler2DRect,
  ISampler2DMs,
  ISamplerBuffer,
  ISampler1DArray,
  ISampler2DArray,
  ISampler2DMsArray,
  ISamplerCubeArray,
  USampler1D,
  USampler2D,
  USampler3D,
  USamplerCube,
  USampler2DRect,
  USampler2DMs,
  USamplerBuffer,
  USampler1DArray,
  USampler2DArray,
  USampler2DMsArray,
  USamplerCubeArray,
}

impl VariableType {
  pub const ALL: [VariableType; 84] = {
    use VariableType::*;
    [
      Bool,
      Int,
      Uint,
      Float,
      Double,
      Vec2,
      Vec3,
      Vec4,
      DVec2,
      DVec3,
      DVec4,
      BVec2,
      BVec3,
      BVec4,
      IVec2,
      IVec3,
      IVec4,
      UVec2,
      UVec3,
      UVec4,
      Mat2,
      Mat3,
      Mat4,
      Mat2x2,
      Mat2x3,
      Mat2x4,
      Mat3x2,
      Mat3x3,
      Mat3x4,
      Mat4x2,
      Mat4x3,
      Mat4x4,
      DMat2,
      DMat3,
      DMat4,
      DMat2x2,
      DMat2x3,
      DMat2x4,
      DMat3x2,
      DMat3x3,
      DMat3x4,
      DMat4x2,
      DMat4x3,
      DMat4x4,
      Sampler1D,
      Sampler2D,
      Sampler3D,
      SamplerCube,
      Sampler2DRect,
      Sampler2DMs,
      SamplerBuffer,
      Sampler1DArray,
      Sampler2DArray,
      Sampler2DMsArray,
      SamplerCubeArray,
      Sampler1DShadow,
      Sampler2DShadow,
      Sampler2DRectShadow,
      Sampler1DArrayShadow,
      Sampler2DArrayShadow,
      SamplerCubeShadow,
      SamplerCubeArrayShadow,
      ISampler1D,
      ISampler2D,
      ISampler3D,
      ISamplerCube,
      ISampler2DRect,
      ISampler2DMs,
      ISamplerBuffer,
      ISampler1DArray,
      ISampler2DArray,
      ISampler2DMsArray,
      ISamplerCubeArray,
      USampler1D,
      USampler2D,
      USampler3D,
      USamplerCube,
      USampler2DRect,
      USampler2DMs,
      USamplerBuffer,
      USampler1DArray,
      USampler2DArray,
      USampler2DMsArray,
      USamplerCubeArray,
    ]
  };

  pub fn is_sampler(self) -> bool {
    gen_type_token(self).contains("sampler")
  }
}

/// The value bound to a node parameter, decides how its placeholder is substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
  /// substituted by the target format dependent qualifier token
  Qualifier(StorageQualifier),
  /// substituted by the type spelling
  Type(VariableType),
  /// substituted as is
  Text(String),
}

impl From<StorageQualifier> for ParameterValue {
  fn from(v: StorageQualifier) -> Self {
    Self::Qualifier(v)
  }
}

impl From<VariableType> for ParameterValue {
  fn from(v: VariableType) -> Self {
    Self::Type(v)
  }
}

impl From<String> for ParameterValue {
  fn from(v: String) -> Self {
    Self::Text(v)
  }
}

impl From<&str> for ParameterValue {
  fn from(v: &str) -> Self {
    Self::Text(v.to_owned())
  }
}

macro_rules! text_parameter_from {
  ($($ty: ty),*) => {
    $(
      impl From<$ty> for ParameterValue {
        fn from(v: $ty) -> Self {
          Self::Text(v.to_string())
        }
      }
    )*
  };
}

text_parameter_from!(bool, i32, u32, i64, u64, usize, f32, f64);
