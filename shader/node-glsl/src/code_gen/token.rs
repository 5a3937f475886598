use crate::*;

/// The qualifier keyword of a global declaration for the target format.
///
/// Legacy glsl (major version 2 and below) has `attribute` and `varying` instead of
/// `in`, and no user declared fragment output. Builtins map to a line comment so the
/// declaration is kept in the output but never compiled.
pub fn gen_qualifier_token(qualifier: StorageQualifier, format: &TargetFormat) -> &'static str {
  let legacy = format.version.major <= 2;
  match qualifier {
    StorageQualifier::Const => "const",
    StorageQualifier::Uniform => "uniform",
    StorageQualifier::BuiltIn => "//",
    StorageQualifier::Input if legacy => {
      if format.stage == ShaderStage::Vertex {
        "attribute"
      } else {
        "varying"
      }
    }
    StorageQualifier::Input => "in",
    StorageQualifier::Output if legacy => "",
    StorageQualifier::Output => "out",
  }
}

pub fn gen_type_token(ty: VariableType) -> &'static str {
  use VariableType::*;
  match ty {
    Bool => "bool",
    Int => "int",
    Uint => "uint",
    Float => "float",
    Double => "double",
    Vec2 => "vec2",
    Vec3 => "vec3",
    Vec4 => "vec4",
    DVec2 => "dvec2",
    DVec3 => "dvec3",
    DVec4 => "dvec4",
    BVec2 => "bvec2",
    BVec3 => "bvec3",
    BVec4 => "bvec4",
    IVec2 => "ivec2",
    IVec3 => "ivec3",
    IVec4 => "ivec4",
    UVec2 => "uvec2",
    UVec3 => "uvec3",
    UVec4 => "uvec4",
    Mat2 => "mat2",
    Mat3 => "mat3",
    Mat4 => "mat4",
    Mat2x2 => "mat2x2",
    Mat2x3 => "mat2x3",
    Mat2x4 => "mat2x4",
    Mat3x2 => "mat3x2",
    Mat3x3 => "mat3x3",
    Mat3x4 => "mat3x4",
    Mat4x2 => "mat4x2",
    Mat4x3 => "mat4x3",
    Mat4x4 => "mat4x4",
    DMat2 => "dmat2",
    DMat3 => "dmat3",
    DMat4 => "dmat4",
    DMat2x2 => "dmat2x2",
    DMat2x3 => "dmat2x3",
    DMat2x4 => "dmat2x4",
    DMat3x2 => "dmat3x2",
    DMat3x3 => "dmat3x3",
    DMat3x4 => "dmat3x4",
    DMat4x2 => "dmat4x2",
    DMat4x3 => "dmat4x3",
    DMat4x4 => "dmat4x4",
    Sampler1D => "sampler1D",
    Sampler2D => "sampler2D",
    Sampler3D => "sampler3D",
    SamplerCube => "samplerCube",
    Sampler2DRect => "sampler2DRect",
    Sampler2DMs => "sampler2DMS",
    SamplerBuffer => "samplerBuffer",
    Sampler1DArray => "sampler1DArray",
    Sampler2DArray => "sampler2DArray",
    Sampler2DMsArray => "sampler2DMSArray",
    SamplerCubeArray => "samplerCubeArray",
    Sampler1DShadow => "sampler1DShadow",
    Sampler2DShadow => "sampler2DShadow",
    Sampler2DRectShadow => "sampler2DRectShadow",
    Sampler1DArrayShadow => "sampler1DArrayShadow",
    Sampler2DArrayShadow => "sampler2DArrayShadow",
    SamplerCubeShadow => "samplerCubeShadow",
    SamplerCubeArrayShadow => "samplerCubeArrayShadow",
    ISampler1D => "isampler1D",
    ISampler2D => "isampler2D",
    ISampler3D => "isampler3D",
    ISamplerCube => "isamplerCube",
    ISampler2DRect => "isampler2DRect",
    ISampler2DMs => "isampler2DMS",
    ISamplerBuffer => "isamplerBuffer",
    ISampler1DArray => "isampler1DArray",
    ISampler2DArray => "isampler2DArray",
    ISampler2DMsArray => "isampler2DMSArray",
    ISamplerCubeArray => "isamplerCubeArray",
    USampler1D => "usampler1D",
    USampler2D => "usampler2D",
    USampler3D => "usampler3D",
    USamplerCube => "usamplerCube",
    USampler2DRect => "usampler2DRect",
    USampler2DMs => "usampler2DMS",
    USamplerBuffer => "usamplerBuffer",
    USampler1DArray => "usampler1DArray",
    USampler2DArray => "usampler2DArray",
    USampler2DMsArray => "usampler2DMSArray",
    USamplerCubeArray => "usamplerCubeArray",
  }
}
