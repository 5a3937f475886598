//! Lower a graph of shader nodes into GLSL source text.
//!
//! Every node carries per target format rules: header snippets emitted once per node
//! and one templated body statement. The generator picks the `#version` directive for
//! the target, emits the header snippets of every visible node, renders the ordered
//! statements into `main()`, and finally replaces locals that only alias a global
//! input with the global itself.
//!
//! ```
//! use rendiation_shader_node_glsl::*;
//!
//! let mut graph = ShaderGraph::default();
//! let format = TargetFormat::new(GraphicsApi::GLCore, ShaderVersion::new(3, 3), ShaderStage::Fragment);
//!
//! let mut color = Node::new(NodeKind::Output);
//! color.add_port(Port::input("value"));
//! color.set_parameter("name", "fragColor");
//! color.add_rule(
//!   format.clone(),
//!   Rule::new(["out vec4 $name;"], "$name = $value;"),
//! );
//!
//! let mut constant = Node::new(NodeKind::Function);
//! constant.add_port(Port::output("result"));
//! constant.add_rule(format.clone(), Rule::body("vec4 $result = vec4(1.0);"));
//!
//! let color = graph.add_node(color);
//! let constant = graph.add_node(constant);
//! graph.add_edge(Edge::new(constant, "result", color, "value")).unwrap();
//!
//! let code = ShaderGenerator::new(format, &graph).create_shader_code(&[]);
//! assert!(code.starts_with("#version 330 core"));
//! assert!(code.contains("    fragColor = v0;"));
//! ```

mod code_gen;
mod format;
mod graph;
mod language;
mod node;

pub use code_gen::*;
pub use format::*;
pub use graph::*;
pub use language::*;
pub use node::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[cfg(test)]
mod test;
