//! Thin owning wrappers over raw OpenGL objects. Every wrapper deletes its
//! object on drop, so they must be dropped while the context is current.

pub mod buffer;
pub mod shader;
pub mod vertex_array;

pub use buffer::{BufferError, BufferUsage, Ebo, Vbo};
pub use shader::{projection, Shader, ShaderError};
pub use vertex_array::Vao;
