use std::ffi::{c_char, CString, NulError};

use gl::types::{GLenum, GLint, GLuint};
use glam::{Mat4, Vec3};
use thiserror::Error;

const INFO_LOG_LEN: usize = 1024;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader compilation failed: {0}")]
    Compilation(String),
    #[error("program linking failed: {0}")]
    Linking(String),
    #[error("shader source contains a nul byte")]
    InvalidSource(#[from] NulError),
    #[error("uniform `{0}` not found in program")]
    MissingUniform(String),
}

/// Linked vertex + fragment program
pub struct Shader {
    id: GLuint,
}

impl Shader {
    pub fn new(vert_src: &str, frag_src: &str) -> Result<Self, ShaderError> {
        let vert_src = CString::new(vert_src)?;
        let frag_src = CString::new(frag_src)?;

        let vert = compile(gl::VERTEX_SHADER, &vert_src)?;
        let frag = match compile(gl::FRAGMENT_SHADER, &frag_src) {
            Ok(frag) => frag,
            Err(e) => {
                unsafe { gl::DeleteShader(vert) }
                return Err(e);
            }
        };

        let mut success: GLint = 0;
        let mut buf = [0_u8; INFO_LOG_LEN];

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != 1 {
                gl::GetProgramInfoLog(
                    program,
                    INFO_LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);
                return Err(ShaderError::Linking(log_to_string(&buf)));
            }

            Ok(Self { id: program })
        }
    }

    pub fn activate(&self) {
        unsafe { gl::UseProgram(self.id) }
    }

    pub fn uniform_location(&self, name: &str) -> Result<GLint, ShaderError> {
        let c_name = CString::new(name)?;
        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };
        if location < 0 {
            return Err(ShaderError::MissingUniform(name.to_string()));
        }
        Ok(location)
    }

    /// Program must be active
    pub fn set_mat4(&self, name: &str, value: &Mat4) -> Result<(), ShaderError> {
        let location = self.uniform_location(name)?;
        let cols = value.to_cols_array();
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, cols.as_ptr()) }
        Ok(())
    }

    /// Program must be active
    pub fn set_vec3(&self, name: &str, value: Vec3) -> Result<(), ShaderError> {
        let location = self.uniform_location(name)?;
        unsafe { gl::Uniform3f(location, value.x, value.y, value.z) }
        Ok(())
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

fn compile(kind: GLenum, src: &CString) -> Result<GLuint, ShaderError> {
    let mut success: GLint = 0;
    let mut buf = [0_u8; INFO_LOG_LEN];

    unsafe {
        let shader = gl::CreateShader(kind);
        gl::ShaderSource(shader, 1, &src.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);

        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        if success != 1 {
            gl::GetShaderInfoLog(
                shader,
                INFO_LOG_LEN as i32,
                std::ptr::null_mut(),
                buf.as_mut_ptr() as *mut c_char,
            );
            gl::DeleteShader(shader);
            return Err(ShaderError::Compilation(log_to_string(&buf)));
        }

        Ok(shader)
    }
}

/// Driver info logs are nul terminated inside a fixed buffer
fn log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|b| *b == 0).next().unwrap_or(buf);
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Maps court units onto clip space, origin bottom-left
pub fn projection(court_width: f32, court_height: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(0.0, court_width, 0.0, court_height, 0.0, 1.0)
}
