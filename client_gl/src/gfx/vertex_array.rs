use std::ffi::c_void;

use gl::types::{GLsizei, GLuint};

use super::buffer::Vbo;

pub struct Vao {
    id: GLuint,
}

impl Vao {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) }
        Self { id }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) }
    }

    pub fn unbind(&self) {
        unsafe { gl::BindVertexArray(0) }
    }

    /// Point float attribute `layout` at `vbo`. A non-zero `divisor` makes it
    /// advance per instance instead of per vertex. The VAO must be bound.
    pub fn link_attrib<T>(
        &self,
        vbo: &Vbo<T>,
        layout: GLuint,
        components: i32,
        stride: usize,
        offset: usize,
        divisor: GLuint,
    ) where
        T: bytemuck::Pod,
    {
        vbo.bind();
        unsafe {
            gl::VertexAttribPointer(
                layout,
                components,
                gl::FLOAT,
                gl::FALSE,
                stride as GLsizei,
                offset as *const c_void,
            );
            gl::EnableVertexAttribArray(layout);
            if divisor > 0 {
                gl::VertexAttribDivisor(layout, divisor);
            }
        }
        vbo.unbind();
    }

    pub fn draw_instanced(&self, index_count: usize, instances: usize) {
        self.bind();
        unsafe {
            gl::DrawElementsInstanced(
                gl::TRIANGLES,
                index_count as GLsizei,
                gl::UNSIGNED_INT,
                std::ptr::null(),
                instances as GLsizei,
            );
        }
        self.unbind();
    }
}

impl Default for Vao {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Vao {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) }
    }
}
