use std::ffi::c_void;
use std::marker::PhantomData;

use bytemuck::Pod;
use gl::types::{GLenum, GLintptr, GLsizeiptr, GLuint};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("write of {len} elements at offset {offset} overflows buffer of {capacity}")]
    OutOfRange {
        offset: usize,
        len: usize,
        capacity: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Uploaded once
    Static,
    /// Rewritten every frame
    Dynamic,
}

impl BufferUsage {
    fn gl_enum(self) -> GLenum {
        match self {
            BufferUsage::Static => gl::STATIC_DRAW,
            BufferUsage::Dynamic => gl::DYNAMIC_DRAW,
        }
    }
}

pub(crate) fn check_range(offset: usize, len: usize, capacity: usize) -> Result<(), BufferError> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(BufferError::OutOfRange {
            offset,
            len,
            capacity,
        }),
    }
}

/// Vertex buffer holding a fixed number of `T`
pub struct Vbo<T> {
    id: GLuint,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T: Pod> Vbo<T> {
    pub fn new(data: &[T], usage: BufferUsage) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let mut id = 0;

        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
                usage.gl_enum(),
            );
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        Self {
            id,
            len: data.len(),
            _marker: PhantomData,
        }
    }

    /// Overwrite `data.len()` elements starting at element `offset`
    pub fn update(&self, offset: usize, data: &[T]) -> Result<(), BufferError> {
        check_range(offset, data.len(), self.len)?;
        let bytes: &[u8] = bytemuck::cast_slice(data);

        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.id);
            gl::BufferSubData(
                gl::ARRAY_BUFFER,
                (offset * std::mem::size_of::<T>()) as GLintptr,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
            );
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, self.id) }
    }

    pub fn unbind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, 0) }
    }
}

impl<T> Drop for Vbo<T> {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) }
    }
}

/// Element (index) buffer. Must be created while its VAO is bound; the
/// binding is recorded in the VAO.
pub struct Ebo {
    id: GLuint,
    len: usize,
}

impl Ebo {
    pub fn new(indices: &[u32]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(indices);
        let mut id = 0;

        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }

        Self {
            id,
            len: indices.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl Drop for Ebo {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) }
    }
}
