use game_core::{Config, GameState};
use glam::{Vec2, Vec3};

use crate::gfx::{projection, BufferError, BufferUsage, Ebo, Shader, ShaderError, Vao, Vbo};
use crate::mesh::{self, Vertex};

const BALL_SEGMENTS: u32 = 32;
const FOREGROUND: Vec3 = Vec3::ONE;

const ATTR_POSITION: u32 = 0;
const ATTR_OFFSET: u32 = 1;
const ATTR_SIZE: u32 = 2;

/// One mesh plus its per-instance offset and size buffers
struct InstanceBatch {
    vao: Vao,
    _vertices: Vbo<Vertex>,
    indices: Ebo,
    offsets: Vbo<[f32; 2]>,
    _sizes: Vbo<[f32; 2]>,
}

impl InstanceBatch {
    fn new(mesh: (Vec<Vertex>, Vec<u32>), offsets: &[Vec2], sizes: &[Vec2]) -> Self {
        let (vertices, indices) = mesh;
        let offsets: Vec<[f32; 2]> = offsets.iter().map(|v| v.to_array()).collect();
        let sizes: Vec<[f32; 2]> = sizes.iter().map(|v| v.to_array()).collect();

        let vao = Vao::new();
        vao.bind();

        let vertices = Vbo::new(&vertices, BufferUsage::Static);
        let indices = Ebo::new(&indices);
        let offsets = Vbo::new(&offsets, BufferUsage::Dynamic);
        let sizes = Vbo::new(&sizes, BufferUsage::Static);

        let pair = std::mem::size_of::<[f32; 2]>();
        vao.link_attrib(&vertices, ATTR_POSITION, 2, std::mem::size_of::<Vertex>(), 0, 0);
        vao.link_attrib(&offsets, ATTR_OFFSET, 2, pair, 0, 1);
        vao.link_attrib(&sizes, ATTR_SIZE, 2, pair, 0, 1);

        vao.unbind();

        Self {
            vao,
            _vertices: vertices,
            indices,
            offsets,
            _sizes: sizes,
        }
    }

    fn update_offsets(&self, offsets: &[Vec2]) -> Result<(), BufferError> {
        let data: Vec<[f32; 2]> = offsets.iter().map(|v| v.to_array()).collect();
        self.offsets.update(0, &data)
    }

    fn draw(&self) {
        self.vao.draw_instanced(self.indices.len(), self.offsets.len());
    }
}

/// Draws both paddles and the ball. Needs a current GL context.
pub struct Renderer {
    shader: Shader,
    paddles: InstanceBatch,
    ball: InstanceBatch,
}

impl Renderer {
    pub fn new(game: &GameState) -> Result<Self, ShaderError> {
        let config: &Config = &game.config;
        let shader = Shader::new(
            include_str!("shaders/main.vs"),
            include_str!("shaders/main.fs"),
        )?;

        shader.activate();
        shader.set_mat4(
            "projection",
            &projection(config.court_width, config.court_height),
        )?;
        shader.set_vec3("color", FOREGROUND)?;

        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
        let paddles = InstanceBatch::new(
            mesh::create_rectangle(),
            &game.paddle_offsets(),
            &[paddle_size, paddle_size],
        );

        let ball = InstanceBatch::new(
            mesh::create_circle(BALL_SEGMENTS),
            &[game.ball_offset()],
            &[Vec2::splat(config.ball_diameter)],
        );

        log::info!(
            "renderer ready, court {}x{}",
            config.court_width,
            config.court_height
        );

        Ok(Self {
            shader,
            paddles,
            ball,
        })
    }

    /// The projection is fixed to the court so only the viewport follows the window
    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn draw(&self, game: &GameState) -> Result<(), BufferError> {
        self.paddles.update_offsets(&game.paddle_offsets())?;
        self.ball.update_offsets(&[game.ball_offset()])?;

        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        self.shader.activate();
        self.paddles.draw();
        self.ball.draw();

        Ok(())
    }
}
