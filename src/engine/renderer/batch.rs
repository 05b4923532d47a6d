// Sprite batching: turns a draw list into textured quads

use super::draw_list::{stroke_edges, Color, DrawCommand, DrawList};
use super::{Camera, CameraUniform, TextureHandle, TextureManager, Vertex};
use crate::core::Rect;
use anyhow::Result;
use glam::{Vec2, Vec4};
use std::ops::Range;
use wgpu::util::DeviceExt;

/// A run of consecutive indices that share one texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub texture: TextureHandle,
    pub indices: Range<u32>,
}

/// CPU-side geometry for one frame
#[derive(Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub batches: Vec<Batch>,
}

impl Geometry {
    fn push_quad(
        &mut self,
        texture: TextureHandle,
        dst: Rect,
        uv_min: Vec2,
        uv_max: Vec2,
        color: Color,
    ) {
        let base = self.vertices.len() as u32;
        let tint = Vec4::from_array(color.to_array());

        self.vertices.extend_from_slice(&[
            Vertex::new(Vec2::new(dst.left(), dst.top()), uv_min, tint),
            Vertex::new(Vec2::new(dst.right(), dst.top()), Vec2::new(uv_max.x, uv_min.y), tint),
            Vertex::new(Vec2::new(dst.right(), dst.bottom()), uv_max, tint),
            Vertex::new(Vec2::new(dst.left(), dst.bottom()), Vec2::new(uv_min.x, uv_max.y), tint),
        ]);

        let start = self.indices.len() as u32;
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        let end = self.indices.len() as u32;

        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture && batch.indices.end == start => {
                batch.indices.end = end;
            }
            _ => self.batches.push(Batch {
                texture,
                indices: start..end,
            }),
        }
    }
}

/// Build quads for every command; `texture_size` resolves a handle to its pixel size
///
/// Sprites whose texture cannot be resolved are skipped.
pub fn build_geometry<F>(list: &DrawList, white: TextureHandle, texture_size: F) -> Geometry
where
    F: Fn(TextureHandle) -> Option<(u32, u32)>,
{
    let mut geometry = Geometry::default();

    for command in list.commands() {
        match command {
            DrawCommand::Sprite {
                texture,
                src,
                dst,
                flip_horizontal,
            } => {
                let Some((width, height)) = texture_size(*texture) else {
                    log::debug!("Skipping sprite with unknown texture {:?}", texture);
                    continue;
                };
                if width == 0 || height == 0 {
                    continue;
                }

                let size = Vec2::new(width as f32, height as f32);
                let mut uv_min = src.position() / size;
                let mut uv_max = (src.position() + src.size()) / size;
                if *flip_horizontal {
                    std::mem::swap(&mut uv_min.x, &mut uv_max.x);
                }

                geometry.push_quad(*texture, *dst, uv_min, uv_max, Color::WHITE);
            }
            DrawCommand::Fill { rect, color } => {
                geometry.push_quad(white, *rect, Vec2::ZERO, Vec2::ONE, *color);
            }
            DrawCommand::Stroke {
                rect,
                color,
                thickness,
            } => {
                for edge in stroke_edges(*rect, *thickness) {
                    geometry.push_quad(white, edge, Vec2::ZERO, Vec2::ONE, *color);
                }
            }
        }
    }

    geometry
}

/// Renders draw lists with a single textured-quad pipeline
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
}

impl SpriteRenderer {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        texture_layout: &wgpu::BindGroupLayout,
    ) -> Result<Self> {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, texture_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The y-down projection flips winding, so nothing is culled
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform {
                view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            render_pipeline,
            camera_buffer,
            camera_bind_group,
        })
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::new(camera)]),
        );
    }

    /// Upload a frame's geometry into fresh vertex/index buffers
    pub fn upload(&self, device: &wgpu::Device, geometry: &Geometry) -> Option<FrameBuffers> {
        if geometry.indices.is_empty() {
            return None;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Vertex Buffer"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Some(FrameBuffers {
            vertex_buffer,
            index_buffer,
        })
    }

    /// Record draw calls for the uploaded geometry
    pub fn render<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        buffers: &'a FrameBuffers,
        batches: &[Batch],
        textures: &'a TextureManager,
    ) {
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
        render_pass.set_index_buffer(buffers.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        for batch in batches {
            let Some(texture) = textures.get(batch.texture) else {
                continue;
            };
            render_pass.set_bind_group(1, &texture.bind_group, &[]);
            render_pass.draw_indexed(batch.indices.clone(), 0, 0..1);
        }
    }
}

/// GPU buffers holding one frame's quads
pub struct FrameBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}
