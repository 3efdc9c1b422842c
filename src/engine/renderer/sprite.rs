// Sprite batching and rendering

use super::texture::Texture;
use super::{CameraUniform, CanvasCamera, Vertex};
use crate::core::math::Rect;
use crate::engine::assets::{AssetId, AssetManager, TextureHandle};
use anyhow::Result;
use glam::{Vec2, Vec4};
use log::warn;
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use wgpu::util::DeviceExt;

/// Maximum number of quads drawn per frame
pub const MAX_SPRITES: usize = 256;

const INDICES_PER_QUAD: usize = 6;
const VERTICES_PER_QUAD: usize = 4;

/// One quad to draw this frame, in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Destination rectangle on the canvas
    pub dest: Rect,
    /// Top-left texture coordinate
    pub uv_min: Vec2,
    /// Bottom-right texture coordinate
    pub uv_max: Vec2,
    /// Color tint (RGBA, 1.0 = full color)
    pub color: Vec4,
    /// Texture handle (None = solid color)
    pub texture: Option<TextureHandle>,
}

impl Sprite {
    /// A textured quad showing the `uv_min..uv_max` region of `texture`
    pub fn textured(dest: Rect, texture: TextureHandle, uv_min: Vec2, uv_max: Vec2) -> Self {
        Self {
            dest,
            uv_min,
            uv_max,
            color: Vec4::ONE,
            texture: Some(texture),
        }
    }

    /// A solid color quad
    pub fn solid(dest: Rect, color: Vec4) -> Self {
        Self {
            dest,
            uv_min: Vec2::ZERO,
            uv_max: Vec2::ONE,
            color,
            texture: None,
        }
    }

    /// Corner vertices in the order top-left, top-right, bottom-right, bottom-left
    pub fn vertices(&self) -> [Vertex; VERTICES_PER_QUAD] {
        let min = self.dest.min;
        let max = self.dest.max();
        [
            Vertex::new(min, self.uv_min, self.color),
            Vertex::new(
                Vec2::new(max.x, min.y),
                Vec2::new(self.uv_max.x, self.uv_min.y),
                self.color,
            ),
            Vertex::new(max, self.uv_max, self.color),
            Vertex::new(
                Vec2::new(min.x, max.y),
                Vec2::new(self.uv_min.x, self.uv_max.y),
                self.color,
            ),
        ]
    }
}

/// Quads queued for the next frame, in draw order
#[derive(Debug, Default, Clone)]
pub struct SpriteBatch {
    sprites: Vec<Sprite>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self {
            sprites: Vec::with_capacity(16),
        }
    }

    /// Add a sprite to render
    pub fn push(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Clear all sprites
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Consecutive quads sharing a texture
#[derive(Debug, Clone)]
struct DrawCall {
    /// None = solid color
    texture: Option<AssetId>,
    indices: Range<u32>,
}

/// Sprite renderer: one dynamic vertex buffer, one draw per texture run
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    _camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group_layout: wgpu::BindGroupLayout,
    white_bind_group: wgpu::BindGroup,
    texture_bind_groups: HashMap<AssetId, wgpu::BindGroup>,
    reported_missing: HashSet<AssetId>,
    draws: Vec<DrawCall>,
}

impl SpriteRenderer {
    /// Create a new sprite renderer
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        camera: &CanvasCamera,
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

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &texture_bind_group_layout],
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
                // The canvas projection flips y, so winding is not meaningful
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

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sprite Vertex Buffer"),
            size: (MAX_SPRITES * VERTICES_PER_QUAD * std::mem::size_of::<Vertex>())
                as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let indices = quad_indices(MAX_SPRITES);
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::new(camera)]),
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

        let white = Texture::from_color(device, queue, [255, 255, 255, 255], Some("White"));
        let white_bind_group =
            create_texture_bind_group(device, &texture_bind_group_layout, &white, "White");

        Ok(Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            _camera_buffer: camera_buffer,
            camera_bind_group,
            texture_bind_group_layout,
            white_bind_group,
            texture_bind_groups: HashMap::new(),
            reported_missing: HashSet::new(),
            draws: Vec::new(),
        })
    }

    /// Upload the batch and group it into draw calls.
    ///
    /// Quads whose texture never loaded are skipped; each such texture is
    /// reported once.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        batch: &SpriteBatch,
        assets: &AssetManager,
    ) {
        self.draws.clear();

        if batch.len() > MAX_SPRITES {
            warn!(
                "Sprite batch holds {} quads, drawing the first {}",
                batch.len(),
                MAX_SPRITES
            );
        }

        let mut vertices: Vec<Vertex> = Vec::with_capacity(batch.len() * VERTICES_PER_QUAD);

        for sprite in batch.sprites().iter().take(MAX_SPRITES) {
            let key = match sprite.texture {
                Some(handle) => {
                    let Some(texture) = assets.get_texture(handle) else {
                        if self.reported_missing.insert(handle.id()) {
                            warn!("Skipping sprite with unloaded texture {:?}", handle.id());
                        }
                        continue;
                    };
                    let layout = &self.texture_bind_group_layout;
                    self.texture_bind_groups
                        .entry(handle.id())
                        .or_insert_with(|| {
                            create_texture_bind_group(device, layout, texture, "Sprite Texture")
                        });
                    Some(handle.id())
                }
                None => None,
            };

            let quad = (vertices.len() / VERTICES_PER_QUAD) as u32;
            let start = quad * INDICES_PER_QUAD as u32;
            let end = start + INDICES_PER_QUAD as u32;
            vertices.extend_from_slice(&sprite.vertices());

            match self.draws.last_mut() {
                Some(last) if last.texture == key => last.indices.end = end,
                _ => self.draws.push(DrawCall {
                    texture: key,
                    indices: start..end,
                }),
            }
        }

        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }
    }

    /// Draw everything uploaded by the last `prepare`
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.draws.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        for draw in &self.draws {
            let bind_group = match draw.texture {
                Some(id) => match self.texture_bind_groups.get(&id) {
                    Some(bind_group) => bind_group,
                    None => continue,
                },
                None => &self.white_bind_group,
            };
            render_pass.set_bind_group(1, bind_group, &[]);
            render_pass.draw_indexed(draw.indices.clone(), 0, 0..1);
        }
    }

    /// Number of draw calls recorded by the last `prepare`
    pub fn draw_call_count(&self) -> usize {
        self.draws.len()
    }
}

fn create_texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture: &Texture,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&texture.sampler),
            },
        ],
    })
}

/// Index list for `count` quads laid out as 4 vertices each
fn quad_indices(count: usize) -> Vec<u16> {
    let mut indices = Vec::with_capacity(count * INDICES_PER_QUAD);
    for quad in 0..count {
        let base = (quad * VERTICES_PER_QUAD) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}
