// Rendering system using wgpu

mod camera;
mod sprite;
pub mod texture;
mod vertex;

pub use camera::{CameraUniform, CanvasCamera};
pub use sprite::{Sprite, SpriteBatch, SpriteRenderer};
pub use vertex::Vertex;

use crate::engine::assets::AssetManager;
use anyhow::Result;
use log::info;
use std::sync::Arc;
use winit::window::Window;

/// Main renderer responsible for initializing wgpu and presenting the canvas
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    sprite_renderer: SpriteRenderer,
    camera: CanvasCamera,
}

impl Renderer {
    /// Create a new renderer for the given window and logical canvas size
    pub async fn new(window: Arc<Window>, canvas_width: f32, canvas_height: f32) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no supported formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            // Vsync: one present per display refresh
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let camera = CanvasCamera::new(canvas_width, canvas_height);
        let sprite_renderer = SpriteRenderer::new(&device, &queue, surface_format, &camera)?;

        info!(
            "Renderer initialized with {}x{} surface, {}x{} canvas",
            size.width, size.height, canvas_width, canvas_height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            sprite_renderer,
            camera,
        })
    }

    /// Resize the surface; the canvas keeps its logical size
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            info!("Renderer resized to {}x{}", new_size.width, new_size.height);
        }
    }

    /// Reconfigure the surface at its current size (after it was lost)
    pub fn reconfigure(&mut self) {
        self.resize(self.size);
    }

    /// Clear the canvas to black and draw the batch
    pub fn render(
        &mut self,
        batch: &SpriteBatch,
        assets: &AssetManager,
    ) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.sprite_renderer
            .prepare(&self.device, &self.queue, batch, assets);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.sprite_renderer.render(&mut render_pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get a reference to the device
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Get a reference to the queue
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Get a reference to the canvas camera
    pub fn camera(&self) -> &CanvasCamera {
        &self.camera
    }

    /// Draw calls issued for the last frame
    pub fn draw_call_count(&self) -> usize {
        self.sprite_renderer.draw_call_count()
    }
}
