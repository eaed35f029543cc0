use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::PerspectiveCamera;
use crate::core::{FrameRenderer, ViewportSize, ViewportSurface};
use crate::error::{Result, SceneError};
use crate::overlay::{Overlay, OverlayContent};
use crate::scene::Scene;
use crate::types::{CameraUniform, EnvironmentUniform, SkyUniform, WaterUniform, WaterVertex};
use crate::xr::HeadsetSession;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// One camera buffer per eye so both views survive until submit
const MAX_VIEWS: usize = 2;

const SKY_SHADER: &str = concat!(include_str!("shaders/common.wgsl"), include_str!("shaders/sky.wgsl"));
const WATER_SHADER: &str = concat!(include_str!("shaders/common.wgsl"), include_str!("shaders/water.wgsl"));

struct ViewBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// wgpu renderer for the water/sky scene with the overlay on top
pub struct SceneRenderer {
    window: Arc<Window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    views: Vec<ViewBinding>,
    environment_buffer: wgpu::Buffer,
    water_buffer: wgpu::Buffer,
    sky_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    sky_pipeline: wgpu::RenderPipeline,
    water_pipeline: wgpu::RenderPipeline,
    water_vertex_buffer: wgpu::Buffer,
    water_index_buffer: wgpu::Buffer,
    water_index_count: u32,
    overlay: Option<Overlay>,
    headset: HeadsetSession,
    fps: f32,
}

impl SceneRenderer {
    pub async fn new(
        window: Arc<Window>,
        scene: &Scene,
        headset: HeadsetSession,
        show_ui: bool,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let surface_config = Self::create_surface_config(&surface, &adapter, size.width, size.height)?;
        surface.configure(&device, &surface_config);
        log::info!(
            "Surface configured: {}x{} {:?}",
            surface_config.width,
            surface_config.height,
            surface_config.format
        );

        let depth_view = Self::create_depth_texture(&device, surface_config.width, surface_config.height);

        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera_bind_group_layout"),
            entries: &[uniform_entry(0)],
        });

        let scene_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bind_group_layout"),
            entries: &[uniform_entry(0), uniform_entry(1), uniform_entry(2)],
        });

        let views = (0..MAX_VIEWS)
            .map(|i| {
                let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(if i == 0 { "Camera Buffer (left)" } else { "Camera Buffer (right)" }),
                    size: std::mem::size_of::<CameraUniform>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("camera_bind_group"),
                    layout: &camera_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });
                ViewBinding { buffer, bind_group }
            })
            .collect();

        let environment_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Environment Buffer"),
            contents: bytemuck::bytes_of(&scene.environment_uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let water_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Water Buffer"),
            contents: bytemuck::bytes_of(&scene.water.to_uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let sky_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sky Buffer"),
            contents: bytemuck::bytes_of(&scene.sky.to_uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bind_group"),
            layout: &scene_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: environment_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: water_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: sky_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&camera_layout, &scene_layout],
            push_constant_ranges: &[],
        });

        let sky_pipeline = Self::create_sky_pipeline(&device, &pipeline_layout, surface_config.format);
        let water_pipeline = Self::create_water_pipeline(&device, &pipeline_layout, surface_config.format);

        let (vertices, indices) = scene.water.plane_mesh();
        let water_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Water Vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let water_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Water Indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let overlay = show_ui.then(|| Overlay::new(&window, &device, surface_config.format));

        log::info!("Scene renderer initialized: water mesh {} triangles", indices.len() / 3);

        Ok(Self {
            window,
            device,
            queue,
            surface,
            surface_config,
            depth_view,
            views,
            environment_buffer,
            water_buffer,
            sky_buffer,
            scene_bind_group,
            sky_pipeline,
            water_pipeline,
            water_vertex_buffer,
            water_index_buffer,
            water_index_count: indices.len() as u32,
            overlay,
            headset,
            fps: 0.0,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        Ok(instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await?)
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        Ok(adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Scene Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await?)
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<wgpu::SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(SceneError::NoSurfaceFormat)?;

        Ok(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_sky_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sky Shader"),
            source: wgpu::ShaderSource::Wgsl(SKY_SHADER.into()),
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sky Pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            // Drawn first and behind everything
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    fn create_water_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Water Shader"),
            source: wgpu::ShaderSource::Wgsl(WATER_SHADER.into()),
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Water Pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<WaterVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    /// Returns true if the overlay consumed the event
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        match &mut self.overlay {
            Some(overlay) => overlay.handle_event(&self.window, event),
            None => false,
        }
    }

    /// Reapply the current surface configuration after the surface was lost or outdated
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn set_fps(&mut self, fps: f32) {
        self.fps = fps;
    }

    pub fn headset(&self) -> &HeadsetSession {
        &self.headset
    }

    pub fn headset_mut(&mut self) -> &mut HeadsetSession {
        &mut self.headset
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    fn write_scene_uniforms(&self, scene: &Scene) {
        let environment: EnvironmentUniform = scene.environment_uniform();
        let water: WaterUniform = scene.water.to_uniform();
        let sky: SkyUniform = scene.sky.to_uniform();
        self.queue
            .write_buffer(&self.environment_buffer, 0, bytemuck::bytes_of(&environment));
        self.queue
            .write_buffer(&self.water_buffer, 0, bytemuck::bytes_of(&water));
        self.queue
            .write_buffer(&self.sky_buffer, 0, bytemuck::bytes_of(&sky));
    }

    fn draw(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<()> {
        self.write_scene_uniforms(scene);

        let size = self.surface_size();
        let eye_views = self.headset.views(size);
        for (eye, binding) in eye_views.iter().zip(&self.views) {
            let uniform = camera.to_uniform(eye.eye_offset, eye.rect.aspect_ratio(), scene.water.time());
            self.queue
                .write_buffer(&binding.buffer, 0, bytemuck::bytes_of(&uniform));
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        let [r, g, b] = scene.background();
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(1, &self.scene_bind_group, &[]);

            for (eye, binding) in eye_views.iter().zip(&self.views) {
                let rect = eye.rect;
                render_pass.set_viewport(
                    rect.x as f32,
                    rect.y as f32,
                    rect.width as f32,
                    rect.height as f32,
                    0.0,
                    1.0,
                );
                render_pass.set_scissor_rect(rect.x, rect.y, rect.width, rect.height);
                render_pass.set_bind_group(0, &binding.bind_group, &[]);

                render_pass.set_pipeline(&self.sky_pipeline);
                render_pass.draw(0..3, 0..1);

                render_pass.set_pipeline(&self.water_pipeline);
                render_pass.set_vertex_buffer(0, self.water_vertex_buffer.slice(..));
                render_pass.set_index_buffer(self.water_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..self.water_index_count, 0, 0..1);
            }
        }

        if let Some(overlay) = &mut self.overlay {
            let response = overlay.draw(
                &self.window,
                &self.device,
                &self.queue,
                &mut encoder,
                &view,
                [size.width, size.height],
                OverlayContent {
                    fps: self.fps,
                    headset_label: self.headset.button_label(),
                    headset_enabled: self.headset.support().is_available(),
                },
            );
            if response.headset_toggled {
                self.headset.toggle();
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl FrameRenderer for SceneRenderer {
    type Error = SceneError;

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<()> {
        self.draw(scene, camera)
    }
}

impl ViewportSurface for SceneRenderer {
    fn resize_surface(&mut self, size: ViewportSize) {
        self.surface_config.width = size.width;
        self.surface_config.height = size.height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth_view = Self::create_depth_texture(&self.device, size.width, size.height);
        log::debug!("Surface resized to {}x{}", size.width, size.height);
    }

    fn surface_size(&self) -> ViewportSize {
        ViewportSize::new(self.surface_config.width, self.surface_config.height)
    }
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}
