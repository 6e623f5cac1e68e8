use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use glam::{Mat4, Vec3, Vec4};
use globe_core::{
    app_by_slug, billboard_transform, hex_to_rgb, FrameSnapshot, GlobeScene, OrbitCamera,
    APP_LIST, GLOBE_RADIUS, ICON_RADIUS, VISIBLE_OPACITY,
};

// Globe body accent, same palette as the icon catalog.
const GLOBE_COLOR_HEX: &str = "#0f3460";
// Pixels of cursor travel before a press counts as an orbit drag.
const DRAG_THRESHOLD_PX: f64 = 4.0;
const ORBIT_SENSITIVITY: f32 = 0.005;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct IconInstance {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

const MAX_INSTANCES: usize = 64;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe shader"),
            source: wgpu::ShaderSource::Wgsl(globe_core::GLOBE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertices for two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<IconInstance>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-icon instance (model matrix columns + color)
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<IconInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 32,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 48,
                        shader_location: 4,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 64,
                        shader_location: 5,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            width: size.width,
            height: size.height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    fn render(
        &mut self,
        view_proj: Mat4,
        instances: &[IconInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
            }),
        );
        let count = instances.len().min(MAX_INSTANCES);
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances[..count]));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.01,
                            g: 0.01,
                            b: 0.03,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..count as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Flatten a frame snapshot into draw order: back-facing icons first, the
/// globe disc on top of them, front-facing icons last. There is no depth
/// buffer, so painter's order is what hides the far side.
fn build_instances(snapshot: &FrameSnapshot, eye: Vec3) -> Vec<IconInstance> {
    let globe_rgb = hex_to_rgb(GLOBE_COLOR_HEX).unwrap_or([0.1, 0.2, 0.4]);
    let globe = IconInstance {
        model: billboard_transform(Vec3::ZERO, eye, GLOBE_RADIUS * 2.0).to_cols_array_2d(),
        color: Vec4::from((Vec3::from(globe_rgb), VISIBLE_OPACITY)).to_array(),
    };
    let as_instance = |m: &globe_core::MarkerFrame| IconInstance {
        model: m.model.to_cols_array_2d(),
        color: m.color.to_array(),
    };
    let mut instances: Vec<IconInstance> = Vec::with_capacity(snapshot.len() + 1);
    instances.extend(snapshot.iter().filter(|m| !m.front_facing).map(as_instance));
    instances.push(globe);
    instances.extend(snapshot.iter().filter(|m| m.front_facing).map(as_instance));
    instances
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut scene =
        GlobeScene::new(APP_LIST, GLOBE_RADIUS, ICON_RADIUS).expect("catalog layout");
    scene.set_pick_handler(Box::new(|slug| {
        let name = app_by_slug(slug).map(|a| a.name).unwrap_or(slug);
        log::info!("Opening {name}…");
    }));

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Globe Launcher")
        .build(&event_loop)
        .expect("window");

    let mut gpu = pollster::block_on(GpuState::new(&window)).expect("gpu");

    let mut orbit = OrbitCamera::default();
    let mut last_frame = Instant::now();
    let mut cursor: (f64, f64) = (0.0, 0.0);
    let mut press_origin: Option<(f64, f64)> = None;
    let mut dragging = false;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => gpu.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                let (px, py) = (position.x, position.y);
                let (ox, oy) = cursor;
                cursor = (px, py);
                if let Some((sx, sy)) = press_origin {
                    if !dragging
                        && ((px - sx).abs() > DRAG_THRESHOLD_PX
                            || (py - sy).abs() > DRAG_THRESHOLD_PX)
                    {
                        dragging = true;
                    }
                    if dragging {
                        orbit.orbit(
                            -((px - ox) as f32) * ORBIT_SENSITIVITY,
                            -((py - oy) as f32) * ORBIT_SENSITIVITY,
                        );
                    }
                } else {
                    // Hover highlight follows the cursor when not dragging.
                    let camera = orbit.camera(gpu.aspect());
                    let (origin, dir) = globe_core::screen_to_world_ray(
                        &camera,
                        gpu.width as f32,
                        gpu.height as f32,
                        px as f32,
                        py as f32,
                    );
                    scene.set_hover(scene.hit_test(origin, dir));
                }
            }
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => {
                    press_origin = Some(cursor);
                    dragging = false;
                }
                ElementState::Released => {
                    let was_click = press_origin.take().is_some() && !dragging;
                    dragging = false;
                    if was_click {
                        let camera = orbit.camera(gpu.aspect());
                        if let Some(slug) = scene.pick_at(
                            &camera,
                            gpu.width as f32,
                            gpu.height as f32,
                            cursor.0 as f32,
                            cursor.1 as f32,
                        ) {
                            if let Some(app) = app_by_slug(slug) {
                                gpu.window
                                    .set_title(&format!("Globe Launcher — {}", app.name));
                            }
                        }
                    }
                }
            },
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = (now - last_frame).as_secs_f32();
                last_frame = now;
                scene.advance(dt);

                let camera = orbit.camera(gpu.aspect());
                let snapshot = scene.frame(camera.eye);
                let instances = build_instances(&snapshot, camera.eye);
                match gpu.render(camera.view_proj(), &instances) {
                    Ok(_) => gpu.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::error!("render error: {e:?}"),
                }
            }
            _ => {}
        })
        .unwrap();
}
