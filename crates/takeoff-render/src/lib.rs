//! wgpu pipelines for drawing a packed takeoff scene.
//!
//! Device, queue and surface come from the shell (winit window or web canvas);
//! this crate owns the shader, the two instanced pipelines and their buffers.

use takeoff_core::instances::{FrameInstances, SegmentInstance, SphereInstance, Uniforms};
use wgpu::util::DeviceExt;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub const MAX_SPHERES: usize = 32;
pub const MAX_SEGMENTS: usize = 64;

pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.008,
    g: 0.012,
    b: 0.03,
    a: 1.0,
};

pub struct SceneRenderer {
    sphere_pipeline: wgpu::RenderPipeline,
    segment_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    sphere_vb: wgpu::Buffer,
    segment_vb: wgpu::Buffer,
    sphere_count: u32,
    segment_count: u32,
}

impl SceneRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad corners for two triangles, spanning [-0.5, 0.5]
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sphere_vb"),
            size: (std::mem::size_of::<SphereInstance>() * MAX_SPHERES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let segment_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("segment_vb"),
            size: (std::mem::size_of::<SegmentInstance>() * MAX_SEGMENTS) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
            label: Some("scene_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let quad_layout = wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        };
        let sphere_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 32,
                    shader_location: 4,
                },
            ],
        };
        let segment_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SegmentInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 4,
                },
            ],
        };

        let sphere_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            format,
            "sphere_pipeline",
            ("vs_sphere", "fs_sphere"),
            &[quad_layout.clone(), sphere_layout],
        );
        let segment_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            format,
            "segment_pipeline",
            ("vs_segment", "fs_segment"),
            &[quad_layout, segment_layout],
        );

        Self {
            sphere_pipeline,
            segment_pipeline,
            uniform_buffer,
            bind_group,
            quad_vb,
            sphere_vb,
            segment_vb,
            sphere_count: 0,
            segment_count: 0,
        }
    }

    /// Upload uniforms and instances for the next `draw`.
    pub fn prepare(&mut self, queue: &wgpu::Queue, uniforms: &Uniforms, frame: &FrameInstances) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        if frame.spheres.len() > MAX_SPHERES {
            log::warn!("[gpu] {} spheres, drawing first {}", frame.spheres.len(), MAX_SPHERES);
        }
        let spheres = &frame.spheres[..frame.spheres.len().min(MAX_SPHERES)];
        if !spheres.is_empty() {
            queue.write_buffer(&self.sphere_vb, 0, bytemuck::cast_slice(spheres));
        }
        self.sphere_count = spheres.len() as u32;

        if frame.segments.len() > MAX_SEGMENTS {
            log::warn!("[gpu] {} segments, drawing first {}", frame.segments.len(), MAX_SEGMENTS);
        }
        let segments = &frame.segments[..frame.segments.len().min(MAX_SEGMENTS)];
        if !segments.is_empty() {
            queue.write_buffer(&self.segment_vb, 0, bytemuck::cast_slice(segments));
        }
        self.segment_count = segments.len() as u32;
    }

    /// Edges first, spheres on top (spheres are expected back-to-front).
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        if self.segment_count > 0 {
            rpass.set_pipeline(&self.segment_pipeline);
            rpass.set_vertex_buffer(1, self.segment_vb.slice(..));
            rpass.draw(0..6, 0..self.segment_count);
        }
        if self.sphere_count > 0 {
            rpass.set_pipeline(&self.sphere_pipeline);
            rpass.set_vertex_buffer(1, self.sphere_vb.slice(..));
            rpass.draw(0..6, 0..self.sphere_count);
        }
    }

    /// Clear `view` and draw the prepared scene in a single pass.
    pub fn render_to(&self, device: &wgpu::Device, queue: &wgpu::Queue, view: &wgpu::TextureView) {
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("scene_encoder"),
        });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.draw(&mut rpass);
        }
        queue.submit(Some(encoder.finish()));
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    label: &str,
    (vs_entry, fs_entry): (&str, &str),
    buffers: &[wgpu::VertexBufferLayout<'_>],
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

/// Pick an sRGB surface format when offered, otherwise the first one.
pub fn preferred_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| {
            matches!(
                f,
                wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
            )
        })
        .or_else(|| formats.first().copied())
}
