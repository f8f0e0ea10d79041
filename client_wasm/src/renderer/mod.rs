pub mod draw;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use game_core::{rect_count, Config, Scene};
use log::info;
use resources::GameBuffers;
use web_sys::HtmlCanvasElement;
use wgpu::*;

const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub shape_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
}

impl Renderer {
    /// WebGPU on `canvas`, with buffers sized for `config`'s playfield
    pub async fn new(canvas: HtmlCanvasElement, config: &Config) -> Result<Self, String> {
        // Zero-sized surfaces cannot be configured
        let size = (canvas.width().max(1), canvas.height().max(1));

        let instance = Instance::new(&InstanceDescriptor {
            backends: Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let surface = instance
            .create_surface(SurfaceTarget::Canvas(canvas))
            .map_err(|e| format!("Failed to create surface: {:?}", e))?;
        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| "Failed to find adapter".to_string())?;
        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: Some("Device"),
                    required_limits: Limits::downlevel_webgl2_defaults(),
                    ..Default::default()
                },
                None,
            )
            .await
            .map_err(|e| format!("Failed to create device: {:?}", e))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| "No surface formats available".to_string())?;
        let surface_config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.0,
            height: size.1,
            present_mode: PresentMode::Fifo,
            alpha_mode: CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let camera = Camera::orthographic(config.width, config.height);
        let buffers = resources::create_buffers(&device, &camera, rect_count(config.height));
        let pipes = pipeline::create_pipelines(&device, format);
        let meshes = (
            create_rectangle(&device),
            create_circle(&device, CIRCLE_SEGMENTS),
        );

        let camera_bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        info!(
            "Renderer ready: surface {}x{}, playfield {}x{}, {} rect slots",
            size.0, size.1, config.width, config.height, buffers.rect_capacity
        );

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            size,
            camera,
            shape_pipeline: pipes.shape_pipeline,
            camera_bind_group,
            buffers,
            meshes,
        })
    }

    /// Reconfigure the surface for a new backing size; the camera stays in
    /// playfield units
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == self.size {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), String> {
        draw::draw_frame(self, scene)
    }
}
