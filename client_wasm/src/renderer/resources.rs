use crate::camera::{Camera, CameraUniform};
use game_core::{Shape, Sprite};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Primary and secondary ball
pub const MAX_CIRCLE_INSTANCES: usize = 2;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn from_sprite(sprite: &Sprite) -> Self {
        let transform = match sprite.shape {
            Shape::Rect { x, y, w, h } => [x + w / 2.0, y + h / 2.0, w, h],
            Shape::Circle { x, y, r } => [x, y, r * 2.0, r * 2.0],
        };
        Self {
            transform,
            tint: sprite.color.0,
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: Buffer,
    pub circles: Buffer,
    pub rect_capacity: usize,
}

/// `rect_capacity` should cover the net and both paddles for the playfield
pub fn create_buffers(device: &Device, camera: &Camera, rect_capacity: usize) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Instance buffers
    let instance_size = std::mem::size_of::<InstanceData>() as u64;

    let rects = device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: instance_size * rect_capacity.max(1) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let circles = device.create_buffer(&BufferDescriptor {
        label: Some("Circle Instance Buffer"),
        size: instance_size * MAX_CIRCLE_INSTANCES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        rects,
        circles,
        rect_capacity,
    }
}
