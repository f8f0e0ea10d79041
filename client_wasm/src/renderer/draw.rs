use super::resources::{InstanceData, MAX_CIRCLE_INSTANCES};
use super::Renderer;
use game_core::Scene;
use log::warn;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let counts = update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, counts);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Instance counts written this frame
#[derive(Debug, Clone, Copy)]
struct InstanceCounts {
    rects: u32,
    circles: u32,
}

fn update_buffers(renderer: &mut Renderer, scene: &Scene) -> InstanceCounts {
    let rects = collect_instances(scene.rects(), renderer.buffers.rect_capacity);
    let circles = collect_instances(scene.circles(), MAX_CIRCLE_INSTANCES);

    if !rects.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(&rects));
    }
    if !circles.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.circles, 0, bytemuck::cast_slice(&circles));
    }

    InstanceCounts {
        rects: rects.len() as u32,
        circles: circles.len() as u32,
    }
}

fn collect_instances<'a>(
    sprites: impl Iterator<Item = &'a game_core::Sprite>,
    capacity: usize,
) -> Vec<InstanceData> {
    let instances: Vec<InstanceData> = sprites.map(InstanceData::from_sprite).collect();
    if instances.len() > capacity {
        warn!(
            "Dropping {} sprite(s) past instance capacity {}",
            instances.len() - capacity,
            capacity
        );
        return instances[..capacity].to_vec();
    }
    instances
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, counts: InstanceCounts) {
    pass.set_pipeline(&renderer.shape_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (net, paddles)
    if counts.rects > 0 {
        pass.set_vertex_buffer(0, renderer.meshes.0.vertex_buffer.slice(..));
        pass.set_index_buffer(renderer.meshes.0.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
        pass.draw_indexed(0..renderer.meshes.0.index_count, 0, 0..counts.rects);
    }

    // Circles (balls)
    if counts.circles > 0 {
        pass.set_vertex_buffer(0, renderer.meshes.1.vertex_buffer.slice(..));
        pass.set_index_buffer(renderer.meshes.1.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
        pass.draw_indexed(0..renderer.meshes.1.index_count, 0, 0..counts.circles);
    }
}
