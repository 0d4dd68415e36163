use std::mem::size_of;

use glam::{Vec2, Vec3};
use wgpu::util::DeviceExt;

use super::Gpu;
use crate::core::MeshSink;

/// Mesh whose buffers live on the GPU.
///
/// Every submission is written through the queue. A buffer that is too small
/// for the new data is replaced by a larger one, so hosts must re-fetch the
/// buffers after a submission that changed the vertex count.
pub struct GpuMesh<'gpu> {
    gpu: &'gpu Gpu,
    label: String,
    position_buffer: wgpu::Buffer,
    uv_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl<'gpu> GpuMesh<'gpu> {
    /// Format of the index buffer.
    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

    const VERTEX_USAGE: wgpu::BufferUsages =
        wgpu::BufferUsages::VERTEX.union(wgpu::BufferUsages::COPY_DST);
    const INDEX_USAGE: wgpu::BufferUsages =
        wgpu::BufferUsages::INDEX.union(wgpu::BufferUsages::COPY_DST);

    const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    }];
    const UV_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: 1,
    }];

    /// Creates an empty GPU mesh. Buffers are allocated on the first
    /// submission.
    pub fn new(gpu: &'gpu Gpu, label: impl Into<String>) -> Self {
        let label = label.into();

        let position_buffer = Self::create_empty(gpu, &label, "positions", Self::VERTEX_USAGE);
        let uv_buffer = Self::create_empty(gpu, &label, "uvs", Self::VERTEX_USAGE);
        let index_buffer = Self::create_empty(gpu, &label, "indices", Self::INDEX_USAGE);

        Self {
            gpu,
            label,
            position_buffer,
            uv_buffer,
            index_buffer,
            index_count: 0,
        }
    }

    /// Layouts of the position buffer (slot 0, location 0) and the UV buffer
    /// (slot 1, location 1), for building a render pipeline.
    pub fn vertex_buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
        [
            wgpu::VertexBufferLayout {
                array_stride: size_of::<Vec3>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &Self::POSITION_ATTRIBUTES,
            },
            wgpu::VertexBufferLayout {
                array_stride: size_of::<Vec2>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &Self::UV_ATTRIBUTES,
            },
        ]
    }

    /// The position buffer.
    pub fn position_buffer(&self) -> &wgpu::Buffer {
        &self.position_buffer
    }

    /// The UV buffer.
    pub fn uv_buffer(&self) -> &wgpu::Buffer {
        &self.uv_buffer
    }

    /// The index buffer, in [`INDEX_FORMAT`](Self::INDEX_FORMAT).
    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    /// Number of indices from the latest submission.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    fn create_empty(
        gpu: &Gpu,
        label: &str,
        kind: &str,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} {kind}")),
            size: 0,
            usage,
            mapped_at_creation: false,
        })
    }

    /// Writes `contents` into `buffer`, replacing the buffer if it is too
    /// small.
    fn write(
        gpu: &Gpu,
        buffer: &mut wgpu::Buffer,
        label: &str,
        kind: &str,
        usage: wgpu::BufferUsages,
        contents: &[u8],
    ) {
        if contents.len() as u64 > buffer.size() {
            tracing::debug!(
                mesh = label,
                buffer = kind,
                from = buffer.size(),
                to = contents.len(),
                "Growing GPU mesh buffer"
            );

            *buffer = gpu
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{label} {kind}")),
                    contents,
                    usage,
                });
        } else if !contents.is_empty() {
            gpu.queue.write_buffer(buffer, 0, contents);
        }
    }
}

impl MeshSink for GpuMesh<'_> {
    fn submit(&mut self, vertices: &[Vec3], uv: &[Vec2], triangles: &[u32]) {
        let gpu = self.gpu;

        Self::write(
            gpu,
            &mut self.position_buffer,
            &self.label,
            "positions",
            Self::VERTEX_USAGE,
            bytemuck::cast_slice(vertices),
        );
        Self::write(
            gpu,
            &mut self.uv_buffer,
            &self.label,
            "uvs",
            Self::VERTEX_USAGE,
            bytemuck::cast_slice(uv),
        );
        Self::write(
            gpu,
            &mut self.index_buffer,
            &self.label,
            "indices",
            Self::INDEX_USAGE,
            bytemuck::cast_slice(triangles),
        );

        self.index_count = triangles.len() as u32;
    }
}
