use bytemuck::{Pod, Zeroable};
use std::num::NonZeroU64;
use crate::grid::Grid;

// Uniforms specific to rendering
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RenderParams {
    pub grid_size: u32,
    pub cell_size_px: f32, // physical pixels per cell edge
    pub _padding: [u32; 2], // Ensure 16-byte alignment (u32 + f32 + vec2<u32> = 4 + 4 + 8 = 16)
}

impl RenderParams {
    pub fn new(grid_size: usize, cell_size: u32, scale_factor: f64) -> Self {
        Self {
            grid_size: grid_size as u32,
            cell_size_px: (cell_size as f64 * scale_factor) as f32,
            _padding: [0; 2],
        }
    }
}

/// Byte size of the storage buffer holding one `u32` per cell.
pub fn cell_buffer_size(grid_size: usize) -> u64 {
    (grid_size * grid_size * std::mem::size_of::<u32>()) as u64
}

/// Row-major `0`/`1` words for the fragment shader.
pub fn pack_cells(grid: &Grid) -> Vec<u32> {
    grid.cells().iter().map(|&alive| alive as u32).collect()
}

pub fn create_render_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Render Bind Group Layout"),
        entries: &[
            // RenderParams Uniform (Binding 0)
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<RenderParams>() as u64),
                },
                count: None,
            },
            // Cell State Buffer (Binding 1)
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    })
}

pub fn create_render_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    render_param_buffer: &wgpu::Buffer,
    cell_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Render Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry { binding: 0, resource: render_param_buffer.as_entire_binding() },
            wgpu::BindGroupEntry { binding: 1, resource: cell_buffer.as_entire_binding() },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_are_one_uniform_block() {
        assert_eq!(std::mem::size_of::<RenderParams>(), 16);
    }

    #[test]
    fn cell_size_follows_scale_factor() {
        assert_eq!(RenderParams::new(40, 20, 1.0).cell_size_px, 20.0);
        assert_eq!(RenderParams::new(40, 20, 1.5).cell_size_px, 30.0);
        assert_eq!(RenderParams::new(40, 20, 2.0).grid_size, 40);
    }

    #[test]
    fn packing_is_row_major() {
        let mut grid = Grid::new(40);
        grid.set(3, 0, true);
        grid.set(0, 1, true);
        let packed = pack_cells(&grid);
        assert_eq!(packed.len(), 1600);
        assert_eq!(packed[3], 1);
        assert_eq!(packed[40], 1);
        assert_eq!(packed.iter().sum::<u32>(), 2);
        assert_eq!(cell_buffer_size(40), 6400);
    }
}
