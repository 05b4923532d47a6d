// Texture upload and management

use anyhow::Result;
use std::collections::HashMap;

/// Handle to a texture owned by the [`TextureManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(usize);

impl TextureHandle {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }
}

/// A GPU texture together with its sampler and bind group
///
/// Only the bind group is read when drawing; the texture, view and sampler are held so they
/// live exactly as long as it does.
pub struct Texture {
    _texture: wgpu::Texture,
    _view: wgpu::TextureView,
    _sampler: wgpu::Sampler,
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Upload RGBA8 pixels
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        rgba: &[u8],
        width: u32,
        height: u32,
        label: Option<&str>,
    ) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            anyhow::bail!(
                "Texture {:?} has {} bytes, expected {} for {}x{}",
                label,
                rgba.len(),
                expected,
                width,
                height
            );
        }

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Pixel art: nearest filtering in both directions
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label,
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Ok(Self {
            _texture: texture,
            _view: view,
            _sampler: sampler,
            bind_group,
            width,
            height,
        })
    }
}

/// Owns every uploaded texture plus the shared bind group layout
pub struct TextureManager {
    layout: wgpu::BindGroupLayout,
    textures: Vec<Texture>,
    name_to_handle: HashMap<String, TextureHandle>,
    white: TextureHandle,
}

impl TextureManager {
    /// Create the manager and its 1x1 white texture used for solid fills
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Result<Self> {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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

        let white = Texture::from_rgba(device, queue, &layout, &[255; 4], 1, 1, Some("white"))?;

        Ok(Self {
            layout,
            textures: vec![white],
            name_to_handle: HashMap::new(),
            white: TextureHandle(0),
        })
    }

    /// Upload decoded pixels under `name`, reusing the existing handle if already loaded
    pub fn insert_rgba(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        name: &str,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> Result<TextureHandle> {
        if let Some(&handle) = self.name_to_handle.get(name) {
            return Ok(handle);
        }

        let texture =
            Texture::from_rgba(device, queue, &self.layout, rgba, width, height, Some(name))?;
        let handle = TextureHandle::new(self.textures.len());
        self.textures.push(texture);
        self.name_to_handle.insert(name.to_string(), handle);

        Ok(handle)
    }

    /// Look up a previously loaded texture by name
    pub fn handle(&self, name: &str) -> Option<TextureHandle> {
        self.name_to_handle.get(name).copied()
    }

    /// Get a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.0)
    }

    /// Texture used for untextured fills
    pub fn white(&self) -> TextureHandle {
        self.white
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }
}
