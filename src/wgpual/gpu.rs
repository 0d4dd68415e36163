use thiserror::Error;

/// Errors raised while acquiring a GPU device.
#[derive(Debug, Error)]
pub enum GpuError {
    /// No adapter matched the requested options.
    #[error("no suitable GPU adapter is available")]
    AdapterUnavailable,
    /// The adapter refused to create a device.
    #[error("failed to request a GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

/// Container for the GPU objects needed to upload meshes.
pub struct Gpu {
    /// The WGPU device.
    pub device: wgpu::Device,
    /// The WGPU queue.
    pub queue: wgpu::Queue,
}

/// Parameters for when creating a new GPU context.
#[derive(Debug, Clone, Copy, Default)]
pub struct GpuOptions {
    /// Provides a **hint** to indicate which GPU to use. `LowPower` means to
    /// use an integrated GPU, while `HighPower` means to use a dedicated GPU.
    /// Default is `None` (provides no hint).
    pub power_preference: wgpu::PowerPreference,
    /// Forces the use of a software adapter when `true`.
    pub force_fallback_adapter: bool,
}

impl Gpu {
    /// Creates a new headless GPU context with the specified options.
    ///
    /// # Returns
    ///
    /// A [`Future`](std::future::Future) resolving to the new context, or a
    /// [`GpuError`] if no adapter or device could be acquired.
    pub async fn new(options: GpuOptions) -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: options.power_preference,
                force_fallback_adapter: options.force_fallback_adapter,
                compatible_surface: None,
            })
            .await
            .ok_or(GpuError::AdapterUnavailable)?;

        tracing::debug!(adapter = ?adapter.get_info(), "Acquired GPU adapter");

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("poli-shapes device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        Ok(Gpu { device, queue })
    }
}
