use crate::foundation::core::{Size, SurfaceSize};

/// Where the drawing surface lives: its container size and the display's pixel density.
pub trait SurfaceHost {
    /// Container size in logical pixels, or `None` when no container is attached.
    fn container_size(&self) -> Option<Size>;

    /// Physical pixels per logical pixel.
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Surface dimensions for the current container, if any.
    fn surface_size(&self) -> Option<SurfaceSize> {
        let size = self.container_size()?;
        Some(SurfaceSize::new(
            size.width,
            size.height,
            self.device_pixel_ratio(),
        ))
    }
}

/// A host with a settable container, used for offscreen rendering and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedHost {
    size: Option<Size>,
    ratio: f64,
}

impl FixedHost {
    /// Host with a `width` × `height` container.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            size: Some(Size::new(width, height)),
            ratio: device_pixel_ratio,
        }
    }

    /// Host without a container.
    pub fn detached() -> Self {
        Self {
            size: None,
            ratio: 1.0,
        }
    }

    /// Replace the container size; `None` detaches it.
    pub fn set_container(&mut self, size: Option<Size>) {
        self.size = size;
    }

    /// Replace the pixel ratio.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.ratio = ratio;
    }
}

impl SurfaceHost for FixedHost {
    fn container_size(&self) -> Option<Size> {
        self.size
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.ratio
    }
}
