use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PanelError, PanelResult};

/// A rendered frame as RGBA8 pixels.
///
/// Pixels are premultiplied alpha as produced by `vello_cpu`. Panels always start from an
/// opaque background fill, so every pixel has `a == 255` in practice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Read one pixel; `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Convert into an `image` buffer.
    pub fn to_rgba_image(&self) -> PanelResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            PanelError::validation(format!(
                "frame buffer of {} bytes does not match {}x{} rgba8",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }

    /// Write the frame as a PNG file, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> PanelResult<()> {
        let img = self.to_rgba_image()?;
        crate::encode::ffmpeg::ensure_parent_dir(path)?;
        img.save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
