use image::{imageops, imageops::FilterType, RgbImage};

use super::Image;
use crate::color::RGBColorFormat;
use crate::Error;

/// Placement of a scaled source inside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FitGeometry {
    pub width: u32,
    pub height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
}

impl FitGeometry {
    /// Largest size with the source's aspect ratio that fits the canvas, centered.
    ///
    /// Integer arithmetic keeps `floor` exact. Fails with `InvalidDimensions`
    /// when the source or the canvas has an empty side.
    pub fn compute(
        source_width: u32,
        source_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> crate::Result<Self> {
        if source_width == 0 || source_height == 0 {
            return Err(Error::InvalidDimensions(source_width, source_height));
        }
        if canvas_width == 0 || canvas_height == 0 {
            return Err(Error::InvalidDimensions(canvas_width, canvas_height));
        }
        let (sw, sh) = (source_width as u64, source_height as u64);
        let (cw, ch) = (canvas_width as u64, canvas_height as u64);
        let (width, height) = if sw * ch > cw * sh {
            (canvas_width, ((cw * sh) / sw).max(1) as u32)
        } else {
            (((ch * sw) / sh).max(1) as u32, canvas_height)
        };
        Ok(FitGeometry {
            width,
            height,
            x_offset: (canvas_width - width) / 2,
            y_offset: (canvas_height - height) / 2,
        })
    }
}

pub struct AspectFitResampler {
    canvas_width: u32,
    canvas_height: u32,
    background: RGBColorFormat<u8>,
}

impl AspectFitResampler {
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        background: RGBColorFormat<u8>,
    ) -> crate::Result<Self> {
        if canvas_width == 0 || canvas_height == 0 {
            return Err(Error::InvalidDimensions(canvas_width, canvas_height));
        }
        Ok(Self {
            canvas_width,
            canvas_height,
            background,
        })
    }

    pub fn resample(
        &self,
        source: &Image<RGBColorFormat<u8>>,
    ) -> crate::Result<Image<RGBColorFormat<u8>>> {
        let geometry = FitGeometry::compute(
            source.width,
            source.height,
            self.canvas_width,
            self.canvas_height,
        )?;
        log::debug!(
            "Fitting {}x{} into {}x{}: {:?}",
            source.width,
            source.height,
            self.canvas_width,
            self.canvas_height,
            geometry
        );
        let mut canvas = Image::filled(self.canvas_width, self.canvas_height, self.background);
        if geometry.width == source.width && geometry.height == source.height {
            Self::paste(&mut canvas, source, &geometry);
        } else {
            let scaled = imageops::resize(
                &RgbImage::from(source),
                geometry.width,
                geometry.height,
                FilterType::Lanczos3,
            );
            Self::paste(&mut canvas, &Image::from(&scaled), &geometry);
        }
        Ok(canvas)
    }

    fn paste(
        canvas: &mut Image<RGBColorFormat<u8>>,
        scaled: &Image<RGBColorFormat<u8>>,
        geometry: &FitGeometry,
    ) {
        for row_index in 0..scaled.height {
            for column_index in 0..scaled.width {
                canvas.put_dot(
                    geometry.x_offset + column_index,
                    geometry.y_offset + row_index,
                    scaled.dot(column_index, row_index),
                );
            }
        }
    }
}
