use super::Image;
use crate::color::{RGB565ColorFormat, RGBColorFormat};

pub struct Quantizer<'a> {
    image: &'a Image<RGBColorFormat<u8>>,
}

impl<'a> Quantizer<'a> {
    pub fn new(image: &'a Image<RGBColorFormat<u8>>) -> Self {
        Self { image }
    }

    /// Truncates every dot to RGB565. No dithering, no rounding.
    pub fn quantize(&self) -> Image<u16> {
        Image {
            width: self.image.width,
            height: self.image.height,
            dots: self
                .image
                .dots
                .iter()
                .map(|dot| RGB565ColorFormat::from(dot).value())
                .collect(),
        }
    }
}
