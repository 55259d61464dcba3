use image::{Rgb, RgbImage};

use crate::color::RGBColorFormat;
use crate::error::Error;

pub mod quantizer;
pub mod reader;
pub mod resampler;
pub mod rotation;
pub mod writer;

/// Row-major pixel buffer.
///
/// `dots.len() == width * height` holds for every instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    width: u32,
    height: u32,
    dots: Vec<T>,
}

impl<T> Image<T> {
    pub fn new(width: u32, height: u32, dots: Vec<T>) -> crate::Result<Self> {
        let expected = width as usize * height as usize;
        if dots.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: dots.len(),
            });
        }
        Ok(Image {
            width,
            height,
            dots,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dots(&self) -> &[T] {
        &self.dots
    }

    fn index(&self, column_index: u32, row_index: u32) -> usize {
        column_index as usize + row_index as usize * self.width as usize
    }
}

impl<T: Clone> Image<T> {
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        Image {
            width,
            height,
            dots: vec![value; width as usize * height as usize],
        }
    }
}

impl<T: Copy> Image<T> {
    pub fn dot(&self, column_index: u32, row_index: u32) -> T {
        self.dots[self.index(column_index, row_index)]
    }

    fn put_dot(&mut self, column_index: u32, row_index: u32, value: T) {
        let index = self.index(column_index, row_index);
        self.dots[index] = value;
    }
}

impl From<&RgbImage> for Image<RGBColorFormat<u8>> {
    fn from(value: &RgbImage) -> Self {
        Image {
            width: value.width(),
            height: value.height(),
            dots: value
                .pixels()
                .map(|Rgb([red, green, blue])| RGBColorFormat::new(*red, *green, *blue))
                .collect(),
        }
    }
}

impl From<&Image<RGBColorFormat<u8>>> for RgbImage {
    fn from(value: &Image<RGBColorFormat<u8>>) -> Self {
        RgbImage::from_fn(value.width, value.height, |x, y| {
            let dot = value.dot(x, y);
            Rgb([dot.red, dot.green, dot.blue])
        })
    }
}

pub trait ImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Image<T>>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

#[cfg(test)]
mod test {
    use image::{Rgb, RgbImage};

    use super::Image;
    use crate::color::RGBColorFormat;
    use crate::error::Error;

    #[rustfmt::skip]
    const TEST_DOTS: &[u16] = &[
         1,  2,  3,
         4,  5,  6,
    ];

    #[test]
    fn dot_is_addressed_row_major() {
        let image = Image::new(3, 2, Vec::from(TEST_DOTS)).expect("size matches");
        assert_eq!(image.dot(0, 0), 1);
        assert_eq!(image.dot(2, 0), 3);
        assert_eq!(image.dot(1, 1), 5);
    }

    #[test]
    fn reject_mismatching_pixel_count() {
        let result = Image::new(4, 2, Vec::from(TEST_DOTS));
        match result {
            Err(Error::PixelCountMismatch { expected, actual }) => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 6);
            }
            _ => panic!("Pixel count mismatch not detected"),
        }
    }

    #[test]
    fn filled_image_has_every_dot_defined() {
        let image = Image::filled(5, 4, 7u16);
        assert_eq!(image.dots().len(), 20);
        assert!(image.dots().iter().all(|&dot| dot == 7));
    }

    #[test]
    fn convert_from_and_to_rgb_image() {
        let rgb_image = RgbImage::from_fn(2, 3, |x, y| Rgb([x as u8, y as u8, 9]));
        let image = Image::from(&rgb_image);
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 3);
        assert_eq!(image.dot(1, 2), RGBColorFormat::new(1, 2, 9));
        assert_eq!(RgbImage::from(&image), rgb_image);
    }
}
