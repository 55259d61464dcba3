use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek};
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat};

use super::super::{Image, ImageReader};
use crate::color::{RGBAColorFormat, RGBColorFormat};
use crate::Error;

/// Decodes any raster format known to the `image` crate into an opaque RGB image.
///
/// Transparent pixels are composited onto `transparency_background`.
/// Multi-frame sources (GIF, APNG, animated WebP) always yield their first frame.
pub struct RasterImageReader<R: BufRead + Seek> {
    reader: R,
    name: String,
    format_hint: Option<ImageFormat>,
    transparency_background: RGBColorFormat<u8>,
}

impl RasterImageReader<BufReader<File>> {
    pub fn open(path: &Path, transparency_background: RGBColorFormat<u8>) -> crate::Result<Self> {
        let name = path.display().to_string();
        let file = File::open(path)
            .map_err(|e| Error::UnableToOpenInputFileForReading(name.clone(), e))?;
        Ok(Self {
            reader: BufReader::new(file),
            name,
            format_hint: ImageFormat::from_path(path).ok(),
            transparency_background,
        })
    }
}

impl<R: BufRead + Seek> RasterImageReader<R> {
    pub fn new(reader: R, name: &str, transparency_background: RGBColorFormat<u8>) -> Self {
        Self {
            reader,
            name: name.to_owned(),
            format_hint: None,
            transparency_background,
        }
    }

    fn decode(&mut self) -> crate::Result<DynamicImage> {
        let mut reader = image::ImageReader::new(&mut self.reader);
        if let Some(format) = self.format_hint {
            reader.set_format(format);
        }
        let reader = reader
            .with_guessed_format()
            .map_err(|e| Error::UnableToOpenInputFileForReading(self.name.clone(), e))?;
        if reader.format().is_none() {
            return Err(Error::UnsupportedFormat(
                self.name.clone(),
                String::from("content does not match any known image format"),
            ));
        }
        reader.decode().map_err(|e| self.map_image_error(e))
    }

    fn map_image_error(&self, error: ImageError) -> Error {
        match error {
            ImageError::Unsupported(e) => {
                Error::UnsupportedFormat(self.name.clone(), e.to_string())
            }
            ImageError::IoError(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Error::DecodeError(self.name.clone(), e.to_string())
            }
            ImageError::IoError(e) => Error::UnableToOpenInputFileForReading(self.name.clone(), e),
            other => Error::DecodeError(self.name.clone(), other.to_string()),
        }
    }

    fn normalize(&self, decoded: DynamicImage) -> crate::Result<Image<RGBColorFormat<u8>>> {
        let (width, height) = (decoded.width(), decoded.height());
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions(width, height));
        }
        if !decoded.color().has_alpha() {
            return Ok(Image::from(&decoded.into_rgb8()));
        }
        // palette and luma-alpha sources are expanded to RGBA first
        let background = self.transparency_background;
        let dots = decoded
            .into_rgba8()
            .pixels()
            .map(|pixel| {
                let [red, green, blue, alpha] = pixel.0;
                RGBAColorFormat::new(red, green, blue, alpha).composite_over(&background)
            })
            .collect();
        Image::new(width, height, dots)
    }
}

impl<R: BufRead + Seek> ImageReader<RGBColorFormat<u8>> for RasterImageReader<R> {
    fn read_image(&mut self) -> crate::Result<Image<RGBColorFormat<u8>>> {
        let decoded = self.decode()?;
        log::info!(
            "Decoded {} ({}x{}, {:?})",
            self.name,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );
        self.normalize(decoded)
    }
}
