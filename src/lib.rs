use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub use batch::{
    collect_conversion_jobs, convert_batch, is_supported_image, BatchReport, ConversionJob,
    ConversionOutcome,
};
pub use cli::CLIParser;
pub use color::RGBColorFormat;
pub use error::Error;
pub use identifier::Identifier;
pub use crate::image::{
    quantizer::Quantizer,
    reader::raster::RasterImageReader,
    resampler::{AspectFitResampler, FitGeometry},
    rotation::rotate_clockwise,
    writer::header::{HeaderArtifact, HeaderDialect, HeaderFormat, HeaderImageWriter},
    Image, ImageReader, ImageWriter,
};
pub use options::ConversionOptions;
use tempfile::NamedTempFile;

mod batch;
mod cli;
mod color;
mod error;
mod identifier;
mod image;
mod logger;
pub mod options;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    inputs: Vec<PathBuf>,
    output_directory: PathBuf,
    canvas_width: u32,
    canvas_height: u32,
    letterbox_color: RGBColorFormat<u8>,
    transparency_color: RGBColorFormat<u8>,
    values_per_line: usize,
    dialect: HeaderDialect,
    number_of_threads: usize,
}

impl Arguments {
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn number_of_threads(&self) -> usize {
        self.number_of_threads
    }
}

/// Decode, fit, rotate and quantize a single source image.
pub fn convert_image_to_rgb565(source: &Path, options: &ConversionOptions) -> Result<Image<u16>> {
    let resampler = AspectFitResampler::new(
        options.canvas_width,
        options.canvas_height,
        options.letterbox_color,
    )?;
    let mut reader = RasterImageReader::open(source, options.transparency_color)?;
    let image = reader.read_image()?;
    let canvas = resampler.resample(&image)?;
    let rotated = rotate_clockwise(&canvas);
    log::info!(
        "Fitted {} into {}x{}, rotated to {}x{}",
        source.display(),
        canvas.width(),
        canvas.height(),
        rotated.width(),
        rotated.height()
    );
    Ok(Quantizer::new(&rotated).quantize())
}

/// Runs the whole pipeline for one image and returns the path of the header.
///
/// The header appears under its final name only once it is completely written.
pub fn convert_image_to_header(
    source: &Path,
    identifier: &Identifier,
    options: &ConversionOptions,
) -> Result<PathBuf> {
    let image = convert_image_to_rgb565(source, options)?;
    let source_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    let artifact = HeaderArtifact {
        identifier,
        source_name: &source_name,
        image: &image,
    };
    let output_path = options.output_directory.join(identifier.file_name());
    write_header_file(&output_path, &artifact, &HeaderFormat::from(options))?;
    log::info!(
        "Generated {} from {} ({} values)",
        output_path.display(),
        source.display(),
        image.dots().len()
    );
    Ok(output_path)
}

fn write_header_file(path: &Path, artifact: &HeaderArtifact, format: &HeaderFormat) -> Result<()> {
    let map_error = |e| Error::UnableToWriteOutputFile(path.display().to_string(), e);
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(directory).map_err(map_error)?;
    let temporary_file = NamedTempFile::new_in(directory).map_err(map_error)?;
    {
        let mut writer = BufWriter::new(temporary_file.as_file());
        HeaderImageWriter::new(&mut writer, artifact, format).write_image()?;
        writer.flush().map_err(map_error)?;
    }
    // temporary files are created owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(temporary_file.path(), fs::Permissions::from_mode(0o644))
            .map_err(map_error)?;
    }
    temporary_file
        .persist(path)
        .map_err(|e| map_error(e.error))?;
    Ok(())
}
