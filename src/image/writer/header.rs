use std::io::{self, Write};

use clap::{builder::PossibleValue, ValueEnum};

use super::super::{Image, ImageWriter};
use crate::identifier::Identifier;
use crate::options::ConversionOptions;
use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderDialect {
    /// `#include <Arduino.h>`, array placed in `PROGMEM`
    Arduino,
    /// `#include <stdint.h>`, plain const array
    Portable,
}

impl ValueEnum for HeaderDialect {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Arduino, Self::Portable]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Arduino => Some(PossibleValue::new("Arduino")),
            Self::Portable => Some(PossibleValue::new("Portable")),
        }
    }
}

impl HeaderDialect {
    fn include_line(&self) -> &'static str {
        match self {
            Self::Arduino => "#include <Arduino.h>",
            Self::Portable => "#include <stdint.h>",
        }
    }

    fn array_attribute(&self) -> &'static str {
        match self {
            Self::Arduino => " PROGMEM",
            Self::Portable => "",
        }
    }
}

pub struct HeaderFormat {
    pub values_per_line: usize,
    pub dialect: HeaderDialect,
}

impl From<&ConversionOptions> for HeaderFormat {
    fn from(value: &ConversionOptions) -> Self {
        Self {
            values_per_line: value.values_per_line,
            dialect: value.dialect,
        }
    }
}

pub struct HeaderArtifact<'a> {
    pub identifier: &'a Identifier,
    pub source_name: &'a str,
    pub image: &'a Image<u16>,
}

/// Emits an RGB565 image as a self-guarding C header.
///
/// The output only depends on the artifact and the format, so equal inputs
/// always produce identical bytes.
pub struct HeaderImageWriter<'a, W: Write> {
    writer: W,
    artifact: &'a HeaderArtifact<'a>,
    format: &'a HeaderFormat,
}

impl<'a, W: Write> HeaderImageWriter<'a, W> {
    pub fn new(writer: W, artifact: &'a HeaderArtifact<'a>, format: &'a HeaderFormat) -> Self {
        Self {
            writer,
            artifact,
            format,
        }
    }

    fn encode(&mut self) -> io::Result<()> {
        self.write_preamble()?;
        self.write_dimensions()?;
        self.write_pixel_array()?;
        self.write_end_of_file()?;
        self.writer.flush()
    }

    fn write_preamble(&mut self) -> io::Result<()> {
        let image = self.artifact.image;
        let guard = self.artifact.identifier.include_guard();
        writeln!(
            self.writer,
            "// Auto-generated from {}",
            self.artifact.source_name
        )?;
        writeln!(
            self.writer,
            "// Display size: {}x{} pixels, RGB565 format",
            image.width(),
            image.height()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "#ifndef {}", guard)?;
        writeln!(self.writer, "#define {}", guard)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.format.dialect.include_line())?;
        writeln!(self.writer)
    }

    fn write_dimensions(&mut self) -> io::Result<()> {
        let identifier = self.artifact.identifier;
        let image = self.artifact.image;
        writeln!(
            self.writer,
            "const uint16_t {}_width = {};",
            identifier,
            image.width()
        )?;
        writeln!(
            self.writer,
            "const uint16_t {}_height = {};",
            identifier,
            image.height()
        )?;
        writeln!(self.writer)
    }

    fn write_pixel_array(&mut self) -> io::Result<()> {
        writeln!(
            self.writer,
            "const uint16_t {}[]{} = {{",
            self.artifact.identifier,
            self.format.dialect.array_attribute()
        )?;
        let values_per_line = self.format.values_per_line.max(1);
        let dots = self.artifact.image.dots();
        let number_of_lines = dots.len().div_ceil(values_per_line);
        for (line_index, line) in dots.chunks(values_per_line).enumerate() {
            self.write_pixel_line(line, line_index + 1 == number_of_lines)?;
        }
        writeln!(self.writer, "}};")
    }

    fn write_pixel_line(&mut self, line: &[u16], is_last_line: bool) -> io::Result<()> {
        self.writer.write_all(b"    ")?;
        for (index, dot) in line.iter().enumerate() {
            if index > 0 {
                self.writer.write_all(b", ")?;
            }
            write!(self.writer, "0x{:04X}", dot)?;
        }
        if !is_last_line {
            self.writer.write_all(b",")?;
        }
        writeln!(self.writer)
    }

    fn write_end_of_file(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "#endif // {}",
            self.artifact.identifier.include_guard()
        )
    }
}

impl<W: Write> ImageWriter for HeaderImageWriter<'_, W> {
    fn write_image(&mut self) -> crate::Result<()> {
        self.encode()
            .map_err(|e| Error::UnableToWriteOutputFile(self.artifact.identifier.file_name(), e))
    }
}
