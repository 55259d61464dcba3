use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnsupportedFormat(String, String),
    DecodeError(String, String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToWriteOutputFile(String, std::io::Error),
    InvalidIdentifier(String),
    DuplicateIdentifier(String, String),
    InvalidDimensions(u32, u32),
    PixelCountMismatch { expected: usize, actual: usize },
    WorkerPanicked(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(path, reason) => {
                write!(f, "Unsupported image format of '{}': {}", path, reason)
            }
            Self::DecodeError(path, reason) => {
                write!(f, "Unable to decode image '{}': {}", path, reason)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToWriteOutputFile(path, error) => {
                write!(f, "Unable to write output file '{}': {}", path, error)
            }
            Self::InvalidIdentifier(name) => {
                write!(f, "'{}' is not a valid identifier", name)
            }
            Self::DuplicateIdentifier(identifier, first_source) => {
                write!(
                    f,
                    "Identifier '{}' is already generated from '{}'",
                    identifier, first_source
                )
            }
            Self::InvalidDimensions(width, height) => {
                write!(
                    f,
                    "Image dimensions {}x{} are invalid, both must be at least 1",
                    width, height
                )
            }
            Self::PixelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Number of pixels does not match the size. Expected {}, but got {}.",
                    expected, actual
                )
            }
            Self::WorkerPanicked(path) => {
                write!(f, "Conversion of '{}' was aborted by a panic", path)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToWriteOutputFile(_, error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn display_pixel_count_mismatch() {
        let error = Error::PixelCountMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Number of pixels does not match the size. Expected 4, but got 3."
        );
    }

    #[test]
    fn display_invalid_identifier() {
        let error = Error::InvalidIdentifier(String::from("3d"));
        assert_eq!(error.to_string(), "'3d' is not a valid identifier");
    }

    #[test]
    fn display_worker_panicked() {
        let error = Error::WorkerPanicked(String::from("images/logo.png"));
        assert_eq!(
            error.to_string(),
            "Conversion of 'images/logo.png' was aborted by a panic"
        );
    }

    #[test]
    fn io_errors_are_exposed_as_source() {
        let error = Error::UnableToWriteOutputFile(
            String::from("out.h"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(error.source().is_some());
        assert!(Error::InvalidDimensions(0, 1).source().is_none());
    }
}
