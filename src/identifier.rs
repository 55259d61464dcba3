use std::fmt::Display;
use std::path::Path;

use crate::Error;

pub const DEFAULT_PREFIX: &str = "img_";
pub const DEFAULT_SUFFIX: &str = "_data";

/// C symbol name of a generated pixel array.
///
/// Only ASCII letters, digits and underscores, never starting with a digit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: &str) -> crate::Result<Self> {
        let starts_with_digit = name.chars().next().map_or(true, |c| c.is_ascii_digit());
        let has_only_symbol_characters = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if starts_with_digit || !has_only_symbol_characters {
            return Err(Error::InvalidIdentifier(name.to_owned()));
        }
        Ok(Identifier(name.to_owned()))
    }

    /// Sanitizes a file base name, e.g. `My Photo!` becomes `my_photo__data`.
    pub fn derive(base_name: &str, prefix: &str, suffix: &str) -> crate::Result<Self> {
        if base_name.is_empty() {
            return Err(Error::InvalidIdentifier(base_name.to_owned()));
        }
        let sanitized: String = base_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        let prefix = if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
            prefix
        } else {
            ""
        };
        Self::new(&format!("{}{}{}", prefix, sanitized, suffix))
    }

    pub fn from_path(path: &Path, prefix: &str, suffix: &str) -> crate::Result<Self> {
        let base_name = path
            .file_stem()
            .ok_or_else(|| Error::InvalidIdentifier(path.display().to_string()))?;
        Self::derive(&base_name.to_string_lossy(), prefix, suffix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn include_guard(&self) -> String {
        format!("{}_H", self.0.to_ascii_uppercase())
    }

    pub fn file_name(&self) -> String {
        format!("{}.h", self.0)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
