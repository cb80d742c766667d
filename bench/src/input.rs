use ipranges_index::Value;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot open {}", path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("{origin}:{line}: invalid value \"{token}\"")]
    InvalidInput {
        origin: String,
        line: usize,
        token: String,
        #[source]
        cause: ParseIntError,
    },
}

/// Textual content of a source of values, with the file it was read from, if any.
pub struct Input {
    pub text: String,
    pub source: Option<PathBuf>,
}

impl Input {
    pub fn from_string(input: impl Into<String>) -> Input {
        Input {
            text: input.into(),
            source: None,
        }
    }

    pub fn from_file(file: &Path) -> Result<Input, LoadError> {
        let text = std::fs::read_to_string(file).map_err(|cause| LoadError::MissingSource {
            path: file.to_path_buf(),
            cause,
        })?;
        Ok(Input {
            text,
            source: Some(file.to_path_buf()),
        })
    }

    fn origin(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "<string>".to_string(),
        }
    }

    /// Parses all whitespace-separated values of the input, in order.
    /// Fails on the first token that is not an unsigned 32 bits integer.
    pub fn values(&self) -> Result<Vec<Value>, LoadError> {
        let mut values = Vec::new();
        for (line_index, line) in self.text.lines().enumerate() {
            for token in line.split_whitespace() {
                let value = token.parse::<Value>().map_err(|cause| LoadError::InvalidInput {
                    origin: self.origin(),
                    line: line_index + 1,
                    token: token.to_string(),
                    cause,
                })?;
                values.push(value);
            }
        }
        Ok(values)
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::from_string(s)
    }
}

/// Reads all values of a file.
pub fn load_values(file: &Path) -> Result<Vec<Value>, LoadError> {
    let values = Input::from_file(file)?.values()?;
    tracing::info!("Loaded {} values from {}", values.len(), file.display());
    Ok(values)
}
