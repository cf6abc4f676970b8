// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::Document;
use crate::parser;
use crate::writer;
use crate::CfgError;

mod access;
mod conversion;

/// A parsed document together with the file it was loaded from.
///
/// This is the convenience surface for applications: load, read typed
/// values, mutate the document, save. The document itself is plain data and
/// can be taken out with [`PlainConfig::into_document`].
pub struct PlainConfig {
    document: Document,
    path: Option<PathBuf>,
}

impl PlainConfig {
    /// Load a config file.
    ///
    /// A leading `~` in the path is expanded against the home directory.
    /// Reading the file can fail; parsing the content cannot.
    ///
    /// # Example
    /// ```ignore
    /// let config = PlainConfig::from_file("app.cfg")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CfgError> {
        let resolved = expand_home(path.as_ref());
        let content = fs::read_to_string(&resolved).map_err(|e| CfgError::FileError {
            message: format!("Failed to read file: {}", e),
            path: resolved.display().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
        })?;
        Ok(Self {
            document: parser::parse(&content),
            path: Some(resolved),
        })
    }

    /// Load from a primary path, falling back to a second path when the
    /// primary file is missing.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, CfgError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(CfgError::FileError { .. }) => Self::from_file(&fallback).map_err(|e| match e {
                CfgError::FileError { message, .. } => CfgError::FileError {
                    message: format!(
                        "Failed to load config from primary path '{}' or fallback path '{}': {}",
                        primary.as_ref().display(),
                        fallback.as_ref().display(),
                        message
                    ),
                    path: format!(
                        "{} (fallback: {})",
                        primary.as_ref().display(),
                        fallback.as_ref().display()
                    ),
                    hint: Some("Check that at least one of the config files exists".into()),
                },
                other => other,
            }),
            Err(other) => Err(other),
        }
    }

    /// Parse a config from a string. Never fails; malformed input yields a
    /// partial document.
    pub fn from_str(content: &str) -> Self {
        Self {
            document: parser::parse(content),
            path: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// The file this config was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Serialize and write back to the file the config was loaded from.
    pub fn save(&self) -> Result<(), CfgError> {
        match &self.path {
            Some(path) => write_to(path, &self.document),
            None => Err(CfgError::FileError {
                message: "Config was not loaded from a file".into(),
                path: String::new(),
                hint: Some("Use save_as with an explicit path".into()),
            }),
        }
    }

    /// Serialize and write to an explicit path (`~` expanded).
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<(), CfgError> {
        write_to(&expand_home(path.as_ref()), &self.document)
    }
}

impl From<Document> for PlainConfig {
    fn from(document: Document) -> Self {
        Self { document, path: None }
    }
}

fn write_to(path: &Path, document: &Document) -> Result<(), CfgError> {
    fs::write(path, writer::write_document(document)).map_err(|e| CfgError::FileError {
        message: format!("Failed to write file: {}", e),
        path: path.display().to_string(),
        hint: Some("Check that the directory exists and is writable".into()),
    })
}

/// Expand a leading `~` against the home directory.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
