use super::*;
use crate::ast::Value;

impl PlainConfig {
    /// Get a typed value using dot notation.
    ///
    /// `"section.variable"` addresses a variable inside a named section; a
    /// bare `"variable"` searches every section in stored order and takes
    /// the first match.
    ///
    /// # Examples
    /// ```no_run
    /// # use plain_cfg::PlainConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = PlainConfig::from_file("app.cfg")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// let debug: bool = config.get("debug")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns an error if the path doesn't exist or the value can't be
    /// converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, CfgError>
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value)
    }

    /// Get an optional typed value. A missing path is `Ok(None)`; a present
    /// value of the wrong type is still an error.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, CfgError>
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(CfgError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// ```no_run
    /// # use plain_cfg::PlainConfig;
    /// # let config = PlainConfig::from_str("");
    /// let timeout = config.get_or("server.timeout", 30i32);
    /// let debug = config.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Check whether a path resolves to a variable.
    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    /// Get the raw `Value` at a path.
    pub fn get_value(&self, path: &str) -> Result<Value, CfgError> {
        let not_found = || CfgError::NotFound {
            path: path.to_string(),
            hint: Some("Check that the path exists in your config file".into()),
        };

        match path.split_once('.') {
            Some((section, variable)) => self
                .document
                .section(section)
                .and_then(|s| s.variable(variable))
                .map(|v| v.value.clone())
                .ok_or_else(not_found),
            None => self
                .document
                .sections
                .iter()
                .find_map(|s| s.variable(path))
                .map(|v| v.value.clone())
                .ok_or_else(not_found),
        }
    }

    /// All variable names in a section, in stored order.
    pub fn keys(&self, section: &str) -> Result<Vec<String>, CfgError> {
        self.document
            .section(section)
            .map(|s| s.variables.iter().map(|v| v.name.clone()).collect())
            .ok_or_else(|| CfgError::NotFound {
                path: section.to_string(),
                hint: Some("Check that the section exists in your config file".into()),
            })
    }
}
