use std::collections::BTreeMap;
use std::fs::write;
use std::path::Path;

use serde::Serialize;

/// Default name of the property that receives the calculated version.
pub const DEFAULT_VERSION_PROPERTY: &str = "rpm.version";

/// Default name of the property that receives the calculated release.
pub const DEFAULT_RELEASE_PROPERTY: &str = "rpm.release";

/// This trait is implemented by things that can store named string properties for later use by
/// the build.
pub trait PropertySink {
    /// Set the property `key` to `value`, replacing any previous value.
    fn set_property(&mut self, key: &str, value: &str);
}

/// Ordered set of build properties.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty set of properties.
    pub fn new() -> Properties {
        Properties::default()
    }

    /// Look up the value of a property.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|value| value.as_str())
    }

    /// Returns `true` if no property has been set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render the properties as `key=value` lines.
    pub fn to_properties_string(&self) -> String {
        let mut contents = String::new();

        for (key, value) in &self.values {
            contents.push_str(&escape(key, true));
            contents.push('=');
            contents.push_str(&escape(value, false));
            contents.push('\n');
        }

        contents
    }

    /// Render the properties as a JSON object.
    pub fn to_json_string(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|error| error.to_string())
    }

    /// Write the rendered properties to a file.
    pub fn write_to(&self, path: &Path, json: bool) -> Result<(), String> {
        let contents = if json {
            let mut contents = self.to_json_string()?;
            contents.push('\n');
            contents
        } else {
            self.to_properties_string()
        };

        if let Err(error) = write(path, contents) {
            return Err(format!("Failed to write {}: {}", path.display(), error));
        };

        Ok(())
    }
}

impl PropertySink for Properties {
    fn set_property(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

// same escaping as java.util.Properties::store; spaces are escaped everywhere in keys but only
// in leading position in values
fn escape(text: &str, key: bool) -> String {
    let mut escaped = String::with_capacity(text.len());

    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '=' | ':' | '#' | '!' => {
                escaped.push('\\');
                escaped.push(c);
            },
            ' ' if key || i == 0 => escaped.push_str("\\ "),
            _ => escaped.push(c),
        }
    }

    escaped
}
