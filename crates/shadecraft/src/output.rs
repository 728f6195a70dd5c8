//! Rendering theme documents to text.
//!
//! [`OutputFormat`] picks the encoding of a [`ThemeDocument`] or
//! [`ConfigDocument`]:
//!
//! - `Json` - pretty-printed JSON
//! - `Yaml` - YAML
//! - `Js` - a CommonJS module (`module.exports = {...};`) that a build tool
//!   can load as its config file
//!
//! [`ThemeDocument`]: crate::ThemeDocument
//! [`ConfigDocument`]: crate::ConfigDocument

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;

/// Output encoding for theme documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Js,
}

impl OutputFormat {
    /// File extension conventionally used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Js => "js",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "js" => Ok(OutputFormat::Js),
            other => Err(format!(
                "unknown output format '{}' (expected json, yaml or js)",
                other
            )),
        }
    }
}

/// Serializes `document` in `format`. Output always ends with a newline.
///
/// # Errors
///
/// Returns [`Error::Serialization`](crate::Error::Serialization) if the
/// serializer rejects the document.
pub fn render<T: Serialize>(document: &T, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)?,
        OutputFormat::Yaml => serde_yaml::to_string(document)?,
        OutputFormat::Js => format!(
            "module.exports = {};",
            serde_json::to_string_pretty(document)?
        ),
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([("top", "linear-gradient(0deg, #000000, #ffffff)")])
    }

    #[test]
    fn test_json() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        assert_eq!(
            out,
            "{\n  \"top\": \"linear-gradient(0deg, #000000, #ffffff)\"\n}\n"
        );
    }

    #[test]
    fn test_yaml() {
        let out = render(&sample(), OutputFormat::Yaml).unwrap();
        assert!(out.starts_with("top: "));
        let back: BTreeMap<String, String> = serde_yaml::from_str(&out).unwrap();
        assert_eq!(back["top"], "linear-gradient(0deg, #000000, #ffffff)");
    }

    #[test]
    fn test_js_module() {
        let out = render(&sample(), OutputFormat::Js).unwrap();
        assert!(out.starts_with("module.exports = {\n"));
        assert!(out.ends_with("};\n"));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("toml".parse::<OutputFormat>().is_err());
    }
}
