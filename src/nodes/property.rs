//! Typed, user-editable node properties
//!
//! A property is only a value model: a typed value plus its constraints and a
//! single-line text form. Reacting to changes is the graph's job
//! (see [`NodeGraph::set_property`](crate::nodes::NodeGraph::set_property)).

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::warn;

use crate::error::{GraphError, GraphResult};
use crate::nodes::pixel::{self, Color, SharedImage};

/// Text written for a file property with no path
pub const NULL_VALUE: &str = "null";

/// Constraints and editing style of a property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    /// Slider or spinner constrained to `min..=max`
    Integer { min: i32, max: i32 },
    Color,
    /// Drop-down over a fixed option list
    Choice { options: Vec<&'static str> },
    Text,
    /// Image loaded from disk
    File,
}

/// A loaded image plus the path it came from
#[derive(Clone, Default)]
pub struct FileSource {
    pub path: Option<PathBuf>,
    pub image: Option<SharedImage>,
}

impl FileSource {
    /// Load an image from `path`, returning the decode failure alongside
    /// a source that remembers the path but carries no image.
    pub fn open(path: &Path) -> (Self, Option<GraphError>) {
        match pixel::load_image(path) {
            Ok(buffer) => (
                Self {
                    path: Some(path.to_path_buf()),
                    image: Some(Arc::new(buffer)),
                },
                None,
            ),
            Err(err) => {
                warn!("Failed to load image {}: {}", path.display(), err);
                (
                    Self {
                        path: Some(path.to_path_buf()),
                        image: None,
                    },
                    Some(err),
                )
            }
        }
    }
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSource")
            .field("path", &self.path)
            .field(
                "image",
                &self.image.as_ref().map(|img| (img.width(), img.height())),
            )
            .finish()
    }
}

impl PartialEq for FileSource {
    fn eq(&self, other: &Self) -> bool {
        let same_image = match (&self.image, &other.image) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.path == other.path && same_image
    }
}

/// Current value of a property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Integer(i32),
    Color(Color),
    Choice(String),
    Text(String),
    File(FileSource),
}

/// A named parameter owned by a node
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub kind: PropertyKind,
    value: PropertyValue,
}

impl Property {
    /// Integer property; the default is clamped into range
    pub fn integer(name: &str, min: i32, max: i32, default: i32) -> Self {
        Self {
            name: name.to_string(),
            kind: PropertyKind::Integer { min, max },
            value: PropertyValue::Integer(default.clamp(min, max)),
        }
    }

    pub fn color(name: &str, default: Color) -> Self {
        Self {
            name: name.to_string(),
            kind: PropertyKind::Color,
            value: PropertyValue::Color(default),
        }
    }

    /// Choice property; starts on the first option
    pub fn choice(name: &str, options: Vec<&'static str>) -> Self {
        let first = options.first().copied().unwrap_or_default().to_string();
        Self {
            name: name.to_string(),
            kind: PropertyKind::Choice { options },
            value: PropertyValue::Choice(first),
        }
    }

    pub fn text(name: &str, default: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PropertyKind::Text,
            value: PropertyValue::Text(default.to_string()),
        }
    }

    pub fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PropertyKind::File,
            value: PropertyValue::File(FileSource::default()),
        }
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// Replace the value after checking it against the kind's constraints.
    /// Integers are clamped; anything else that does not fit is rejected
    /// and the previous value stays in place.
    pub fn set_value(&mut self, value: PropertyValue) -> GraphResult<()> {
        let value = self.validate(value)?;
        self.value = value;
        Ok(())
    }

    fn validate(&self, value: PropertyValue) -> GraphResult<PropertyValue> {
        match (&self.kind, value) {
            (PropertyKind::Integer { min, max }, PropertyValue::Integer(v)) => {
                Ok(PropertyValue::Integer(v.clamp(*min, *max)))
            }
            (PropertyKind::Color, PropertyValue::Color(c)) => {
                if c.0.iter().all(|ch| ch.is_finite()) {
                    Ok(PropertyValue::Color(c))
                } else {
                    Err(GraphError::invalid_property(format!(
                        "{}: color channels must be finite",
                        self.name
                    )))
                }
            }
            (PropertyKind::Choice { options }, PropertyValue::Choice(choice)) => {
                if options.iter().any(|opt| *opt == choice) {
                    Ok(PropertyValue::Choice(choice))
                } else {
                    Err(GraphError::invalid_property(format!(
                        "{}: '{}' is not one of {:?}",
                        self.name, choice, options
                    )))
                }
            }
            (PropertyKind::Text, PropertyValue::Text(text)) => {
                if text.contains(['\n', '\r']) {
                    Err(GraphError::invalid_property(format!(
                        "{}: text must be a single line",
                        self.name
                    )))
                } else {
                    Ok(PropertyValue::Text(text))
                }
            }
            (PropertyKind::File, PropertyValue::File(source)) => Ok(PropertyValue::File(source)),
            (kind, other) => Err(GraphError::invalid_property(format!(
                "{}: {:?} does not fit a {:?} property",
                self.name, other, kind
            ))),
        }
    }

    /// Single-line text form used by the graph file format
    pub fn serialize_value(&self) -> String {
        match &self.value {
            PropertyValue::Integer(v) => v.to_string(),
            PropertyValue::Color(c) => pixel::format_color(*c),
            PropertyValue::Choice(s) | PropertyValue::Text(s) => s.clone(),
            PropertyValue::File(source) => source
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| NULL_VALUE.to_string()),
        }
    }

    /// Parse a text value for this property's kind without applying it.
    /// File paths are loaded eagerly; a file that fails to decode still
    /// parses, it just carries no image.
    pub fn parse_value(&self, text: &str) -> GraphResult<PropertyValue> {
        match &self.kind {
            PropertyKind::Integer { .. } => text
                .trim()
                .parse::<i32>()
                .map(PropertyValue::Integer)
                .map_err(|e| {
                    GraphError::invalid_property(format!("{}: '{}': {}", self.name, text, e))
                }),
            PropertyKind::Color => pixel::parse_color(text)
                .map(PropertyValue::Color)
                .ok_or_else(|| {
                    GraphError::invalid_property(format!("{}: '{}' is not a color", self.name, text))
                }),
            PropertyKind::Choice { .. } => Ok(PropertyValue::Choice(text.to_string())),
            PropertyKind::Text => Ok(PropertyValue::Text(text.to_string())),
            PropertyKind::File => {
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed == NULL_VALUE {
                    Ok(PropertyValue::File(FileSource::default()))
                } else {
                    let (source, _) = FileSource::open(Path::new(trimmed));
                    Ok(PropertyValue::File(source))
                }
            }
        }
    }

    /// Parse and apply a text value; on failure the previous value is kept
    pub fn set_from_str(&mut self, text: &str) -> GraphResult<()> {
        let value = self.parse_value(text)?;
        self.set_value(value)
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self.value {
            PropertyValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self.value {
            PropertyValue::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            PropertyValue::Choice(s) | PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileSource> {
        match &self.value {
            PropertyValue::File(source) => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::pixel::{BLACK, LIME};

    #[test]
    fn test_integer_clamps() {
        let mut p = Property::integer("Opacity (%)", 0, 100, 250);
        assert_eq!(p.as_integer(), Some(100));
        p.set_value(PropertyValue::Integer(-5)).unwrap();
        assert_eq!(p.as_integer(), Some(0));
        p.set_from_str(" 42 ").unwrap();
        assert_eq!(p.serialize_value(), "42");
    }

    #[test]
    fn test_invalid_text_keeps_previous_value() {
        let mut p = Property::integer("Width", 0, 4500, 100);
        assert!(p.set_from_str("wide").is_err());
        assert_eq!(p.as_integer(), Some(100));

        let mut c = Property::color("Color", BLACK);
        assert!(c.set_from_str("not a color").is_err());
        assert_eq!(c.as_color(), Some(BLACK));
    }

    #[test]
    fn test_choice_rejects_unknown_option() {
        let mut p = Property::choice("Mode", vec!["Horizontal", "Vertical", "Both"]);
        assert_eq!(p.as_str(), Some("Horizontal"));
        assert!(p.set_from_str("Diagonal").is_err());
        assert_eq!(p.as_str(), Some("Horizontal"));
        p.set_from_str("Both").unwrap();
        assert_eq!(p.as_str(), Some("Both"));
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let mut p = Property::text("Name", "Invert");
        assert!(p.set_value(PropertyValue::Integer(3)).is_err());
        assert!(p.set_value(PropertyValue::Text("a\nb".into())).is_err());
        assert!(p.set_value(PropertyValue::Text("Invert\r".into())).is_err());
        assert!(p.set_from_str("a\rb").is_err());
        assert_eq!(p.as_str(), Some("Invert"));
    }

    #[test]
    fn test_color_serialization() {
        let mut p = Property::color("Key Color", LIME);
        assert_eq!(p.serialize_value(), "rgba(0, 255, 0, 1)");
        p.set_from_str("#ff0000").unwrap();
        assert_eq!(p.serialize_value(), "rgba(255, 0, 0, 1)");
    }

    #[test]
    fn test_file_property_null_and_missing_path() {
        let mut p = Property::file("File");
        assert_eq!(p.serialize_value(), NULL_VALUE);
        p.set_from_str("/definitely/not/here.png").unwrap();
        let source = p.as_file().unwrap();
        assert!(source.image.is_none());
        assert_eq!(p.serialize_value(), "/definitely/not/here.png");
        p.set_from_str("null").unwrap();
        assert_eq!(p.serialize_value(), NULL_VALUE);
    }
}
