use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/**
    Widths used by image-bearing components unless configured otherwise.
*/
pub const DEFAULT_WIDTHS: [u32; 3] = [320, 640, 1024];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidthsError {
    #[error("at least one width is required")]
    Empty,
    #[error("width must be a positive integer, got '{0}'")]
    Invalid(String),
}

/**
    An ordered, non-empty list of positive pixel widths to
    generate image variants for.

    Order is preserved exactly as given, duplicates are kept.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Widths(Vec<u32>);

impl Widths {
    /**
        Creates a new list of widths, validating that it is
        non-empty and that every width is greater than zero.
    */
    #[allow(clippy::missing_errors_doc)]
    pub fn new(widths: Vec<u32>) -> Result<Self, WidthsError> {
        if widths.is_empty() {
            return Err(WidthsError::Empty);
        }
        if widths.contains(&0) {
            return Err(WidthsError::Invalid("0".to_string()));
        }
        Ok(Self(widths))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /**
        Always `false` - a `Widths` can not be constructed empty.
    */
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Widths {
    fn default() -> Self {
        Self(DEFAULT_WIDTHS.to_vec())
    }
}

impl TryFrom<Vec<u32>> for Widths {
    type Error = WidthsError;
    fn try_from(widths: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(widths)
    }
}

impl FromStr for Widths {
    type Err = WidthsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let widths = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.parse::<u32>() {
                Ok(width) if width > 0 => Ok(width),
                _ => Err(WidthsError::Invalid(part.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(widths)
    }
}

impl fmt::Display for Widths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, width) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{width}")?;
        }
        Ok(())
    }
}

impl Serialize for Widths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
