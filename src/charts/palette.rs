use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Fixed mapping from category keys to colors.
///
/// Keys take colors from `range` in insertion order, cycling when there are
/// more keys than colors.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalPalette {
    colors: IndexMap<String, Color>,
}

impl OrdinalPalette {
    pub fn new<I, S>(keys: I, range: &[Color]) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if range.is_empty() {
            return Err(ChartError::InvalidData(
                "palette range must not be empty".to_owned(),
            ));
        }
        let mut colors = IndexMap::new();
        for key in keys {
            let next = range[colors.len() % range.len()];
            colors.entry(key.into()).or_insert(next);
        }
        Ok(Self { colors })
    }

    /// Parses `#rrggbb` strings for the range.
    pub fn from_hex<I, S, H>(keys: I, range: &[H]) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        H: AsRef<str>,
    {
        let range = range
            .iter()
            .map(|hex| Color::from_hex(hex.as_ref()))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(keys, &range)
    }

    #[must_use]
    pub fn color(&self, key: &str) -> Option<Color> {
        self.colors.get(key).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(key, color)| (key.as_str(), *color))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
