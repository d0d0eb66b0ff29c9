use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Accept a bare `:` segment as a wildcard with an empty name.
    pub allow_empty_wildcard_name: bool,
    /// Upper bound on segments per pattern or query; `None` leaves it unbounded.
    pub max_segments: Option<usize>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            allow_empty_wildcard_name: true,
            max_segments: None,
        }
    }
}

impl TreeOptions {
    pub fn builder() -> TreeOptionsBuilder {
        TreeOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_segments == Some(0) {
            return Err(OptionsError::MaxSegmentsInvalid { provided: 0 });
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn exceeds_segment_limit(&self, segments: usize) -> Option<usize> {
        self.max_segments.filter(|&limit| segments > limit)
    }
}

#[derive(Debug, Default, Clone)]
pub struct TreeOptionsBuilder {
    options: TreeOptions,
}

impl TreeOptionsBuilder {
    pub fn allow_empty_wildcard_name(mut self, value: bool) -> Self {
        self.options.allow_empty_wildcard_name = value;
        self
    }

    pub fn max_segments(mut self, value: usize) -> Self {
        self.options.max_segments = Some(value);
        self
    }

    pub fn build(self) -> Result<TreeOptions, OptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("max_segments must be at least 1 (got {provided})")]
    MaxSegmentsInvalid { provided: usize },
}
