use kurbo::Point;

/// Convenience result type used across pathviz.
pub type PathvizResult<T> = Result<T, PathvizError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum PathvizError {
    /// Invalid user-provided configuration or dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// A trace row that could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the source file.
        line: u64,
        /// What was wrong with the row.
        message: String,
    },

    /// Two consecutive path points coincide or are not finite, so the segment has no
    /// direction.
    #[error("undefined direction: segment {index} starting at ({}, {}) has zero or non-finite length", .at.x, .at.y)]
    DegenerateSegment {
        /// Index of the segment's first point in the path.
        index: usize,
        /// The repeated point.
        at: Point,
    },

    /// Errors while building or rasterizing a plot.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PathvizError {
    /// Build a [`PathvizError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PathvizError::Parse`] value.
    pub fn parse(line: u64, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Build a [`PathvizError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
