//! Input validation shared by the revolvers and the path builder.
//!
//! Every check runs before any face is computed. A failed check aborts the
//! whole call and names the offending argument.

use thiserror::Error;

/// Largest face grid a single sweep call will build.
///
/// At 96 bytes per face this keeps one mesh well inside a 4 GiB WASM heap.
pub const MAX_FACES: usize = 1 << 24;

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Errors raised when sweep inputs violate their shape, type or range constraints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// A coordinate sequence or array has no elements.
    #[error("`{name}` must not be empty")]
    EmptyInput { name: &'static str },

    /// Two sequences that pair up element-wise differ in length.
    #[error("`{left}` and `{right}` must have the same length, got {left_len} and {right_len}")]
    LengthMismatch {
        left: &'static str,
        right: &'static str,
        left_len: usize,
        right_len: usize,
    },

    /// Too few points to form a single segment.
    #[error("`{name}` needs at least {min} points, got {actual}")]
    NotEnoughPoints {
        name: &'static str,
        min: usize,
        actual: usize,
    },

    /// An array is not two-dimensional with the expected column count.
    #[error("`{name}` must be of shape (n, {expected_columns}), got {actual}")]
    InvalidShape {
        name: &'static str,
        expected_columns: usize,
        actual: String,
    },

    /// A count is zero or negative.
    #[error("`{name}` must be a positive integer")]
    NotPositive { name: &'static str },

    /// A count has a fractional part.
    #[error("`{name}` must be an integer, got {value}")]
    NotAnInteger { name: &'static str, value: f64 },

    /// A value is NaN or infinite.
    #[error("`{name}` must contain only finite values")]
    NonFiniteInput { name: &'static str },

    /// A count is larger than the output it drives can hold.
    #[error("`{name}` must be at most {max}")]
    CountTooLarge { name: &'static str, max: usize },

    /// The curve and sweep segment counts multiply past [`MAX_FACES`].
    #[error("a grid of {curve_segments} curve x {sweep_segments} sweep segments exceeds {max} faces")]
    TooManyFaces {
        curve_segments: usize,
        sweep_segments: usize,
        max: usize,
    },
}

/// Converts a count that arrives as a floating point number into a `usize`.
///
/// Rejects non-finite values, fractions and anything below one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn positive_count(name: &'static str, value: f64) -> SweepResult<usize> {
    if !value.is_finite() {
        return Err(SweepError::NonFiniteInput { name });
    }
    if value.fract() != 0.0 {
        return Err(SweepError::NotAnInteger { name, value });
    }
    if value < 1.0 {
        return Err(SweepError::NotPositive { name });
    }
    Ok(value as usize)
}

pub(crate) fn require_positive(name: &'static str, count: usize) -> SweepResult<usize> {
    if count == 0 {
        return Err(SweepError::NotPositive { name });
    }
    Ok(count)
}

pub(crate) fn require_at_most(name: &'static str, count: usize, max: usize) -> SweepResult<usize> {
    if count > max {
        return Err(SweepError::CountTooLarge { name, max });
    }
    Ok(count)
}

/// Face count of a `curve_segments x sweep_segments` grid, if it fits in [`MAX_FACES`].
pub(crate) fn require_face_budget(
    curve_segments: usize,
    sweep_segments: usize,
) -> SweepResult<usize> {
    curve_segments
        .checked_mul(sweep_segments)
        .filter(|&faces| faces <= MAX_FACES)
        .ok_or(SweepError::TooManyFaces {
            curve_segments,
            sweep_segments,
            max: MAX_FACES,
        })
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> SweepResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SweepError::NonFiniteInput { name })
    }
}

pub(crate) fn require_all_finite<'a>(
    name: &'static str,
    values: impl IntoIterator<Item = &'a f64>,
) -> SweepResult<()> {
    if values.into_iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SweepError::NonFiniteInput { name })
    }
}

pub(crate) fn require_min_points(name: &'static str, actual: usize, min: usize) -> SweepResult<()> {
    if actual == 0 {
        return Err(SweepError::EmptyInput { name });
    }
    if actual < min {
        return Err(SweepError::NotEnoughPoints { name, min, actual });
    }
    Ok(())
}

/// Reads ragged rows as `(n, 2)` rows.
pub(crate) fn pairs_from_rows<R: AsRef<[f64]>>(
    name: &'static str,
    rows: &[R],
) -> SweepResult<Vec<[f64; 2]>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| match row.as_ref() {
            &[a, b] => Ok([a, b]),
            other => Err(SweepError::InvalidShape {
                name,
                expected_columns: 2,
                actual: format!("row {idx} with {} columns", other.len()),
            }),
        })
        .collect()
}

/// Reads a row-major flat buffer described by `shape` as `(n, 2)` rows.
pub(crate) fn pairs_from_shape(
    name: &'static str,
    data: &[f64],
    shape: &[usize],
) -> SweepResult<Vec<[f64; 2]>> {
    let &[rows, 2] = shape else {
        return Err(SweepError::InvalidShape {
            name,
            expected_columns: 2,
            actual: format!("shape {shape:?}"),
        });
    };
    if rows.checked_mul(2) != Some(data.len()) {
        return Err(SweepError::InvalidShape {
            name,
            expected_columns: 2,
            actual: format!("{} values for shape {shape:?}", data.len()),
        });
    }
    Ok(data.chunks_exact(2).map(|pair| [pair[0], pair[1]]).collect())
}
