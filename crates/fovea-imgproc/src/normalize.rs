//! Feature vector normalization.

use fovea_image::ImageError;

/// Scale a vector by the reciprocal of its signed maximum.
///
/// After normalization the maximum element equals 1; elements below the
/// negated maximum end up below -1, which is accepted. An empty slice is a
/// no-op.
///
/// # Errors
///
/// Returns [`ImageError::DegenerateVector`] when the maximum is not strictly
/// positive (all-zero or all-non-positive input) or is NaN. The slice is left
/// untouched in that case.
///
/// # Example
///
/// ```
/// use fovea_imgproc::normalize::normalize_max;
///
/// let mut vec = [1.0, 4.0, -2.0];
/// normalize_max(&mut vec).unwrap();
/// assert_eq!(vec, [0.25, 1.0, -0.5]);
/// ```
pub fn normalize_max(vec: &mut [f64]) -> Result<(), ImageError> {
    let Some(&first) = vec.first() else {
        return Ok(());
    };

    let mut max = first;
    for &v in &vec[1..] {
        if v > max {
            max = v;
        }
    }

    if max.is_nan() || max <= 0.0 {
        return Err(ImageError::DegenerateVector(max));
    }

    let fac = 1.0 / max;
    for v in vec.iter_mut() {
        *v *= fac;
    }

    Ok(())
}
