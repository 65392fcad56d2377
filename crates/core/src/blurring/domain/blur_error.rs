use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlurError {
    #[error("invalid raster: {len} pixels for {width}x{height}")]
    InvalidRaster {
        width: usize,
        height: usize,
        len: usize,
    },
}

/// Check that a pixel buffer matches its declared geometry.
pub fn validate_geometry(len: usize, width: usize, height: usize) -> Result<(), BlurError> {
    match width.checked_mul(height) {
        Some(expected) if expected == len => Ok(()),
        _ => Err(BlurError::InvalidRaster { width, height, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_geometry_is_ok() {
        assert!(validate_geometry(12, 4, 3).is_ok());
        assert!(validate_geometry(0, 0, 7).is_ok());
    }

    #[test]
    fn test_mismatch_is_invalid_raster() {
        assert_eq!(
            validate_geometry(11, 4, 3),
            Err(BlurError::InvalidRaster {
                width: 4,
                height: 3,
                len: 11
            })
        );
    }

    #[test]
    fn test_overflowing_geometry_is_invalid() {
        assert!(validate_geometry(0, usize::MAX, 2).is_err());
    }

    #[test]
    fn test_error_message_names_geometry() {
        let err = validate_geometry(5, 2, 2).unwrap_err();
        assert_eq!(err.to_string(), "invalid raster: 5 pixels for 2x2");
    }
}
