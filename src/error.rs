use thiserror::Error;

/// Errors raised while constructing or editing a shape generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A shape parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What the parameter was expected to be.
        reason: String,
    },
    /// A direct vertex write targeted a vertex that does not exist.
    #[error("vertex index {index} is out of range for {len} vertices")]
    VertexOutOfRange {
        /// The requested vertex index.
        index: usize,
        /// Number of vertices in the buffer.
        len: usize,
    },
}

/// Checks that a step count describes at least a triangle.
pub(crate) fn validate_steps(steps: u32) -> Result<(), ShapeError> {
    if steps < 3 {
        return Err(ShapeError::InvalidParameter {
            name: "steps",
            reason: format!("expected at least 3, got {steps}"),
        });
    }

    Ok(())
}

/// Checks that a radius is finite and strictly positive.
pub(crate) fn validate_radius(radius: f32) -> Result<(), ShapeError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ShapeError::InvalidParameter {
            name: "radius",
            reason: format!("expected a finite value greater than 0, got {radius}"),
        });
    }

    Ok(())
}

/// Checks that a thickness is finite and not negative.
pub(crate) fn validate_thickness(thickness: f32) -> Result<(), ShapeError> {
    if !thickness.is_finite() || thickness < 0.0 {
        return Err(ShapeError::InvalidParameter {
            name: "thickness",
            reason: format!("expected a finite value of at least 0, got {thickness}"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_below_three_are_rejected() {
        assert!(validate_steps(2).is_err());
        assert!(validate_steps(3).is_ok());
    }

    #[test]
    fn radius_must_be_positive_and_finite() {
        assert!(validate_radius(0.0).is_err());
        assert!(validate_radius(-1.0).is_err());
        assert!(validate_radius(f32::NAN).is_err());
        assert!(validate_radius(f32::INFINITY).is_err());
        assert!(validate_radius(0.5).is_ok());
    }

    #[test]
    fn zero_thickness_is_accepted() {
        assert!(validate_thickness(0.0).is_ok());
        assert!(validate_thickness(-0.1).is_err());
    }

    #[test]
    fn error_messages_name_the_parameter() {
        let err = validate_steps(1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter `steps`: expected at least 3, got 1"
        );
    }
}
