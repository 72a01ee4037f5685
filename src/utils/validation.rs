use crate::utils::error::{ShapeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A usable dimension is finite and strictly positive.
pub fn validate_dimension(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ShapeError::InvalidDimension {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(ShapeError::ConfigError {
            message: format!("'{}' must contain at least one entry", field_name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("length", 20.0).is_ok());
        assert!(validate_dimension("length", 0.001).is_ok());
        assert!(validate_dimension("length", 0.0).is_err());
        assert!(validate_dimension("length", -3.0).is_err());
        assert!(validate_dimension("length", f64::NAN).is_err());
        assert!(validate_dimension("length", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_dimension_names_field() {
        match validate_dimension("shapes[2].radius", -1.0) {
            Err(ShapeError::InvalidDimension { field, value }) => {
                assert_eq!(field, "shapes[2].radius");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("shapes", &[1]).is_ok());
        assert!(validate_non_empty::<u8>("shapes", &[]).is_err());
    }
}
