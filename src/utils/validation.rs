use crate::utils::error::{Result, ShippingError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Keeps only the ASCII digits of a postal code, so `01310-100` becomes `01310100`.
pub fn clean_postal_code(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn validate_postal_code(raw: &str) -> Result<String> {
    let cleaned = clean_postal_code(raw);
    if cleaned.len() != 8 {
        return Err(ShippingError::InvalidPostalCode {
            value: raw.to_string(),
        });
    }
    Ok(cleaned)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_route_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if !path.starts_with('/') {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Route path must start with '/'".to_string(),
        });
    }

    if path.chars().any(char::is_whitespace) {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Route path cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ShippingError::ValidationError {
            message: format!("{} must be a non-negative number, got {}", field_name, value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
