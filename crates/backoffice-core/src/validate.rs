// Client-side validation
//
// The only business rules enforced on this side of the wire: required
// fields, event date ordering, non-negative price, and the 3MB cap on
// inline image uploads. Everything else is the backend's problem.

use chrono::{NaiveDate, Utc};

use crate::error::{CoreError, Result};

/// Maximum decoded size of an inline `data:` URL image.
pub const MAX_IMAGE_BYTES: usize = 3 * 1024 * 1024;

/// Reject empty or whitespace-only required fields.
pub fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Minimal email shape check, `x@y.z`.
pub fn require_email(field: &str, value: &str) -> Result<()> {
    require(field, value)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(CoreError::validation(format!("{field} is not a valid email")));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` form field.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    require(field, value)?;
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::validation(format!("{field} is not a valid date (YYYY-MM-DD)")))
}

/// Event dates must be ordered and must not lie in the past.
pub fn check_date_order(start_date: NaiveDate, end_date: NaiveDate) -> Result<()> {
    if end_date < start_date {
        return Err(CoreError::validation(
            "end date must not be before start date",
        ));
    }
    let today = Utc::now().date_naive();
    if start_date < today {
        return Err(CoreError::validation("start date must not be in the past"));
    }
    Ok(())
}

/// Enforce the upload cap on inline images. Plain URLs pass through
/// unchecked; `data:` URLs are rejected when the decoded payload exceeds
/// [`MAX_IMAGE_BYTES`].
pub fn check_image(image: &str) -> Result<()> {
    let Some(rest) = image.strip_prefix("data:") else {
        return Ok(());
    };
    let Some((_, encoded)) = rest.split_once("base64,") else {
        return Ok(());
    };
    if base64::decoded_len_estimate(encoded.len()) > MAX_IMAGE_BYTES {
        return Err(CoreError::validation("image exceeds the 3MB upload limit"));
    }
    Ok(())
}

/// Parse a comma-separated id list form field. Whitespace-tolerant;
/// non-numeric entries are dropped rather than rejected.
pub fn parse_id_list(value: &str) -> Vec<i64> {
    value
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

/// Render an id list back into the comma-separated form representation.
pub fn format_id_list(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn required_field_rejects_whitespace() {
        assert!(require("name", "  ").is_err());
        assert!(require("name", "Web").is_ok());
    }

    #[test]
    fn email_shape_check() {
        assert!(require_email("email", "admin@admin.com").is_ok());
        assert!(require_email("email", "admin").is_err());
        assert!(require_email("email", "admin@admin").is_err());
        assert!(require_email("email", "@admin.com").is_err());
    }

    #[test]
    fn end_date_before_start_date_is_rejected() {
        let start = "2030-05-10".parse().unwrap();
        let end = "2030-05-09".parse().unwrap();
        assert!(check_date_order(start, end).is_err());
        assert!(check_date_order(start, start).is_ok());
    }

    #[test]
    fn past_dates_are_rejected() {
        let start = "2019-01-01".parse().unwrap();
        let end = "2019-01-02".parse().unwrap();
        assert!(check_date_order(start, end).is_err());
    }

    #[test]
    fn image_cap_is_inclusive_at_exactly_3mb() {
        let exact = base64::engine::general_purpose::STANDARD.encode(vec![0u8; MAX_IMAGE_BYTES]);
        let over =
            base64::engine::general_purpose::STANDARD.encode(vec![0u8; MAX_IMAGE_BYTES + 1]);
        assert!(check_image(&format!("data:image/png;base64,{exact}")).is_ok());
        assert!(check_image(&format!("data:image/png;base64,{over}")).is_err());
    }

    #[test]
    fn plain_urls_bypass_the_image_cap() {
        assert!(check_image("https://example.com/big-image.png").is_ok());
        assert!(check_image("").is_ok());
    }

    #[test]
    fn id_list_parsing_is_whitespace_tolerant_and_drops_garbage() {
        assert_eq!(parse_id_list("1, 2 ,3"), vec![1, 2, 3]);
        assert_eq!(parse_id_list("1, x, 3,"), vec![1, 3]);
        assert_eq!(parse_id_list(""), Vec::<i64>::new());
        assert_eq!(format_id_list(&[1, 2, 3]), "1, 2, 3");
    }
}
