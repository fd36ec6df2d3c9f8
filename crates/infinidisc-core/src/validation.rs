//! Request parameter parsing and validation.
//!
//! Absent parameters take their defaults; present-but-malformed parameters are
//! rejected with a [`ValidationError`] and never coerced.

use std::ops::Range;

use crate::error::{ErrorCode, ValidationError};
use crate::record::Locale;

/// Default values for absent request parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDefaults {
    /// Seed used when the caller supplies none.
    pub user_seed: String,
    /// First page.
    pub page: u64,
    /// Records per page.
    pub page_size: u32,
    /// Largest accepted page size.
    pub max_page_size: u32,
    /// Catalog locale.
    pub locale: Locale,
    /// Target mean of the likes distribution.
    pub average_likes: f64,
}

impl Default for ParamDefaults {
    fn default() -> Self {
        Self {
            user_seed: "default".to_string(),
            page: 0,
            page_size: 20,
            max_page_size: 100,
            locale: Locale::EnUs,
            average_likes: 5.0,
        }
    }
}

/// Parses a record index.
pub fn parse_index(raw: &str) -> Result<u64, ValidationError> {
    raw.parse::<u64>().map_err(|_| {
        ValidationError::new(
            ErrorCode::InvalidIndex,
            "index",
            format!("expected a non-negative integer, got '{}'", raw),
        )
    })
}

/// Parses an optional page number.
pub fn parse_page(raw: Option<&str>, default: u64) -> Result<u64, ValidationError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            ValidationError::new(
                ErrorCode::InvalidPage,
                "page",
                format!("expected a non-negative integer, got '{}'", raw),
            )
        }),
    }
}

/// Parses an optional page size, which must lie in `1..=max`.
pub fn parse_page_size(raw: Option<&str>, default: u32, max: u32) -> Result<u32, ValidationError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let size = raw.parse::<u32>().map_err(|_| {
        ValidationError::new(
            ErrorCode::InvalidPageSize,
            "pageSize",
            format!("expected a positive integer, got '{}'", raw),
        )
    })?;
    if size == 0 || size > max {
        return Err(ValidationError::new(
            ErrorCode::InvalidPageSize,
            "pageSize",
            format!("must be 1-{}, got {}", max, size),
        ));
    }
    Ok(size)
}

/// Checks that an average-likes value is finite and non-negative.
pub fn validate_average_likes(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            ErrorCode::InvalidAverageLikes,
            "averageLikes",
            format!("must be a finite number >= 0, got {}", value),
        ));
    }
    Ok(value)
}

/// Parses an optional average-likes value.
pub fn parse_average_likes(raw: Option<&str>, default: f64) -> Result<f64, ValidationError> {
    match raw {
        None => validate_average_likes(default),
        Some(raw) => {
            let value = raw.parse::<f64>().map_err(|_| {
                ValidationError::new(
                    ErrorCode::InvalidAverageLikes,
                    "averageLikes",
                    format!("expected a number, got '{}'", raw),
                )
            })?;
            validate_average_likes(value)
        }
    }
}

/// A validated request for one page of catalog records.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    /// User-chosen seed.
    pub user_seed: String,
    /// Zero-based page number.
    pub page: u64,
    /// Records per page.
    pub page_size: u32,
    /// Catalog locale.
    pub locale: Locale,
    /// Target mean of the likes distribution.
    pub average_likes: f64,
}

impl PageRequest {
    /// Builds a page request from raw, optional parameters.
    pub fn from_raw(
        user_seed: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
        locale: Option<&str>,
        average_likes: Option<&str>,
        defaults: &ParamDefaults,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            user_seed: user_seed
                .map(str::to_string)
                .unwrap_or_else(|| defaults.user_seed.clone()),
            page: parse_page(page, defaults.page)?,
            page_size: parse_page_size(page_size, defaults.page_size, defaults.max_page_size)?,
            locale: locale.map(Locale::parse).unwrap_or(defaults.locale),
            average_likes: parse_average_likes(average_likes, defaults.average_likes)?,
        };
        request.index_range()?;
        Ok(request)
    }

    /// Range of record indices covered by this page.
    pub fn index_range(&self) -> Result<Range<u64>, ValidationError> {
        let overflow = || {
            ValidationError::new(
                ErrorCode::IndexOverflow,
                "page",
                format!(
                    "page {} of size {} exceeds the index space",
                    self.page, self.page_size
                ),
            )
        };
        let start = self
            .page
            .checked_mul(self.page_size as u64)
            .ok_or_else(overflow)?;
        let end = start
            .checked_add(self.page_size as u64)
            .ok_or_else(overflow)?;
        Ok(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0").unwrap(), 0);
        assert_eq!(parse_index("12345").unwrap(), 12345);
        assert_eq!(parse_index("-1").unwrap_err().code, ErrorCode::InvalidIndex);
        assert_eq!(parse_index("1.5").unwrap_err().code, ErrorCode::InvalidIndex);
        assert_eq!(parse_index("abc").unwrap_err().code, ErrorCode::InvalidIndex);
        assert_eq!(parse_index("").unwrap_err().code, ErrorCode::InvalidIndex);
    }

    #[test]
    fn test_absent_values_take_defaults() {
        assert_eq!(parse_page(None, 0).unwrap(), 0);
        assert_eq!(parse_page_size(None, 20, 100).unwrap(), 20);
        assert_eq!(parse_average_likes(None, 5.0).unwrap(), 5.0);
    }

    #[test]
    fn test_page_size_range() {
        assert_eq!(parse_page_size(Some("1"), 20, 100).unwrap(), 1);
        assert_eq!(parse_page_size(Some("100"), 20, 100).unwrap(), 100);
        assert!(parse_page_size(Some("0"), 20, 100).is_err());
        assert!(parse_page_size(Some("101"), 20, 100).is_err());
        assert!(parse_page_size(Some("ten"), 20, 100).is_err());
    }

    #[test]
    fn test_average_likes_rejects_malformed_values() {
        assert_eq!(parse_average_likes(Some("0"), 5.0).unwrap(), 0.0);
        assert_eq!(parse_average_likes(Some("9.5"), 5.0).unwrap(), 9.5);
        for raw in ["-1", "NaN", "inf", "five", ""] {
            let err = parse_average_likes(Some(raw), 5.0).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidAverageLikes, "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_page_request_defaults() {
        let defaults = ParamDefaults::default();
        let req = PageRequest::from_raw(None, None, None, None, None, &defaults).unwrap();
        assert_eq!(
            req,
            PageRequest {
                user_seed: "default".to_string(),
                page: 0,
                page_size: 20,
                locale: Locale::EnUs,
                average_likes: 5.0,
            }
        );
        assert_eq!(req.index_range().unwrap(), 0..20);
    }

    #[test]
    fn test_page_request_explicit_values() {
        let defaults = ParamDefaults::default();
        let req = PageRequest::from_raw(
            Some("abc"),
            Some("3"),
            Some("10"),
            Some("de"),
            Some("2.5"),
            &defaults,
        )
        .unwrap();
        assert_eq!(req.user_seed, "abc");
        assert_eq!(req.locale, Locale::De);
        assert_eq!(req.index_range().unwrap(), 30..40);
    }

    #[test]
    fn test_page_request_empty_seed_is_kept() {
        let defaults = ParamDefaults::default();
        let req = PageRequest::from_raw(Some(""), None, None, None, None, &defaults).unwrap();
        assert_eq!(req.user_seed, "");
    }

    #[test]
    fn test_page_request_overflow() {
        let defaults = ParamDefaults::default();
        let page = u64::MAX.to_string();
        let err = PageRequest::from_raw(None, Some(&page), None, None, None, &defaults).unwrap_err();
        assert_eq!(err.code, ErrorCode::IndexOverflow);
    }
}
