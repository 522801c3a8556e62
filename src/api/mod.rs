//! REST API handlers and shared query parsing

pub mod employee;
pub mod health;

use serde::Deserialize;

/// Maximum allowed limit value for listing/search
pub(crate) const MAX_LIMIT: i64 = 100;

/// Maximum allowed length of the search term, in characters
pub(crate) const MAX_SEARCH_LEN: usize = 100;

/// Query parameters for `GET /api/v1/employees`
#[derive(Debug, Clone, Deserialize)]
pub struct ListEmployeesQuery {
    /// Search term matched against employee name and department.
    /// Absent or empty means no filtering.
    #[serde(default, deserialize_with = "deserialize_search")]
    pub search: Option<String>,
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    pub limit: i64,
    #[serde(default, deserialize_with = "deserialize_offset")]
    pub offset: i64,
}

pub(crate) fn default_limit() -> i64 {
    50
}

/// Reject search terms longer than MAX_SEARCH_LEN characters
pub(crate) fn deserialize_search<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    if let Some(ref term) = value {
        if term.chars().count() > MAX_SEARCH_LEN {
            return Err(serde::de::Error::custom(
                "search term must be at most 100 characters",
            ));
        }
    }
    Ok(value)
}

/// Reject limit values less than 1, clamp to MAX_LIMIT
pub(crate) fn deserialize_limit<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    if value < 1 {
        return Err(serde::de::Error::custom(
            "limit must be a positive integer (>= 1)",
        ));
    }
    Ok(value.min(MAX_LIMIT))
}

/// Reject negative offsets
pub(crate) fn deserialize_offset<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    if value < 0 {
        return Err(serde::de::Error::custom("offset must be >= 0"));
    }
    Ok(value)
}
