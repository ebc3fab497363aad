use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use kernel::model::{
    id::{SpaceId, UserId},
    space::{Space, SpaceOwner},
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

/// Raw submission of the space-creation form. Both fields are optional so
/// that an incomplete submission reaches the validation branch instead of
/// being rejected during extraction.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSpaceForm {
    pub space_name: Option<String>,
    pub space_expires: Option<String>,
}

/// Form state, returned on display and re-rendered on validation failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceFormResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SpaceFormResponse {
    pub fn empty() -> Self {
        Self { message: None }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub space_id: SpaceId,
    pub space_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: SpaceOwnerResponse,
}

impl From<Space> for SpaceResponse {
    fn from(value: Space) -> Self {
        let Space {
            space_id,
            space_name,
            created_at,
            expires_at,
            created_by,
            role_groups: _,
        } = value;
        Self {
            space_id,
            space_name,
            created_at,
            expires_at,
            created_by: created_by.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceOwnerResponse {
    pub owner_id: UserId,
    pub owner_name: String,
}

impl From<SpaceOwner> for SpaceOwnerResponse {
    fn from(value: SpaceOwner) -> Self {
        let SpaceOwner {
            owner_id,
            owner_name,
        } = value;
        Self {
            owner_id,
            owner_name,
        }
    }
}

/// Empty or single-character submissions mean "no expiration".
pub fn normalize_expires(raw: Option<&str>) -> Option<&str> {
    let value = raw.map(str::trim).unwrap_or_default();
    (value.len() > 1).then_some(value)
}

/// Parses the optional expiration field. Accepts RFC 3339 as well as the
/// plain date and date-time shapes a browser form tends to submit.
pub fn parse_expires(raw: Option<&str>) -> AppResult<Option<DateTime<Utc>>> {
    let Some(value) = normalize_expires(raw) else {
        return Ok(None);
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Some(Utc.from_utc_datetime(&dt)));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))));
    }

    Err(AppError::UnprocessableEntity(format!(
        "\"{value}\" is not a valid expiration date"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_short_expires_means_no_expiration() {
        assert!(parse_expires(None).unwrap().is_none());
        assert!(parse_expires(Some("")).unwrap().is_none());
        assert!(parse_expires(Some("x")).unwrap().is_none());
        assert!(parse_expires(Some("  x  ")).unwrap().is_none());
    }

    #[test]
    fn well_formed_expires_is_parsed() {
        let expected = Utc.with_ymd_and_hms(2026, 9, 1, 12, 30, 0).unwrap();
        assert_eq!(
            parse_expires(Some("2026-09-01T12:30:00Z")).unwrap(),
            Some(expected)
        );
        assert_eq!(
            parse_expires(Some("2026-09-01 12:30:00")).unwrap(),
            Some(expected)
        );
        assert_eq!(
            parse_expires(Some("2026-09-01 12:30")).unwrap(),
            Some(expected)
        );
        assert_eq!(
            parse_expires(Some("2026-09-01")).unwrap(),
            Some(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn malformed_expires_is_a_validation_error() {
        let err = parse_expires(Some("not a date")).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
