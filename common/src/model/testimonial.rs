//! Testimonial shapes.
//!
//! The hosted store hands back loosely typed rows (`TestimonialRow`). They are
//! converted into the domain `Testimonial` through `TryFrom`, which rejects rows
//! with blank fields or unreadable timestamps instead of letting them leak into
//! the carousel.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A published client testimonial.
///
/// `id` and `created_at` are assigned by the store; the application never
/// mutates a testimonial after it has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub review: String,
    /// Sole ordering key, ascending.
    pub created_at: DateTime<FixedOffset>,
}

/// Row shape of the `client_testimonials` table as returned by the store.
///
/// Columns are optional so that a missing one surfaces as a `RowMappingError`
/// for that row instead of a decode failure of the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialRow {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Insert payload. The store fills in `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub review: String,
}

/// Raw, user-edited form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestimonialDraft {
    pub name: String,
    pub role: String,
    pub review: String,
}

/// Field of the submission form, used to route edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Role,
    Review,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowMappingError {
    #[error("testimonial row is missing `{0}`")]
    Missing(&'static str),
    #[error("testimonial row has an invalid created_at `{value}`: {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl TestimonialDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Role => self.role = value,
            DraftField::Review => self.review = value,
        }
    }

    /// Returns the trimmed candidate, or `None` when any field is blank.
    pub fn to_candidate(&self) -> Option<NewTestimonial> {
        let name = self.name.trim();
        let role = self.role.trim();
        let review = self.review.trim();
        if name.is_empty() || role.is_empty() || review.is_empty() {
            return None;
        }
        Some(NewTestimonial {
            name: name.to_string(),
            role: role.to_string(),
            review: review.to_string(),
        })
    }
}

impl TryFrom<TestimonialRow> for Testimonial {
    type Error = RowMappingError;

    fn try_from(row: TestimonialRow) -> Result<Self, Self::Error> {
        let id = required(row.id, "id")?;
        let name = required(row.name, "name")?;
        let role = required(row.role, "role")?;
        let review = required(row.review, "review")?;
        let raw_created_at = required(row.created_at, "created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&raw_created_at).map_err(|e| {
            RowMappingError::InvalidTimestamp {
                value: raw_created_at.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Testimonial {
            id,
            name,
            role,
            review,
            created_at,
        })
    }
}

fn required(value: Option<String>, column: &'static str) -> Result<String, RowMappingError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(RowMappingError::Missing(column)),
    }
}

/// Stores may use either uuid strings or bigint identity columns for `id`.
fn id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_json() -> &'static str {
        r#"{
            "id": "7f0c5a9e-2f1b-4c5e-9d3a-1b2c3d4e5f60",
            "name": "Ali Raza",
            "role": "Property Law Client",
            "review": "Excellent service.",
            "created_at": "2025-03-14T09:26:53.589793+00:00"
        }"#
    }

    #[test]
    fn maps_complete_row_into_testimonial() {
        let row: TestimonialRow = serde_json::from_str(row_json()).unwrap();
        let testimonial = Testimonial::try_from(row).unwrap();

        assert_eq!(testimonial.name, "Ali Raza");
        assert_eq!(testimonial.role, "Property Law Client");
        assert_eq!(testimonial.review, "Excellent service.");
        assert_eq!(testimonial.created_at.to_rfc3339(), "2025-03-14T09:26:53.589793+00:00");
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let row: TestimonialRow = serde_json::from_str(
            r#"{"id": 42, "name": "A", "role": "B", "review": "C", "created_at": "2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(Testimonial::try_from(row).unwrap().id, "42");
    }

    #[test]
    fn missing_column_is_a_mapping_error() {
        let row: TestimonialRow = serde_json::from_str(
            r#"{"id": "1", "name": "A", "review": "C", "created_at": "2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            Testimonial::try_from(row),
            Err(RowMappingError::Missing("role"))
        );
    }

    #[test]
    fn renamed_column_does_not_silently_map() {
        let row: TestimonialRow = serde_json::from_str(
            r#"{"id": "1", "name": "A", "role": "B", "message": "C", "created_at": "2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            Testimonial::try_from(row),
            Err(RowMappingError::Missing("review"))
        );
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let row = TestimonialRow {
            id: Some("1".into()),
            name: Some("A".into()),
            role: Some("B".into()),
            review: Some("C".into()),
            created_at: Some("yesterday".into()),
        };
        assert!(matches!(
            Testimonial::try_from(row),
            Err(RowMappingError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn draft_candidate_is_trimmed() {
        let draft = TestimonialDraft {
            name: "  Ali Raza ".into(),
            role: "Property Law Client\n".into(),
            review: " Excellent service. ".into(),
        };
        assert_eq!(
            draft.to_candidate(),
            Some(NewTestimonial {
                name: "Ali Raza".into(),
                role: "Property Law Client".into(),
                review: "Excellent service.".into(),
            })
        );
    }

    #[test]
    fn draft_with_blank_field_has_no_candidate() {
        let draft = TestimonialDraft {
            name: "Ali".into(),
            role: "   ".into(),
            review: "Great".into(),
        };
        assert_eq!(draft.to_candidate(), None);
    }
}
