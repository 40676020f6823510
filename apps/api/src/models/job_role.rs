use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A job role as stored in the catalog or supplied inline by a caller.
///
/// Only `description` and `requirements` feed the matcher. Every field the
/// struct does not name is kept in `extra` so it round-trips untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRole {
    /// Opaque identifier: a uuid string for catalog roles, anything for inline roles.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(default, alias = "roleName", skip_serializing_if = "String::is_empty")]
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub requirements: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRole {
    /// String form of `id` used for path lookups. `None` when the id is null.
    pub fn id_key(&self) -> Option<String> {
        match &self.id {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Accepts any JSON value for a free-text field. Arrays are joined with
/// commas, other scalars use their JSON text, null is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?))
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(text_of)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

/// Payload for creating a catalog role.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJobRole {
    #[serde(alias = "roleName")]
    pub role_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_round_trip_through_extra() {
        let raw = json!({
            "id": "r-1",
            "role_name": "Backend Engineer",
            "requirements": "rust",
            "created_at": "2024-01-01T00:00:00Z",
            "is_active": true
        });
        let role: JobRole = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(role.extra.len(), 2);
        assert_eq!(serde_json::to_value(&role).unwrap(), raw);
    }

    #[test]
    fn test_camel_case_role_name_alias() {
        let role: JobRole = serde_json::from_value(json!({"roleName": "QA"})).unwrap();
        assert_eq!(role.role_name, "QA");
        assert!(role.description.is_none());
    }

    #[test]
    fn test_id_key_formats() {
        let mut role = JobRole::default();
        assert_eq!(role.id_key(), None);
        role.id = json!("abc");
        assert_eq!(role.id_key().as_deref(), Some("abc"));
        role.id = json!(42);
        assert_eq!(role.id_key().as_deref(), Some("42"));
    }

    #[test]
    fn test_absent_id_and_name_are_not_invented_on_output() {
        let role: JobRole =
            serde_json::from_value(json!({"requirements": "react"})).unwrap();
        assert_eq!(
            serde_json::to_value(&role).unwrap(),
            json!({"requirements": "react"})
        );
    }

    #[test]
    fn test_non_string_requirements_are_read_as_text() {
        let role: JobRole = serde_json::from_value(json!({
            "id": 1,
            "requirements": ["React", "AWS", null],
            "description": 42
        }))
        .unwrap();
        assert_eq!(role.requirements.as_deref(), Some("React,AWS"));
        assert_eq!(role.description.as_deref(), Some("42"));

        let role: JobRole = serde_json::from_value(json!({"requirements": null})).unwrap();
        assert!(role.requirements.is_none());
    }
}
