//! # Domain models for tasks and users
//!
//! Defines the records the REST backend hands to the client. These types are
//! `Serialize + Deserialize` and match the backend's snake_case JSON.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Task`] | A user-owned to-do record. The client only ever holds short-lived copies fetched per page view. |
//! | [`Category`] | One of ten fixed labels. Missing, `null`, or unknown values decode as [`Category::Other`]. |
//! | [`UserInfo`] | The `user` object of the `/auth/login` response. |
//!
//! Ids come back as strings from some backends and integers from others, so
//! both are accepted and held as `String`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Task category. Serialized lowercase (`"work"`, `"hobbies"`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Hobbies,
    Education,
    Savings,
    Health,
    Family,
    Personal,
    Shopping,
    Travel,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    /// Every category, in the order the selector lists them.
    pub const ALL: [Category; 10] = [
        Category::Work,
        Category::Hobbies,
        Category::Education,
        Category::Savings,
        Category::Health,
        Category::Family,
        Category::Personal,
        Category::Shopping,
        Category::Travel,
        Category::Other,
    ];

    /// Wire value, e.g. `"shopping"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Hobbies => "hobbies",
            Category::Education => "education",
            Category::Savings => "savings",
            Category::Health => "health",
            Category::Family => "family",
            Category::Personal => "personal",
            Category::Shopping => "shopping",
            Category::Travel => "travel",
            Category::Other => "other",
        }
    }

    /// Human label, e.g. `"Shopping"`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Hobbies => "Hobbies",
            Category::Education => "Education",
            Category::Savings => "Savings",
            Category::Health => "Health",
            Category::Family => "Family",
            Category::Personal => "Personal",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::Other => "Other",
        }
    }

    /// Parse a wire value, falling back to [`Category::Other`].
    pub fn from_wire(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A task record as returned by `/tasks` and `/tasks/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    /// Server-formatted due date: `"2024-05-01"` or `"2024-05-01T00:00:00"`.
    pub due_date: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, deserialize_with = "category_or_default")]
    pub category: Category,
    pub created_at: String,
}

impl Task {
    /// Date part of `due_date` (text before any `T`), as a date input expects.
    pub fn due_date_input(&self) -> &str {
        date_part(&self.due_date)
    }

    /// Parsed due date, if the server sent something date-like.
    pub fn due_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(date_part(&self.due_date), "%Y-%m-%d").ok()
    }

    /// Parsed creation date.
    pub fn created_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(date_part(&self.created_at), "%Y-%m-%d").ok()
    }

    /// "Completed" or "Pending".
    pub fn status_label(&self) -> &'static str {
        if self.is_completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}

/// User information returned alongside the access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub email: String,
    pub username: String,
}

fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Integer(i64),
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Integer(n) => n.to_string(),
    })
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn category_or_default<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Category>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_backend_json() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Buy milk",
                "description": "2 litres",
                "due_date": "2024-05-01T00:00:00",
                "is_completed": false,
                "category": "shopping",
                "created_at": "2024-04-20T09:15:00"
            }"#,
        )
        .unwrap();

        assert_eq!(task.id, "7");
        assert_eq!(task.category, Category::Shopping);
        assert_eq!(task.due_date_input(), "2024-05-01");
        assert_eq!(task.due_on(), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(task.created_on(), NaiveDate::from_ymd_opt(2024, 4, 20));
        assert_eq!(task.status_label(), "Pending");
    }

    #[test]
    fn test_category_falls_back_to_other() {
        let json = |category: &str| {
            format!(
                r#"{{"id":"a","title":"t","due_date":"2024-01-01","created_at":"2024-01-01"{category}}}"#
            )
        };

        let missing: Task = serde_json::from_str(&json("")).unwrap();
        assert_eq!(missing.category, Category::Other);
        assert_eq!(missing.description, "");
        assert!(!missing.is_completed);

        let null: Task = serde_json::from_str(&json(r#","category":null"#)).unwrap();
        assert_eq!(null.category, Category::Other);

        let unknown: Task = serde_json::from_str(&json(r#","category":"gardening""#)).unwrap();
        assert_eq!(unknown.category, Category::Other);
    }

    #[test]
    fn test_category_wire_values() {
        assert_eq!(Category::ALL.len(), 10);
        assert_eq!(Category::default(), Category::Other);
        for category in Category::ALL {
            assert_eq!(Category::from_wire(category.as_str()), category);
            let encoded = serde_json::to_string(&category).unwrap();
            assert_eq!(encoded, format!("\"{}\"", category.as_str()));
        }
        assert_eq!(Category::from_wire("nope"), Category::Other);
    }

    #[test]
    fn test_user_info_accepts_uuid_id() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":"0b8f2c1e-1111-4a2b-9c3d-123456789abc","email":"a@b.c","username":"ann"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "0b8f2c1e-1111-4a2b-9c3d-123456789abc");
        assert_eq!(user.username, "ann");
    }
}
