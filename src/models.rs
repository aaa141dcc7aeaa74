use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The backend hands out both numeric and uuid ids depending on the collection.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn deserialize_percentage<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(clamp_percentage(raw))
}

pub fn clamp_percentage(raw: f64) -> u8 {
    if raw.is_nan() {
        log::warn!("Progress percentage was NaN, treating it as 0");
        return 0;
    }
    if !(0.0..=100.0).contains(&raw) {
        log::warn!("Progress percentage {} out of range, clamping", raw);
    }
    raw.round().clamp(0.0, 100.0) as u8
}

fn deserialize_difficulty<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(1, 5) as u8)
}

fn default_difficulty() -> u8 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_difficulty", deserialize_with = "deserialize_difficulty")]
    pub difficulty_level: u8,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub course_id: String,
    #[serde(deserialize_with = "deserialize_percentage")]
    pub progress_percentage: u8,
    #[serde(default)]
    pub certificates_earned: Vec<String>,
    #[serde(default)]
    pub last_accessed: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Parent,
    Teacher,
    Admin,
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
            Role::Unknown => "User",
        }
    }

    /// CSS class used for the role badge in the user menu.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::Student => "role-student",
            Role::Parent => "role-parent",
            Role::Teacher => "role-teacher",
            Role::Admin => "role-admin",
            Role::Unknown => "role-unknown",
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Role::Student,
            "parent" => Role::Parent,
            "teacher" => Role::Teacher,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::from(raw.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub age_group: Option<String>,
}

impl User {
    pub fn display_first_name(&self) -> &str {
        match self.first_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.full_name.split_whitespace().next().unwrap_or(""),
        }
    }

    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => self.full_name.clone(),
        }
    }

    pub fn initials(&self) -> String {
        let name = self.display_name();
        name.split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningStats {
    #[serde(default)]
    pub total_courses: u32,
    #[serde(default)]
    pub completed_lessons: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub available_courses: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: String,
    #[serde(default)]
    pub learning_stats: Option<LearningStats>,
}

#[derive(Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_record_accepts_numeric_ids_and_missing_fields() {
        let record: ProgressRecord = serde_json::from_str(
            r#"{"course_id": 3, "progress_percentage": 42}"#,
        )
        .unwrap();
        assert_eq!(record.course_id, "3");
        assert_eq!(record.progress_percentage, 42);
        assert!(record.certificates_earned.is_empty());
        assert!(record.last_accessed.is_none());
        assert_eq!(record.id, "");
    }

    #[test]
    fn out_of_range_percentages_are_clamped() {
        let records: Vec<ProgressRecord> = serde_json::from_str(
            r#"[
                {"id": "a", "course_id": "1", "progress_percentage": 140},
                {"id": "b", "course_id": "2", "progress_percentage": -5},
                {"id": "c", "course_id": "3", "progress_percentage": 66.6}
            ]"#,
        )
        .unwrap();
        let values: Vec<u8> = records.iter().map(|r| r.progress_percentage).collect();
        assert_eq!(values, vec![100, 0, 67]);
    }

    #[test]
    fn course_difficulty_is_kept_in_star_range() {
        let course: Course = serde_json::from_str(
            r#"{"id": "x", "title": "Robots", "difficulty_level": 9}"#,
        )
        .unwrap();
        assert_eq!(course.difficulty_level, 5);

        let course: Course = serde_json::from_str(r#"{"id": 7, "title": "Shapes"}"#).unwrap();
        assert_eq!(course.id, "7");
        assert_eq!(course.difficulty_level, 1);
    }

    #[test]
    fn unknown_roles_do_not_fail_parsing() {
        let user: User = serde_json::from_str(
            r#"{"id": "u1", "email": "a@b.c", "full_name": "Ada Lovelace", "role": "superuser"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Unknown);
        assert_eq!(user.role.label(), "User");
        assert_eq!(Role::from("Teacher"), Role::Teacher);
    }

    #[test]
    fn user_names_fall_back_to_full_name() {
        let user = User {
            id: "1".into(),
            email: "kid@example.com".into(),
            full_name: "Maya Perera".into(),
            first_name: None,
            last_name: None,
            role: Role::Student,
            age_group: Some("9-12".into()),
        };
        assert_eq!(user.display_first_name(), "Maya");
        assert_eq!(user.initials(), "MP");
        assert_eq!(user.display_name(), "Maya Perera");
    }

    #[test]
    fn role_round_trips_through_the_cached_session() {
        let json = serde_json::to_string(&Role::Parent).unwrap();
        assert_eq!(json, "\"parent\"");
    }
}
