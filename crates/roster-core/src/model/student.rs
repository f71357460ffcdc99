use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned student identifier. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A student record as held by the remote collection.
///
/// Extra fields the store attaches (timestamps, avatars) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// `None` when the stored value is missing or not a whole number.
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: Option<u32>,
    pub email: String,
    pub city: String,
}

/// Write body for create and update. Every write sends the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub city: String,
}

/// Read `age` as a JSON integer or a numeric string.
///
/// Records written by other clients of the same collection may carry the
/// age as text, `null`, or a fraction. Those read as `None` so a single
/// odd record still loads with the rest.
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AgeRepr {
        Number(u32),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match AgeRepr::deserialize(deserializer)? {
        AgeRepr::Number(n) => Some(n),
        AgeRepr::Text(s) => s.trim().parse().ok(),
        AgeRepr::Other(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_deserializes_store_record() {
        let json = r#"{"createdAt":"2025-11-04T10:00:00.000Z","name":"Ann","age":20,"email":"a@x.com","city":"Lima","id":"1"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, StudentId::from("1"));
        assert_eq!(student.name, "Ann");
        assert_eq!(student.age, Some(20));
        assert_eq!(student.email, "a@x.com");
        assert_eq!(student.city, "Lima");
    }

    #[test]
    fn test_student_age_as_string() {
        let json = r#"{"id":"7","name":"Bo","age":"31","email":"b@x.com","city":"Rio"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.age, Some(31));
    }

    #[test]
    fn test_student_unreadable_age_is_none() {
        for age in [r#""old""#, "null", "20.5", "-3", "true"] {
            let json =
                format!(r#"{{"id":"7","name":"Bo","age":{age},"email":"b@x.com","city":"Rio"}}"#);
            let student: Student = serde_json::from_str(&json).unwrap();
            assert_eq!(student.age, None, "age {age}");
            assert_eq!(student.name, "Bo");
        }
    }

    #[test]
    fn test_student_missing_age_is_none() {
        let json = r#"{"id":"7","name":"Bo","email":"b@x.com","city":"Rio"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.age, None);
    }

    #[test]
    fn test_one_odd_age_does_not_fail_collection() {
        let json = r#"[
            {"id":"1","name":"Ann","age":20,"email":"a@x.com","city":"Lima"},
            {"id":"2","name":"Bo","age":null,"email":"b@x.com","city":"Rio"}
        ]"#;
        let students: Vec<Student> = serde_json::from_str(json).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].age, Some(20));
        assert_eq!(students[1].age, None);
    }

    #[test]
    fn test_payload_serializes_age_as_integer() {
        let payload = StudentPayload {
            name: "Ann".to_string(),
            age: 20,
            email: "a@x.com".to_string(),
            city: "Lima".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["age"], serde_json::json!(20));
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_student_id_display() {
        assert_eq!(StudentId::new("42").to_string(), "42");
    }
}
