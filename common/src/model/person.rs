use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A person record as exchanged with the backend.
///
/// `id` is assigned by the server and therefore absent on creation. The
/// spreadsheet attachment that accompanies a new person travels in the
/// multipart payload, not in the serialized record.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub surname: String,
}

/// A row of the people table as the backend returns it.
///
/// The backend is free to include derived fields beyond the declared record
/// shape (`seniority`, `yearsOfExperience`, `availability`, ...). Those land
/// in `extra` via `serde(flatten)` so the table can show them without the
/// frontend having to know the full shape in advance.
///
/// Every declared field defaults when absent: a `DELETE` may answer with a
/// bare confirmation object instead of the deleted record, and that body
/// still has to decode.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PersonRow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonRow {
    /// Looks up a column value by name, covering both the declared fields
    /// and whatever extra fields the backend sent. Missing columns and JSON
    /// nulls render as the empty string.
    pub fn field(&self, column: &str) -> String {
        match column {
            "id" => self.id.map(|id| id.to_string()).unwrap_or_default(),
            "name" => self.name.clone(),
            "surname" => self.surname.clone(),
            other => self.extra.get(other).map(display_value).unwrap_or_default(),
        }
    }
}

/// Renders a JSON value for a table cell: strings without quotes, scalars
/// via their JSON form, null as empty.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_without_id_serializes_without_id_field() {
        let person = Person {
            id: None,
            name: "John".to_string(),
            surname: "Doe".to_string(),
        };
        let json = serde_json::to_value(&person).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "John");
        assert_eq!(json["surname"], "Doe");
    }

    #[test]
    fn row_captures_extra_fields() {
        let row: PersonRow = serde_json::from_str(
            r#"{"id":1,"name":"John","surname":"Doe","seniority":"Senior","yearsOfExperience":5,"availability":true}"#,
        )
        .unwrap();
        assert_eq!(row.id, Some(1));
        assert_eq!(row.name, "John");
        assert_eq!(row.surname, "Doe");
        assert_eq!(row.extra["seniority"], "Senior");
        assert_eq!(row.extra["yearsOfExperience"], 5);
        assert_eq!(row.extra["availability"], true);
    }

    #[test]
    fn field_lookup_covers_declared_and_extra_columns() {
        let row: PersonRow = serde_json::from_str(
            r#"{"id":1,"name":"John","surname":"Doe","seniority":"Senior","yearsOfExperience":5,"availability":true}"#,
        )
        .unwrap();
        assert_eq!(row.field("id"), "1");
        assert_eq!(row.field("name"), "John");
        assert_eq!(row.field("surname"), "Doe");
        assert_eq!(row.field("seniority"), "Senior");
        assert_eq!(row.field("yearsOfExperience"), "5");
        assert_eq!(row.field("availability"), "true");
        assert_eq!(row.field("unknown"), "");
    }

    #[test]
    fn field_lookup_renders_null_and_missing_id_as_empty() {
        let row: PersonRow =
            serde_json::from_str(r#"{"name":"John","surname":"Doe","seniority":null}"#).unwrap();
        assert_eq!(row.field("id"), "");
        assert_eq!(row.field("seniority"), "");
    }

    #[test]
    fn delete_confirmation_body_decodes_into_a_row() {
        let row: PersonRow = serde_json::from_str(r#"{"deleted":true,"id":1}"#).unwrap();
        assert_eq!(row.id, Some(1));
        assert!(row.name.is_empty());
        assert!(row.surname.is_empty());
        assert_eq!(row.extra["deleted"], true);
    }

    #[test]
    fn row_round_trips_extra_fields() {
        let json = r#"{"id":2,"name":"Jane","surname":"Roe","availability":false}"#;
        let row: PersonRow = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&row).unwrap();
        assert_eq!(back["availability"], false);
        assert_eq!(back["id"], 2);
    }
}
