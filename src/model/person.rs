use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on creation.
pub type PersonId = u32;

/// Nationality recorded when the lookup service has no guess for a name.
pub const UNKNOWN_NATIONALITY: &str = "Unknown";

/// A stored person record.
///
/// `age`, `gender` and `nationality` are demographic guesses derived from the
/// first name at creation time; they may later be overwritten by the caller.
///
/// See [`impl StoredEntity for Person`](crate::person_actor::entity) for how
/// the store builds and updates it from [`PersonCreate`] and [`PersonUpdate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

/// Request body for `POST /people`.
///
/// Only `name` and `surname` are required. Demographic fields may be sent but
/// are replaced by the enrichment result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub patronymic: Option<String>,
    // Accepted for shape checking only (a wrong type is a 400); `enrich`
    // replaces all three.
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

/// Age, gender and nationality guessed for a first name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

/// Payload the store needs to create a record: everything but the id.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonCreate {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

impl NewPerson {
    /// Merges the enrichment result into the caller's payload.
    pub fn enrich(self, demographics: Demographics) -> PersonCreate {
        PersonCreate {
            name: self.name,
            surname: self.surname,
            patronymic: self.patronymic,
            age: demographics.age,
            gender: demographics.gender,
            nationality: demographics.nationality,
        }
    }
}

/// Request body for `PUT /people/{id}`.
///
/// Partial merge: a field that is absent (or `null`) keeps its stored value.
/// The id is not part of the payload and can never change.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PersonUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub patronymic: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

/// Exact-match criteria for listing people. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    pub name: Option<String>,
    pub gender: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_person_requires_name_and_surname() {
        let missing_surname = serde_json::from_value::<NewPerson>(json!({ "name": "Alice" }));
        assert!(missing_surname.is_err());

        let missing_name = serde_json::from_value::<NewPerson>(json!({ "surname": "Smith" }));
        assert!(missing_name.is_err());

        let ok: NewPerson =
            serde_json::from_value(json!({ "name": "Alice", "surname": "Smith" })).unwrap();
        assert_eq!(ok.patronymic, None);
    }

    #[test]
    fn enrich_overrides_caller_demographics() {
        let payload: NewPerson = serde_json::from_value(json!({
            "name": "Ivan",
            "surname": "Petrov",
            "patronymic": "Sergeevich",
            "age": 99,
            "gender": "other"
        }))
        .unwrap();

        let create = payload.enrich(Demographics {
            age: 41,
            gender: "male".into(),
            nationality: "RU".into(),
        });
        assert_eq!(create.age, 41);
        assert_eq!(create.gender, "male");
        assert_eq!(create.nationality, "RU");
        assert_eq!(create.patronymic.as_deref(), Some("Sergeevich"));
    }

    #[test]
    fn person_json_omits_missing_patronymic() {
        let person = Person {
            id: 3,
            name: "Alice".into(),
            surname: "Smith".into(),
            patronymic: None,
            age: 34,
            gender: "female".into(),
            nationality: "US".into(),
        };
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Alice",
                "surname": "Smith",
                "age": 34,
                "gender": "female",
                "nationality": "US"
            })
        );
    }
}
