//! [`StoredEntity`] implementation for [`Person`].

use crate::framework::StoredEntity;
use crate::model::{Person, PersonCreate, PersonFilter, PersonId, PersonUpdate};
use crate::person_actor::PersonError;

impl StoredEntity for Person {
    type Id = PersonId;
    type Create = PersonCreate;
    type Update = PersonUpdate;
    type Filter = PersonFilter;
    type Error = PersonError;

    fn from_create_params(id: PersonId, params: PersonCreate) -> Result<Self, PersonError> {
        Ok(Self {
            id,
            name: params.name,
            surname: params.surname,
            patronymic: params.patronymic,
            age: params.age,
            gender: params.gender,
            nationality: params.nationality,
        })
    }

    /// Exact, case-sensitive match on every criterion that is set.
    fn matches(&self, filter: &PersonFilter) -> bool {
        let name_ok = filter.name.as_ref().map_or(true, |name| &self.name == name);
        let gender_ok = filter
            .gender
            .as_ref()
            .map_or(true, |gender| &self.gender == gender);
        name_ok && gender_ok
    }

    /// Overlays the supplied fields; absent fields keep their stored value.
    fn on_update(&mut self, update: PersonUpdate) -> Result<(), PersonError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(surname) = update.surname {
            self.surname = surname;
        }
        if let Some(patronymic) = update.patronymic {
            self.patronymic = Some(patronymic);
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(nationality) = update.nationality {
            self.nationality = nationality;
        }
        Ok(())
    }
}
