use serde::{Deserialize, Serialize};
use std::fmt;

/// A student record as stored by the remote collection.
///
/// The `id` is allocated when the record is created and never changes
/// afterwards. The four remaining fields are free-form text; the server does
/// not enforce the rules applied by [`crate::validation::validate`].
///
/// Fields missing from a server response deserialize as empty strings so a
/// half-populated record can still be edited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub phone: String,
}

impl Student {
    /// Copies the editable fields into a fresh draft.
    pub fn draft(&self) -> StudentDraft {
        StudentDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            course: self.course.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// The editable part of a [`Student`]: everything except the `id`.
///
/// Also used as the body of `PUT /students/{id}`, which replaces all four
/// fields together. Missing keys decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub course: String,
    pub phone: String,
}

impl StudentDraft {
    /// Current value of `field`, untrimmed.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Course => &self.course,
            Field::Phone => &self.phone,
        }
    }

    /// Replaces the value of `field` with `value` as typed.
    ///
    /// # Arguments
    /// * `field` - the field to overwrite; the other three are untouched.
    /// * `value` - raw input, stored without trimming so the caret position
    ///   in the form survives re-renders.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Course => &mut self.course,
            Field::Phone => &mut self.phone,
        };
        *slot = value;
    }

    /// Attaches an id, producing the record shape the server returns.
    pub fn with_id(self, id: impl Into<String>) -> Student {
        Student {
            id: id.into(),
            name: self.name,
            email: self.email,
            course: self.course,
            phone: self.phone,
        }
    }
}

/// One of the four editable fields.
///
/// The declaration order is the display order of the form and the iteration
/// order of [`crate::validation::FieldErrors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Course,
    Phone,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Course, Field::Phone];

    /// The JSON key and HTML input name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Course => "course",
            Field::Phone => "phone",
        }
    }

    /// Human-readable caption shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Course => "Course",
            Field::Phone => "Phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_copies_editable_fields() {
        let student = Student {
            id: "4".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            course: "Mathematics".to_string(),
            phone: "5551234567".to_string(),
        };

        let draft = student.draft();
        assert_eq!(draft.get(Field::Name), "Ada Lovelace");
        assert_eq!(draft.get(Field::Phone), "5551234567");
        assert_eq!(draft.with_id("4"), student);
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let student: Student = serde_json::from_str(r#"{"id":"9","name":"Bo"}"#).unwrap();
        assert_eq!(student.id, "9");
        assert_eq!(student.name, "Bo");
        assert!(student.email.is_empty());
        assert!(student.course.is_empty());
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut draft = StudentDraft::default();
        draft.set(Field::Course, "Physics".to_string());
        assert_eq!(draft.course, "Physics");
        assert!(draft.name.is_empty());
    }
}
