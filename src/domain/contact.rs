use serde::{Deserialize, Serialize};

/// A single phone book record.
///
/// `id` is chosen by the user and never changes after creation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub comment: String,
}

/// Names of the contact fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Phone,
    Comment,
}

pub const FIELDS: [Field; 4] = [Field::Id, Field::Name, Field::Phone, Field::Comment];

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Comment => "comment",
        }
    }
}

/// Raw field strings typed by the user when creating or updating a contact.
/// Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
    pub comment: String,
}

impl ContactInput {
    pub fn new(name: &str, phone: &str, comment: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            comment: comment.to_string(),
        }
    }
}

impl Contact {
    pub fn new(id: String, name: String, phone: String, comment: String) -> Self {
        Contact {
            id,
            name,
            phone,
            comment,
        }
    }

    pub fn from_input(id: &str, input: ContactInput) -> Self {
        Contact::new(id.to_string(), input.name, input.phone, input.comment)
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Comment => &self.comment,
        }
    }

    /// Same id, with every non-empty input field replacing the current value.
    pub fn merged_with(&self, input: &ContactInput) -> Contact {
        let pick = |new: &str, old: &str| {
            if new.is_empty() {
                old.to_string()
            } else {
                new.to_string()
            }
        };

        Contact {
            id: self.id.clone(),
            name: pick(&input.name, &self.name),
            phone: pick(&input.phone, &self.phone),
            comment: pick(&input.comment, &self.comment),
        }
    }
}
