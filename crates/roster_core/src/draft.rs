use crate::NewRecord;

/// One input of the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    PhoneNumber,
    Email,
    Hobbies,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::PhoneNumber,
        Field::Email,
        Field::Hobbies,
    ];

    /// Placeholder and column caption.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::PhoneNumber => "Phone Number",
            Field::Email => "Email",
            Field::Hobbies => "Hobbies",
        }
    }
}

/// Pending input for a not-yet-created record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftForm {
    name: String,
    phone_number: String,
    email: String,
    hobbies: String,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
            Field::Hobbies => &self.hobbies,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
            Field::Hobbies => &mut self.hobbies,
        };
        *slot = value;
    }

    /// True when no field is the empty string. Whitespace counts as input.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|field| !self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> NewRecord {
        NewRecord {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            hobbies: self.hobbies.clone(),
        }
    }
}
