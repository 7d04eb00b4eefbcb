use unicode_normalization::UnicodeNormalization;

use crate::{
    Error,
    error::Result,
};

use super::contact::{Contact, ContactBuilder, ContactId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Creating,
    Editing(ContactId),
}

/// A repeatable group of text inputs that never drops below one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    fields: Vec<String>,
}

impl FieldGroup {
    pub fn new() -> Self {
        Self {
            fields: vec![String::new()],
        }
    }

    pub fn from_values(values: &[String]) -> Self {
        match values.is_empty() {
            true => Self::new(),
            false => Self { fields: values.to_vec() },
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn add_field(&mut self) -> usize {
        self.fields.push(String::new());
        self.fields.len() - 1
    }

    /// Removes the input at `index` unless it is the last one left.
    pub fn remove_field(&mut self, index: usize) -> bool {
        if self.fields.len() <= 1 || index >= self.fields.len() {
            return false;
        }
        self.fields.remove(index);
        true
    }

    pub fn set(&mut self, index: usize, value: &str) -> Result<()> {
        let Some(field) = self.fields.get_mut(index) else {
            return Err(Error::Argument(format!("No input at index {}", index)));
        };
        *field = value.to_string();
        Ok(())
    }

    pub fn values(&self) -> Vec<String> {
        self.fields.iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.nfc().collect::<String>())
            .collect()
    }
}

impl Default for FieldGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// State of the modal add/edit dialog.
#[derive(Debug, Clone)]
pub struct ContactForm {
    session     : Session,
    names       : FieldGroup,
    phone_numbers: FieldGroup,

    email       : String,
    location    : String,
    info        : String,
    media_handles: String,
    favorite    : bool,
}

impl ContactForm {
    pub fn for_create() -> Self {
        Self {
            session     : Session::Creating,
            names       : FieldGroup::new(),
            phone_numbers: FieldGroup::new(),
            email       : String::new(),
            location    : String::new(),
            info        : String::new(),
            media_handles: String::new(),
            favorite    : false,
        }
    }

    pub fn for_edit(contact: &Contact) -> Result<Self> {
        let Some(id) = contact.id() else {
            return Err(Error::Argument(format!("Contact without id cannot be edited")));
        };

        Ok(Self {
            session     : Session::Editing(id),
            names       : FieldGroup::from_values(contact.names()),
            phone_numbers: FieldGroup::from_values(contact.phone_numbers()),
            email       : contact.email().unwrap_or_default().to_string(),
            location    : contact.location().unwrap_or_default().to_string(),
            info        : contact.info().unwrap_or_default().to_string(),
            media_handles: contact.media_handles().unwrap_or_default().to_string(),
            favorite    : contact.is_favorite(),
        })
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn names(&self) -> &FieldGroup {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut FieldGroup {
        &mut self.names
    }

    pub fn phone_numbers(&self) -> &FieldGroup {
        &self.phone_numbers
    }

    pub fn phone_numbers_mut(&mut self) -> &mut FieldGroup {
        &mut self.phone_numbers
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_string();
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn set_info(&mut self, info: &str) {
        self.info = info.to_string();
    }

    pub fn media_handles(&self) -> &str {
        &self.media_handles
    }

    pub fn set_media_handles(&mut self, handles: &str) {
        self.media_handles = handles.to_string();
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }

    /// Bundles the non-empty inputs into a contact without id.
    pub fn collect(&self) -> Result<Contact> {
        ContactBuilder::new()
            .with_names(&self.names.values())
            .with_phone_numbers(&self.phone_numbers.values())
            .with_email(&self.email)
            .with_location(&self.location)
            .with_info(&self.info)
            .with_media_handles(&self.media_handles)
            .with_favorite(self.favorite)
            .build()
    }
}
