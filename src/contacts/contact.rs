use std::fmt;
use serde::{Serialize, Deserialize, Deserializer};
use unicode_normalization::UnicodeNormalization;

use crate::{
    Error,
    error::Result,
};

pub type ContactId = i64;

#[derive(Default)]
pub struct ContactBuilder {
    id          : Option<ContactId>,
    names       : Vec<String>,
    phone_numbers: Vec<String>,

    email       : Option<String>,
    location    : Option<String>,
    info        : Option<String>,
    media_handles: Option<String>,

    favorite    : bool,
}

impl ContactBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_id(&mut self, id: ContactId) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.names.push(name.nfc().collect::<String>());
        self
    }

    pub fn with_names<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        names.iter().for_each(|v| { self.with_name(v.as_ref()); });
        self
    }

    pub fn with_phone_number(&mut self, phone: &str) -> &mut Self {
        self.phone_numbers.push(phone.nfc().collect::<String>());
        self
    }

    pub fn with_phone_numbers<S: AsRef<str>>(&mut self, phones: &[S]) -> &mut Self {
        phones.iter().for_each(|v| { self.with_phone_number(v.as_ref()); });
        self
    }

    pub fn with_email(&mut self, email: &str) -> &mut Self {
        self.email = non_blank(email);
        self
    }

    pub fn with_location(&mut self, location: &str) -> &mut Self {
        self.location = non_blank(location);
        self
    }

    pub fn with_info(&mut self, info: &str) -> &mut Self {
        self.info = non_blank(info);
        self
    }

    pub fn with_media_handles(&mut self, handles: &str) -> &mut Self {
        self.media_handles = non_blank(handles);
        self
    }

    pub fn with_favorite(&mut self, favorite: bool) -> &mut Self {
        self.favorite = favorite;
        self
    }

    pub fn build(&mut self) -> Result<Contact> {
        if self.names.is_empty() {
            return Err(Error::Argument(format!("Invalid contact: at least one name is required")));
        }
        if self.phone_numbers.is_empty() {
            return Err(Error::Argument(format!("Invalid contact: at least one phone number is required")));
        }

        Ok(Contact::new(self))
    }
}

/// A contact as exchanged with the backend.
///
/// The identifier is assigned by the server; contacts built locally carry
/// none and it is never sent in request bodies when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    id: Option<ContactId>,

    #[serde(rename = "names", default, deserialize_with = "nullable_vec")]
    names: Vec<String>,

    #[serde(rename = "phoneNumbers", default, deserialize_with = "nullable_vec")]
    phone_numbers: Vec<String>,

    #[serde(rename = "email", default, deserialize_with = "nullable_str")]
    email: Option<String>,

    #[serde(rename = "location", default, deserialize_with = "nullable_str")]
    location: Option<String>,

    #[serde(rename = "info", default, deserialize_with = "nullable_str")]
    info: Option<String>,

    #[serde(rename = "favorite", default)]
    favorite: bool,

    #[serde(rename = "mediaHandles", default, deserialize_with = "nullable_str")]
    media_handles: Option<String>,
}

impl Contact {
    pub(crate) fn new(b: &mut ContactBuilder) -> Self {
        Self {
            id:             b.id.take(),
            names:          std::mem::take(&mut b.names),
            phone_numbers:  std::mem::take(&mut b.phone_numbers),
            email:          b.email.take(),
            location:       b.location.take(),
            info:           b.info.take(),
            favorite:       b.favorite,
            media_handles:  b.media_handles.take(),
        }
    }

    pub fn id(&self) -> Option<ContactId> {
        self.id
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn phone_numbers(&self) -> &[String] {
        &self.phone_numbers
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn media_handles(&self) -> Option<&str> {
        self.media_handles.as_deref()
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub(crate) fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }

    pub fn display_names(&self) -> String {
        self.names.join(", ")
    }

    pub fn display_phone_numbers(&self) -> String {
        self.phone_numbers.join(", ")
    }

    /// Case-insensitive substring match against any name or any phone number.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = fold(keyword);
        self.names.iter().any(|v| fold(v).contains(&keyword)) ||
            self.phone_numbers.iter().any(|v| fold(v).contains(&keyword))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{} ", id)?,
            None => write!(f, "#- ")?,
        }
        write!(f, "{} [{}]", self.display_names(), self.display_phone_numbers())?;
        if self.favorite {
            write!(f, " *")?;
        }
        Ok(())
    }
}

fn fold(input: &str) -> String {
    input.nfc().collect::<String>().to_lowercase()
}

fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    match trimmed.is_empty() {
        true => None,
        false => Some(trimmed.nfc().collect::<String>()),
    }
}

fn nullable_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_str<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|v| non_blank(&v)))
}
