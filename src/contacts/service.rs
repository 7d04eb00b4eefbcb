use async_trait::async_trait;

use crate::error::Result;
use super::contact::{Contact, ContactId};

/// The remote contact book as seen by the view-model.
#[async_trait]
pub trait ContactService: Send + Sync {
    async fn contacts(&self) -> Result<Vec<Contact>>;
    async fn contact(&self, id: ContactId) -> Result<Option<Contact>>;

    async fn create_contact(&self, contact: &Contact) -> Result<Contact>;
    async fn update_contact(&self, id: ContactId, contact: &Contact) -> Result<()>;
    async fn delete_contact(&self, id: ContactId) -> Result<()>;
    async fn update_favorite(&self, id: ContactId, favorite: bool) -> Result<()>;

    async fn favorites(&self) -> Result<Vec<Contact>>;
    async fn search(&self, keyword: &str) -> Result<Vec<Contact>>;

    async fn add_name(&self, id: ContactId, name: &str) -> Result<Contact>;
    async fn add_phone_number(&self, id: ContactId, phone: &str) -> Result<Contact>;

    /// Spreadsheet bytes of the whole contact book.
    async fn export_contacts(&self) -> Result<Vec<u8>>;
    async fn import_contacts(&self, file_name: &str, data: Vec<u8>) -> Result<()>;
}
