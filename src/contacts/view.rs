use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::{debug, info, warn};

use crate::{
    Error,
    error::Result,
    config::Config,
};

use super::{
    contact::{Contact, ContactId},
    form::{ContactForm, Session},
    notice::{Locale, Notice},
    render::{Format, Renderer},
    service::ContactService,
    surface::{Notifier, Surface},
};

pub const EXPORT_FILE_NAME: &str = "contacts.xlsx";

/// What the surface currently presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    All,
    Favorites,
    Search(String),
    /// Server-provided results that are not part of the local collection.
    Detached,
}

pub struct ViewBuilder {
    service     : Option<Arc<dyn ContactService>>,
    surface     : Option<Box<dyn Surface>>,
    notifier    : Option<Box<dyn Notifier>>,

    format      : Format,
    locale      : Locale,
    export_dir  : PathBuf,
}

impl ViewBuilder {
    pub fn new() -> Self {
        Self {
            service     : None,
            surface     : None,
            notifier    : None,
            format      : Format::default(),
            locale      : Locale::default(),
            export_dir  : PathBuf::from("."),
        }
    }

    pub fn with_service(&mut self, service: Arc<dyn ContactService>) -> &mut Self {
        self.service = Some(service);
        self
    }

    pub fn with_surface<S: Surface + 'static>(&mut self, surface: S) -> &mut Self {
        self.surface = Some(Box::new(surface));
        self
    }

    pub fn with_notifier<N: Notifier + 'static>(&mut self, notifier: N) -> &mut Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn with_format(&mut self, format: Format) -> &mut Self {
        self.format = format;
        self
    }

    pub fn with_locale(&mut self, locale: Locale) -> &mut Self {
        self.locale = locale;
        self
    }

    pub fn with_export_dir(&mut self, dir: &str) -> &mut Self {
        self.export_dir = PathBuf::from(dir);
        self
    }

    pub fn with_config(&mut self, cfg: &dyn Config) -> &mut Self {
        self.format = cfg.format();
        self.locale = cfg.locale();
        self.export_dir = PathBuf::from(cfg.export_dir());
        self
    }

    pub fn build(&mut self) -> Result<ContactsView> {
        let Some(service) = self.service.take() else {
            return Err(Error::Argument(format!("Missing contact service")));
        };
        let Some(surface) = self.surface.take() else {
            return Err(Error::Argument(format!("Missing display surface")));
        };
        let Some(notifier) = self.notifier.take() else {
            return Err(Error::Argument(format!("Missing notifier")));
        };

        Ok(ContactsView {
            service,
            surface,
            notifier,
            renderer    : Renderer::new(self.format, self.locale),
            export_dir  : self.export_dir.clone(),
            contacts    : Vec::new(),
            mode        : ViewMode::All,
            detached    : Vec::new(),
            form        : None,
        })
    }
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The contact list view-model: local collection, presentation mode and
/// the open editing dialog, synchronized with a `ContactService`.
///
/// Every operation takes `&mut self`, so mutations issued through one view
/// never overlap.
pub struct ContactsView {
    service     : Arc<dyn ContactService>,
    surface     : Box<dyn Surface>,
    notifier    : Box<dyn Notifier>,
    renderer    : Renderer,
    export_dir  : PathBuf,

    contacts    : Vec<Contact>,
    mode        : ViewMode,
    detached    : Vec<Contact>,
    form        : Option<ContactForm>,
}

impl ContactsView {
    pub async fn mount(&mut self) -> Result<()> {
        debug!("Mounting contacts view");
        self.fetch_all().await
    }

    pub fn unmount(self) {
        debug!("Unmounting contacts view with {} contacts", self.contacts.len());
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == Some(id))
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Contacts the current mode presents, in collection order. Detached
    /// mode presents the last server results instead of the collection.
    pub fn visible(&self) -> Vec<&Contact> {
        match &self.mode {
            ViewMode::All => self.contacts.iter().collect(),
            ViewMode::Detached => self.detached.iter().collect(),
            ViewMode::Favorites => self.contacts.iter()
                .filter(|c| c.is_favorite())
                .collect(),
            ViewMode::Search(keyword) => self.contacts.iter()
                .filter(|c| c.matches(keyword))
                .collect(),
        }
    }

    fn render(&mut self) {
        let markup = self.renderer.render(self.visible());
        self.surface.replace(&markup);
    }

    fn render_detached(&mut self, contacts: Vec<Contact>) {
        self.detached = contacts;
        self.set_mode(ViewMode::Detached);
    }

    fn set_mode(&mut self, mode: ViewMode) {
        if mode != ViewMode::Detached {
            self.detached.clear();
        }
        self.mode = mode;
        self.render();
    }

    fn notify(&self, notice: Notice) {
        self.notifier.alert(notice.text(self.renderer.locale()));
    }

    pub async fn fetch_all(&mut self) -> Result<()> {
        let contacts = match self.service.contacts().await {
            Ok(v) => v,
            Err(e) => {
                warn!("Fetching contacts error: {e}");
                self.notify(Notice::FetchFailed);
                return Err(e);
            }
        };

        debug!("Fetched {} contacts", contacts.len());
        self.contacts = contacts;
        self.set_mode(ViewMode::All);
        Ok(())
    }

    pub fn show_all(&mut self) {
        self.set_mode(ViewMode::All);
    }

    pub fn show_favorites(&mut self) {
        self.set_mode(ViewMode::Favorites);
    }

    pub fn search(&mut self, keyword: &str) {
        self.set_mode(ViewMode::Search(keyword.to_string()));
    }

    pub async fn search_remote(&mut self, keyword: &str) -> Result<usize> {
        let found = self.service.search(keyword).await.map_err(|e| {
            warn!("Searching contacts with '{}' error: {e}", keyword);
            self.notify(Notice::FetchFailed);
            e
        })?;
        let count = found.len();
        self.render_detached(found);
        Ok(count)
    }

    pub async fn show_remote_favorites(&mut self) -> Result<usize> {
        let found = self.service.favorites().await.map_err(|e| {
            warn!("Fetching favorite contacts error: {e}");
            self.notify(Notice::FetchFailed);
            e
        })?;
        let count = found.len();
        self.render_detached(found);
        Ok(count)
    }

    pub async fn inspect(&mut self, id: ContactId) -> Result<Contact> {
        let contact = match self.service.contact(id).await {
            Ok(Some(v)) => v,
            Ok(None) => {
                self.notify(Notice::ContactNotFound);
                return Err(Error::Argument(format!("Contact {} not found", id)));
            }
            Err(e) => {
                warn!("Fetching contact {} error: {e}", id);
                self.notify(Notice::FetchFailed);
                return Err(e);
            }
        };

        self.render_detached(vec![contact.clone()]);
        Ok(contact)
    }

    pub fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ContactForm> {
        self.form.as_mut()
    }

    pub fn dialog_markup(&self) -> Option<String> {
        self.form.as_ref().map(|v| self.renderer.render_form(v))
    }

    pub fn show_add_dialog(&mut self) -> &mut ContactForm {
        self.form.insert(ContactForm::for_create())
    }

    pub fn edit_contact(&mut self, id: ContactId) -> Result<&mut ContactForm> {
        let Some(contact) = self.contact(id) else {
            return Err(Error::Argument(format!("Contact {} is not in the list", id)));
        };
        let form = ContactForm::for_edit(contact)?;
        Ok(self.form.insert(form))
    }

    pub fn close_dialog(&mut self) {
        self.form = None;
    }

    pub async fn save(&mut self) -> Result<()> {
        let Some(form) = self.form.as_ref() else {
            return Err(Error::State(format!("No contact dialog is open")));
        };

        if form.names().values().is_empty() {
            self.notify(Notice::NameRequired);
            return Err(Error::Argument(format!("At least one name is required")));
        }
        if form.phone_numbers().values().is_empty() {
            self.notify(Notice::PhoneRequired);
            return Err(Error::Argument(format!("At least one phone number is required")));
        }

        let contact = form.collect()?;
        let result = match form.session() {
            Session::Creating => self.service.create_contact(&contact).await.map(|v| {
                info!("Contact {} created", v.id().map(|id| id.to_string()).unwrap_or_default());
            }),
            Session::Editing(id) => self.service.update_contact(id, &contact).await.map(|_| {
                info!("Contact {} updated", id);
            }),
        };

        if let Err(e) = result {
            warn!("Saving contact error: {e}");
            self.notify(Notice::SaveFailed);
            return Err(e);
        }

        self.form = None;
        self.fetch_all().await
    }

    /// Returns `false` when the user declines the confirmation.
    pub async fn delete_contact(&mut self, id: ContactId) -> Result<bool> {
        let question = Notice::ConfirmDelete.text(self.renderer.locale());
        if !self.notifier.confirm(question) {
            debug!("Deleting contact {} cancelled", id);
            return Ok(false);
        }

        if let Err(e) = self.service.delete_contact(id).await {
            warn!("Deleting contact {} error: {e}", id);
            self.notify(Notice::DeleteFailed);
            return Err(e);
        }

        info!("Contact {} deleted", id);
        self.fetch_all().await.map(|_| true)
    }

    /// Flips the favorite flag on the server, then only locally, keeping
    /// the current presentation.
    pub async fn toggle_favorite(&mut self, id: ContactId) -> Result<bool> {
        let current = self.contact(id)
            .or_else(|| self.detached.iter().find(|c| c.id() == Some(id)))
            .map(|c| c.is_favorite());
        let Some(current) = current else {
            return Err(Error::Argument(format!("Contact {} is not in the list", id)));
        };

        let favorite = !current;
        if let Err(e) = self.service.update_favorite(id, favorite).await {
            warn!("Updating favorite of contact {} error: {e}", id);
            self.notify(Notice::FavoriteFailed);
            return Err(e);
        }

        self.contacts.iter_mut()
            .chain(self.detached.iter_mut())
            .filter(|c| c.id() == Some(id))
            .for_each(|c| c.set_favorite(favorite));
        self.render();
        Ok(favorite)
    }

    pub async fn append_name(&mut self, id: ContactId, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Argument(format!("Name must not be empty")));
        }

        if let Err(e) = self.service.add_name(id, name).await {
            warn!("Adding name to contact {} error: {e}", id);
            self.notify(Notice::SaveFailed);
            return Err(e);
        }
        self.fetch_all().await
    }

    pub async fn append_phone_number(&mut self, id: ContactId, phone: &str) -> Result<()> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(Error::Argument(format!("Phone number must not be empty")));
        }

        if let Err(e) = self.service.add_phone_number(id, phone).await {
            warn!("Adding phone number to contact {} error: {e}", id);
            self.notify(Notice::SaveFailed);
            return Err(e);
        }
        self.fetch_all().await
    }

    pub async fn import_contacts(&mut self, path: &Path) -> Result<()> {
        let file_name = path.file_name()
            .and_then(|v| v.to_str())
            .unwrap_or(EXPORT_FILE_NAME)
            .to_string();

        let data = match tokio::fs::read(path).await {
            Ok(v) => v,
            Err(e) => {
                warn!("Reading import file {} error: {e}", path.display());
                self.notify(Notice::ImportFailed);
                return Err(Error::from(e));
            }
        };

        if let Err(e) = self.service.import_contacts(&file_name, data).await {
            warn!("Importing contacts from {} error: {e}", path.display());
            self.notify(Notice::ImportFailed);
            return Err(e);
        }

        info!("Contacts imported from {}", path.display());
        self.notify(Notice::ImportSucceeded);
        self.fetch_all().await
    }

    /// Downloads the spreadsheet into `<export_dir>/contacts.xlsx`.
    pub async fn export_contacts(&mut self) -> Result<PathBuf> {
        let data = match self.service.export_contacts().await {
            Ok(v) => v,
            Err(e) => {
                warn!("Exporting contacts error: {e}");
                self.notify(Notice::ExportFailed);
                return Err(e);
            }
        };

        let path = self.export_dir.join(EXPORT_FILE_NAME);
        if let Err(e) = tokio::fs::write(&path, data).await {
            warn!("Writing export file {} error: {e}", path.display());
            self.notify(Notice::ExportFailed);
            return Err(Error::from(e));
        }

        info!("Contacts exported to {}", path.display());
        Ok(path)
    }
}
