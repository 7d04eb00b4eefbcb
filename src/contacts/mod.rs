pub mod contact;
pub mod service;
pub mod api_client;

pub mod notice;
pub mod render;
pub mod surface;
pub mod form;
pub mod view;

pub use contact::{Contact, ContactBuilder, ContactId};
pub use service::ContactService;
pub use api_client::APIClient;
pub use notice::{Locale, Notice};
pub use render::{Format, Renderer};
pub use surface::{Surface, Notifier, HtmlFileSurface};
pub use form::{ContactForm, FieldGroup, Session};
pub use view::{ContactsView, ViewBuilder, ViewMode};
