pub mod core;
pub mod contacts;

pub use crate::core::{
    error::{self, Error},
    config::{self, Config},
    default_configuration as configuration,
    logger,
};

pub use crate::contacts::{
    Contact,
    ContactBuilder,
    ContactId,
    ContactService,
    APIClient,
    ContactsView,
    ViewBuilder,
};
