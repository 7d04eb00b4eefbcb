use log::LevelFilter;

use crate::contacts::{
    notice::Locale,
    render::Format,
};

pub trait Config: Send + Sync {
    fn api_url(&self) -> &str;

    fn locale(&self) -> Locale;
    fn format(&self) -> Format;
    fn surface_file(&self) -> Option<&str>;
    fn export_dir(&self) -> &str;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
