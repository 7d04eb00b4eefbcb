use std::fs;
use std::path::PathBuf;
use log::warn;

/// Where rendered markup goes. Every call replaces the whole content.
pub trait Surface: Send {
    fn replace(&mut self, markup: &str);
}

/// Modal notices and interactive confirmations.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

pub(crate) const PAGE_HEAD: &str = "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Contacts</title></head>\n<body>\n<div id=\"contactsList\">\n";
pub(crate) const PAGE_TAIL: &str = "</div>\n</body>\n</html>\n";

/// Writes each render as a standalone HTML page, overwriting the file.
pub struct HtmlFileSurface {
    path: PathBuf,
}

impl HtmlFileSurface {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Surface for HtmlFileSurface {
    fn replace(&mut self, markup: &str) {
        let page = format!("{}{}{}", PAGE_HEAD, markup, PAGE_TAIL);
        if let Err(e) = fs::write(&self.path, page) {
            warn!("Writing surface {} error: {e}", self.path.display());
        }
    }
}
