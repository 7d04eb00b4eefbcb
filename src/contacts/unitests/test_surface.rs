use std::fs;
use std::path::Path;
use serial_test::serial;

use crate::contacts::{
    contact::Contact,
    notice::Locale,
    render::{Format, Renderer},
    surface::{HtmlFileSurface, Surface, PAGE_HEAD, PAGE_TAIL},
};

use super::{create_contact, working_path, remove_working_path};

#[test]
#[serial]
fn test_html_surface_rewrites_page() {
    let path = working_path("test_html_surface");
    let file = Path::new(&path).join("contacts.html").display().to_string();

    let renderer = Renderer::new(Format::Html, Locale::En);
    let mut surface = HtmlFileSurface::new(&file);
    assert_eq!(surface.path(), &Path::new(&file).to_path_buf());

    let first = vec![
        create_contact(1, &["Alice"], &["100"], false),
        create_contact(2, &["Bob"], &["200"], true),
    ];
    surface.replace(&renderer.render(&first));
    let page = fs::read_to_string(&file).unwrap();
    assert_eq!(page.matches("class=\"contact-card\"").count(), 2);

    let second = vec![create_contact(3, &["Carol"], &["300"], false)];
    let markup = renderer.render(&second);
    surface.replace(&markup);

    let page = fs::read_to_string(&file).unwrap();
    assert_eq!(page, format!("{}{}{}", PAGE_HEAD, markup, PAGE_TAIL));
    assert!(!page.contains("Alice"));
    assert!(!page.contains("Bob"));
    assert_eq!(page.matches("class=\"contact-card\"").count(), 1);

    let empty: Vec<Contact> = Vec::new();
    surface.replace(&renderer.render(&empty));
    let page = fs::read_to_string(&file).unwrap();
    assert_eq!(page, format!("{}{}", PAGE_HEAD, PAGE_TAIL));
    assert!(!page.contains("contact-card"));

    remove_working_path(&path);
}

#[test]
fn test_html_surface_unwritable_path() {
    let mut surface = HtmlFileSurface::new("/nonexistent-dir/contacts.html");
    surface.replace("<div></div>");
    assert!(fs::metadata(surface.path()).is_err());
}
