use std::fmt::{self, Write};
use std::str::FromStr;

use crate::{
    Error,
    error::Result,
};

use super::{
    contact::Contact,
    form::{ContactForm, Session},
    notice::{self, Labels, Locale},
};

pub const FAVORITE_GLYPH: &str = "★";
pub const NOT_FAVORITE_GLYPH: &str = "☆";
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Html,
    #[default]
    Text,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "text" => Ok(Format::Text),
            _ => Err(Error::Argument(format!("Unsupported render format: {}", s))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Html => write!(f, "html"),
            Format::Text => write!(f, "text"),
        }
    }
}

pub fn favorite_glyph(favorite: bool) -> &'static str {
    match favorite {
        true => FAVORITE_GLYPH,
        false => NOT_FAVORITE_GLYPH,
    }
}

/// Turns a contact sequence into the full content of a display surface.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: Format,
    locale: Locale,
}

impl Renderer {
    pub fn new(format: Format, locale: Locale) -> Self {
        Self { format, locale }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// One card per contact, in sequence order. No contacts, no output.
    pub fn render<'a, I>(&self, contacts: I) -> String
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        let labels = notice::labels(self.locale);
        let mut out = String::new();
        for contact in contacts {
            match self.format {
                Format::Html => html_card(&mut out, contact, labels),
                Format::Text => text_card(&mut out, contact, labels),
            }
        }
        out
    }

    pub fn render_form(&self, form: &ContactForm) -> String {
        let labels = notice::labels(self.locale);
        match self.format {
            Format::Html => html_form(form, labels),
            Format::Text => text_form(form, labels),
        }
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}

fn id_attr(contact: &Contact) -> String {
    contact.id().map(|v| v.to_string()).unwrap_or_default()
}

fn html_card(out: &mut String, contact: &Contact, labels: &Labels) {
    let id = id_attr(contact);
    _ = write!(out, concat!(
            "<div class=\"contact-card\" data-id=\"{id}\">\n",
            "    <div class=\"contact-header\">\n",
            "        <div class=\"contact-names\">{names}</div>\n",
            "        <div class=\"contact-actions\">\n",
            "            <button class=\"btn\" data-action=\"favorite\" data-id=\"{id}\">{glyph}</button>\n",
            "            <button class=\"btn\" data-action=\"edit\" data-id=\"{id}\">{edit}</button>\n",
            "            <button class=\"btn\" data-action=\"delete\" data-id=\"{id}\">{delete}</button>\n",
            "        </div>\n",
            "    </div>\n",
            "    <div>{phone_label}{phones}</div>\n",
            "    <div>{email_label}{email}</div>\n",
            "    <div>{location_label}{location}</div>\n",
            "    <div>{media_label}{media}</div>\n",
            "</div>\n"
        ),
        id = id,
        names = escape_html(&contact.display_names()),
        glyph = favorite_glyph(contact.is_favorite()),
        edit = labels.edit,
        delete = labels.delete,
        phone_label = labels.phone,
        phones = escape_html(&contact.display_phone_numbers()),
        email_label = labels.email,
        email = escape_html(or_placeholder(contact.email())),
        location_label = labels.location,
        location = escape_html(or_placeholder(contact.location())),
        media_label = labels.media,
        media = escape_html(or_placeholder(contact.media_handles())),
    );
}

fn text_card(out: &mut String, contact: &Contact, labels: &Labels) {
    let id = id_attr(contact);
    _ = writeln!(out, "[{}] {} {}", id, favorite_glyph(contact.is_favorite()), contact.display_names());
    _ = writeln!(out, "    {}{}", labels.phone, contact.display_phone_numbers());
    _ = writeln!(out, "    {}{}", labels.email, or_placeholder(contact.email()));
    _ = writeln!(out, "    {}{}", labels.location, or_placeholder(contact.location()));
    _ = writeln!(out, "    {}{}", labels.media, or_placeholder(contact.media_handles()));
    _ = writeln!(out, "    {}: dialog edit {} | {}: delete {}", labels.edit, id, labels.delete, id);
}

fn form_title(form: &ContactForm, labels: &Labels) -> &'static str {
    match form.session() {
        Session::Creating => labels.add_title,
        Session::Editing(_) => labels.edit_title,
    }
}

fn html_form(form: &ContactForm, labels: &Labels) -> String {
    let mut out = String::new();
    _ = writeln!(out, "<div id=\"contactDialog\" class=\"dialog\">");
    _ = writeln!(out, "    <h2 id=\"dialogTitle\">{}</h2>", form_title(form, labels));
    _ = writeln!(out, "    <div id=\"namesContainer\">");
    for name in form.names().fields() {
        _ = writeln!(out, "        <div class=\"input-group\"><input type=\"text\" class=\"name-input\" value=\"{}\"></div>", escape_html(name));
    }
    _ = writeln!(out, "    </div>");
    _ = writeln!(out, "    <div id=\"phonesContainer\">");
    for phone in form.phone_numbers().fields() {
        _ = writeln!(out, "        <div class=\"input-group\"><input type=\"text\" class=\"phone-input\" value=\"{}\"></div>", escape_html(phone));
    }
    _ = writeln!(out, "    </div>");
    _ = writeln!(out, "    <input id=\"emailInput\" value=\"{}\">", escape_html(form.email()));
    _ = writeln!(out, "    <input id=\"locationInput\" value=\"{}\">", escape_html(form.location()));
    _ = writeln!(out, "    <input id=\"mediaHandlesInput\" value=\"{}\">", escape_html(form.media_handles()));
    _ = writeln!(out, "    <input id=\"favoriteInput\" type=\"checkbox\"{}>", if form.is_favorite() { " checked" } else { "" });
    _ = writeln!(out, "</div>");
    out
}

fn text_form(form: &ContactForm, labels: &Labels) -> String {
    let mut out = String::new();
    _ = writeln!(out, "== {} ==", form_title(form, labels));
    _ = writeln!(out, "names:");
    for (i, name) in form.names().fields().iter().enumerate() {
        _ = writeln!(out, "  [{}] {}", i, name);
    }
    _ = writeln!(out, "phones:");
    for (i, phone) in form.phone_numbers().fields().iter().enumerate() {
        _ = writeln!(out, "  [{}] {}", i, phone);
    }
    _ = writeln!(out, "{}{}", labels.email, form.email());
    _ = writeln!(out, "{}{}", labels.location, form.location());
    _ = writeln!(out, "{}{}", labels.media, form.media_handles());
    _ = writeln!(out, "info: {}", form.info());
    _ = writeln!(out, "favorite: {}", favorite_glyph(form.is_favorite()));
    out
}

pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
