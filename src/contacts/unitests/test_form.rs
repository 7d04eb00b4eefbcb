use crate::contacts::form::{ContactForm, FieldGroup, Session};
use crate::contacts::contact::ContactBuilder;
use super::create_contact;

#[test]
fn test_field_group_starts_with_one() {
    let group = FieldGroup::new();
    assert_eq!(group.len(), 1);
    assert_eq!(group.fields()[0], "");
    assert_eq!(group.values().len(), 0);
}

#[test]
fn test_remove_last_field_is_noop() {
    let mut group = FieldGroup::new();
    assert_eq!(group.remove_field(0), false);
    assert_eq!(group.len(), 1);

    let index = group.add_field();
    assert_eq!(index, 1);
    assert_eq!(group.len(), 2);

    assert_eq!(group.remove_field(5), false);
    assert_eq!(group.remove_field(0), true);
    assert_eq!(group.len(), 1);
    assert_eq!(group.remove_field(0), false);
    assert_eq!(group.len(), 1);
}

#[test]
fn test_set_field() {
    let mut group = FieldGroup::new();
    assert!(group.set(0, "Alice").is_ok());
    assert!(group.set(1, "Bob").is_err());
    group.add_field();
    assert!(group.set(1, "Bob").is_ok());
    assert_eq!(group.fields(), &["Alice".to_string(), "Bob".to_string()]);
}

#[test]
fn test_values_trimmed_and_filtered() {
    let mut group = FieldGroup::new();
    group.set(0, "  Alice ").unwrap();
    group.add_field();
    group.set(1, "   ").unwrap();
    group.add_field();
    group.set(2, "Bob").unwrap();

    assert_eq!(group.values(), vec!["Alice".to_string(), "Bob".to_string()]);
}

#[test]
fn test_create_form() {
    let form = ContactForm::for_create();
    assert_eq!(form.session(), Session::Creating);
    assert_eq!(form.names().len(), 1);
    assert_eq!(form.phone_numbers().len(), 1);
    assert_eq!(form.email(), "");
    assert_eq!(form.is_favorite(), false);
}

#[test]
fn test_edit_form_prefilled() {
    let mut b = ContactBuilder::new();
    b.with_id(9)
        .with_names(&["Dora", "D"])
        .with_phone_numbers(&["1", "2", "3"])
        .with_email("dora@example.com")
        .with_info("neighbour")
        .with_favorite(true);
    let contact = b.build().unwrap();

    let form = ContactForm::for_edit(&contact).unwrap();
    assert_eq!(form.session(), Session::Editing(9));
    assert_eq!(form.names().len(), 2);
    assert_eq!(form.phone_numbers().len(), 3);
    assert_eq!(form.email(), "dora@example.com");
    assert_eq!(form.location(), "");
    assert_eq!(form.info(), "neighbour");
    assert_eq!(form.is_favorite(), true);

    let collected = form.collect().unwrap();
    assert_eq!(collected.id(), None);
    assert_eq!(collected.names(), contact.names());
    assert_eq!(collected.phone_numbers(), contact.phone_numbers());
    assert_eq!(collected.info(), Some("neighbour"));
}

#[test]
fn test_edit_form_requires_id() {
    let contact = ContactBuilder::new()
        .with_name("Eve")
        .with_phone_number("1")
        .build()
        .unwrap();
    assert!(ContactForm::for_edit(&contact).is_err());
}

#[test]
fn test_collect_drops_empty_names() {
    let mut form = ContactForm::for_create();
    form.names_mut().set(0, "Frank").unwrap();
    form.names_mut().add_field();
    form.names_mut().add_field();
    form.names_mut().set(2, "Frankie").unwrap();
    form.phone_numbers_mut().set(0, "42").unwrap();
    form.set_email(" ");
    form.set_media_handles("@frank");

    let contact = form.collect().unwrap();
    assert_eq!(contact.names().len(), 2);
    assert_eq!(contact.names(), &["Frank".to_string(), "Frankie".to_string()]);
    assert_eq!(contact.email(), None);
    assert_eq!(contact.media_handles(), Some("@frank"));
}

#[test]
fn test_collect_without_names_fails() {
    let mut form = ContactForm::for_create();
    form.phone_numbers_mut().set(0, "42").unwrap();
    assert!(form.collect().is_err());
}

#[test]
fn test_edit_form_with_empty_arrays() {
    let contact: crate::contacts::Contact = serde_json::from_str(
        r#"{"id": 4, "names": [], "phoneNumbers": [], "favorite": false}"#
    ).unwrap();

    let form = ContactForm::for_edit(&contact).unwrap();
    assert_eq!(form.names().len(), 1);
    assert_eq!(form.phone_numbers().len(), 1);

    let other = create_contact(5, &["G"], &["7"], false);
    let form = ContactForm::for_edit(&other).unwrap();
    assert_eq!(form.session(), Session::Editing(5));
}
