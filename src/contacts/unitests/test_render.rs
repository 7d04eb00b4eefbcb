use crate::contacts::{
    form::ContactForm,
    notice::Locale,
    render::{self, Format, Renderer},
    contact::{Contact, ContactBuilder},
};
use super::create_contact;

#[test]
fn test_render_empty() {
    let html = Renderer::new(Format::Html, Locale::Zh);
    let text = Renderer::new(Format::Text, Locale::En);
    let empty: Vec<Contact> = Vec::new();

    assert_eq!(html.render(&empty), "");
    assert_eq!(text.render(&empty), "");
    assert!(!html.render(&empty).contains("contact-card"));
}

#[test]
fn test_render_one_card_per_contact() {
    let contacts = vec![
        create_contact(1, &["A"], &["1"], false),
        create_contact(2, &["B"], &["2"], true),
        create_contact(3, &["C"], &["3"], false),
    ];

    let out = Renderer::new(Format::Html, Locale::Zh).render(&contacts);
    assert_eq!(out.matches("class=\"contact-card\"").count(), 3);

    let first = out.find("data-id=\"1\"").unwrap();
    let third = out.find("data-id=\"3\"").unwrap();
    assert!(first < third);
}

#[test]
fn test_favorite_glyph() {
    let off = create_contact(1, &["A"], &["1"], false);
    let on = create_contact(2, &["B"], &["2"], true);

    for format in [Format::Html, Format::Text] {
        let renderer = Renderer::new(format, Locale::En);
        let out = renderer.render([&off]);
        assert!(out.contains(render::NOT_FAVORITE_GLYPH));
        assert!(!out.contains(render::FAVORITE_GLYPH));

        let out = renderer.render([&on]);
        assert!(out.contains(render::FAVORITE_GLYPH));
        assert!(!out.contains(render::NOT_FAVORITE_GLYPH));
    }
}

#[test]
fn test_card_fields() {
    let contact = ContactBuilder::new()
        .with_names(&["Hana", "H"])
        .with_phone_numbers(&["111", "222"])
        .with_email("hana@example.com")
        .build()
        .unwrap();

    let out = Renderer::new(Format::Html, Locale::Zh).render([&contact]);
    assert!(out.contains("<div class=\"contact-names\">Hana, H</div>"));
    assert!(out.contains("<div>电话：111, 222</div>"));
    assert!(out.contains("<div>邮箱：hana@example.com</div>"));
    assert!(out.contains("<div>地址：-</div>"));
    assert!(out.contains("<div>社交账号：-</div>"));
    assert!(out.contains(">编辑</button>"));
    assert!(out.contains(">删除</button>"));

    let out = Renderer::new(Format::Text, Locale::En).render([&contact]);
    assert!(out.contains("Phone: 111, 222"));
    assert!(out.contains("Location: -"));
}

#[test]
fn test_html_escaped() {
    let contact = create_contact(1, &["<script>alert(1)</script>"], &["\"1\""], false);
    let out = Renderer::new(Format::Html, Locale::En).render([&contact]);
    assert!(!out.contains("<script>"));
    assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(out.contains("&quot;1&quot;"));
}

#[test]
fn test_render_form() {
    let mut form = ContactForm::for_create();
    form.names_mut().set(0, "Ivy").unwrap();
    form.names_mut().add_field();

    let out = Renderer::new(Format::Text, Locale::En).render_form(&form);
    assert!(out.contains("== Add contact =="));
    assert!(out.contains("  [0] Ivy"));
    assert!(out.contains("  [1] "));

    let contact = create_contact(3, &["Ivy"], &["9"], true);
    let form = ContactForm::for_edit(&contact).unwrap();
    let out = Renderer::new(Format::Html, Locale::Zh).render_form(&form);
    assert!(out.contains("编辑联系人"));
    assert_eq!(out.matches("class=\"name-input\"").count(), 1);
    assert!(out.contains("type=\"checkbox\" checked"));
}

#[test]
fn test_format_parse() {
    assert_eq!("html".parse::<Format>().unwrap(), Format::Html);
    assert_eq!("TEXT".parse::<Format>().unwrap(), Format::Text);
    assert!("pdf".parse::<Format>().is_err());
    assert_eq!(Format::default(), Format::Text);
}
