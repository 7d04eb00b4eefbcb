use log::LevelFilter;
use contacts::{
    Config,
    configuration,
    contacts::{Format, Locale},
};

use crate::conf_path;

/**
# default_configuration::Builder
 - new
 - with_api_url
 - with_locale
 - with_format
 - with_surface_file
 - with_export_dir
 - with_logger
 - load
 - build

# trait Config
 - api_url
 - locale
 - format
 - surface_file
 - export_dir
 - log_level
 - log_file
 */
#[test]
fn test_build_default_cfg() {
    let cfg: Box<dyn Config> = configuration::Builder::new()
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    assert_eq!(cfg.api_url(), configuration::DEFAULT_API_URL);
    assert_eq!(cfg.locale(), Locale::Zh);
    assert_eq!(cfg.format(), Format::Text);
    assert_eq!(cfg.surface_file(), None);
    assert_eq!(cfg.export_dir(), configuration::DEFAULT_EXPORT_DIR);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file(), None);
}

#[test]
fn test_build_cfg() {
    let cfg = configuration::Builder::new()
        .with_api_url("https://contacts.example.com")
        .with_locale(Locale::En)
        .with_format(Format::Html)
        .with_surface_file("contacts.html")
        .with_export_dir("exports")
        .with_logger(LevelFilter::Warn, Some("contacts.log"))
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    #[cfg(feature = "inspect")]
    cfg.dump();

    assert_eq!(cfg.api_url(), "https://contacts.example.com");
    assert_eq!(cfg.locale(), Locale::En);
    assert_eq!(cfg.format(), Format::Html);
    assert_eq!(cfg.surface_file(), Some("contacts.html"));
    assert_eq!(cfg.export_dir(), "exports");
    assert_eq!(cfg.log_level(), LevelFilter::Warn);
    assert_eq!(cfg.log_file(), Some("contacts.log"));
}

#[test]
fn test_export_dir_expands_home() {
    let Ok(home) = std::env::var("HOME") else {
        return;
    };

    let cfg = configuration::Builder::new()
        .with_export_dir("~/contacts")
        .build()
        .unwrap();
    assert_eq!(cfg.export_dir(), format!("{}/contacts", home));

    let cfg = configuration::Builder::new()
        .with_export_dir("~")
        .build()
        .unwrap();
    assert_eq!(cfg.export_dir(), home);
}

#[test]
fn test_export_dir_keeps_user_tilde() {
    let cfg = configuration::Builder::new()
        .with_export_dir("~alice/contacts")
        .build()
        .unwrap();
    assert_eq!(cfg.export_dir(), "~alice/contacts");
}

#[test]
fn test_load_cfg() {
    let path = conf_path("apitests1.conf");
    let cfg = configuration::Builder::new()
        .load(&path)
        .map_err(|_| assert!(false))
        .unwrap()
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    #[cfg(feature = "inspect")]
    cfg.dump();

    assert_eq!(cfg.api_url(), "http://127.0.0.1:8080");
    assert_eq!(cfg.locale(), Locale::En);
    assert_eq!(cfg.format(), Format::Html);
    assert_eq!(cfg.surface_file(), Some("apitests1.html"));
    assert_eq!(cfg.export_dir(), "apitests1_data");
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file(), None);
}

#[test]
fn test_load_cfg_for_log() {
    let path = conf_path("apitests2.conf");
    let cfg = configuration::Builder::new()
        .load(&path)
        .map_err(|e| {println!("{e}"); assert!(false)})
        .unwrap()
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    assert_eq!(cfg.api_url(), "http://contacts.example.com/book/");
    assert_eq!(cfg.locale(), Locale::Zh);
    assert_eq!(cfg.format(), Format::Text);
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("apitests2.log"));
}

#[test]
fn test_builder_overrides_file() {
    let path = conf_path("apitests1.conf");
    let cfg = configuration::Builder::new()
        .with_api_url("http://10.0.0.1:9000")
        .with_format(Format::Text)
        .load(&path)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cfg.api_url(), "http://10.0.0.1:9000");
    assert_eq!(cfg.format(), Format::Text);
    assert_eq!(cfg.locale(), Locale::En);
}

#[test]
fn test_bad_cfg() {
    let path = conf_path("apitests3.conf");
    let result = configuration::Builder::new()
        .load(&path)
        .unwrap()
        .build();
    assert!(result.is_err());

    let missing = configuration::Builder::new()
        .load("tests/apitests/missing.conf")
        .is_err();
    assert!(missing);

    let result = configuration::Builder::new()
        .with_api_url("not a url")
        .build();
    assert!(result.is_err());
}
