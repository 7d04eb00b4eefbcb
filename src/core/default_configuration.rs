use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;
use url::Url;

use crate::{
    Error,
    core::{
        config::Config,
        Result
    },
    contacts::{
        notice::Locale,
        render::Format,
    },
};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_EXPORT_DIR: &str = ".";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : Option<String>,
    #[serde(rename = "logFile")]
    file    : Option<String>,
}

#[derive(Clone, Default, Deserialize)]
struct FileCfg {
    #[serde(rename = "apiUrl")]
    api_url     : Option<String>,
    #[serde(rename = "locale")]
    locale      : Option<String>,
    #[serde(rename = "format")]
    format      : Option<String>,
    #[serde(rename = "surfaceFile")]
    surface_file: Option<String>,
    #[serde(rename = "exportDir")]
    export_dir  : Option<String>,
    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

struct Configuration {
    api_url     : String,
    locale      : Locale,
    format      : Format,
    surface_file: Option<String>,
    export_dir  : String,
    log_level   : LevelFilter,
    log_file    : Option<String>,
}

pub struct Builder<'a> {
    api_url     : Option<&'a str>,
    locale      : Option<Locale>,
    format      : Option<Format>,
    surface_file: Option<&'a str>,
    export_dir  : Option<String>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<FileCfg>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            api_url     : None,
            locale      : None,
            format      : None,
            surface_file: None,
            export_dir  : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_api_url(&mut self, url: &'a str) -> &mut Self {
        self.api_url = Some(url);
        self
    }

    pub fn with_locale(&mut self, locale: Locale) -> &mut Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_format(&mut self, format: Format) -> &mut Self {
        self.format = Some(format);
        self
    }

    pub fn with_surface_file(&mut self, path: &'a str) -> &mut Self {
        self.surface_file = Some(path);
        self
    }

    pub fn with_export_dir(&mut self, input: &str) -> &mut Self {
        let mut dir = String::new();
        if input == "~" || input.starts_with("~/") {
            dir += &std::env::var("HOME").unwrap_or_else(|_| ".".into());
            dir += &input[1..];
        } else {
            dir += input;
        }
        self.export_dir = Some(dir);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<FileCfg>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl Configuration {
    // Explicit builder settings win over the loaded file, which wins over defaults.
    fn new(b: &Builder) -> Result<Self> {
        let file = b.cfg.clone().unwrap_or_default();

        let api_url = b.api_url.map(|v| v.to_string())
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Url::parse(&api_url)?;

        let locale = match b.locale {
            Some(v) => v,
            None => match file.locale.as_deref() {
                Some(v) => v.parse::<Locale>()?,
                None => Locale::default(),
            }
        };

        let format = match b.format {
            Some(v) => v,
            None => match file.format.as_deref() {
                Some(v) => v.parse::<Format>()?,
                None => Format::default(),
            }
        };

        let surface_file = b.surface_file.map(|v| v.to_string())
            .or(file.surface_file);

        let export_dir = b.export_dir.clone()
            .or(file.export_dir)
            .unwrap_or_else(|| DEFAULT_EXPORT_DIR.to_string());

        let logger = file.logger.as_ref();
        let log_level = match b.log_level {
            Some(v) => v,
            None => logger.and_then(|v| v.level.as_deref())
                .map(|v| v.parse::<LevelFilter>().map_err(|_|
                    Error::Argument(format!("bad config, invalid log level: {}", v))
                ))
                .transpose()?
                .unwrap_or(LevelFilter::Info),
        };

        let log_file = b.log_file.map(|v| v.to_string())
            .or(logger.and_then(|v| v.file.clone()));

        Ok(Self {
            api_url,
            locale,
            format,
            surface_file,
            export_dir,
            log_level,
            log_file,
        })
    }
}

impl Config for Configuration {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn format(&self) -> Format {
        self.format
    }

    fn surface_file(&self) -> Option<&str> {
        self.surface_file.as_deref()
    }

    fn export_dir(&self) -> &str {
        &self.export_dir
    }

    fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api:{},", self.api_url)?;
        write!(f, "\tlocale:{},", self.locale)?;
        write!(f, "\tformat:{},", self.format)?;
        self.surface_file.as_ref().map(|v| {
            write!(f, "\tsurface:{},", v).ok();
        });
        write!(f, "\texport:{},", self.export_dir)?;
        write!(f, "\tlog:{}", self.log_level)?;
        self.log_file.as_ref().map(|v| {
            write!(f, "({})", v).ok();
        });
        Ok(())
    }
}
