use std::fmt;
use std::str::FromStr;

use crate::{
    Error,
    error::Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    En,
    #[default]
    Zh,
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            "zh" | "zh-cn" | "zh_cn" => Ok(Locale::Zh),
            _ => Err(Error::Argument(format!("Unsupported locale: {}", s))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Zh => write!(f, "zh"),
        }
    }
}

/// Messages shown to the user through a modal notice or a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FetchFailed,
    SaveFailed,
    DeleteFailed,
    FavoriteFailed,
    ImportSucceeded,
    ImportFailed,
    ExportFailed,
    ContactNotFound,
    NameRequired,
    PhoneRequired,
    ConfirmDelete,
}

impl Notice {
    pub fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Notice::FetchFailed     => "Failed to load contacts",
                Notice::SaveFailed      => "Failed to save contact",
                Notice::DeleteFailed    => "Failed to delete contact",
                Notice::FavoriteFailed  => "Operation failed",
                Notice::ImportSucceeded => "Import succeeded",
                Notice::ImportFailed    => "Import failed",
                Notice::ExportFailed    => "Export failed",
                Notice::ContactNotFound => "Contact not found",
                Notice::NameRequired    => "At least one name is required",
                Notice::PhoneRequired   => "At least one phone number is required",
                Notice::ConfirmDelete   => "Are you sure you want to delete this contact?",
            },
            Locale::Zh => match self {
                Notice::FetchFailed     => "获取联系人失败",
                Notice::SaveFailed      => "保存失败",
                Notice::DeleteFailed    => "删除失败",
                Notice::FavoriteFailed  => "操作失败",
                Notice::ImportSucceeded => "导入成功",
                Notice::ImportFailed    => "导入失败",
                Notice::ExportFailed    => "导出失败",
                Notice::ContactNotFound => "联系人不存在",
                Notice::NameRequired    => "请至少填写一个名字",
                Notice::PhoneRequired   => "请至少填写一个电话号码",
                Notice::ConfirmDelete   => "确定要删除这个联系人吗？",
            },
        }
    }
}

/// Fixed texts of the rendered contact cards and the editing dialog.
pub(crate) struct Labels {
    pub phone       : &'static str,
    pub email       : &'static str,
    pub location    : &'static str,
    pub media       : &'static str,
    pub edit        : &'static str,
    pub delete      : &'static str,
    pub add_title   : &'static str,
    pub edit_title  : &'static str,
}

static EN_LABELS: Labels = Labels {
    phone       : "Phone: ",
    email       : "Email: ",
    location    : "Location: ",
    media       : "Social: ",
    edit        : "Edit",
    delete      : "Delete",
    add_title   : "Add contact",
    edit_title  : "Edit contact",
};

static ZH_LABELS: Labels = Labels {
    phone       : "电话：",
    email       : "邮箱：",
    location    : "地址：",
    media       : "社交账号：",
    edit        : "编辑",
    delete      : "删除",
    add_title   : "添加联系人",
    edit_title  : "编辑联系人",
};

pub(crate) fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::En => &EN_LABELS,
        Locale::Zh => &ZH_LABELS,
    }
}
