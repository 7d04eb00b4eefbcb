use crate::contacts::notice::{self, Locale, Notice};

#[test]
fn test_locale_parse() {
    assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::Zh);
    assert!("fr".parse::<Locale>().is_err());
    assert_eq!(Locale::default(), Locale::Zh);
    assert_eq!(Locale::En.to_string(), "en");
}

#[test]
fn test_notice_text() {
    assert_eq!(Notice::FetchFailed.text(Locale::Zh), "获取联系人失败");
    assert_eq!(Notice::SaveFailed.text(Locale::Zh), "保存失败");
    assert_eq!(Notice::DeleteFailed.text(Locale::En), "Failed to delete contact");
    assert_eq!(Notice::ConfirmDelete.text(Locale::Zh), "确定要删除这个联系人吗？");
}

#[test]
fn test_labels() {
    assert_eq!(notice::labels(Locale::Zh).edit, "编辑");
    assert_eq!(notice::labels(Locale::En).delete, "Delete");
}
