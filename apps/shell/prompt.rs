use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

pub(crate) struct ContactsPrompt {
    editing: bool,
}

impl ContactsPrompt {
    pub(crate) fn new() -> Self {
        Self { editing: false }
    }

    pub(crate) fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }
}

impl Prompt for ContactsPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        match self.editing {
            true => "contacts(dialog)$ ".into(),
            false => "contacts$ ".into(),
        }
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}
