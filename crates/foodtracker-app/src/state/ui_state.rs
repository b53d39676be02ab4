use crate::state::MealEditorState;

// UiState holds ephemeral UI-only state (active screen, notices). It is not persisted.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) screen: Screen,
    pub(crate) notice: Option<Notice>,
}

#[derive(Debug, Default, derive_more::IsVariant)]
pub(crate) enum Screen {
    #[default]
    MealList,
    MealEditor(MealEditorState),
}

impl Screen {
    #[must_use]
    pub(crate) fn as_editor(&self) -> Option<&MealEditorState> {
        match self {
            Screen::MealEditor(editor) => Some(editor),
            Screen::MealList => None,
        }
    }

    pub(crate) fn as_editor_mut(&mut self) -> Option<&mut MealEditorState> {
        match self {
            Screen::MealEditor(editor) => Some(editor),
            Screen::MealList => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) kind: NoticeKind,
    pub(crate) message: String,
    pub(crate) retry_save: bool,
}

impl Notice {
    #[must_use]
    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            retry_save: false,
        }
    }

    #[must_use]
    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            retry_save: false,
        }
    }

    #[must_use]
    pub(crate) fn save_failed(message: impl Into<String>) -> Self {
        Self {
            retry_save: true,
            ..Self::error(message)
        }
    }
}
