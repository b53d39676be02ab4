use std::{fs, sync::Arc};

use eframe::egui::{DroppedFile, InputState, Key};

use crate::action::{Action, ActionRequestQueue, EditorAction, ListAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    MealList,
    MealEditor,
}

struct Trigger {
    key: Key,
    command: bool,
}

struct Shortcut {
    scope: Scope,
    trigger: Trigger,
    action: fn() -> Action,
}

impl Shortcut {
    const fn command(scope: Scope, key: Key, action: fn() -> Action) -> Self {
        Self {
            scope,
            trigger: Trigger { key, command: true },
            action,
        }
    }

    const fn plain(scope: Scope, key: Key, action: fn() -> Action) -> Self {
        Self {
            scope,
            trigger: Trigger {
                key,
                command: false,
            },
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 3] = [
    Shortcut::command(Scope::MealList, Key::N, || Action::List(ListAction::AddMeal)),
    Shortcut::command(Scope::MealEditor, Key::Enter, || {
        Action::Editor(EditorAction::Confirm)
    }),
    Shortcut::plain(Scope::MealEditor, Key::Escape, || {
        Action::Editor(EditorAction::Cancel)
    }),
];

pub(crate) fn handle_input(
    i: &InputState,
    editor_open: bool,
    action_queue: &mut ActionRequestQueue,
) {
    let scope = if editor_open {
        Scope::MealEditor
    } else {
        Scope::MealList
    };

    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in &SHORTCUTS {
        let triggered = shortcut.scope == scope
            && i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command;

        if triggered {
            action_queue.request((shortcut.action)());
            return;
        }
    }
}

/// Turns the first readable dropped file into a photo for the open editor.
///
/// Reads files from disk, so call it outside `Context::input`.
pub(crate) fn handle_dropped_files(
    files: &[DroppedFile],
    editor_open: bool,
    action_queue: &mut ActionRequestQueue,
) {
    if !editor_open {
        return;
    }
    if let Some(bytes) = files.iter().find_map(dropped_bytes) {
        action_queue.request(EditorAction::SetPhoto(bytes));
    }
}

fn dropped_bytes(file: &DroppedFile) -> Option<Arc<[u8]>> {
    if let Some(bytes) = &file.bytes {
        return Some(Arc::clone(bytes));
    }
    let path = file.path.as_ref()?;
    match fs::read(path) {
        Ok(bytes) => Some(bytes.into()),
        Err(err) => {
            log::warn!("cannot read dropped file {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn take_photo(action_queue: &mut ActionRequestQueue) -> Option<Arc<[u8]>> {
        action_queue.take_all().into_iter().find_map(|action| match action {
            Action::Editor(EditorAction::SetPhoto(bytes)) => Some(bytes),
            _ => None,
        })
    }

    #[test]
    fn dropped_path_is_read_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        fs::write(&path, [0xff, 0xd8, 0xff, 0xe0]).unwrap();
        let files = [DroppedFile {
            path: Some(path),
            ..Default::default()
        }];

        let mut action_queue = ActionRequestQueue::default();
        handle_dropped_files(&files, true, &mut action_queue);
        assert_eq!(
            take_photo(&mut action_queue).as_deref(),
            Some([0xff, 0xd8, 0xff, 0xe0].as_slice())
        );
    }

    #[test]
    fn first_readable_file_wins() {
        let dir = tempdir().unwrap();
        let files = [
            DroppedFile {
                path: Some(dir.path().join("missing.png")),
                ..Default::default()
            },
            DroppedFile {
                bytes: Some(Arc::from(b"GIF89a".as_slice())),
                ..Default::default()
            },
        ];

        let mut action_queue = ActionRequestQueue::default();
        handle_dropped_files(&files, true, &mut action_queue);
        assert_eq!(
            take_photo(&mut action_queue).as_deref(),
            Some(b"GIF89a".as_slice())
        );
    }

    #[test]
    fn drops_are_ignored_on_the_list() {
        let files = [DroppedFile {
            bytes: Some(Arc::from(b"GIF89a".as_slice())),
            ..Default::default()
        }];

        let mut action_queue = ActionRequestQueue::default();
        handle_dropped_files(&files, false, &mut action_queue);
        assert!(action_queue.take_all().is_empty());
    }
}
