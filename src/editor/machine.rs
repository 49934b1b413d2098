use std::mem;

use rand::Rng;

use crate::model::{DayCell, Entry, EntryStore, MoodKind};

use super::session::{Effect, EditorState, Session};

/// The day editor. Owns the current state plus the session that is
/// sliding out after a close, which is kept until the sheet reports it is
/// fully hidden.
#[derive(Debug, Default)]
pub struct Editor {
    state: EditorState,
    retiring: Option<EditorState>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// True while a session is open (mood picking or note editing)
    pub fn is_open(&self) -> bool {
        !self.state.is_closed()
    }

    /// State the sheet should draw: the live session, or the one still
    /// sliding out after a close.
    pub fn sheet_state(&self) -> Option<&EditorState> {
        if self.is_open() {
            Some(&self.state)
        } else {
            self.retiring.as_ref()
        }
    }

    /// Whether a closed session is waiting for the hide animation
    pub fn is_retiring(&self) -> bool {
        self.retiring.is_some()
    }

    /// Press a grid cell. Opens a session for valid cells when closed;
    /// placeholders and presses while a session is open are ignored.
    pub fn press_cell(&mut self, cell: DayCell, store: &EntryStore) -> Vec<Effect> {
        let Some(key) = cell.key() else {
            tracing::debug!(%cell, "editor: ignoring press on placeholder cell");
            return Vec::new();
        };
        if self.is_open() {
            tracing::debug!(%cell, state = self.state.name(), "editor: ignoring press while open");
            return Vec::new();
        }

        // A hide still in flight is overridden; its teardown happens now.
        if self.retiring.take().is_some() {
            tracing::debug!("editor: dropping retiring session for new open");
        }

        let prior = store.get(key).cloned();
        let selected = prior.as_ref().map(|e| e.mood);
        tracing::debug!(cell = %key, has_entry = prior.is_some(), "editor: open");
        self.state = EditorState::MoodPicking {
            session: Session::open(key, prior),
            selected,
        };
        vec![Effect::ShowSheet]
    }

    /// Choose a mood while picking. Advances to note editing with a fresh
    /// prompt and fires the burst.
    pub fn choose_mood(&mut self, mood: MoodKind, rng: &mut impl Rng) -> Vec<Effect> {
        match mem::take(&mut self.state) {
            EditorState::MoodPicking { session, .. } => {
                let prompt = mood.random_prompt(rng);
                let cell = session.cell;
                tracing::debug!(%cell, mood = mood.label(), "editor: mood chosen");
                self.state = EditorState::NoteEditing {
                    session,
                    mood,
                    prompt,
                };
                vec![
                    Effect::Burst {
                        cell,
                        glyph: mood.emoji(),
                    },
                    Effect::NoteFocus(true),
                ]
            }
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    /// Move the picker highlight without committing to a mood
    pub fn highlight_mood(&mut self, mood: MoodKind) {
        if let EditorState::MoodPicking { selected, .. } = &mut self.state {
            *selected = Some(mood);
        }
    }

    /// Replace the draft note. Only applies while note editing.
    pub fn edit_note(&mut self, text: impl Into<String>) -> bool {
        match self.note_mut() {
            Some(note) => {
                *note = text.into();
                true
            }
            None => false,
        }
    }

    /// Draft note for in-place editing, while note editing
    pub fn note_mut(&mut self) -> Option<&mut String> {
        match &mut self.state {
            EditorState::NoteEditing { session, .. } => Some(&mut session.note),
            _ => None,
        }
    }

    /// Leave note editing for the mood picker. The chosen mood is cleared;
    /// the draft note is kept for the rest of the session.
    pub fn back(&mut self) -> Vec<Effect> {
        match mem::take(&mut self.state) {
            EditorState::NoteEditing { session, .. } => {
                tracing::debug!(cell = %session.cell, "editor: back to mood picking");
                self.state = EditorState::MoodPicking {
                    session,
                    selected: None,
                };
                vec![Effect::NoteFocus(false)]
            }
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    /// Commit the draft to the store and close
    pub fn save(&mut self, store: &mut EntryStore) -> Vec<Effect> {
        match mem::take(&mut self.state) {
            EditorState::NoteEditing {
                session,
                mood,
                prompt,
            } => {
                tracing::debug!(cell = %session.cell, mood = mood.label(), "editor: save");
                store.upsert(session.cell, Entry::new(mood, session.note.clone()));
                self.retire(EditorState::NoteEditing {
                    session,
                    mood,
                    prompt,
                });
                vec![Effect::NoteFocus(false), Effect::HideSheet]
            }
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    /// Delete the cell's entry and close. Only offered while picking.
    pub fn reset(&mut self, store: &mut EntryStore) -> Vec<Effect> {
        match mem::take(&mut self.state) {
            EditorState::MoodPicking { session, selected } => {
                let removed = store.remove(session.cell);
                tracing::debug!(cell = %session.cell, removed = removed.is_some(), "editor: reset");
                self.retire(EditorState::MoodPicking { session, selected });
                vec![Effect::HideSheet]
            }
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    /// Close without saving. Draft edits are discarded.
    pub fn close(&mut self) -> Vec<Effect> {
        match mem::take(&mut self.state) {
            EditorState::Closed => Vec::new(),
            open => {
                let was_editing = open.is_note_editing();
                if let Some(session) = open.session() {
                    tracing::debug!(cell = %session.cell, state = open.name(), "editor: close");
                }
                self.retire(open);
                if was_editing {
                    vec![Effect::NoteFocus(false), Effect::HideSheet]
                } else {
                    vec![Effect::HideSheet]
                }
            }
        }
    }

    /// Tear down the closed session. Called once the sheet is hidden.
    pub fn finish_close(&mut self) {
        if let Some(state) = self.retiring.take()
            && let Some(session) = state.session()
        {
            tracing::trace!(cell = %session.cell, "editor: session torn down");
        }
    }

    fn retire(&mut self, state: EditorState) {
        self.state = EditorState::Closed;
        self.retiring = Some(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Month;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cell(month: Month, day: u8) -> DayCell {
        DayCell::new(month, day)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn starts_closed() {
        let editor = Editor::new();
        assert!(editor.state().is_closed());
        assert!(editor.sheet_state().is_none());
    }

    #[test]
    fn invalid_cell_press_is_noop() {
        let mut editor = Editor::new();
        let store = EntryStore::new();
        let effects = editor.press_cell(cell(Month::Feb, 30), &store);
        assert!(effects.is_empty());
        assert!(editor.state().is_closed());
    }

    #[test]
    fn valid_press_opens_mood_picking() {
        let mut editor = Editor::new();
        let store = EntryStore::new();
        let effects = editor.press_cell(cell(Month::Mar, 15), &store);
        assert_eq!(effects, vec![Effect::ShowSheet]);
        match editor.state() {
            EditorState::MoodPicking { session, selected } => {
                assert_eq!(session.cell.cell(), cell(Month::Mar, 15));
                assert!(session.prior.is_none());
                assert_eq!(session.note, "");
                assert_eq!(*selected, None);
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn press_while_open_is_ignored() {
        let mut editor = Editor::new();
        let store = EntryStore::new();
        editor.press_cell(cell(Month::Mar, 15), &store);
        assert!(editor.press_cell(cell(Month::Apr, 1), &store).is_empty());
        assert_eq!(
            editor.state().session().unwrap().cell.cell(),
            cell(Month::Mar, 15)
        );
    }

    #[test]
    fn choose_mood_enters_note_editing_with_prompt_and_burst() {
        let mut editor = Editor::new();
        let store = EntryStore::new();
        editor.press_cell(cell(Month::Mar, 15), &store);
        let effects = editor.choose_mood(MoodKind::Good, &mut rng());

        let key = cell(Month::Mar, 15).key().unwrap();
        assert_eq!(
            effects,
            vec![
                Effect::Burst {
                    cell: key,
                    glyph: MoodKind::Good.emoji()
                },
                Effect::NoteFocus(true)
            ]
        );
        match editor.state() {
            EditorState::NoteEditing { mood, prompt, session } => {
                assert_eq!(*mood, MoodKind::Good);
                assert!(MoodKind::Good.prompts().contains(prompt));
                assert_eq!(session.note, "");
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn choose_mood_when_closed_is_noop() {
        let mut editor = Editor::new();
        assert!(editor.choose_mood(MoodKind::Great, &mut rng()).is_empty());
        assert!(editor.state().is_closed());
    }

    #[test]
    fn save_commits_draft() {
        let mut editor = Editor::new();
        let mut store = EntryStore::new();
        editor.press_cell(cell(Month::Mar, 15), &store);
        editor.choose_mood(MoodKind::Good, &mut rng());
        assert!(editor.edit_note("lunch with friends"));
        let effects = editor.save(&mut store);

        assert_eq!(effects, vec![Effect::NoteFocus(false), Effect::HideSheet]);
        assert!(editor.state().is_closed());
        let key = cell(Month::Mar, 15).key().unwrap();
        assert_eq!(
            store.get(key),
            Some(&Entry::new(MoodKind::Good, "lunch with friends"))
        );
    }

    #[test]
    fn close_during_note_editing_discards() {
        let mut editor = Editor::new();
        let mut store = EntryStore::new();
        let key = cell(Month::Mar, 15).key().unwrap();
        store.upsert(key, Entry::new(MoodKind::Okay, "original"));

        editor.press_cell(key.cell(), &store);
        editor.choose_mood(MoodKind::Awful, &mut rng());
        editor.edit_note("changed my mind");
        editor.close();

        assert_eq!(store.get(key), Some(&Entry::new(MoodKind::Okay, "original")));
        assert!(editor.state().is_closed());
    }

    #[test]
    fn reset_removes_entry_and_is_idempotent() {
        let mut editor = Editor::new();
        let mut store = EntryStore::new();
        let key = cell(Month::Jul, 4).key().unwrap();
        store.upsert(key, Entry::new(MoodKind::Great, "fireworks"));

        editor.press_cell(key.cell(), &store);
        assert_eq!(editor.reset(&mut store), vec![Effect::HideSheet]);
        assert!(store.get(key).is_none());

        editor.finish_close();
        editor.press_cell(key.cell(), &store);
        editor.reset(&mut store);
        assert!(store.get(key).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn reset_not_available_in_note_editing() {
        let mut editor = Editor::new();
        let mut store = EntryStore::new();
        let key = cell(Month::Jul, 4).key().unwrap();
        store.upsert(key, Entry::new(MoodKind::Great, "fireworks"));
        editor.press_cell(key.cell(), &store);
        editor.choose_mood(MoodKind::Good, &mut rng());

        assert!(editor.reset(&mut store).is_empty());
        assert!(editor.state().is_note_editing());
        assert!(store.get(key).is_some());
    }

    #[test]
    fn reopen_prefills_and_back_keeps_note() {
        let mut editor = Editor::new();
        let mut store = EntryStore::new();
        let key = cell(Month::Mar, 15).key().unwrap();
        store.upsert(key, Entry::new(MoodKind::Good, "lunch with friends"));

        editor.press_cell(key.cell(), &store);
        match editor.state() {
            EditorState::MoodPicking { session, selected } => {
                assert_eq!(*selected, Some(MoodKind::Good));
                assert_eq!(session.note, "lunch with friends");
            }
            other => panic!("unexpected state {:?}", other),
        }

        editor.choose_mood(MoodKind::Great, &mut rng());
        assert_eq!(editor.note_mut().unwrap().as_str(), "lunch with friends");
        editor.edit_note("lunch with friends and cake");

        assert_eq!(editor.back(), vec![Effect::NoteFocus(false)]);
        match editor.state() {
            EditorState::MoodPicking { session, selected } => {
                assert_eq!(*selected, None);
                assert_eq!(session.note, "lunch with friends and cake");
            }
            other => panic!("unexpected state {:?}", other),
        }

        editor.choose_mood(MoodKind::Okay, &mut rng());
        assert_eq!(
            editor.note_mut().unwrap().as_str(),
            "lunch with friends and cake"
        );

        editor.close();
        assert_eq!(
            store.get(key),
            Some(&Entry::new(MoodKind::Good, "lunch with friends"))
        );
    }

    #[test]
    fn closed_session_is_retained_until_finish_close() {
        let mut editor = Editor::new();
        let mut store = EntryStore::new();
        editor.press_cell(cell(Month::May, 2), &store);
        editor.choose_mood(MoodKind::Bad, &mut rng());
        editor.edit_note("rainy");
        editor.save(&mut store);

        assert!(!editor.is_open());
        assert!(editor.is_retiring());
        match editor.sheet_state() {
            Some(EditorState::NoteEditing { session, .. }) => assert_eq!(session.note, "rainy"),
            other => panic!("unexpected sheet state {:?}", other),
        }

        editor.finish_close();
        assert!(editor.sheet_state().is_none());
        assert!(!editor.is_retiring());
    }

    #[test]
    fn new_session_overrides_retiring_one() {
        let mut editor = Editor::new();
        let store = EntryStore::new();
        editor.press_cell(cell(Month::May, 2), &store);
        editor.close();
        assert!(editor.is_retiring());

        editor.press_cell(cell(Month::May, 3), &store);
        assert!(!editor.is_retiring());
        assert_eq!(
            editor.sheet_state().and_then(|s| s.session()).unwrap().cell.cell(),
            cell(Month::May, 3)
        );
    }

    #[test]
    fn new_session_does_not_inherit_draft() {
        let mut editor = Editor::new();
        let store = EntryStore::new();
        editor.press_cell(cell(Month::Jun, 9), &store);
        editor.choose_mood(MoodKind::Good, &mut rng());
        editor.edit_note("unsaved");
        editor.close();
        editor.finish_close();

        editor.press_cell(cell(Month::Jun, 9), &store);
        match editor.state() {
            EditorState::MoodPicking { session, selected } => {
                assert_eq!(session.note, "");
                assert_eq!(*selected, None);
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn edit_note_outside_note_editing_is_rejected() {
        let mut editor = Editor::new();
        let store = EntryStore::new();
        assert!(!editor.edit_note("x"));
        editor.press_cell(cell(Month::Jun, 9), &store);
        assert!(!editor.edit_note("x"));
        assert!(editor.back().is_empty());
    }

    #[test]
    fn highlight_only_applies_while_picking() {
        let mut editor = Editor::new();
        let store = EntryStore::new();
        editor.highlight_mood(MoodKind::Bad);
        assert!(editor.state().is_closed());

        editor.press_cell(cell(Month::Jun, 9), &store);
        editor.highlight_mood(MoodKind::Bad);
        assert!(matches!(
            editor.state(),
            EditorState::MoodPicking {
                selected: Some(MoodKind::Bad),
                ..
            }
        ));
    }

    #[test]
    fn prompt_rerolls_on_each_choice() {
        let mut editor = Editor::new();
        let store = EntryStore::new();
        let mut rng = StdRng::seed_from_u64(99);
        editor.press_cell(cell(Month::Aug, 20), &store);

        let mut prompts = std::collections::HashSet::new();
        for _ in 0..30 {
            editor.choose_mood(MoodKind::Great, &mut rng);
            if let EditorState::NoteEditing { prompt, .. } = editor.state() {
                prompts.insert(*prompt);
            }
            editor.back();
        }
        assert!(prompts.len() > 1);
        assert!(prompts.iter().all(|p| MoodKind::Great.prompts().contains(p)));
    }
}
