use crate::model::{CellKey, Entry, MoodKind};

/// Transient editing context for one day, from open to close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub cell: CellKey,
    /// What the store held when the session opened
    pub prior: Option<Entry>,
    /// Draft note. Starts as the prior note, survives "back".
    pub note: String,
}

impl Session {
    pub fn open(cell: CellKey, prior: Option<Entry>) -> Self {
        let note = prior.as_ref().map(|e| e.note.clone()).unwrap_or_default();
        Session { cell, prior, note }
    }
}

/// Where the editor is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    /// Choosing a mood. `selected` is pre-set from the prior entry and
    /// cleared when coming back from note editing.
    MoodPicking {
        session: Session,
        selected: Option<MoodKind>,
    },
    /// Typing the note for a chosen mood
    NoteEditing {
        session: Session,
        mood: MoodKind,
        /// Placeholder shown while the note is empty. Never stored.
        prompt: &'static str,
    },
}

impl EditorState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            EditorState::Closed => None,
            EditorState::MoodPicking { session, .. } | EditorState::NoteEditing { session, .. } => {
                Some(session)
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, EditorState::Closed)
    }

    pub fn is_note_editing(&self) -> bool {
        matches!(self, EditorState::NoteEditing { .. })
    }

    /// Mood the picker highlights. With nothing selected the first mood is
    /// highlighted.
    pub fn highlighted_mood(&self) -> Option<MoodKind> {
        match self {
            EditorState::MoodPicking { selected, .. } => Some(selected.unwrap_or(MoodKind::ALL[0])),
            _ => None,
        }
    }

    /// Short name for logs and the status row
    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Closed => "closed",
            EditorState::MoodPicking { .. } => "mood-picking",
            EditorState::NoteEditing { .. } => "note-editing",
        }
    }
}

/// Side effects a transition asks the host to carry out. The animator
/// consumes these; none of them touch the entry store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ShowSheet,
    HideSheet,
    /// One-shot emoji burst on a cell
    Burst { cell: CellKey, glyph: &'static str },
    /// Note field gained or lost focus (drives the keyboard lift)
    NoteFocus(bool),
}
