//! Day editor: the Closed → MoodPicking → NoteEditing lifecycle.
//!
//! Transitions mutate the entry store directly (save, reset) and hand back
//! [`Effect`]s for the animator. A closed session lingers as "retiring"
//! until the host reports the sheet hide finished.

pub mod machine;
pub mod session;

pub use machine::Editor;
pub use session::{Effect, EditorState, Session};
