pub mod anim;
pub mod cli;
pub mod editor;
pub mod grid;
pub mod io;
pub mod logging;
pub mod model;
pub mod tui;
pub mod util;
