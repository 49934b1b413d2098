use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use rand::rngs::StdRng;

use crate::anim::{AnimEvent, Animator};
use crate::editor::{Editor, EditorState};
use crate::grid::{CellView, Today, describe_cell};
use crate::model::{AppConfig, CellKey, DayCell, EntryStore, GRID_DAYS, MoodKind, Month};

use super::input;
use super::render;
use super::theme::Theme;

/// Redraw cadence while something is moving
const ANIMATION_FRAME: Duration = Duration::from_millis(16);
/// Redraw cadence when idle
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main application state. Owns the year's entries, the editor and the
/// animator; everything else reads from here.
pub struct App {
    pub store: EntryStore,
    pub editor: Editor,
    pub animator: Animator,
    pub rng: StdRng,
    pub config: AppConfig,
    pub theme: Theme,
    pub today: Option<Today>,
    /// Grid cursor. May rest on a placeholder cell.
    pub cursor: DayCell,
    /// Byte offset of the text cursor in the draft note
    pub note_cursor: usize,
    /// Keyboard height signal, in rows
    pub keyboard_height: u16,
    pub show_help: bool,
    pub should_quit: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    /// Host clock in ms, advanced by the event loop
    pub now_ms: u64,
    /// Where the day cells were last drawn (for mouse hit testing)
    pub grid_cells_area: Option<Rect>,
    /// Where the sheet was last drawn, if it was visible
    pub sheet_area: Option<Rect>,
}

impl App {
    pub fn new(config: AppConfig, today: Option<Today>, rng: StdRng) -> Self {
        let theme = Theme::from_config(&config.ui);
        let mut animator = Animator::new(&config.animation);
        let keyboard_height = config.ui.keyboard_rows;
        animator.set_keyboard_height(keyboard_height as f32);

        let cursor = today
            .map(|t| t.0)
            .unwrap_or_else(|| DayCell::new(Month::Jan, 1));

        App {
            store: EntryStore::new(),
            editor: Editor::new(),
            animator,
            rng,
            config,
            theme,
            today,
            cursor,
            note_cursor: 0,
            keyboard_height,
            show_help: false,
            should_quit: false,
            status_message: None,
            now_ms: 0,
            grid_cells_area: None,
            sheet_area: None,
        }
    }

    /// Press a grid cell (Enter on the cursor, or a mouse click)
    pub fn press_cell(&mut self, cell: DayCell) {
        let effects = self.editor.press_cell(cell, &self.store);
        self.animator.apply_all(effects, self.now_ms);
    }

    pub fn choose_mood(&mut self, mood: MoodKind) {
        let effects = self.editor.choose_mood(mood, &mut self.rng);
        self.animator.apply_all(effects, self.now_ms);
        self.note_cursor = self.draft_note().map_or(0, str::len);
    }

    pub fn save(&mut self) {
        let cell = self.session_cell();
        let effects = self.editor.save(&mut self.store);
        if !effects.is_empty()
            && let Some(cell) = cell
        {
            self.status_message = Some(format!("saved {}", cell));
        }
        self.animator.apply_all(effects, self.now_ms);
    }

    pub fn reset(&mut self) {
        let cell = self.session_cell();
        let effects = self.editor.reset(&mut self.store);
        if !effects.is_empty()
            && let Some(cell) = cell
        {
            self.status_message = Some(format!("cleared {}", cell));
        }
        self.animator.apply_all(effects, self.now_ms);
    }

    pub fn close(&mut self) {
        let effects = self.editor.close();
        self.animator.apply_all(effects, self.now_ms);
    }

    pub fn back(&mut self) {
        let effects = self.editor.back();
        self.animator.apply_all(effects, self.now_ms);
    }

    /// Advance the clock and route animation completions
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        for event in self.animator.tick(now_ms) {
            if event == AnimEvent::SheetHidden {
                self.editor.finish_close();
            }
        }
    }

    /// Update the keyboard height signal
    pub fn set_keyboard_height(&mut self, rows: u16) {
        self.keyboard_height = rows;
        self.animator.set_keyboard_height(rows as f32);
    }

    /// Visual state of a grid cell right now
    pub fn cell_view(&self, cell: DayCell) -> CellView {
        describe_cell(cell, &self.store, self.today, &self.animator, self.now_ms)
    }

    pub fn draft_note(&self) -> Option<&str> {
        match self.editor.state() {
            EditorState::NoteEditing { session, .. } => Some(&session.note),
            _ => None,
        }
    }

    fn session_cell(&self) -> Option<CellKey> {
        self.editor.state().session().map(|s| s.cell)
    }

    /// Move the grid cursor by whole rows/columns, wrapping months and
    /// clamping days to the grid width
    pub fn move_cursor(&mut self, d_month: i32, d_day: i32) {
        let mut month = self.cursor.month;
        for _ in 0..d_month.unsigned_abs() {
            month = if d_month > 0 { month.next() } else { month.prev() };
        }
        let day = (self.cursor.day as i32 + d_day).clamp(1, GRID_DAYS as i32) as u8;
        self.cursor = DayCell::new(month, day);
    }

    pub fn jump_to_today(&mut self) {
        if let Some(today) = self.today {
            self.cursor = today.0;
        }
    }
}

/// Run the TUI application
pub fn run(
    config: AppConfig,
    today: Option<Today>,
    rng: StdRng,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, today, rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    tracing::info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);
    tracing::info!(entries = app.store.len(), "tui stopped");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let clock = Instant::now();
    loop {
        app.tick(clock.elapsed().as_millis() as u64);
        terminal.draw(|frame| render::render(frame, app))?;

        let timeout = if app.animator.is_animating() {
            ANIMATION_FRAME
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            // Input is handled against the clock at the moment it arrives
            app.tick(clock.elapsed().as_millis() as u64);
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
