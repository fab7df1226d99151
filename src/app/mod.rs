use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::editor::{Editor, Focus, TileKind};
use crate::ui::{draw_editor, EditorLayout};

mod logging;

pub use logging::init_logging;

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub fn run(width: usize, height: usize) -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    info!(width, height, "editor started");
    run_loop(tui.terminal_mut(), Editor::new(width, height))
}

fn run_loop(terminal: &mut Term, mut editor: Editor) -> Result<(), Box<dyn Error>> {
    loop {
        let mut layout = None;
        terminal.draw(|frame| layout = Some(draw_editor(frame, &editor)))?;
        let layout = match layout {
            Some(layout) => layout,
            None => EditorLayout::compute(terminal.size()?, &editor.board),
        };

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(key, &mut editor) == Control::Quit {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, &mut editor, &layout),
                _ => {}
            }
        }
    }
    info!("editor closed");
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

pub fn handle_key(key: KeyEvent, editor: &mut Editor) -> Control {
    if key.kind == KeyEventKind::Release {
        return Control::Continue;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Control::Quit;
    }

    match key.code {
        KeyCode::Tab => {
            editor.focus = editor.focus.next();
            return Control::Continue;
        }
        KeyCode::BackTab => {
            editor.focus = editor.focus.prev();
            return Control::Continue;
        }
        KeyCode::Esc => {
            if editor.dragging.is_none() {
                return Control::Quit;
            }
            editor.cancel_drag();
            return Control::Continue;
        }
        _ => {}
    }

    match editor.focus {
        Focus::Grid => match key.code {
            KeyCode::Left => editor.move_cursor(-1, 0),
            KeyCode::Right => editor.move_cursor(1, 0),
            KeyCode::Up => editor.move_cursor(0, -1),
            KeyCode::Down => editor.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let _ = editor.place_at_cursor();
            }
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => {
                let _ = editor.erase_at_cursor();
            }
            KeyCode::Char('q') => return Control::Quit,
            _ => {}
        },
        Focus::Palette => match key.code {
            KeyCode::Left => editor.move_palette(-1, 0),
            KeyCode::Right => editor.move_palette(1, 0),
            KeyCode::Up => editor.move_palette(0, -1),
            KeyCode::Down => editor.move_palette(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => editor.pick_selected(),
            KeyCode::Char('q') => return Control::Quit,
            _ => {}
        },
        Focus::Form(field) => match key.code {
            KeyCode::Enter => {
                let _ = editor.submit_form();
            }
            KeyCode::Backspace => editor.form.pop_char(field),
            KeyCode::Char(ch) => editor.form.push_char(field, ch),
            _ => {}
        },
    }
    Control::Continue
}

/// Mouse drag and drop: press on a palette tile or a placed tile picks it up,
/// release over a grid cell drops it there, release anywhere else discards it.
pub fn handle_mouse(ev: MouseEvent, editor: &mut Editor, layout: &EditorLayout) {
    let (column, row) = (ev.column, ev.row);
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((col, r)) = layout.palette_at(column, row) {
                editor.palette = (col, r);
                editor.begin_drag(TileKind::PALETTE[col][r]);
            } else if let Some((x, y)) = layout.cell_at(column, row) {
                editor.set_cursor(x, y);
                editor.focus = Focus::Grid;
                // Placed tiles are drag sources too; dropping copies them.
                let placed = editor.board.get(x as i32, y as i32);
                if let Some(tile) = placed.filter(|t| !t.is_empty()) {
                    editor.begin_drag(tile);
                }
            } else if let Some(field) = layout.field_at(column, row) {
                editor.focus = Focus::Form(field);
            } else if layout.on_button(column, row) {
                let _ = editor.submit_form();
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if editor.dragging.is_none() {
                return;
            }
            match layout.cell_at(column, row) {
                Some((x, y)) => {
                    editor.set_cursor(x, y);
                    editor.focus = Focus::Grid;
                    let _ = editor.drop_at(x as i32, y as i32);
                }
                None => editor.cancel_drag(),
            }
        }
        _ => {}
    }
}
