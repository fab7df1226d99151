use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use super::glyphs::tile_art;
use super::layout::{canvas_size, required_size, EditorLayout, BUTTON_LABEL};
use crate::editor::{Editor, Focus, FormField, TileKind};
use crate::{CELL_H, CELL_W};

const PIPE_STYLE: Style = Style::new().fg(Color::Cyan);
const EMPTY_STYLE: Style = Style::new().fg(Color::DarkGray);

pub fn draw_editor(frame: &mut Frame, editor: &Editor) -> EditorLayout {
    let layout = EditorLayout::compute(frame.size(), &editor.board);

    if layout.too_small {
        let (w, h) = required_size(&editor.board);
        let msg = Paragraph::new(format!("RESIZE PANE (min {}x{})", w, h))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("PIPES"));
        frame.render_widget(msg, layout.area);
        return layout;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("PIPES")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    frame.render_widget(cabinet, layout.area);

    draw_grid(frame, editor, &layout);
    draw_palette(frame, editor, &layout);
    draw_form(frame, editor, &layout);
    draw_status(frame, editor, layout.status);
    layout
}

fn draw_grid(frame: &mut Frame, editor: &Editor, layout: &EditorLayout) {
    let board = &editor.board;
    let (gw, gh) = canvas_size(board.width(), board.height());
    let (gw, gh) = (gw as usize, gh as usize);
    let mut grid = vec![vec![' '; gw]; gh];

    // Separator lines between every cell.
    for (cy, line) in grid.iter_mut().enumerate() {
        for (cx, ch) in line.iter_mut().enumerate() {
            let on_v = cx % (CELL_W + 1) == 0;
            let on_h = cy % (CELL_H + 1) == 0;
            *ch = match (on_v, on_h) {
                (true, true) => junction(cx == 0, cx == gw - 1, cy == 0, cy == gh - 1),
                (true, false) => '│',
                (false, true) => '─',
                (false, false) => ' ',
            };
        }
    }

    for ((x, y), tile) in board.cells() {
        plot_art(&mut grid, 1 + x * (CELL_W + 1), 1 + y * (CELL_H + 1), tile);
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();
    frame.render_widget(Paragraph::new(lines).style(EMPTY_STYLE), layout.grid);

    let buf = frame.buffer_mut();
    for ((x, y), tile) in board.cells() {
        if !tile.is_empty() {
            buf.set_style(layout.cell_rect(x, y), PIPE_STYLE);
        }
    }

    let (cx, cy) = editor.cursor;
    let cursor_style = match (editor.focus, editor.dragging) {
        (Focus::Grid, Some(_)) => Style::new().bg(Color::Green).fg(Color::Black),
        (Focus::Grid, None) => Style::new().bg(Color::Yellow).fg(Color::Black),
        _ => Style::new().add_modifier(Modifier::UNDERLINED),
    };
    buf.set_style(layout.cell_rect(cx, cy), cursor_style);
}

fn junction(left: bool, right: bool, top: bool, bottom: bool) -> char {
    match (left, right, top, bottom) {
        (true, _, true, _) => '┌',
        (_, true, true, _) => '┐',
        (true, _, _, true) => '└',
        (_, true, _, true) => '┘',
        (_, _, true, _) => '┬',
        (_, _, _, true) => '┴',
        (true, _, _, _) => '├',
        (_, true, _, _) => '┤',
        _ => '┼',
    }
}

fn plot_art(grid: &mut [Vec<char>], gx: usize, gy: usize, tile: TileKind) {
    for (dy, row) in tile_art(tile).iter().enumerate() {
        for (dx, ch) in row.chars().enumerate() {
            if let Some(slot) = grid.get_mut(gy + dy).and_then(|line| line.get_mut(gx + dx)) {
                *slot = ch;
            }
        }
    }
}

fn draw_palette(frame: &mut Frame, editor: &Editor, layout: &EditorLayout) {
    let block = Block::default()
        .title("PALETTE")
        .borders(Borders::ALL)
        .border_style(focus_border(editor.focus == Focus::Palette));
    frame.render_widget(block, layout.palette);

    let canvas = layout.palette_canvas;
    let mut grid = vec![vec![' '; canvas.width as usize]; canvas.height as usize];
    for (col, column) in TileKind::PALETTE.iter().enumerate() {
        for (row, tile) in column.iter().enumerate() {
            plot_art(&mut grid, 1 + col * (CELL_W + 1), 1 + row * (CELL_H + 1), *tile);
        }
    }
    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();
    frame.render_widget(Paragraph::new(lines).style(PIPE_STYLE), canvas);

    let buf = frame.buffer_mut();
    for (col, column) in TileKind::PALETTE.iter().enumerate() {
        for (row, tile) in column.iter().enumerate() {
            let rect = layout.palette_rect(col, row);
            // Carried tile fades in the palette while it is being dragged.
            if editor.dragging == Some(*tile) {
                buf.set_style(rect, Style::new().add_modifier(Modifier::DIM));
            } else if editor.palette == (col, row) {
                let style = if editor.focus == Focus::Palette {
                    Style::new().bg(Color::Yellow).fg(Color::Black)
                } else {
                    Style::new().add_modifier(Modifier::UNDERLINED)
                };
                buf.set_style(rect, style);
            }
        }
    }
}

fn draw_form(frame: &mut Frame, editor: &Editor, layout: &EditorLayout) {
    let form_focused = matches!(editor.focus, Focus::Form(_));
    let block = Block::default()
        .title("BOARD SIZE")
        .borders(Borders::ALL)
        .border_style(focus_border(form_focused));

    let field_line = |label: &'static str, field: FormField| {
        let focused = editor.focus == Focus::Form(field);
        let value = editor.form.value(field);
        let value_style = if focused {
            Style::new().add_modifier(Modifier::REVERSED)
        } else {
            Style::new()
        };
        let caret = if focused { "_" } else { "" };
        Line::from(vec![
            Span::raw(format!("{:<9}", label)),
            Span::styled(format!("{}{}", value, caret), value_style),
        ])
    };

    let button_style = if editor.form.can_submit() {
        Style::new().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    };
    let error = editor.form.error_message().unwrap_or_default();

    let form = Paragraph::new(vec![
        field_line("Rows:", FormField::Rows),
        field_line("Columns:", FormField::Columns),
        Line::styled(BUTTON_LABEL, button_style),
        Line::styled(error, Style::new().fg(Color::Red)),
    ])
    .block(block);
    frame.render_widget(form, layout.form);
}

fn draw_status(frame: &mut Frame, editor: &Editor, area: Rect) {
    let held = editor.dragging.map(TileKind::name).unwrap_or("-");
    let message = editor.status.as_deref().unwrap_or("");
    let info = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}x{}", "SIZE:", editor.board.width(), editor.board.height())),
        Line::raw(format!("{:<7} {}", "TILES:", editor.board.placed_count())),
        Line::raw(format!("{:<7} {}", "HELD:", held)),
        Line::styled(message.to_string(), Style::new().fg(Color::Red)),
        Line::raw("tab focus  arrows move"),
        Line::raw("enter pick/drop  x erase"),
        Line::raw("mouse drag  esc cancel"),
        Line::raw("q quit"),
    ])
    .block(Block::default().title("STATUS").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, area);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::new().fg(Color::Yellow)
    } else {
        Style::new()
    }
}
