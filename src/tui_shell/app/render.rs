use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::*;
use crate::tui_shell::rows::{DisplayRow, build_rows, row_of_asset};
use crate::tui_shell::view::render_view_chrome;
use crate::view::CatalogView;

const DEFAULT_TITLE: &str = "Graphics Library";

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let info = app.catalog.info();
    let title = if info.name.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        info.name.clone()
    };
    let area = frame.area();
    let inner = render_view_chrome(frame, &title, &info.updated_display(), area);

    let view = app.current_view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if view.choices.is_empty() { 0 } else { 2 }),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    if !view.choices.is_empty() {
        draw_choices(frame, &view, chunks[0]);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    draw_list(frame, app, &view, body[0]);
    draw_details(frame, app, &view, body[1]);

    draw_status(frame, app, chunks[2]);
    draw_hints(frame, app, chunks[3]);
}

fn draw_choices(frame: &mut ratatui::Frame, view: &CatalogView<'_>, area: Rect) {
    let mut spans = Vec::new();
    for (i, choice) in view.choices.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        let style = if choice.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(choice.label(), style));
    }
    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(bar, area);
}

fn draw_list(frame: &mut ratatui::Frame, app: &App, view: &CatalogView<'_>, area: Rect) {
    let block = Block::default().borders(Borders::RIGHT);

    if view.sections.is_empty() {
        let msg = if app.is_loading() && app.catalog.is_empty() {
            "Loading assets..."
        } else {
            "No assets found"
        };
        let p = Paragraph::new(Span::styled(msg, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(p, area);
        return;
    }

    let flat = view.flat();
    let vector_capable = app.ctx.variant().vector_capable;
    let rows = build_rows(view);
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            DisplayRow::Header { title, count } => ListItem::new(Line::from(Span::styled(
                format!("{} ({})", title, count),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))),
            DisplayRow::Asset(i) => {
                let Some(record) = flat.get(*i) else {
                    return ListItem::new("");
                };
                let mut spans = vec![Span::raw("  "), Span::raw(record.name.clone())];
                let sub = record.subtitle(vector_capable);
                if !sub.is_empty() {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        sub.to_string(),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            }
        })
        .collect();

    let mut state = ListState::default();
    state.select(row_of_asset(&rows, app.selected));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_details(frame: &mut ratatui::Frame, app: &App, view: &CatalogView<'_>, area: Rect) {
    let flat = view.flat();
    let Some(record) = flat.get(app.selected) else {
        frame.render_widget(Paragraph::new(""), area);
        return;
    };

    let label = |s: &str| Span::styled(format!("{:<10}", s), Style::default().fg(Color::Gray));
    let category_title = crate::view::display_name(
        &app.catalog,
        app.session.priority(),
        &record.category_key(),
    );

    let mut lines = vec![
        Line::from(Span::styled(
            record.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![label("id"), Span::raw(record.id.clone())]),
        Line::from(vec![label("category"), Span::raw(category_title)]),
    ];
    if !record.tags.is_empty() {
        lines.push(Line::from(vec![label("tags"), Span::raw(record.tags.join(", "))]));
    }
    if let Some(size) = record.size_label.as_deref() {
        lines.push(Line::from(vec![label("size"), Span::raw(size.to_string())]));
    }
    if let Some(name) = record.filename.as_deref() {
        lines.push(Line::from(vec![label("file"), Span::raw(name.to_string())]));
    }
    if let Some(updated) = record.last_updated.as_deref() {
        lines.push(Line::from(vec![label("updated"), Span::raw(updated.to_string())]));
    }

    lines.push(Line::from(""));
    for action in available_actions(record, app.ctx.variant()) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", action.key()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(action.title()),
        ]));
    }

    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: false });
    frame.render_widget(p, area);
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    if app.is_loading() {
        spans.push(Span::styled("Loading... ", Style::default().fg(Color::Cyan)));
    }
    if app.pending_actions > 0 {
        spans.push(Span::styled(
            format!("({} running) ", app.pending_actions),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(notice) = app.notices.last() {
        let color = match notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Failure => Color::Red,
            NoticeKind::InProgress => Color::Cyan,
        };
        spans.push(Span::styled(
            notice.title.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        if !notice.message.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::raw(notice.message.clone()));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_hints(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    if app.searching {
        let line = Line::from(vec![
            Span::styled("/", Style::default().fg(Color::Cyan)),
            Span::raw(app.search.buf.clone()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        let prefix = app.search.buf[..app.search.cursor].chars().count() as u16;
        frame.set_cursor_position((area.x + 1 + prefix, area.y));
        return;
    }

    let mut text = String::from("q quit  / search  r reload  enter default  ");
    if app.ctx.variant().has_category_filter {
        text.push_str("tab category  ");
    }
    if let Some(search) = app.search.trimmed() {
        text.push_str(&format!("esc clear \"{}\"", search));
    }
    let p = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)));
    frame.render_widget(p, area);
}
