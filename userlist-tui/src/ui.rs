//! Lays a [`Frame`] out as styled text lines.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;
use userlist_lib::model::ItemsPerPage;
use userlist_lib::view::Body;
use userlist_lib::view::Frame;
use userlist_lib::view::PaginationControls;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Share of the table width per column, in header order. Age takes the rest.
const COLUMN_SHARES: [usize; 3] = [25, 40, 25];

const HELP: &str =
    "F1-F4 sort · ←/→ page · Alt+1-9 jump · Home/End · [ ] per page · Ctrl+R retry · Esc quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Normal,
    Header,
    Muted,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Builds the screen top to bottom. Rows that do not fit in `height` are cut.
pub fn layout(frame: &Frame, width: u16, height: u16, tick: usize) -> Vec<Line> {
    let width = usize::from(width);
    let mut lines = Vec::new();

    let status = if frame.loading {
        format!("{} Loading...", SPINNER[tick % SPINNER.len()])
    } else {
        String::new()
    };
    lines.push(Line::new(spread("Users", &status, width), LineStyle::Title));
    lines.push(Line::new(
        fit(&format!("Search: {}▏", frame.search_text), width),
        LineStyle::Normal,
    ));
    lines.push(Line::new("", LineStyle::Normal));

    let footer = footer(frame, width);
    let body_budget = usize::from(height).saturating_sub(lines.len() + footer.len());

    match &frame.body {
        Body::Error(message) => {
            lines.push(Line::new(fit(message, width), LineStyle::Error));
        }
        Body::Rows(rows) => {
            let widths = column_widths(width);
            let header: Vec<String> = frame
                .header
                .iter()
                .map(|h| {
                    if h.sort.is_some() {
                        format!("{} {}", h.label, h.indicator())
                    } else {
                        h.label.to_string()
                    }
                })
                .collect();
            lines.push(Line::new(row_text(&header, &widths), LineStyle::Header));
            lines.push(Line::new("─".repeat(width), LineStyle::Muted));

            let visible = body_budget.saturating_sub(2);
            for row in rows.iter().take(visible) {
                lines.push(Line::new(row_text(&row.cells, &widths), LineStyle::Normal));
            }
            if rows.is_empty() && !frame.loading {
                lines.push(Line::new(fit("No users found", width), LineStyle::Muted));
            }
        }
    }

    let filler = usize::from(height).saturating_sub(lines.len() + footer.len());
    lines.extend(std::iter::repeat_n(Line::new("", LineStyle::Normal), filler));
    lines.extend(footer);
    lines
}

fn footer(frame: &Frame, width: usize) -> Vec<Line> {
    if matches!(frame.body, Body::Error(_)) {
        return vec![Line::new(fit(HELP, width), LineStyle::Muted)];
    }

    let limit = limit_selector(frame.limit);
    let pages = pagination_text(&frame.pagination);
    let style = if frame.actions_allowed {
        LineStyle::Normal
    } else {
        LineStyle::Muted
    };
    vec![
        Line::new(spread(&limit, &pages, width), style),
        Line::new(fit(HELP, width), LineStyle::Muted),
    ]
}

fn limit_selector(current: ItemsPerPage) -> String {
    let options: Vec<String> = ItemsPerPage::ALL
        .iter()
        .map(|option| {
            if *option == current {
                format!("[{option}]")
            } else {
                option.to_string()
            }
        })
        .collect();
    format!("Items per page: {}", options.join(" "))
}

/// `‹ Prev  1 [2] 3  Next ›`, with disabled ends drawn as spaces.
pub fn pagination_text(controls: &PaginationControls) -> String {
    let prev = if controls.previous_enabled { "‹ Prev" } else { "      " };
    let next = if controls.next_enabled { "Next ›" } else { "      " };
    let pages: Vec<String> = controls
        .pages
        .iter()
        .map(|p| {
            if p.active {
                format!("[{}]", p.number)
            } else {
                p.number.to_string()
            }
        })
        .collect();
    format!("{}  {}  {}", prev, pages.join(" "), next)
}

fn column_widths(width: usize) -> [usize; 4] {
    let name = width * COLUMN_SHARES[0] / 100;
    let email = width * COLUMN_SHARES[1] / 100;
    let location = width * COLUMN_SHARES[2] / 100;
    let age = width.saturating_sub(name + email + location);
    [name, email, location, age]
}

fn row_text(cells: &[String], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| pad(&truncate(cell, w.saturating_sub(1)), w))
        .collect()
}

/// Left text, right text, spaces between.
fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();
    if used >= width {
        return fit(&format!("{left} {right}"), width);
    }
    format!("{}{}{}", left, " ".repeat(width - used), right)
}

fn fit(s: &str, width: usize) -> String {
    pad(&truncate(s, width), width)
}

fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}
