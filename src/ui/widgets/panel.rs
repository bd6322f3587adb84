use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Error,
}

/// Bordered block of text lines, sized to its widest line
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    content: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let lines: Vec<&str> = self
            .title
            .iter()
            .chain(self.content.iter())
            .map(String::as_str)
            .collect();

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2);

        let frame = theme::borders(supports_unicode);
        let h = frame.horizontal;
        let v = self.paint(frame.vertical, supports_color);

        let mut out = String::new();
        let top = format!("{}{}{}", frame.top_left, h.repeat(inner_width), frame.top_right);
        out.push_str(&self.paint(&top, supports_color));
        out.push('\n');

        for line in lines {
            let pad = inner_width.saturating_sub(1 + visible_width(line));
            out.push_str(&format!("{} {}{}{}\n", v, line, " ".repeat(pad), v));
        }

        let bottom = format!(
            "{}{}{}",
            frame.bottom_left,
            h.repeat(inner_width),
            frame.bottom_right
        );
        out.push_str(&self.paint(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }

        let color = match self.style {
            PanelStyle::Info => theme::colors::INFO,
            PanelStyle::Success => theme::colors::SUCCESS,
            PanelStyle::Error => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            if matches!(chars.peek(), Some('[')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
