use std::path::PathBuf;

use crate::ui::widgets::panel::{Panel, PanelStyle};

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    title: String,
    file: Option<PathBuf>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut panel = Panel::with_title(format!("ERROR: {}", self.title)).style(PanelStyle::Error);

        if let Some(file) = &self.file {
            panel.add_line(file.display().to_string());
        }
        panel.add_empty();
        panel.add_line(self.message.clone());

        if let Some(fix) = &self.fix {
            panel.add_empty();
            panel.add_line(format!("FIX: {}", fix));
        }

        panel.render(supports_color, supports_unicode)
    }
}
