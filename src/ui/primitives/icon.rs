use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Deploy,
    Provision,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Deploy) => theme::icons::DEPLOY,
            (true, Icon::Provision) => theme::icons::PROVISION,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Deploy) => theme::icons_ascii::DEPLOY,
            (false, Icon::Provision) => theme::icons_ascii::PROVISION,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Deploy | Icon::Provision => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::icons::WARNING);
    }
}
