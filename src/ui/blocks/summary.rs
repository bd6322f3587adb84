use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Final boxed report of a successful run
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    facts: Vec<(String, String)>,
    next_steps: Vec<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            facts: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn add_fact(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.facts.push((label.into(), value.into()));
    }

    /// Numbered in insertion order
    pub fn add_next_step(&mut self, step: impl Into<String>) {
        self.next_steps.push(step.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let mut panel = Panel::with_title(header).style(PanelStyle::Success);

        if !self.facts.is_empty() {
            panel.add_empty();
            for (label, value) in &self.facts {
                panel.add_line(format!("{}: {}", label, value));
            }
        }

        if !self.next_steps.is_empty() {
            panel.add_empty();
            panel.add_line(format!(
                "{} Next steps:",
                Icon::Arrow.colored(supports_color, supports_unicode)
            ));
            for (i, step) in self.next_steps.iter().enumerate() {
                panel.add_line(format!("  {}. {}", i + 1, step));
            }
        }

        panel.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_next_steps_in_order() {
        let mut summary = ResultSummary::success("Droplet Ready");
        summary.add_fact("IP", "203.0.113.10");
        summary.add_next_step("Point DNS");
        summary.add_next_step("Wait");

        let rendered = summary.render(false, false);
        assert!(rendered.contains("[OK] Droplet Ready"));
        assert!(rendered.contains("IP: 203.0.113.10"));
        let first = rendered.find("1. Point DNS").unwrap();
        let second = rendered.find("2. Wait").unwrap();
        assert!(first < second);
    }
}
