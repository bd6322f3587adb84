use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            if v == "c" || v == "posix" {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), is_tty)
    }

    #[test]
    fn detect_respects_no_color() {
        let c = caps(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!c.supports_color);
    }

    #[test]
    fn detect_no_color_when_piped() {
        let c = caps(&[("TERM", "xterm-256color")], false);
        assert!(!c.supports_color);
    }

    #[test]
    fn detect_ci_environment() {
        let c = caps(&[("CI", "true"), ("TERM", "xterm-256color")], true);
        assert!(c.is_ci);
    }

    #[test]
    fn detect_term_dumb_disables_enhancements() {
        let c = caps(&[("TERM", "dumb")], true);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn detect_posix_locale_falls_back_to_ascii() {
        let c = caps(&[("LANG", "C"), ("TERM", "xterm")], true);
        assert!(!c.supports_unicode);
    }
}
