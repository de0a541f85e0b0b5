use std::io::IsTerminal;

/// Color configuration mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Auto-detect based on terminal and NO_COLOR env var.
    Auto,
    /// Always emit ANSI color codes.
    Always,
    /// Never emit ANSI color codes.
    Never,
}

/// The handful of colors the report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Dim,
    Reset,
}

impl Color {
    pub fn ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Dim => "\x1b[2m",
            Color::Reset => "\x1b[0m",
        }
    }
}

/// Check if color should be used for the given mode and stream.
///
/// Auto mode respects `NO_COLOR` (<https://no-color.org/>) and whether the
/// stream is a terminal.
pub fn use_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            is_terminal
        }
    }
}

pub fn use_color_stdout(mode: ColorMode) -> bool {
    use_color(mode, std::io::stdout().is_terminal())
}

pub fn use_color_stderr(mode: ColorMode) -> bool {
    use_color(mode, std::io::stderr().is_terminal())
}

/// Wrap `text` in the color's escape codes when enabled.
pub fn colorize(text: &str, color: Color, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("{}{}{}", color.ansi_code(), text, Color::Reset.ansi_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_and_never() {
        assert!(use_color(ColorMode::Always, false));
        assert!(!use_color(ColorMode::Never, true));
    }

    #[test]
    fn auto_follows_terminal() {
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(use_color(ColorMode::Auto, true));
        }
        assert!(!use_color(ColorMode::Auto, false));
    }

    #[test]
    fn colorize_wraps_when_enabled() {
        assert_eq!(colorize("hash", Color::Blue, true), "\x1b[34mhash\x1b[0m");
    }

    #[test]
    fn colorize_plain_when_disabled() {
        assert_eq!(colorize("hash", Color::Blue, false), "hash");
    }
}
