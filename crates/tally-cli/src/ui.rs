use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

/// Terminal presentation settings resolved once from the global flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

impl UiPrefs {
    fn resolve(flags: &GlobalFlags, stdout_tty: bool, stderr_tty: bool, no_color: bool) -> Self {
        let tabular = flags.format == OutputFormat::Table;
        let table_color = tabular
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => stdout_tty && !flags.quiet && !no_color,
            };

        // The spinner draws on stderr; JSON consumers get no spinner unless asked.
        let progress = stderr_tty
            && !flags.quiet
            && match flags.progress {
                ProgressMode::On => true,
                ProgressMode::Off => false,
                ProgressMode::Auto => flags.format != OutputFormat::Json,
            };

        let term_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);

        Self {
            table_color,
            progress,
            term_width,
        }
    }
}

pub fn init(flags: &GlobalFlags) {
    let prefs = UiPrefs::resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::UiPrefs;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet: false,
            color,
            progress: ProgressMode::Auto,
        }
    }

    #[test]
    fn color_only_applies_to_tables() {
        let json = UiPrefs::resolve(&flags(OutputFormat::Json, ColorMode::Always), true, true, false);
        assert!(!json.table_color);
        assert!(!json.progress);

        let table = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Auto), true, true, false);
        assert!(table.table_color);
        assert!(table.progress);
    }

    #[test]
    fn no_color_env_disables_auto_color() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Auto), true, true, true);
        assert!(!prefs.table_color);
    }

    #[test]
    fn piped_stderr_has_no_spinner() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Never), true, false, false);
        assert!(!prefs.progress);
    }
}
