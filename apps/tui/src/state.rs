use crate::config::Config;
use crate::layout::{default_page_config, PageConfig};
use crate::profile::{Field, FormState};

/// Modal UI state. `Notice` is a blocking message dismissed by any key;
/// `ConfirmReset` waits for a y/n answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Edit,
    ConfirmReset,
    Notice(String),
}

/// Top-level application state, owned by the event loop and passed down to
/// the view and exporter. There are no ambient globals: every mutation of the
/// profile goes through `form`.
pub struct App {
    pub config: Config,
    pub form: FormState,
    pub page_config: PageConfig,
    /// Index of the focused field in `Field::ALL`.
    pub focus: usize,
    /// Guards against re-entrant export while one is already running.
    pub exporting: bool,
    pub mode: Mode,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, form: FormState) -> Self {
        App {
            config,
            form,
            page_config: default_page_config(),
            focus: 0,
            exporting: false,
            mode: Mode::Edit,
            should_quit: false,
        }
    }

    pub fn focused_field(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileStore;
    use std::path::PathBuf;

    fn make_app(dir: &tempfile::TempDir) -> App {
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            export_dir: PathBuf::from("."),
            rust_log: "info".to_string(),
        };
        let form = FormState::load(ProfileStore::new(config.cache_path()));
        App::new(config, form)
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir);
        assert_eq!(app.focused_field(), Field::Name);

        app.focus_prev();
        assert_eq!(app.focused_field(), Field::Passion);

        app.focus_next();
        assert_eq!(app.focused_field(), Field::Name);

        for _ in 0..Field::ALL.len() {
            app.focus_next();
        }
        assert_eq!(app.focused_field(), Field::Name);
    }
}
