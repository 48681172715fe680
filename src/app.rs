use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::catalog::{CatalogSet, Language};
use crate::config::Config;
use crate::session::picker::TopicSession;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Picker,
    Settings,
}

pub struct App {
    pub screen: AppScreen,
    pub session: TopicSession,
    pub config: Config,
    pub theme: &'static Theme,
    pub focused_card: usize,
    pub focused_subtopic: usize,
    pub settings_selected: usize,
    pub should_quit: bool,
    pub last_tick: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        let mut config = Config::load().unwrap_or_default();
        config.normalize_language();

        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let language = Language::from_code(&config.language).unwrap_or(Language::English);
        rust_i18n::set_locale(language.code());

        let session = TopicSession::new(CatalogSet::load(), language, SmallRng::from_entropy());

        Self {
            screen: AppScreen::Picker,
            session,
            config,
            theme,
            focused_card: 0,
            focused_subtopic: 0,
            settings_selected: 0,
            should_quit: false,
            last_tick: None,
        }
    }

    pub fn activate_card(&mut self, index: usize) {
        let Some(name) = self.session.displayed.get(index).map(|t| t.name.clone()) else {
            return;
        };
        let previous = self.session.selected.clone();
        self.focused_card = index;
        self.session.topic_clicked(&name);

        // A fresh selection restarts the one-second cadence.
        if self.session.selected.as_deref() == Some(name.as_str())
            && previous.as_deref() != Some(name.as_str())
        {
            self.last_tick = Some(Instant::now());
            self.focused_subtopic = 0;
        }
        // Third activation replaced the deal; the old focus points nowhere.
        if self.session.selected.is_none() {
            self.focused_card = 0;
            self.focused_subtopic = 0;
        }
    }

    pub fn activate_focused_card(&mut self) {
        self.activate_card(self.focused_card);
    }

    pub fn next_card(&mut self) {
        if self.session.displayed.is_empty() {
            return;
        }
        self.focused_card = (self.focused_card + 1) % self.session.displayed.len();
    }

    pub fn prev_card(&mut self) {
        if self.session.displayed.is_empty() {
            return;
        }
        if self.focused_card > 0 {
            self.focused_card -= 1;
        } else {
            self.focused_card = self.session.displayed.len() - 1;
        }
    }

    fn subtopic_count(&self) -> usize {
        if !self.session.subtopics_expanded {
            return 0;
        }
        self.session
            .selected_topic()
            .map(|t| t.subtopics.len())
            .unwrap_or(0)
    }

    pub fn next_subtopic(&mut self) {
        let count = self.subtopic_count();
        if count == 0 {
            return;
        }
        self.focused_subtopic = (self.focused_subtopic + 1) % count;
    }

    pub fn prev_subtopic(&mut self) {
        let count = self.subtopic_count();
        if count == 0 {
            return;
        }
        if self.focused_subtopic > 0 {
            self.focused_subtopic -= 1;
        } else {
            self.focused_subtopic = count - 1;
        }
    }

    pub fn activate_subtopic(&mut self, index: usize) {
        let Some(subtopic) = self
            .session
            .selected_topic()
            .and_then(|t| t.subtopics.get(index))
            .cloned()
        else {
            return;
        };
        self.focused_subtopic = index;
        self.session.subtopic_clicked(&subtopic);
    }

    pub fn activate_focused_subtopic(&mut self) {
        self.activate_subtopic(self.focused_subtopic);
    }

    pub fn outside_interaction(&mut self) {
        self.session.outside_interaction();
        self.focused_card = 0;
        self.focused_subtopic = 0;
    }

    pub fn set_language(&mut self, language: Language) {
        self.session.language_changed(language);
        rust_i18n::set_locale(language.code());
        self.config.language = language.code().to_string();
        self.focused_card = 0;
        self.focused_subtopic = 0;
    }

    /// Advance the countdown by however many whole seconds have elapsed.
    /// The cadence origin exists exactly while the session reports the
    /// timer active; it is dropped the moment the countdown stops.
    pub fn pump_timer(&mut self) {
        if !self.session.timer_running() {
            self.last_tick = None;
            return;
        }
        let mut origin = *self.last_tick.get_or_insert_with(Instant::now);
        while self.session.timer_running() && origin.elapsed() >= Duration::from_secs(1) {
            self.session.tick();
            origin += Duration::from_secs(1);
        }
        self.last_tick = if self.session.timer_running() {
            Some(origin)
        } else {
            None
        };
    }

    pub fn go_to_settings(&mut self) {
        self.settings_selected = 0;
        self.screen = AppScreen::Settings;
    }

    pub fn leave_settings(&mut self) {
        let _ = self.config.save();
        self.screen = AppScreen::Picker;
    }

    pub fn settings_cycle_forward(&mut self) {
        match self.settings_selected {
            // Two languages, so forward and backward meet.
            0 => self.set_language(self.session.language.next()),
            1 => {
                let themes = Theme::available_themes();
                if let Some(idx) = themes.iter().position(|t| *t == self.config.theme) {
                    let next = (idx + 1) % themes.len();
                    let name = themes[next].clone();
                    self.set_theme(&name);
                } else if let Some(first) = themes.first() {
                    let name = first.clone();
                    self.set_theme(&name);
                }
            }
            _ => {}
        }
    }

    pub fn settings_cycle_backward(&mut self) {
        match self.settings_selected {
            0 => self.set_language(self.session.language.next()),
            1 => {
                let themes = Theme::available_themes();
                if let Some(idx) = themes.iter().position(|t| *t == self.config.theme) {
                    let next = if idx == 0 { themes.len() - 1 } else { idx - 1 };
                    let name = themes[next].clone();
                    self.set_theme(&name);
                } else if let Some(first) = themes.first() {
                    let name = first.clone();
                    self.set_theme(&name);
                }
            }
            _ => {}
        }
    }

    fn set_theme(&mut self, name: &str) {
        if let Some(new_theme) = Theme::load(name) {
            let theme: &'static Theme = Box::leak(Box::new(new_theme));
            self.theme = theme;
            self.config.theme = name.to_string();
        }
    }
}
