use crate::timezone::TimezoneChoice;
use chrono::Local;

pub const SUN_IDLE_TITLE: &str = "Sunrise & Sunset";
pub const SUN_IDLE_TEXT: &str = "Enter a location and click Submit.";
pub const WEATHER_IDLE_TITLE: &str = "Weather";

const SUBMIT_LABEL: &str = "Submit";
const WORKING_LABEL: &str = "Working...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Working,
}

/// The submit button. Enabled and labelled from the phase alone.
#[derive(Debug, Default)]
pub struct SubmitControl {
    phase: Phase,
}

impl SubmitControl {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => SUBMIT_LABEL,
            Phase::Working => WORKING_LABEL,
        }
    }
}

/// Holds the control in `Working` until dropped, on every exit path.
pub struct BusyGuard<'a> {
    control: &'a mut SubmitControl,
}

impl<'a> BusyGuard<'a> {
    pub fn acquire(control: &'a mut SubmitControl) -> Self {
        control.phase = Phase::Working;
        Self { control }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.control.phase = Phase::Idle;
    }
}

/// The three user-editable fields, as raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub location: String,
    /// Selector label, e.g. `EST (UTC-5)`.
    pub timezone: String,
    /// `YYYY-MM-DD`.
    pub date: String,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            location: String::new(),
            timezone: TimezoneChoice::default().label().to_string(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPanel {
    pub title: String,
    pub body: String,
}

impl TextPanel {
    fn new(title: &str, body: &str) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}

#[derive(Debug)]
pub struct PanelState {
    pub form: Form,
    pub submit: SubmitControl,
    pub sun: TextPanel,
    pub weather: TextPanel,
}

impl PanelState {
    pub fn new() -> Self {
        let mut state = Self {
            form: Form::default(),
            submit: SubmitControl::default(),
            sun: TextPanel::default(),
            weather: TextPanel::default(),
        };
        state.set_idle_texts();
        state
    }

    pub fn set_idle_texts(&mut self) {
        self.sun = TextPanel::new(SUN_IDLE_TITLE, SUN_IDLE_TEXT);
        self.weather = TextPanel::new(WEATHER_IDLE_TITLE, "");
    }

    /// Plain-text rendering of both panels, top to bottom.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for panel in [&self.sun, &self.weather] {
            out.push_str(&format!("\u{2500}\u{2500} {} \u{2500}\u{2500}\n", panel.title));
            for line in panel.body.lines() {
                out.push_str(&format!("  {}\n", line));
            }
        }
        out
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}
