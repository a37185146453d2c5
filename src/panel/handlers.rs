use super::state::{BusyGuard, Form, PanelState};
use crate::error::FetchError;
use crate::location::{Geocode, Location};
use crate::sun::{SunTimeSource, SunTimes};
use crate::timezone;
use serde::Serialize;
use tracing::{info, warn};

/// Everything one successful submit produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunReport {
    pub location: Location,
    pub date: String,
    /// API identifier, e.g. `UTC-5`.
    pub timezone: String,
    pub times: SunTimes,
}

impl SunReport {
    pub fn title(&self) -> String {
        format!("Sun times for {} on {}", self.location.display_name, self.date)
    }

    pub fn body(&self) -> String {
        self.times.lines().join("\n")
    }
}

/// The widget's display state wired to its two collaborators.
pub struct SunPanel<G, S> {
    state: PanelState,
    geocoder: G,
    sun: S,
}

impl<G: Geocode, S: SunTimeSource> SunPanel<G, S> {
    pub fn new(geocoder: G, sun: S) -> Self {
        Self {
            state: PanelState::new(),
            geocoder,
            sun,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.state.form
    }

    /// Submit handler. The control is busy for the duration and idle again
    /// afterwards whatever the outcome. On failure the panels keep their
    /// previous text and the error is handed back to the caller.
    pub fn submit(&mut self) -> Result<SunReport, FetchError> {
        let _busy = BusyGuard::acquire(&mut self.state.submit);

        match lookup(&self.geocoder, &self.sun, &self.state.form) {
            Ok(report) => {
                self.state.sun.title = report.title();
                self.state.sun.body = report.body();
                Ok(report)
            }
            Err(e) => {
                warn!(error = %e, "submit failed, panels left unchanged");
                Err(e)
            }
        }
    }
}

fn lookup<G: Geocode, S: SunTimeSource>(
    geocoder: &G,
    sun: &S,
    form: &Form,
) -> Result<SunReport, FetchError> {
    let city = form.location.trim();
    let date = form.date.trim();
    let tz_id = timezone::to_identifier(form.timezone.trim());

    info!(city, date, tz_id, "submit");
    let location = geocoder.resolve(city)?;
    let times = sun.lookup(location.latitude, location.longitude, date, tz_id)?;

    Ok(SunReport {
        location,
        date: date.to_string(),
        timezone: tz_id.to_string(),
        times,
    })
}
