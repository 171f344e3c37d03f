use crate::{
    advice::SafetyAdvice,
    contacts::ContactStore,
    location::{LocationQuery, LocationState},
    places::SafePlace,
    share::{maps_link, sms_link, sms_message, ShareDispatcher, ShareOutcome},
};
use std::time::{Duration, Instant};

/// How long the "sent" confirmation stays visible after a share.
const SHARE_FEEDBACK: Duration = Duration::from_secs(3);

const ADVICE_NOTICE: &str = "We couldn't generate advice right now. Please try again.";

/// The view currently on screen.
///
/// One closed set of variants instead of a pile of visibility booleans:
/// the share panel and the safe-place panel can never be open at once,
/// and advice is rendered only in `ShowingAdvice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Idle,
    LoadingAdvice,
    ShowingAdvice,
    SharePanel,
    SafePlaces { loading: bool },
    /// Prompting for a manual address; submitting one resumes the
    /// safe-place lookup.
    EditingLocation,
}

/// In-memory UI state, mutated only by user actions and completed async
/// results. Single-threaded and event-driven; the async fetches live in
/// the driver, which feeds results back through `advice_ready` /
/// `places_ready` (last-write-wins).
pub struct App {
    screen: Screen,
    scenario: String,
    advice: Option<SafetyAdvice>,
    safe_places: Vec<SafePlace>,
    notice: Option<String>,
    share_feedback_until: Option<Instant>,
    pub location: LocationState,
    pub contacts: ContactStore,
}

impl App {
    #[must_use]
    pub fn new(contacts: ContactStore) -> Self {
        Self {
            screen: Screen::Idle,
            scenario: String::new(),
            advice: None,
            safe_places: Vec::new(),
            notice: None,
            share_feedback_until: None,
            location: LocationState::default(),
            contacts,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    /// The current advice bundle. Present only while a session is showing
    /// or a newer result has not yet replaced it.
    #[must_use]
    pub fn advice(&self) -> Option<&SafetyAdvice> {
        self.advice.as_ref()
    }

    #[must_use]
    pub fn safe_places(&self) -> &[SafePlace] {
        &self.safe_places
    }

    /// One-shot user-visible alert, cleared by taking it.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Whether the transient "sent" confirmation should still render.
    #[must_use]
    pub fn share_feedback_active(&self) -> bool {
        self.share_feedback_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// Submit a scenario from the idle screen. Empty or whitespace-only
    /// input does not leave `Idle`; otherwise the driver is expected to
    /// start the advice fetch.
    pub fn submit_scenario(&mut self, input: &str) -> bool {
        let input = input.trim();
        if input.is_empty() {
            return false;
        }
        self.scenario = input.to_string();
        self.screen = Screen::LoadingAdvice;
        true
    }

    /// Apply a completed advice fetch. Whatever result arrives most
    /// recently wins.
    pub fn advice_ready(&mut self, advice: SafetyAdvice) {
        self.advice = Some(advice);
        self.screen = Screen::ShowingAdvice;
    }

    /// Apply a failed advice fetch: reset to idle with a generic notice,
    /// retaining no partial state.
    pub fn advice_failed(&mut self) {
        self.advice = None;
        self.screen = Screen::Idle;
        self.notice = Some(ADVICE_NOTICE.to_string());
    }

    /// Leave the advice screen, clearing the held advice and input.
    pub fn back(&mut self) {
        self.advice = None;
        self.scenario.clear();
        self.screen = Screen::Idle;
    }

    /// Open or close the share panel. Opening it closes the safe-place
    /// panel, and vice versa.
    pub fn toggle_share_panel(&mut self) {
        if self.screen == Screen::SharePanel {
            self.close_panel();
        } else {
            self.screen = Screen::SharePanel;
        }
    }

    /// Open the safe-place panel. With a usable location the lookup query
    /// is returned for the driver to run; without one, the app routes to
    /// address entry first.
    pub fn open_safe_places(&mut self) -> Option<LocationQuery> {
        match self.location.query() {
            Some(query) => {
                self.screen = Screen::SafePlaces { loading: true };
                Some(query)
            }
            None => {
                self.screen = Screen::EditingLocation;
                None
            }
        }
    }

    /// Switch to manual address entry (the "change location" action).
    pub fn edit_location(&mut self) {
        self.screen = Screen::EditingLocation;
    }

    /// Submit a manual address. Empty input stays put; otherwise the
    /// address becomes the override and the lookup query is returned.
    pub fn submit_manual_address(&mut self, address: &str) -> Option<LocationQuery> {
        if address.trim().is_empty() {
            return None;
        }
        self.location.set_manual_address(address);
        self.screen = Screen::SafePlaces { loading: true };
        self.location.query()
    }

    /// Apply a completed safe-place lookup. Whatever result arrives most
    /// recently wins; the screen only settles if the panel is still open.
    pub fn places_ready(&mut self, places: Vec<SafePlace>) {
        self.safe_places = places;
        if matches!(self.screen, Screen::SafePlaces { .. }) {
            self.screen = Screen::SafePlaces { loading: false };
        }
    }

    /// Close whichever panel is open, returning to the advice screen when
    /// a bundle is held and to idle otherwise.
    pub fn close_panel(&mut self) {
        self.screen = if self.advice.is_some() {
            Screen::ShowingAdvice
        } else {
            Screen::Idle
        };
    }

    /// Share the current location through the dispatcher. Without a
    /// usable location the app routes to address entry and nothing is
    /// sent.
    pub fn share_location(&mut self, dispatcher: &ShareDispatcher) -> Option<ShareOutcome> {
        let Some(query) = self.location.query() else {
            self.screen = Screen::EditingLocation;
            return None;
        };

        let outcome = dispatcher.dispatch(&query);
        if matches!(outcome, ShareOutcome::Shared | ShareOutcome::Copied) {
            self.share_feedback_until = Some(Instant::now() + SHARE_FEEDBACK);
            self.close_panel();
        }
        Some(outcome)
    }

    /// Compose the SMS deep link for one contact. Without a usable
    /// location the app routes to address entry instead.
    pub fn sms_share(&mut self, phone: &str) -> Option<String> {
        let Some(query) = self.location.query() else {
            self.screen = Screen::EditingLocation;
            return None;
        };
        let link = maps_link(&query);
        Some(sms_link(phone, &sms_message(&link)))
    }
}
