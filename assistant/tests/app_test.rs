use haven_assistant::{
    maps_link, App, Clipboard, ContactStore, Coordinates, LocateError, LocationQuery,
    LocationSource, SafePlace, SafetyAdvice, Screen, ShareDispatcher, ShareOutcome,
};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

struct FixedSource(Coordinates);

impl LocationSource for FixedSource {
    fn locate(&self) -> Result<Coordinates, LocateError> {
        Ok(self.0)
    }
}

struct DeniedSource;

impl LocationSource for DeniedSource {
    fn locate(&self) -> Result<Coordinates, LocateError> {
        Err(LocateError::Unavailable)
    }
}

#[derive(Clone, Default)]
struct RecordingClipboard(Arc<Mutex<Vec<String>>>);

impl Clipboard for RecordingClipboard {
    fn copy(&self, text: &str) {
        self.0.lock().unwrap().push(text.to_string());
    }
}

fn new_app() -> (App, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(ContactStore::load(dir.path().join("contacts.json")));
    (app, dir)
}

fn gps() -> Coordinates {
    Coordinates {
        latitude: 40.7128,
        longitude: -74.006,
    }
}

fn sample_advice() -> SafetyAdvice {
    SafetyAdvice {
        tips: vec!["Stay aware of your surroundings".to_string()],
        avoid: Vec::new(),
        steps: Vec::new(),
        emergency_guide: Vec::new(),
        reminders: Vec::new(),
    }
}

#[test]
fn whitespace_scenario_does_not_leave_idle() {
    let (mut app, _dir) = new_app();

    assert!(!app.submit_scenario("   "));
    assert_eq!(app.screen(), Screen::Idle);
    assert!(!app.submit_scenario(""));
    assert_eq!(app.screen(), Screen::Idle);
}

#[test]
fn advice_flow_runs_idle_loading_showing_and_back() {
    let (mut app, _dir) = new_app();

    assert!(app.submit_scenario("Walking home at night"));
    assert_eq!(app.screen(), Screen::LoadingAdvice);
    assert_eq!(app.scenario(), "Walking home at night");

    app.advice_ready(sample_advice());
    assert_eq!(app.screen(), Screen::ShowingAdvice);
    assert!(app.advice().is_some());

    app.back();
    assert_eq!(app.screen(), Screen::Idle);
    assert!(app.advice().is_none());
    assert!(app.scenario().is_empty());
}

#[test]
fn advice_failure_resets_to_idle_with_a_notice() {
    let (mut app, _dir) = new_app();
    app.submit_scenario("Parking garage");

    app.advice_failed();

    assert_eq!(app.screen(), Screen::Idle);
    assert!(app.advice().is_none());
    assert!(app.take_notice().is_some());
    assert!(app.take_notice().is_none());
}

#[test]
fn manual_address_wins_over_gps_for_lookup_and_share() {
    let (mut app, _dir) = new_app();
    app.location.refresh(&FixedSource(gps()));
    app.location.set_manual_address("123 Main St");

    let query = app.location.query().unwrap();
    assert_eq!(query, LocationQuery::Address("123 Main St".to_string()));
    assert!(maps_link(&query).contains("maps/search"));
    assert!(maps_link(&query).contains("123%20Main%20St"));

    let lookup = app.open_safe_places().unwrap();
    assert_eq!(lookup, LocationQuery::Address("123 Main St".to_string()));
}

#[test]
fn denied_location_source_leaves_position_unset() {
    let (mut app, _dir) = new_app();

    app.location.refresh(&DeniedSource);

    assert!(app.location.query().is_none());
}

#[test]
fn safe_places_without_a_location_prompts_for_an_address() {
    let (mut app, _dir) = new_app();

    assert!(app.open_safe_places().is_none());
    assert_eq!(app.screen(), Screen::EditingLocation);

    let query = app.submit_manual_address("Central Park").unwrap();
    assert_eq!(query, LocationQuery::Address("Central Park".to_string()));
    assert_eq!(app.screen(), Screen::SafePlaces { loading: true });

    app.places_ready(Vec::new());
    assert_eq!(app.screen(), Screen::SafePlaces { loading: false });
    assert!(app.safe_places().is_empty());
}

#[test]
fn blank_manual_address_stays_on_the_entry_screen() {
    let (mut app, _dir) = new_app();
    app.edit_location();

    assert!(app.submit_manual_address("  ").is_none());
    assert_eq!(app.screen(), Screen::EditingLocation);
}

#[test]
fn share_and_safe_place_panels_are_mutually_exclusive() {
    let (mut app, _dir) = new_app();
    app.location.refresh(&FixedSource(gps()));

    app.toggle_share_panel();
    assert_eq!(app.screen(), Screen::SharePanel);

    app.open_safe_places();
    assert_eq!(app.screen(), Screen::SafePlaces { loading: true });

    app.toggle_share_panel();
    assert_eq!(app.screen(), Screen::SharePanel);

    app.toggle_share_panel();
    assert_eq!(app.screen(), Screen::Idle);
}

#[test]
fn closing_a_panel_returns_to_held_advice() {
    let (mut app, _dir) = new_app();
    app.submit_scenario("Concert venue");
    app.advice_ready(sample_advice());

    app.toggle_share_panel();
    assert_eq!(app.screen(), Screen::SharePanel);

    app.close_panel();
    assert_eq!(app.screen(), Screen::ShowingAdvice);
    assert!(app.advice().is_some());
}

#[test]
fn sharing_without_a_location_routes_to_address_entry() {
    let (mut app, _dir) = new_app();
    let dispatcher = ShareDispatcher::new(None, Box::new(RecordingClipboard::default()));

    assert!(app.share_location(&dispatcher).is_none());
    assert_eq!(app.screen(), Screen::EditingLocation);
}

#[test]
fn sharing_with_a_location_falls_back_to_the_clipboard() {
    let (mut app, _dir) = new_app();
    app.location.refresh(&FixedSource(gps()));
    let clipboard = RecordingClipboard::default();
    let dispatcher = ShareDispatcher::new(None, Box::new(clipboard.clone()));

    let outcome = app.share_location(&dispatcher);

    assert_eq!(outcome, Some(ShareOutcome::Copied));
    assert!(app.share_feedback_active());
    assert_eq!(app.screen(), Screen::Idle);

    let copied = clipboard.0.lock().unwrap();
    assert_eq!(copied.len(), 1);
    assert!(copied[0].contains("https://www.google.com/maps?q=40.7128,-74.006"));
}

#[test]
fn sms_share_prefers_the_manual_address() {
    let (mut app, _dir) = new_app();
    app.location.refresh(&FixedSource(gps()));
    app.location.set_manual_address("123 Main St");

    let link = app.sms_share("555-0100").unwrap();

    assert!(link.starts_with("sms:555-0100?body="));
    // The maps link inside the body is percent-encoded a second time.
    assert!(link.contains("123%2520Main%2520St"));
}

#[test]
fn stale_place_results_do_not_reopen_a_closed_panel() {
    let (mut app, _dir) = new_app();

    app.places_ready(vec![SafePlace {
        title: "Central Hospital".to_string(),
        uri: "https://maps.example/h1".to_string(),
        phone_number: None,
    }]);

    assert_eq!(app.screen(), Screen::Idle);
    assert_eq!(app.safe_places().len(), 1);
}
