use crate::location::LocationQuery;
use thiserror::Error;

/// Payload handed to the system share capability. The platform decides
/// presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub link: String,
}

/// The user closed the share sheet, or the platform refused the payload.
#[derive(Debug, Error)]
#[error("share dismissed: {0}")]
pub struct ShareDismissed(pub String);

/// The platform share sheet.
pub trait ShareSink {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareDismissed>;
}

/// Fire-and-forget clipboard write, the share fallback.
pub trait Clipboard {
    fn copy(&self, text: &str);
}

/// How a share request ended up being delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Delivered through the system share capability.
    Shared,
    /// No share capability was available; the message went to the
    /// clipboard instead.
    Copied,
    /// The share sheet was dismissed. Nothing was delivered.
    Dismissed,
}

/// Compose a maps link for a location. An address becomes a maps search
/// URL with the address percent-encoded; raw coordinates become a maps
/// query URL.
#[must_use]
pub fn maps_link(query: &LocationQuery) -> String {
    match query {
        LocationQuery::Address(address) => format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(address)
        ),
        LocationQuery::Coordinates(coordinates) => format!(
            "https://www.google.com/maps?q={},{}",
            coordinates.latitude, coordinates.longitude
        ),
    }
}

/// Body used for the system share and the clipboard fallback.
#[must_use]
pub fn share_message(link: &str) -> String {
    format!("I'm using Haven and wanted to share my location with you: {link}")
}

/// Body used for the per-contact SMS deep link.
#[must_use]
pub fn sms_message(link: &str) -> String {
    format!("I'm using Haven. Here is my location: {link}")
}

/// Deep link that opens a messaging intent with a prefilled body. Body
/// support varies by OS and device.
#[must_use]
pub fn sms_link(phone: &str, body: &str) -> String {
    format!("sms:{phone}?body={}", urlencoding::encode(body))
}

/// Deep link that opens a call intent.
#[must_use]
pub fn tel_link(phone: &str) -> String {
    format!("tel:{phone}")
}

/// Routes a share request to the system share capability when one exists,
/// otherwise to the clipboard.
pub struct ShareDispatcher {
    sink: Option<Box<dyn ShareSink>>,
    clipboard: Box<dyn Clipboard>,
}

impl ShareDispatcher {
    #[must_use]
    pub fn new(sink: Option<Box<dyn ShareSink>>, clipboard: Box<dyn Clipboard>) -> Self {
        Self { sink, clipboard }
    }

    /// Share a location link. A dismissed sheet delivers nothing; the
    /// clipboard path always succeeds.
    pub fn dispatch(&self, query: &LocationQuery) -> ShareOutcome {
        let link = maps_link(query);
        let message = share_message(&link);

        if let Some(sink) = &self.sink {
            let payload = SharePayload {
                title: "My Location".to_string(),
                text: message,
                link,
            };
            return match sink.share(&payload) {
                Ok(()) => ShareOutcome::Shared,
                Err(dismissed) => {
                    tracing::debug!(%dismissed, "share sheet dismissed");
                    ShareOutcome::Dismissed
                }
            };
        }

        self.clipboard.copy(&message);
        ShareOutcome::Copied
    }
}
