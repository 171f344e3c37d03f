mod advice;
mod app;
mod contacts;
mod location;
mod phone;
mod places;
mod share;

pub use advice::{AdvisoryClient, SafetyAdvice};
pub use app::{App, Screen};
pub use contacts::{Contact, ContactError, ContactStore};
pub use location::{
    Coordinates, EnvLocationSource, LocateError, LocationQuery, LocationSource, LocationState,
};
pub use phone::PhoneHeuristic;
pub use places::{SafePlace, SafePlaceFinder};
pub use share::{
    maps_link, share_message, sms_link, sms_message, tel_link, Clipboard, ShareDismissed,
    ShareDispatcher, ShareOutcome, SharePayload, ShareSink,
};
