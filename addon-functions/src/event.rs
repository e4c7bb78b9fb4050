use std::fmt::{Debug, Formatter};

use addon_functions_host::{Error, FunctionResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::encoding::Extract;

/// The envelope the platform wraps around every add-on event.
///
/// `Args` is the shape of `eventArgs` the handler needs. It defaults to an untyped map,
/// but most handlers ask for a struct such as [JobArgs] so that a missing key fails
/// extraction instead of the handler.
///
/// Any other top-level keys the platform sends are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonEvent<Args = Map<String, Value>> {
    /// Name of the event that fired. The platform always sends it lower-case.
    #[serde(default)]
    pub event_name: Option<String>,
    /// Arguments of the event.
    pub event_args: Args,
    /// Temporary credentials issued for this event, when the add-on asked for them.
    #[serde(default)]
    pub auth: Option<EventAuth>,
}

impl<Args: DeserializeOwned> Extract for AddonEvent<Args> {
    fn extract(payload: Value) -> FunctionResult<Self> {
        serde_json::from_value(payload).map_err(Error::Extract)
    }
}

/// Temporary credentials issued alongside an event.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAuth {
    /// OAuth bearer token, valid for this event only.
    pub access_token: String,
}

impl Debug for EventAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventAuth")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// `eventArgs` of events fired from a job card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobArgs {
    /// The job the user has open. Opaque; not validated.
    #[serde(rename = "jobUUID")]
    pub job_uuid: String,
}
