use crate::games::models::Guess;
use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Messages the embedded map view sends to the host surface.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum WebViewSentMessage {
    /// The view finished loading and asks for the state it should render.
    InitialData,
    /// The player dropped a pin and pressed the submit button.
    SubmitGuess(LatLng),
}

/// Messages the host surface sends back into the embedded map view.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum HostSentMessage {
    InitialData(InitialDataPayload),
    ShowResults(ShowResultsPayload),
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialDataPayload {
    pub username: String,
    pub avatar_url: String,
    /// The caller's stored guess, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<Guess>,
    /// The true location. Revealed only once the caller has guessed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<LatLng>,
    pub all_guesses: HashMap<String, Guess>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowResultsPayload {
    pub guess: Guess,
    pub actual: LatLng,
}
