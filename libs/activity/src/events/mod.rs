pub use self::response::{Commit, Event, EventKind, Issue, Payload, Repo};
use crate::{client::Client, response::IntoResponse, ActivityError};
use tracing::{error, info};

mod response;

#[tracing::instrument(skip(client))]
pub async fn fetch_events(
    client: &Client,
    username: &str,
) -> Result<Vec<Event>, ActivityError> {
    let text = client.get(&format!("users/{}/events", username)).await?;

    let events = match serde_json::from_str::<Vec<Event>>(&text) {
        Ok(events) => events,
        Err(e) => {
            error!(task = "decode events", username, err = e.to_string());
            return Err(e).into_response("failed to decode events");
        }
    };

    info!(task = "decode events", username, count = events.len());

    Ok(events)
}
