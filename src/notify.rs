use crate::error::Error;
use serde::{Deserialize, Serialize};

const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Slack notification sink.
///
/// Constructed once and injected into the poller. Delivery failures are
/// logged and swallowed - they never affect cache state or the polling
/// loop.
pub struct Slack {
    client: reqwest::Client,
    token: String,
}

#[derive(Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl Slack {
    /// Creates a notifier from the `SLACK_ACCESS_TOKEN` environment
    /// variable. If using an app's oauth access token, ensure that the
    /// app has been invited to the channel.
    pub fn from_env() -> Result<Self, Error> {
        let token = std::env::var("SLACK_ACCESS_TOKEN").map_err(|_| Error::MissingToken)?;

        Ok(Self {
            client: reqwest::Client::new(),
            token,
        })
    }

    /// Posts a basic message to a channel.
    pub async fn notify(&self, channel: &str, text: &str) {
        let body = PostMessage { channel, text };

        let response = self
            .client
            .post(POST_MESSAGE_URL)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await;

        match response {
            Ok(response) => match response.json::<PostMessageResponse>().await {
                Ok(reply) if reply.ok => {
                    ::log::info!("Message successfully sent to channel {}", channel);
                }
                Ok(reply) => {
                    ::log::error!(
                        "Slack rejected message for channel {}: {}",
                        channel,
                        reply.error.unwrap_or_default()
                    );
                }
                Err(e) => {
                    ::log::error!("Failed to decode slack response: {}", e);
                }
            },
            Err(e) => {
                ::log::error!("Failed to post slack message: {}", e);
            }
        }
    }
}
