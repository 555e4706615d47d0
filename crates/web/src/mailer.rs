use serde::Serialize;
use serde_json::json;

/// Best-effort notification dispatch. Messages are POSTed as JSON to a
/// provider webhook; sends run in a detached task so the triggering
/// request never waits on, or fails from, mail delivery.
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub template: &'static str,
    pub variables: serde_json::Value,
}

impl Mailer {
    pub fn new(webhook_url: Option<String>) -> Self {
        if webhook_url.is_none() {
            tracing::info!("MAIL_WEBHOOK_URL not set, notifications will be skipped");
        }
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Fire-and-forget single send.
    pub fn send(&self, notification: Notification) {
        let Some(url) = self.webhook_url.clone() else {
            tracing::debug!(template = notification.template, "Notification skipped");
            return;
        };
        let client = self.client.clone();

        tokio::spawn(async move {
            match client.post(&url).json(&notification).send().await {
                Ok(resp) if resp.status().is_success() => {
                    tracing::debug!(
                        template = notification.template,
                        to = %notification.to,
                        "Notification sent"
                    );
                }
                Ok(resp) => {
                    tracing::warn!(
                        template = notification.template,
                        status = %resp.status(),
                        "Notification rejected by provider"
                    );
                }
                Err(e) => {
                    tracing::warn!(template = notification.template, "Notification failed: {e}");
                }
            }
        });
    }

    /// Fire-and-forget batch send to a recipient list that may contain
    /// gaps (entries without a contact address). Logs a sent/failed/
    /// skipped summary when the batch completes.
    pub fn send_batch(
        &self,
        template: &'static str,
        subject: &str,
        recipients: Vec<Option<String>>,
        variables: serde_json::Value,
    ) {
        let skipped_no_url = self.webhook_url.is_none();
        let url = self.webhook_url.clone();
        let client = self.client.clone();
        let subject = subject.to_string();

        tokio::spawn(async move {
            let mut sent = 0u32;
            let mut failed = 0u32;
            let mut skipped = 0u32;

            for recipient in recipients {
                let Some(to) = recipient else {
                    skipped += 1;
                    continue;
                };
                let Some(url) = url.as_deref() else {
                    skipped += 1;
                    continue;
                };

                let payload = json!({
                    "to": to,
                    "subject": subject,
                    "template": template,
                    "variables": variables,
                });
                match client.post(url).json(&payload).send().await {
                    Ok(resp) if resp.status().is_success() => sent += 1,
                    Ok(_) | Err(_) => failed += 1,
                }
            }

            if skipped_no_url && sent == 0 && failed == 0 {
                tracing::debug!(template, skipped, "Notification batch skipped");
            } else {
                tracing::info!(template, sent, failed, skipped, "Notification batch done");
            }
        });
    }
}
