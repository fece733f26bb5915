/// Email notification module
///
/// Sends a staff notification through an HTTP mail API whenever an
/// inquiry is stored. The send is strictly best-effort: it runs on a
/// detached task and a failure is logged, never surfaced to the
/// visitor who submitted the inquiry.
use anyhow::{Context, Result};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::models::Inquiry;

/// Mail delivery handle, disabled when no API key is configured
#[derive(Clone)]
pub enum Notifier {
    Disabled,
    Mailer {
        client: reqwest::Client,
        api_url: String,
        api_key: String,
        from: String,
        to: String,
    },
}

impl Notifier {
    /// Creates a notifier; a missing or empty API key disables it.
    pub fn new(api_url: String, api_key: Option<String>, from: String, to: String) -> Self {
        match api_key {
            Some(api_key) if !api_key.is_empty() => Notifier::Mailer {
                client: reqwest::Client::new(),
                api_url,
                api_key,
                from,
                to,
            },
            _ => {
                info!("No email API key configured, inquiry notifications are disabled");
                Notifier::Disabled
            }
        }
    }

    /// A notifier that never sends anything.
    pub fn disabled() -> Self {
        Notifier::Disabled
    }

    /// Posts the notification mail for a stored inquiry.
    ///
    /// ### Errors
    ///
    /// Transport failures and non-success responses from the mail API.
    pub async fn send_inquiry(&self, inquiry: &Inquiry) -> Result<()> {
        let Notifier::Mailer {
            client,
            api_url,
            api_key,
            from,
            to,
        } = self
        else {
            debug!("Notifier disabled, skipping inquiry notification");
            return Ok(());
        };

        let response = client
            .post(api_url)
            .bearer_auth(api_key)
            .json(&notification_payload(from, to, inquiry))
            .send()
            .await
            .context("Failed to reach the mail API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Mail API returned {}: {}", status, body);
        }

        debug!(inquiry_id = %inquiry.get_id(), "Inquiry notification sent");
        Ok(())
    }

    /// Fires the notification on a detached task.
    ///
    /// The task owns its clone of the notifier and the stored inquiry;
    /// the caller keeps no handle, so the HTTP response never waits on
    /// the mail API.
    pub fn notify_detached(&self, inquiry: Inquiry) {
        let notifier = self.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send_inquiry(&inquiry).await {
                warn!("Failed to send inquiry notification: {:#}", e);
            }
        });
    }
}

/// Builds the fixed-shape mail payload for an inquiry.
fn notification_payload(from: &str, to: &str, inquiry: &Inquiry) -> serde_json::Value {
    let mut lines = vec![
        format!("<p><strong>이름:</strong> {}</p>", inquiry.get_name()),
        format!("<p><strong>이메일:</strong> {}</p>", inquiry.get_email()),
    ];
    if let Some(phone) = inquiry.get_phone() {
        lines.push(format!("<p><strong>연락처:</strong> {}</p>", phone));
    }
    if let Some(company) = inquiry.get_company() {
        lines.push(format!("<p><strong>회사:</strong> {}</p>", company));
    }
    if let Some(slug) = inquiry.get_project_slug() {
        lines.push(format!(
            "<p><strong>관련 프로젝트:</strong> /projects/{}</p>",
            slug
        ));
    }
    lines.push(format!(
        "<p><strong>문의 내용:</strong></p><p>{}</p>",
        inquiry.get_message()
    ));

    json!({
        "from": from,
        "to": [to],
        "reply_to": inquiry.get_email(),
        "subject": format!("새 문의: {}", inquiry.get_name()),
        "html": lines.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> Inquiry {
        Inquiry::new(
            "김지원".to_string(),
            "jiwon@example.com".to_string(),
            None,
            None,
            Some("seoul-library".to_string()),
            "견적 문의드립니다.".to_string(),
        )
    }

    #[tokio::test]
    async fn test_disabled_send_is_a_no_op() {
        let notifier = Notifier::disabled();
        assert!(notifier.send_inquiry(&inquiry()).await.is_ok());
    }

    #[test]
    fn test_missing_key_disables() {
        let notifier = Notifier::new(
            "https://mail.example/send".to_string(),
            None,
            "noreply@example.com".to_string(),
            "staff@example.com".to_string(),
        );
        assert!(matches!(notifier, Notifier::Disabled));

        let notifier = Notifier::new(
            "https://mail.example/send".to_string(),
            Some("".to_string()),
            "noreply@example.com".to_string(),
            "staff@example.com".to_string(),
        );
        assert!(matches!(notifier, Notifier::Disabled));
    }

    #[test]
    fn test_payload_shape() {
        let inquiry = inquiry();
        let payload = notification_payload("noreply@example.com", "staff@example.com", &inquiry);

        assert_eq!(payload["from"], "noreply@example.com");
        assert_eq!(payload["to"][0], "staff@example.com");
        assert_eq!(payload["reply_to"], "jiwon@example.com");

        let subject = payload["subject"].as_str().unwrap();
        assert!(subject.contains("김지원"));

        let html = payload["html"].as_str().unwrap();
        assert!(html.contains("jiwon@example.com"));
        assert!(html.contains("/projects/seoul-library"));
        assert!(html.contains("견적 문의드립니다."));
    }
}
