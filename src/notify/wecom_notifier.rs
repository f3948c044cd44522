use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::notify::Notifier;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts text messages to a WeCom group robot webhook.
#[derive(Clone, Debug)]
pub struct WeComNotifier {
    http: reqwest::Client,
    webhook: Option<Url>,
}

impl WeComNotifier {
    pub fn new(webhook: Option<Url>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build webhook http client")?;

        Ok(Self { http, webhook })
    }

    pub fn is_configured(&self) -> bool {
        self.webhook.is_some()
    }
}

#[async_trait]
impl Notifier for WeComNotifier {
    async fn send(&self, content: &str) -> Result<()> {
        let Some(webhook) = &self.webhook else {
            tracing::error!("WECHAT_WEBHOOK is not configured; cannot send message");
            bail!("webhook not configured");
        };

        let resp = self
            .http
            .post(webhook.clone())
            .json(&TextMessage::new(content))
            .send()
            .await
            .context("webhook POST failed")?;

        let text = resp.text().await.context("read webhook response failed")?;
        check_response(&text)?;

        tracing::info!("webhook message delivered");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    msgtype: &'static str,
    text: TextContent<'a>,
}

#[derive(Debug, Serialize)]
struct TextContent<'a> {
    content: &'a str,
}

impl<'a> TextMessage<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            msgtype: "text",
            text: TextContent { content },
        }
    }
}

#[derive(Debug, Deserialize)]
struct WebhookResponse {
    errcode: Option<i64>,
    #[serde(default)]
    errmsg: Option<String>,
}

fn check_response(text: &str) -> Result<()> {
    let parsed: WebhookResponse = match serde_json::from_str(text) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!(error = %e, %text, "failed to parse webhook response");
            bail!("parse webhook response JSON failed: {e}; raw={text}");
        }
    };

    match parsed.errcode {
        Some(0) => Ok(()),
        Some(code) => {
            let errmsg = parsed.errmsg.unwrap_or_default();
            tracing::error!(errcode = code, %errmsg, %text, "webhook rejected message");
            bail!("webhook error {code}: {errmsg}")
        }
        None => bail!("webhook response missing `errcode`; raw={text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_a_text_message() {
        let json = serde_json::to_value(TextMessage::new("📈 今日新股认购信息\n1. 今日无新股信息")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "msgtype": "text",
                "text": { "content": "📈 今日新股认购信息\n1. 今日无新股信息" }
            })
        );
    }

    #[test]
    fn zero_errcode_is_success() {
        assert!(check_response(r#"{"errcode":0,"errmsg":"ok"}"#).is_ok());
    }

    #[test]
    fn zero_errcode_is_success_whatever_errmsg_holds() {
        assert!(check_response(r#"{"errcode":0,"errmsg":null}"#).is_ok());
        assert!(check_response(r#"{"errcode":0}"#).is_ok());
    }

    #[test]
    fn nonzero_errcode_is_failure() {
        let error = check_response(r#"{"errcode":93000,"errmsg":"invalid webhook url"}"#)
            .unwrap_err();

        assert!(error.to_string().contains("93000"));
    }

    #[test]
    fn missing_errcode_is_failure() {
        assert!(check_response(r#"{"errmsg":"ok"}"#).is_err());
        assert!(check_response("<html>bad gateway</html>").is_err());
    }

    #[tokio::test]
    async fn missing_webhook_fails_without_request() {
        let notifier = WeComNotifier::new(None).unwrap();

        assert!(!notifier.is_configured());
        assert!(notifier.send("hello").await.is_err());
    }
}
