//! Telegram notification module
//!
//! Sends generated tickets and run alerts to Telegram.

pub mod format;


use crate::config::TelegramConfig;
use crate::error::{Result, TicketError};
use crate::types::SmartTicket;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Serialize;
use std::time::Duration;

/// Pause between consecutive ticket messages
const MESSAGE_DELAY: Duration = Duration::from_secs(1);

/// Telegram notifier
#[derive(Clone)]
pub struct Notifier {
    http: Client,
    bot_token: String,
    chat_id: String,
    enabled: bool,
    message_delay: Duration,
}

#[derive(Debug, Serialize)]
struct TelegramMessage {
    chat_id: String,
    text: String,
    parse_mode: String,
}

impl Notifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            http: Client::new(),
            bot_token,
            chat_id,
            enabled: true,
            message_delay: MESSAGE_DELAY,
        }
    }

    /// Create a disabled notifier (for when Telegram is not configured)
    pub fn disabled() -> Self {
        Self {
            http: Client::new(),
            bot_token: String::new(),
            chat_id: String::new(),
            enabled: false,
            message_delay: Duration::ZERO,
        }
    }

    pub fn from_config(config: Option<&TelegramConfig>) -> Self {
        match config {
            Some(tg) if !tg.bot_token.is_empty() && !tg.chat_id.is_empty() => {
                Self::new(tg.bot_token.clone(), tg.chat_id.clone())
            }
            _ => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Send a raw message (HTML format)
    pub async fn send(&self, text: &str) -> Result<()> {
        if !self.enabled {
            tracing::debug!("Telegram disabled, message not sent:\n{}", text);
            return Ok(());
        }

        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);

        let msg = TelegramMessage {
            chat_id: self.chat_id.clone(),
            text: text.to_string(),
            parse_mode: "HTML".to_string(),
        };

        let response = self.http.post(&url).json(&msg).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Telegram send failed: {}", error_text);
            return Err(TicketError::Notify(format!("{}: {}", status, error_text)));
        }

        Ok(())
    }

    /// One message per ticket, or a notice when there are none
    pub async fn send_tickets(&self, tickets: &[SmartTicket], bankroll: Option<Decimal>) -> Result<()> {
        if tickets.is_empty() {
            return self.send(format::NO_OPPORTUNITIES).await;
        }

        for (idx, ticket) in tickets.iter().enumerate() {
            if idx > 0 && !self.message_delay.is_zero() {
                tokio::time::sleep(self.message_delay).await;
            }
            self.send(&format::ticket_html(ticket, bankroll)).await?;
        }

        tracing::info!("Sent {} tickets to Telegram", tickets.len());
        Ok(())
    }

    pub async fn ticket_of_the_day(&self, ticket: &SmartTicket) -> Result<()> {
        self.send(&format::ticket_of_the_day_html(ticket)).await
    }

    pub async fn no_matches(&self) -> Result<()> {
        self.send(format::NO_MATCHES).await
    }

    /// Notify about an error
    pub async fn error(&self, context: &str, error: &str) -> Result<()> {
        let text = format!(
            "❌ <b>Error</b>\n\n\
            Context: {}\n\
            Error: <code>{}</code>",
            format::escape_html(context),
            format::escape_html(&truncate(error, 200)),
        );

        self.send(&text).await
    }

    /// Notify startup
    pub async fn startup(&self, dry_run: bool) -> Result<()> {
        let mode = if dry_run { "DRY RUN 🧪" } else { "LIVE 🔥" };
        let text = format!(
            "🤖 <b>Smart Tickets Started</b>\n\n\
            Mode: {}\n\
            Time: {}",
            mode,
            chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"),
        );

        self.send(&text).await
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}
