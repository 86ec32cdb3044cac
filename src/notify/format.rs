//! Rendering of opportunities and tickets
//!
//! HTML for Telegram, plain text for the terminal. Both carry the same
//! fields.

use crate::types::{BettingOpportunity, SmartTicket, StakeRecommendation};
use rust_decimal::Decimal;

pub const NO_OPPORTUNITIES: &str = "⚠️ <b>No opportunities identified today</b>";
pub const NO_MATCHES: &str = "⚠️ <b>No matches found for analysis today</b>";

const CREATED_AT_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Escape text for Telegram's HTML parse mode
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Stake label, with the money range when a bankroll is known
pub fn stake_label(stake: StakeRecommendation, bankroll: Option<Decimal>) -> String {
    match bankroll {
        Some(bankroll) => {
            let (lo, hi) = stake.amount_range(bankroll);
            format!("{} (${:.2} - ${:.2})", stake.label(), lo, hi)
        }
        None => stake.label().to_string(),
    }
}

/// "Over/Under: Over 2.5"
pub fn market_label(opp: &BettingOpportunity) -> String {
    format!("{}: {}", opp.market_type, opp.prediction)
}

pub fn opportunity_html(position: usize, opp: &BettingOpportunity) -> String {
    format!(
        "<b>{}. {}</b>\n\
        🏆 {}\n\
        🎲 Market: <b>{}</b>\n\
        📊 Confidence: {}\n\
        💰 Odds: <code>{:.2}</code>\n\
        📈 Expected value: <code>{:+.2}</code>\n\
        💡 {}\n",
        position,
        escape_html(&opp.match_label()),
        escape_html(&opp.match_data.league),
        escape_html(&market_label(opp)),
        opp.confidence,
        opp.odds,
        opp.expected_value,
        escape_html(&opp.reasoning),
    )
}

pub fn ticket_html(ticket: &SmartTicket, bankroll: Option<Decimal>) -> String {
    let mut text = format!(
        "🎯 <b>TICKET {}</b> 🎯\n\
        Strategy: <b>{}</b>\n\
        Confidence: <code>{}%</code>\n\
        Total odds: <code>{:.2}</code>\n\n",
        ticket.ticket_id,
        ticket.strategy,
        ticket.confidence_pct(),
        ticket.total_odds,
    );

    for (idx, opp) in ticket.opportunities.iter().enumerate() {
        text.push_str(&opportunity_html(idx + 1, opp));
        text.push('\n');
    }

    text.push_str(&format!(
        "💵 Stake: <b>{}</b>\n\
        ⏰ Generated: {}\n\n\
        ⚠️ <i>Bet responsibly</i>",
        escape_html(&stake_label(ticket.stake_recommendation, bankroll)),
        ticket.created_at.format(CREATED_AT_FORMAT),
    ));

    text
}

/// Headline message for the best ticket; shows its first pick
pub fn ticket_of_the_day_html(ticket: &SmartTicket) -> String {
    let mut text = format!(
        "🔥 <b>TICKET OF THE DAY</b> 🔥\n\
        Ticket: <code>{}</code> ({})\n\
        Confidence: <code>{}%</code>\n\n",
        ticket.ticket_id,
        ticket.strategy,
        ticket.confidence_pct(),
    );
    if let Some(opp) = ticket.opportunities.first() {
        text.push_str(&opportunity_html(1, opp));
    }
    text
}

/// Terminal rendering
pub fn ticket_text(ticket: &SmartTicket, bankroll: Option<Decimal>) -> String {
    let mut text = format!(
        "Ticket {} [{}]  confidence {}%  total odds {:.2}  stake {}  created {}\n",
        ticket.ticket_id,
        ticket.strategy,
        ticket.confidence_pct(),
        ticket.total_odds,
        stake_label(ticket.stake_recommendation, bankroll),
        ticket.created_at.format(CREATED_AT_FORMAT),
    );

    for (idx, opp) in ticket.opportunities.iter().enumerate() {
        text.push_str(&format!(
            "  {}. {} ({}) | {} | {} | odds {:.2} | EV {:+.2}\n     {}\n",
            idx + 1,
            opp.match_label(),
            opp.match_data.league,
            market_label(opp),
            opp.confidence,
            opp.odds,
            opp.expected_value,
            opp.reasoning,
        ));
    }

    text
}
