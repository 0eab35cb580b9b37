//! Card rendering for agents.
//!
//! Everything here is a pure function of the stored name, build and record,
//! so any client reading an agent account reproduces the exact same card.

use anchor_lang::prelude::*;

use crate::constants::{STAT_MAX, SVG_CHUNK_LEN};
use crate::state::{AgentAccount, AgentClass};

const CARD_SIZE: u32 = 320;
const BAR_X: u32 = 96;
const BAR_WIDTH: u32 = 192;
const BACKGROUND: &str = "#04040f";
const STRENGTH_COLOR: &str = "#ef4444";
const SPEED_COLOR: &str = "#facc15";
const INTELLIGENCE_COLOR: &str = "#60a5fa";

/// Name and stat summary returned by `render_agent`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct AgentSummary {
    pub agent_id: u64,
    pub name: String,
    pub class: AgentClass,
    pub strength: u8,
    pub speed: u8,
    pub intelligence: u8,
    pub wins: u64,
    pub losses: u64,
    pub description: String,
}

pub fn summary(agent: &AgentAccount) -> AgentSummary {
    let class = agent.class();
    AgentSummary {
        agent_id: agent.agent_id,
        name: agent.name.clone(),
        class,
        strength: agent.strength,
        speed: agent.speed,
        intelligence: agent.intelligence,
        wins: agent.wins,
        losses: agent.losses,
        description: format!(
            "{} the {} | STR {} / SPD {} / INT {} | {}W-{}L",
            agent.name,
            class.label(),
            agent.strength,
            agent.speed,
            agent.intelligence,
            agent.wins,
            agent.losses
        ),
    }
}

pub fn svg(agent: &AgentAccount) -> String {
    let class = agent.class();
    let mut out = String::with_capacity(1536);

    out.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"##,
        size = CARD_SIZE
    ));
    out.push_str(&format!(
        r##"<rect width="{size}" height="{size}" rx="16" fill="{bg}" stroke="{accent}" stroke-width="4"/>"##,
        size = CARD_SIZE,
        bg = BACKGROUND,
        accent = class.color()
    ));
    out.push_str(&format!(
        r##"<text x="160" y="52" fill="#ffffff" font-family="monospace" font-size="24" text-anchor="middle">{}</text>"##,
        escape(&agent.name)
    ));
    out.push_str(&format!(
        r##"<text x="160" y="82" fill="{}" font-family="monospace" font-size="16" text-anchor="middle">{}</text>"##,
        class.color(),
        class.label().to_uppercase()
    ));

    for (row, (label, value, color)) in [
        ("STR", agent.strength, STRENGTH_COLOR),
        ("SPD", agent.speed, SPEED_COLOR),
        ("INT", agent.intelligence, INTELLIGENCE_COLOR),
    ]
    .into_iter()
    .enumerate()
    {
        let y = 124 + row as u32 * 40;
        out.push_str(&format!(
            r##"<text x="32" y="{text_y}" fill="#cccccc" font-family="monospace" font-size="14">{label} {value}</text>"##,
            text_y = y + 14
        ));
        out.push_str(&format!(
            r##"<rect x="{x}" y="{y}" width="{w}" height="18" rx="4" fill="#1a0a50"/>"##,
            x = BAR_X,
            w = BAR_WIDTH
        ));
        out.push_str(&format!(
            r##"<rect x="{x}" y="{y}" width="{w}" height="18" rx="4" fill="{color}"/>"##,
            x = BAR_X,
            w = bar_width(value)
        ));
    }

    out.push_str(&format!(
        r##"<text x="160" y="284" fill="#ffffff" font-family="monospace" font-size="18" text-anchor="middle">{}W - {}L</text>"##,
        agent.wins, agent.losses
    ));
    out.push_str("</svg>");
    out
}

/// Slice of `svg` small enough for return data. Chunks split on bytes, so
/// clients join them before decoding.
pub fn svg_chunk(svg: &str, offset: u64) -> Vec<u8> {
    let bytes = svg.as_bytes();
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(bytes.len());
    let end = start.saturating_add(SVG_CHUNK_LEN).min(bytes.len());
    bytes[start..end].to_vec()
}

fn bar_width(value: u8) -> u32 {
    BAR_WIDTH * value.min(STAT_MAX) as u32 / STAT_MAX as u32
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
