use anchor_lang::prelude::*;

// ===== AGENT BUILD =====
#[constant]
pub const STAT_MIN: u8 = 1;
#[constant]
pub const STAT_MAX: u8 = 8;
/// Points every agent must spend across strength, speed and intelligence
#[constant]
pub const STAT_BUDGET: u8 = 10;
/// A single attribute at or above this value makes the agent a specialist
pub const SPECIALIST_THRESHOLD: u8 = 6;

// ===== TEXT LIMITS (bytes) =====
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_PROMPT_LEN: usize = 200;

// ===== QUERIES (return data is capped at 1 KiB) =====
/// Largest id page a list query returns; also the size of an owner page
#[constant]
pub const PAGE_SIZE: u64 = 100;
/// Bytes of the SVG card returned per `render_agent_svg` call
pub const SVG_CHUNK_LEN: usize = 1000;
