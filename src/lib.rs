//! History-tree enumeration and information-set indexing for extensive-form games.
//!
//! Given an initial [`GameState`] and a designated player, [`HistoryTree`]
//! enumerates every reachable history into an arena-backed tree keyed by
//! history string. [`Counterfactual`] then walks that tree under an arbitrary
//! joint [`Policy`], assigning each history its counterfactual reach
//! probability, and partitions the designated player's decision points into
//! [`InfoSet`]s. This is the enumeration layer underneath best-response and
//! exploitability computations.
//!
//! # Module Structure
//!
//! - `state`: Game-engine capability interface (Turn, StateType, GameState)
//! - `tree`: History enumeration (HistoryNode, Node, HistoryTree)
//! - `infoset`: Counterfactual reach and information-set grouping
//! - `policy`: Policy query interface and tabular policies
//! - `games`: Kuhn, Leduc and Liar's Dice reference implementations

pub mod games;
pub mod infoset;
pub mod policy;
pub mod state;
pub mod tree;

pub use infoset::*;
pub use policy::*;
pub use state::*;
pub use tree::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index of a decision-making player.
pub type Player = usize;
/// Engine-level action id. Chance outcomes and player moves share one space.
pub type Action = usize;
/// Reach probabilities, chance odds and policy weights.
pub type Probability = f64;

// ============================================================================
// INFORMATION STATE SENTINELS
// ============================================================================
/// Info key stored on every chance node.
pub const CHANCE_INFOSTATE: &str = "<chance>";
/// Info key stored on every terminal node.
pub const TERMINAL_INFOSTATE: &str = "<terminal>";

// ============================================================================
// NUMERICS
// ============================================================================
/// Tolerance for distribution normalization checks.
pub const PROBABILITY_TOLERANCE: Probability = 1e-6;
/// Separator between actions in a canonical history string.
pub const HISTORY_SEPARATOR: &str = ", ";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory receiving timestamped log files.
pub const LOG_DIRECTORY: &str = "logs";
/// Environment variable overriding the terminal log level.
pub const LOG_LEVEL_VAR: &str = "HISTREE_LOG";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to file; terminal level comes from `HISTREE_LOG`
/// (defaults to INFO).
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all(LOG_DIRECTORY)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIRECTORY, time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
