//! Column names as they appear in the season files, plus the derived ones.

pub const NAME: &str = "Name";
pub const POSITION: &str = "Position";
pub const AGE: &str = "Age";
pub const MATCHES: &str = "Matchs";
pub const GOALS: &str = "Buts";
pub const ASSISTS: &str = "Passes décisives";
pub const MINUTES: &str = "Minutes jouées";
pub const YELLOW_CARDS: &str = "Cartons Jaunes";
pub const RED_CARDS: &str = "CartonS rouges";
pub const MARKET_VALUE: &str = "market_value";
pub const SEASON: &str = "Saison";
pub const PPM: &str = "PPM";

pub const GOALS_PER_MATCH: &str = "Ratio_Buts_Matchs";
pub const MINUTES_PER_MATCH: &str = "Minutes_par_match";
pub const OFFENSIVE_CONTRIBUTIONS: &str = "Contributions_offensives";
pub const TOTAL_CARDS: &str = "Cartons_total";

/// Every column a season file is expected to carry, in file order.
pub const BASE: [&str; 12] = [
    NAME,
    POSITION,
    AGE,
    MATCHES,
    GOALS,
    ASSISTS,
    MINUTES,
    YELLOW_CARDS,
    RED_CARDS,
    MARKET_VALUE,
    SEASON,
    PPM,
];

/// Columns coerced to numbers by the normalizer.
pub const NUMERIC: [&str; 9] = [
    AGE,
    MATCHES,
    GOALS,
    ASSISTS,
    MINUTES,
    YELLOW_CARDS,
    RED_CARDS,
    MARKET_VALUE,
    PPM,
];

/// Count-like columns where a missing value means "did not occur".
pub const ZERO_FILLED: [&str; 5] = [GOALS, ASSISTS, YELLOW_CARDS, RED_CARDS, MARKET_VALUE];

/// Columns appended by the derivation stage.
pub const DERIVED: [&str; 4] = [
    GOALS_PER_MATCH,
    MINUTES_PER_MATCH,
    OFFENSIVE_CONTRIBUTIONS,
    TOTAL_CARDS,
];
