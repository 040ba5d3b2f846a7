//! Built-in synthetic dataset, used when no season file can be read.

use crate::models::columns as col;
use crate::models::{Column, Table};

struct SamplePlayer {
    name: &'static str,
    position: &'static str,
    age: f64,
    matches: f64,
    goals: f64,
    assists: f64,
    minutes: f64,
    yellow_cards: f64,
    red_cards: f64,
    market_value: f64,
    ppm: f64,
}

const fn player(
    name: &'static str,
    position: &'static str,
    stats: [f64; 9],
) -> SamplePlayer {
    let [age, matches, goals, assists, minutes, yellow_cards, red_cards, market_value, ppm] = stats;
    SamplePlayer {
        name,
        position,
        age,
        matches,
        goals,
        assists,
        minutes,
        yellow_cards,
        red_cards,
        market_value,
        ppm,
    }
}

// age, matches, goals, assists, minutes, yellow, red, market value, ppm
const PLAYERS: [SamplePlayer; 7] = [
    player("Nadir Lamyaghri", "Gardien de but", [34.0, 21.0, 0.0, 0.0, 1890.0, 0.0, 0.0, 275_000.0, 1.90]),
    player("Mourad Lemsen", "Défense", [31.0, 25.0, 1.0, 2.0, 2245.0, 6.0, 0.0, 150_000.0, 1.68]),
    player("Youssef Rabeh", "Défenseur central", [26.0, 23.0, 0.0, 0.0, 2070.0, 2.0, 0.0, 200_000.0, 1.65]),
    player("Hicham Amrani", "Défenseur central", [25.0, 24.0, 1.0, 1.0, 2147.0, 8.0, 0.0, 180_000.0, 1.58]),
    player("Ayoub El Kaabi", "Avant-centre", [28.0, 30.0, 15.0, 3.0, 2700.0, 3.0, 0.0, 800_000.0, 2.10]),
    player("Yahya Jabrane", "Milieu central", [27.0, 28.0, 5.0, 8.0, 2520.0, 4.0, 1.0, 600_000.0, 1.95]),
    player("Walid El Karti", "Ailier droit", [24.0, 20.0, 8.0, 6.0, 1800.0, 2.0, 0.0, 450_000.0, 1.75]),
];

/// Season labels, cycled independently of the player pattern.
const SEASONS: [&str; 15] = [
    "2011/12", "2012/13", "2013/14", "2014/15", "2015/16", "2016/17", "2017/18", "2018/19",
    "2019/20", "2020/21", "2021/22", "2022/23", "2023/24", "2024/25", "2011/12",
];

/// How many times the seven-player pattern repeats.
const REPEATS: usize = 15;

/// Sample table with every base column present: the player pattern repeated 15 times
/// (105 rows) against a 15-label season cycle. Not yet normalized or derived.
pub fn sample_table() -> Table {
    let rows = PLAYERS.len() * REPEATS;
    let at = |i: usize| &PLAYERS[i % PLAYERS.len()];
    let text = |f: fn(&SamplePlayer) -> &'static str| {
        Column::Text((0..rows).map(|i| Some(f(at(i)).to_string())).collect())
    };
    let number = |f: fn(&SamplePlayer) -> f64| {
        Column::Number((0..rows).map(|i| Some(f(at(i)))).collect())
    };

    let mut table = Table::new();
    table.set_column(col::NAME.to_string(), text(|p| p.name));
    table.set_column(col::POSITION.to_string(), text(|p| p.position));
    table.set_column(col::AGE.to_string(), number(|p| p.age));
    table.set_column(col::MATCHES.to_string(), number(|p| p.matches));
    table.set_column(col::GOALS.to_string(), number(|p| p.goals));
    table.set_column(col::ASSISTS.to_string(), number(|p| p.assists));
    table.set_column(col::MINUTES.to_string(), number(|p| p.minutes));
    table.set_column(col::YELLOW_CARDS.to_string(), number(|p| p.yellow_cards));
    table.set_column(col::RED_CARDS.to_string(), number(|p| p.red_cards));
    table.set_column(col::MARKET_VALUE.to_string(), number(|p| p.market_value));
    table.set_column(
        col::SEASON.to_string(),
        Column::Text(
            (0..rows)
                .map(|i| Some(SEASONS[i % SEASONS.len()].to_string()))
                .collect(),
        ),
    );
    table.set_column(col::PPM.to_string(), number(|p| p.ppm));
    table
}
