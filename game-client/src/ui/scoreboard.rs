use game_types::RankedScore;
use std::io::{self, Write};

use super::Frame;
use crate::app::ScoreboardFilter;

pub fn difficulty_label(filter: &ScoreboardFilter) -> String {
    match filter.difficulty {
        Some(difficulty) => difficulty.to_string(),
        None => "All Difficulties".to_string(),
    }
}

pub fn duration_label(filter: &ScoreboardFilter) -> String {
    match filter.duration {
        Some(seconds) => format!("{}s", seconds),
        None => "All Times".to_string(),
    }
}

fn row(rank: &str, player: &str, score: &str, wpm: &str, difficulty: &str, time: &str) -> String {
    format!(
        "{:<6}{:<18}{:>7}{:>7}  {:<12}{:>6}",
        rank, player, score, wpm, difficulty, time
    )
}

pub fn render<W: Write>(
    frame: &mut Frame<'_, W>,
    filter: &ScoreboardFilter,
    rows: &[RankedScore],
) -> io::Result<()> {
    let theme = *frame.theme();

    frame.title("Scoreboard")?;
    frame.text(&format!(
        "Difficulty: {}   Time: {}",
        difficulty_label(filter),
        duration_label(filter)
    ))?;
    frame.blank();

    if rows.is_empty() {
        frame.styled("No scores yet.", theme.muted)?;
    } else {
        frame.styled(
            &row("Rank", "Player", "Score", "WPM", "Difficulty", "Time"),
            theme.accent,
        )?;
        for ranked in rows {
            let entry = &ranked.entry;
            frame.text(&row(
                &ranked.rank.to_string(),
                &entry.player_name,
                &entry.score.to_string(),
                &entry.wpm.to_string(),
                entry.difficulty.as_str(),
                &format!("{}s", entry.time),
            ))?;
        }
    }

    frame.blank();
    frame.styled("d: difficulty   t: time   Esc: home   q: quit", theme.muted)
}
