use std::io::{self, Write};

use super::Frame;

pub fn render<W: Write>(frame: &mut Frame<'_, W>, player_name: &str, count: u32) -> io::Result<()> {
    frame.title(&format!("Get ready, {}!", player_name))?;
    let highlight = frame.theme().highlight;
    frame.styled(&format!("    {}", count), highlight)
}
