use std::io::{self, Write};

use super::Frame;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub fn render<W: Write>(frame: &mut Frame<'_, W>, spinner_frame: usize) -> io::Result<()> {
    frame.title("Loading Words")?;
    let accent = frame.theme().accent;
    frame.styled(
        &format!("{}  fetching the word list...", SPINNER[spinner_frame % SPINNER.len()]),
        accent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::capture;

    #[test]
    fn test_spinner_advances() {
        let first = capture(|frame| render(frame, 0));
        let second = capture(|frame| render(frame, 1));

        assert!(first.contains("Loading Words"));
        assert!(first.contains("|  fetching"));
        assert!(second.contains("/  fetching"));
    }
}
