use async_trait::async_trait;
use ratatui::DefaultTerminal;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use std::io;

use crate::engine::DisplaySink;

const TITLE: &str = " typeahead ";
const KEY_HINTS: &str = " Tab: next · Enter: accept · Esc: quit ";

/// Draws each frame as the whole content of a bordered input box.
pub struct TerminalSink {
    terminal: DefaultTerminal,
}

impl TerminalSink {
    pub fn new(terminal: DefaultTerminal) -> Self {
        Self { terminal }
    }
}

#[async_trait]
impl DisplaySink for TerminalSink {
    async fn render(&mut self, text: &str) -> io::Result<()> {
        self.terminal.draw(|f| {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .title(TITLE)
                .title_bottom(KEY_HINTS);
            let input = Paragraph::new(text)
                .block(block)
                .wrap(Wrap { trim: false })
                .style(Style::default().fg(Color::Green));
            f.render_widget(input, f.area());
        })?;
        Ok(())
    }
}
