//! Rendering helpers for widget tests

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// A terminal backed by an in-memory buffer
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().buffer().area;
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .unwrap();
    }

    pub fn draw<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).unwrap();
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Buffer contents, one line per row
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().contains(needle)
    }

    /// Row `y` of the buffer, right-trimmed
    pub fn line(&self, y: u16) -> String {
        let buffer = self.buffer();
        (buffer.area.x..buffer.area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Position of the first cell whose symbol starts `needle`
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        let area = self.buffer().area;
        (area.y..area.bottom()).find_map(|y| {
            let line: Vec<String> = (area.x..area.right())
                .map(|x| self.buffer()[(x, y)].symbol().to_string())
                .collect();
            let joined = line.concat();
            joined.find(needle).map(|byte| {
                // Map the byte offset back to a column
                let mut consumed = 0;
                let mut column = 0u16;
                for symbol in &line {
                    if consumed >= byte {
                        break;
                    }
                    consumed += symbol.len();
                    column += 1;
                }
                (area.x + column, y)
            })
        })
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
