use std::io::{IsTerminal, Write};

use intervalwalk_core::{DisplaySurface, DisplayView};

/// Single status line, redrawn in place when stdout is a terminal.
pub struct TerminalDisplay {
    width: usize,
    in_place: bool,
}

impl TerminalDisplay {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            in_place: std::io::stdout().is_terminal(),
        }
    }

    fn line(&self, view: &DisplayView) -> String {
        format!(
            "{:<9} {:>5}  {}  [{}] {:5.1}%  {}/{}  ({})",
            view.phase_label,
            view.time_label,
            view.cycle_label,
            view.progress_bar(self.width),
            view.progress_pct(),
            view.elapsed_label,
            view.total_label,
            view.control_label,
        )
    }
}

impl DisplaySurface for TerminalDisplay {
    fn render(&mut self, view: &DisplayView) {
        let line = self.line(view);
        let mut out = std::io::stdout().lock();
        let written = if self.in_place {
            write!(out, "\r\x1b[2K{line}").and_then(|_| out.flush())
        } else {
            writeln!(out, "{line}")
        };
        if let Err(err) = written {
            tracing::debug!(%err, "display write failed");
        }
    }
}

/// One JSON object per frame, tagged `"type": "Display"`.
#[derive(Default)]
pub struct JsonDisplay;

impl JsonDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySurface for JsonDisplay {
    fn render(&mut self, view: &DisplayView) {
        let frame = serde_json::json!({ "type": "Display", "view": view });
        println!("{frame}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intervalwalk_core::{Phase, Session};

    #[test]
    fn status_line_shows_every_label() {
        let display = TerminalDisplay {
            width: 20,
            in_place: false,
        };
        let session = Session {
            phase: Phase::Fast,
            cycle_index: 1,
            remaining_in_phase: 125,
            total_elapsed: 90,
            running: true,
        };
        let line = display.line(&DisplayView::project(&session));
        assert!(line.starts_with("FAST"));
        assert!(line.contains("2:05"));
        assert!(line.contains("Cycle 1/5"));
        assert!(line.contains(&format!("[#{}]", ".".repeat(19))));
        assert!(line.contains("5.0%"));
        assert!(line.contains("1:30/30:00"));
        assert!(line.ends_with("(Stop)"));
    }
}
