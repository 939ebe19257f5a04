// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive terminal view.
//!
//! Every frame the scene is rasterized to the current terminal size, with the
//! bottom row kept for a status line. The loop exits on Esc, `q`, or Ctrl-C.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use understory_bin_tree_scene::Scene;
use understory_bin_tree_scene::raster::CellCanvas;

/// Raw mode plus alternate screen, undone on drop.
struct Session {
    out: Stdout,
}

impl Session {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { out })
    }

    fn draw(&mut self, scene: &Scene) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let grid_rows = rows.saturating_sub(1);
        let canvas = CellCanvas::render(scene, usize::from(cols), usize::from(grid_rows));
        log::trace!("frame {cols}x{rows}");

        queue!(
            self.out,
            terminal::BeginSynchronizedUpdate,
            terminal::Clear(ClearType::All)
        )?;
        for row in 0..grid_rows {
            queue!(
                self.out,
                cursor::MoveTo(0, row),
                Print(canvas.row_text(usize::from(row)))
            )?;
        }
        if rows > 0 {
            let status = status_line(scene, usize::from(cols));
            queue!(self.out, cursor::MoveTo(0, grid_rows), Print(status))?;
        }
        queue!(self.out, terminal::EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Show `scene` until the user closes the view.
pub(crate) fn run(scene: &Scene, frame: Duration) -> io::Result<()> {
    let mut session = Session::enter()?;
    loop {
        session.draw(scene)?;
        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if is_close(&key) => break,
            // The next frame picks up the new size.
            Event::Resize(cols, rows) => log::debug!("resized to {cols}x{rows}"),
            _ => {}
        }
    }
    Ok(())
}

fn is_close(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn status_line(scene: &Scene, width: usize) -> String {
    let text = format!(
        " {} nodes, {} links | Esc/q quit",
        scene.nodes.len(),
        scene.connectors.len()
    );
    text.chars().take(width).collect()
}
