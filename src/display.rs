/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer, an immutable view of the game
/// state and the terminal dimensions.  No game logic is performed; this
/// module only scales the engine's logical-pixel coordinates into the
/// bordered play area and translates them into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use ozn_defense::entities::{GameState, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_SHIP: Color = Color::Blue;
const C_OZN: Color = Color::Green;
const C_PROJECTILE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Coordinate scaling ────────────────────────────────────────────────────────

/// The cell rectangle the playfield occupies: row 0 is the HUD, rows 1 and
/// `term_h - 2` the border, the last row the controls hint.
struct PlayArea {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
}

impl PlayArea {
    fn new(term_w: u16, term_h: u16) -> Self {
        PlayArea {
            left: 1,
            top: 2,
            cols: term_w.saturating_sub(2).max(1),
            rows: term_h.saturating_sub(4).max(1),
        }
    }

    /// Logical pixel → cell column, clamped inside the border.
    fn col(&self, x: f32, state: &GameState) -> u16 {
        let frac = (x / state.config.viewport_w).clamp(0.0, 1.0);
        self.left + ((frac * (self.cols - 1) as f32) as u16).min(self.cols - 1)
    }

    /// Logical pixel → cell row.  Returns `None` above the top edge so
    /// freshly spawned enemies stay invisible until they enter the viewport.
    fn row(&self, y: f32, state: &GameState) -> Option<u16> {
        if y < 0.0 {
            return None;
        }
        let frac = (y / state.config.viewport_h).clamp(0.0, 1.0);
        Some(self.top + ((frac * (self.rows - 1) as f32) as u16).min(self.rows - 1))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let area = PlayArea::new(term_w, term_h);

    draw_border(out, term_w, term_h)?;
    draw_hud(out, state, term_w)?;

    for enemy in state.enemies.iter() {
        if let Some(row) = area.row(enemy.y, state) {
            draw_ozn(out, area.col(enemy.x, state), row, term_h)?;
        }
    }
    for p in state.projectiles.iter() {
        if let Some(row) = area.row(p.y, state) {
            out.queue(cursor::MoveTo(area.col(p.x, state), row))?;
            out.queue(style::SetForegroundColor(C_PROJECTILE))?;
            out.queue(Print("║"))?;
        }
    }

    draw_ship(out, state, &area)?;
    draw_controls_hint(out, term_h)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, term_w, term_h)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term_h.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, term_w: u16, term_h: u16) -> std::io::Result<()> {
    let w = term_w as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, term_h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..term_h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(term_w.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, term_w: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Score:{:>6}", state.score)))?;

    let destroyed = format!(
        "Destroyed:{:>4}",
        state.score / state.config.score_per_kill.max(1)
    );
    let rx = term_w.saturating_sub(destroyed.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&destroyed))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, state: &GameState, area: &PlayArea) -> std::io::Result<()> {
    // 2-row sprite, anchored at the scaled ship center:
    //   ▲       ← cockpit
    //  /█\      ← fuselage + wings
    let center = state.ship_x + state.config.ship_w / 2.0;
    let col = area.col(center, state);
    let row = match area.row(state.config.ship_y(), state) {
        Some(r) => r,
        None => return Ok(()),
    };

    out.queue(style::SetForegroundColor(C_SHIP))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;
    if row + 1 < area.top + area.rows {
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(area.left), row + 1))?;
        out.queue(Print("/█\\"))?;
    }
    Ok(())
}

fn draw_ozn<W: Write>(out: &mut W, col: u16, row: u16, term_h: u16) -> std::io::Result<()> {
    // 2-row saucer sprite:
    //   (◎)    ← dome
    //   ╰─╯    ← hull
    out.queue(style::SetForegroundColor(C_OZN))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("(◎)"))?;
    if row + 1 < term_h.saturating_sub(2) {
        out.queue(cursor::MoveTo(col, row + 1))?;
        out.queue(Print("╰─╯"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, term_h: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, term_h.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);

    let lines: &[&str] = &[
        "╔════════════════════╗",
        "║    GAME  OVER      ║",
        "╚════════════════════╝",
    ];

    let cx = term_w / 2;
    let total_rows = lines.len() + 2; // box + score + hint
    let start_row = (term_h / 2).saturating_sub(total_rows as u16 / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint = "R - Play Again  Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
