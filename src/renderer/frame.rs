//! Text frame composition

use crate::sim::{GamePhase, Point, RenderSnapshot};

const BORDER: &str = "##";
const BODY: &str = "[]";
const HEAD: &str = "@@";
const FOOD: &str = "()";
const EMPTY: &str = "  ";

/// Terminal columns per grid cell
pub const CELL_COLUMNS: usize = 2;

const SCORE_TEXT: &str = "SCORE:";
const HIGHSCORE_TEXT: &str = "HIGHSCORE:";

/// One composed screen: a HUD line followed by the bordered arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
}

/// Banner shown over the arena for a phase
pub fn banner(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::OnMenu => Some("<Press ENTER to Start>"),
        GamePhase::Paused => Some("Paused"),
        GamePhase::GameOver => Some("Game Over"),
        GamePhase::GameWin => Some("You Win!"),
        GamePhase::Playing => None,
    }
}

impl Frame {
    pub fn compose(snap: &RenderSnapshot) -> Self {
        let cell = snap.cell.w.max(1);
        let (cols, rows) = snap.arena.cells(cell);
        let (grid_w, grid_h) = (cols.max(0) as usize + 2, rows.max(0) as usize + 2);

        let mut grid = vec![vec![EMPTY; grid_w]; grid_h];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                if r == 0 || r == grid_h - 1 || c == 0 || c == grid_w - 1 {
                    *slot = BORDER;
                }
            }
        }

        // Pixel position -> grid slot inside the border
        let slot = |p: Point| -> Option<(usize, usize)> {
            let c = (p.x - snap.arena.x).div_euclid(cell) + 1;
            let r = (p.y - snap.arena.y).div_euclid(cell) + 1;
            ((1..grid_w as i32 - 1).contains(&c) && (1..grid_h as i32 - 1).contains(&r))
                .then_some((r as usize, c as usize))
        };

        if let Some((r, c)) = snap.food.and_then(slot) {
            grid[r][c] = FOOD;
        }
        if let Some((&head, body)) = snap.snake.split_last() {
            for &p in body {
                if let Some((r, c)) = slot(p) {
                    grid[r][c] = BODY;
                }
            }
            if let Some((r, c)) = slot(head) {
                grid[r][c] = HEAD;
            }
        }

        let width = grid_w * CELL_COLUMNS;
        let mut lines = Vec::with_capacity(grid_h + 1);
        lines.push(hud_line(snap.score, snap.best, width));
        lines.extend(grid.iter().map(|row| row.concat()));

        if let Some(text) = banner(snap.phase) {
            overlay_centered(&mut lines[1 + grid_h / 2], text);
        }

        Self { lines }
    }

    /// Width in terminal columns
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }
}

fn hud_line(score: u32, best: u32, width: usize) -> String {
    let left = format!("{SCORE_TEXT} {score}");
    let right = format!("{HIGHSCORE_TEXT} {best}");
    let gap = width.saturating_sub(left.len() + right.len()).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

/// Write `text` (padded by one space each side) over the middle of `line`
fn overlay_centered(line: &mut String, text: &str) {
    let padded: Vec<char> = format!(" {text} ").chars().collect();
    let mut chars: Vec<char> = line.chars().collect();
    if padded.len() > chars.len() {
        *line = padded.into_iter().collect();
        return;
    }
    let start = (chars.len() - padded.len()) / 2;
    chars[start..start + padded.len()].copy_from_slice(&padded);
    *line = chars.into_iter().collect();
}
