//! SessionView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::challenge::Feedback;
use crate::core::minigames::{ArcadeGame, Point, TicTacToe, TicTacToeOutcome};
use crate::core::{EducationGame, MiniGame, SessionSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::i18n::Translations;
use crate::types::{
    ArcadeGameKind, EducationGameKind, Language, ModeTag, ARENA_HEIGHT, ARENA_WIDTH, GRID_HEIGHT,
    GRID_WIDTH,
};

const BOARD_BG: Rgb = Rgb::new(20, 30, 20);

const TITLE: CellStyle = CellStyle::fg(Rgb::new(80, 220, 100)).bold();
const HEADING: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80)).bold();
const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const HINT: CellStyle = CellStyle::fg(Rgb::new(120, 200, 220));
const GOOD: CellStyle = CellStyle::fg(Rgb::new(100, 220, 120)).bold();
const BAD: CellStyle = CellStyle::fg(Rgb::new(230, 90, 90)).bold();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders every session mode.
pub struct SessionView {
    /// Board cell width in terminal columns when it fits.
    cell_w: u16,
    /// Arcade arena size in terminal cells.
    arena_cols: u16,
    arena_rows: u16,
}

impl Default for SessionView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            arena_cols: 64,
            arena_rows: 20,
        }
    }
}

impl SessionView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        text: &Translations,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell { ch: ' ', style: TEXT });

        let t = |key: &'static str| text.text(snap.language, key);

        match snap.mode {
            ModeTag::Menu => self.draw_menu(fb, snap.language, &t),
            ModeTag::Playing | ModeTag::Paused | ModeTag::GameOver => {
                self.draw_snake(fb, snap, &t)
            }
            ModeTag::CategorySelect => self.draw_categories(fb, &t),
            ModeTag::EducationSelect => {
                let names = EducationGameKind::ALL.map(|k| t(k.key()));
                self.draw_game_list(fb, t("education_game_select"), &names, &t);
            }
            ModeTag::ArcadeSelect => {
                let names = ArcadeGameKind::ALL.map(|k| t(k.key()));
                self.draw_game_list(fb, t("arcade_game_select"), &names, &t);
            }
            ModeTag::EducationPlaying => {
                if let Some(game) = &snap.education {
                    self.draw_education(fb, game, &t);
                }
            }
            ModeTag::ArcadePlaying => {
                if let Some(game) = &snap.arcade {
                    self.draw_arcade(fb, game, &t);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        text: &Translations,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, text, viewport, &mut fb);
        fb
    }

    fn draw_menu<'a>(
        &self,
        fb: &mut FrameBuffer,
        language: Language,
        t: &impl Fn(&'static str) -> &'a str,
    ) {
        let mut y = fb.height() / 3;
        fb.put_str_centered(y, t("title"), TITLE);
        y += 2;
        fb.put_str_centered(y, t("subtitle"), TEXT);
        y += 3;
        fb.put_str_centered(y, t("start"), HEADING);
        y += 2;
        fb.put_str_centered(y, t("toggle_language"), HINT);
        y += 1;
        let lang = match language {
            Language::English => "English",
            Language::Tamil => "தமிழ்",
        };
        let line = format!("{}: {lang}", t("language"));
        fb.put_str_centered(y, &line, TEXT);
        y += 2;
        fb.put_str_centered(y, t("quit"), HINT);
    }

    fn draw_snake<'a>(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        t: &impl Fn(&'static str) -> &'a str,
    ) {
        let cell_w = if (GRID_WIDTH as u16) * self.cell_w + 2 <= fb.width() {
            self.cell_w
        } else {
            1
        };
        let frame_w = (GRID_WIDTH as u16) * cell_w + 2;
        let frame_h = GRID_HEIGHT as u16 + 2;
        let start_x = 0;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        let empty = CellStyle::fg(Rgb::new(60, 80, 60)).on(BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', empty);
        fb.draw_border(start_x, start_y, frame_w, frame_h, BORDER);

        let plot = |fb: &mut FrameBuffer, x: i8, y: i8, ch: char, style: CellStyle| {
            if x < 0 || y < 0 {
                return;
            }
            let px = start_x + 1 + x as u16 * cell_w;
            let py = start_y + 1 + y as u16;
            fb.fill_rect(px, py, cell_w, 1, ch, style);
        };

        let food = CellStyle::fg(Rgb::new(230, 80, 80)).on(BOARD_BG);
        plot(fb, snap.food.x, snap.food.y, '●', food);
        let body = CellStyle::fg(Rgb::new(90, 200, 90)).on(BOARD_BG);
        let head = CellStyle::fg(Rgb::new(160, 255, 160)).on(BOARD_BG).bold();
        for (i, cell) in snap.snake.iter().enumerate().rev() {
            let style = if i == 0 { head } else { body };
            plot(fb, cell.x, cell.y, '█', style);
        }

        let panel_x = start_x + frame_w + 2;
        self.draw_side_panel(fb, snap, panel_x, start_y, t);

        let mid = start_y + frame_h / 2;
        let center = |fb: &mut FrameBuffer, y: u16, s: &str, style: CellStyle| {
            let w = s.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(w) / 2;
            fb.put_str(x, y, s, style);
        };
        match snap.mode {
            ModeTag::Paused => center(fb, mid, t("paused"), HEADING),
            ModeTag::GameOver => {
                let mut y = mid.saturating_sub(4);
                center(fb, y, t("game_over"), BAD);
                y += 2;
                let lines = [
                    format!("{}: {}", t("final_score"), snap.score),
                    format!("{}: {}", t("level"), snap.level),
                    format!("{}: {}", t("best_streak"), snap.best_streak),
                ];
                for line in &lines {
                    center(fb, y, line, TEXT);
                    y += 1;
                }
                if let Some(acc) = snap.accuracy {
                    center(fb, y, &format!("{}: {acc:.1}%", t("accuracy")), TEXT);
                    y += 1;
                }
                y += 1;
                center(fb, y, t("play_again"), GOOD);
                center(fb, y + 1, t("quit"), BAD);
            }
            _ => {}
        }
    }

    fn draw_side_panel<'a>(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        x: u16,
        start_y: u16,
        t: &impl Fn(&'static str) -> &'a str,
    ) {
        if x >= fb.width() {
            return;
        }
        let mut y = start_y;
        for (key, value) in [
            ("score", snap.score),
            ("level", snap.level),
            ("streak", snap.streak),
        ] {
            fb.put_str(x, y, t(key), HEADING);
            fb.put_u32(x, y + 1, value, TEXT);
            y += 3;
        }
        if let Some(acc) = snap.accuracy {
            fb.put_str(x, y, t("accuracy"), HEADING);
            fb.put_str(x, y + 1, &format!("{acc:.1}%"), TEXT);
            y += 3;
        }

        if let Some(q) = &snap.question {
            fb.put_str(x, y, t("question"), HEADING);
            fb.put_str(x, y + 1, q.prompt(), TEXT);
            y += 3;
            for (i, option) in q.options().iter().enumerate() {
                let line = format!("{}. {option}", i + 1);
                fb.put_str(x, y, &line, TEXT);
                y += 1;
            }
            y += 1;
            fb.put_str(x, y, t("answer_instruction"), HINT);
            y += 2;
        }
        match snap.last_answer {
            Some(true) => {
                fb.put_str(x, y, t("correct"), GOOD);
            }
            Some(false) => {
                fb.put_str(x, y, t("wrong"), BAD);
            }
            None => {}
        }
    }

    fn draw_categories<'a>(&self, fb: &mut FrameBuffer, t: &impl Fn(&'static str) -> &'a str) {
        let mut y = fb.height() / 4;
        fb.put_str_centered(y, t("category_select"), HEADING);
        y += 3;
        fb.put_str_centered(y, &format!("1. {}", t("education_games")), GOOD);
        fb.put_str_centered(y + 1, t("education_desc"), TEXT);
        y += 4;
        fb.put_str_centered(y, &format!("2. {}", t("arcade_games")), TITLE);
        fb.put_str_centered(y + 1, t("arcade_desc"), TEXT);
        y += 4;
        fb.put_str_centered(y, t("select_instruction"), HEADING);
        fb.put_str_centered(y + 2, t("resume_hint"), HINT);
    }

    fn draw_game_list<'a>(
        &self,
        fb: &mut FrameBuffer,
        title: &str,
        names: &[&str],
        t: &impl Fn(&'static str) -> &'a str,
    ) {
        let mut y = fb.height() / 4;
        fb.put_str_centered(y, title, HEADING);
        y += 3;
        for (i, name) in names.iter().enumerate() {
            fb.put_str_centered(y, &format!("{}. {name}", i + 1), TEXT);
            y += 2;
        }
        fb.put_str_centered(y + 1, t("back"), HINT);
    }

    fn draw_education<'a>(
        &self,
        fb: &mut FrameBuffer,
        game: &EducationGame,
        t: &impl Fn(&'static str) -> &'a str,
    ) {
        let mut y = fb.height() / 4;
        fb.put_str_centered(y, t(game.kind().key()), TITLE);
        y += 2;
        fb.put_str_centered(y, &format!("{}: {}", t("score"), game.score()), TEXT);
        y += 3;
        let challenge = game.challenge();
        fb.put_str_centered(y, &challenge.prompt, HEADING);
        y += 2;
        fb.put_str_centered(y, &format!("{}: {}_", t("your_answer"), challenge.input), TEXT);
        y += 2;
        match game.feedback() {
            Some(Feedback::Correct) => fb.put_str_centered(y, t("correct"), GOOD),
            Some(Feedback::Wrong) => fb.put_str_centered(y, t("wrong"), BAD),
            None => {}
        }
        y += 3;
        fb.put_str_centered(y, t("type_answer"), HINT);
        fb.put_str_centered(y + 1, t("leave"), HINT);
    }

    fn draw_arcade<'a>(
        &self,
        fb: &mut FrameBuffer,
        game: &ArcadeGame,
        t: &impl Fn(&'static str) -> &'a str,
    ) {
        fb.put_str_centered(0, t(game.kind().key()), TITLE);
        let mut status = format!("{}: {}", t("score"), game.score());
        if let ArcadeGame::ZombieDash(dash) = game {
            status.push_str(&format!("   {}: {}", t("health"), dash.health()));
        }
        fb.put_str_centered(1, &status, TEXT);

        if let ArcadeGame::TicTacToe(ttt) = game {
            self.draw_tic_tac_toe(fb, ttt, t);
            return;
        }

        let cols = self.arena_cols.min(fb.width().saturating_sub(2));
        let rows = self.arena_rows.min(fb.height().saturating_sub(6));
        let ox = fb.width().saturating_sub(cols + 2) / 2;
        let oy = 3;
        fb.draw_border(ox, oy, cols + 2, rows + 2, BORDER);

        let plot = |fb: &mut FrameBuffer, p: Point, ch: char, style: CellStyle| {
            if cols == 0 || rows == 0 {
                return;
            }
            let cx = ((p.x / ARENA_WIDTH) * cols as f32).floor();
            let cy = ((p.y / ARENA_HEIGHT) * rows as f32).floor();
            if cx < 0.0 || cy < 0.0 {
                return;
            }
            let cx = (cx as u16).min(cols - 1);
            let cy = cy as u16;
            if cy < rows {
                fb.put_char(ox + 1 + cx, oy + 1 + cy, ch, style);
            }
        };

        let player = CellStyle::fg(Rgb::new(120, 200, 255)).bold();
        let hostile = CellStyle::fg(Rgb::new(230, 90, 90));
        let neutral = CellStyle::fg(Rgb::new(240, 220, 80));
        match game {
            ArcadeGame::SpaceShooter(g) => {
                for &e in g.enemies() {
                    plot(fb, e, 'V', hostile);
                }
                for &b in g.bullets() {
                    plot(fb, b, '|', neutral);
                }
                plot(fb, g.player(), 'A', player);
            }
            ArcadeGame::CarRacing(g) => {
                let lane = CellStyle::fg(Rgb::new(90, 90, 90));
                let phase = (g.road_offset() / 25.0) as u16 % 2;
                for row in 0..rows {
                    if row % 2 == phase {
                        fb.put_char(ox + 1 + cols / 2, oy + 1 + row, '┊', lane);
                    }
                }
                for &o in g.obstacles() {
                    plot(fb, o, '#', hostile);
                }
                plot(fb, g.car(), 'H', player);
            }
            ArcadeGame::ZombieDash(g) => {
                for &z in g.zombies() {
                    plot(fb, z, 'Z', hostile);
                }
                plot(fb, g.player(), '@', player);
            }
            ArcadeGame::BallRun(g) => {
                for &o in g.obstacles() {
                    plot(fb, o, '▲', hostile);
                }
                plot(fb, g.ball(), 'O', neutral);
            }
            ArcadeGame::TicTacToe(_) => {}
        }

        let y = oy + rows + 3;
        if game.finished() {
            fb.put_str_centered(y, t("crashed"), BAD);
        }
        fb.put_str_centered(y + 1, t("leave"), HINT);
    }

    fn draw_tic_tac_toe<'a>(
        &self,
        fb: &mut FrameBuffer,
        ttt: &TicTacToe,
        t: &impl Fn(&'static str) -> &'a str,
    ) {
        let top = 4;
        for row in 0..3u16 {
            let mut line = String::with_capacity(16);
            for col in 0..3u16 {
                let idx = (row * 3 + col) as usize;
                let ch = match ttt.squares()[idx] {
                    Some(mark) => mark.as_char(),
                    None => char::from(b'1' + idx as u8),
                };
                line.push(' ');
                line.push(ch);
                line.push(' ');
                if col < 2 {
                    line.push('│');
                }
            }
            fb.put_str_centered(top + row * 2, &line, TEXT);
            if row < 2 {
                fb.put_str_centered(top + row * 2 + 1, "───┼───┼───", BORDER);
            }
        }

        let y = top + 7;
        match ttt.outcome() {
            Some(TicTacToeOutcome::Winner(mark)) => {
                fb.put_str_centered(y, &format!("{} {}", mark.as_char(), t("ttt_wins")), GOOD);
                fb.put_str_centered(y + 1, t("ttt_again"), HINT);
            }
            Some(TicTacToeOutcome::Tie) => {
                fb.put_str_centered(y, t("ttt_tie"), HEADING);
                fb.put_str_centered(y + 1, t("ttt_again"), HINT);
            }
            None => {
                fb.put_str_centered(
                    y,
                    &format!("{}: {}", t("ttt_turn"), ttt.to_move().as_char()),
                    HINT,
                );
                fb.put_str_centered(y + 1, t("ttt_hint"), HINT);
            }
        }
        fb.put_str_centered(y + 3, t("leave"), HINT);
    }
}
