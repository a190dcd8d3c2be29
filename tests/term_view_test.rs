//! View tests - each screen renders its key text into the framebuffer

use snake_evolution::core::{Board, Rules, Session};
use snake_evolution::term::{FrameBuffer, SessionView, Translations, Viewport};
use snake_evolution::types::{Cell, Direction, FoodReward, Intent, Subject};

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

fn render(s: &Session) -> String {
    let t = Translations::embedded().unwrap();
    text(&SessionView::default().render(&s.snapshot(), &t, Viewport::new(120, 40)))
}

fn eat_food(s: &mut Session) {
    let head = s.board().head();
    let food = Cell::new(head.x + 1, head.y);
    let board = Board::with_snake(&[head], Direction::Right, food).unwrap();
    s.set_board(board);
    s.step(200, &[]);
}

#[test]
fn test_category_screen_lists_both_categories() {
    let mut s = Session::new(1);
    s.apply_intent(Intent::Start);
    eat_food(&mut s);
    let out = render(&s);
    assert!(out.contains("1. Educational Games"), "{out}");
    assert!(out.contains("2. Arcade Games"), "{out}");
}

#[test]
fn test_sub_game_lists() {
    let mut s = Session::new(1);
    s.apply_intent(Intent::Start);
    eat_food(&mut s);
    s.apply_intent(Intent::SelectOption(1));
    assert!(render(&s).contains("1. Math Wizard"));
    s.apply_intent(Intent::Back);
    s.apply_intent(Intent::SelectOption(2));
    assert!(render(&s).contains("1. Tic-Tac-Toe"));
}

#[test]
fn test_education_screen_echoes_input() {
    let mut s = Session::new(1);
    s.apply_intent(Intent::Start);
    eat_food(&mut s);
    s.apply_intent(Intent::SelectOption(1));
    s.apply_intent(Intent::SelectOption(5));
    s.apply_intent(Intent::TypeChar('c'));
    s.apply_intent(Intent::TypeChar('a'));
    assert!(render(&s).contains("CA_"));
}

#[test]
fn test_question_panel_shows_four_options() {
    let rules = Rules {
        food_reward: FoodReward::Question,
        question_subject: Some(Subject::Math),
    };
    let mut s = Session::with_rules(3, rules);
    s.apply_intent(Intent::Start);
    eat_food(&mut s);
    let out = render(&s);
    let q = s.question().unwrap();
    assert!(out.contains(q.prompt()));
    for n in 1..=4 {
        assert!(out.contains(&format!("{n}. ")), "option {n} missing");
    }
}

#[test]
fn test_game_over_shows_final_score() {
    let mut s = Session::new(1);
    s.apply_intent(Intent::Start);
    let board = Board::with_snake(&[Cell::new(0, 0)], Direction::Up, Cell::new(5, 5)).unwrap();
    s.set_board(board);
    s.step(200, &[]);
    let out = render(&s);
    assert!(out.contains("Game Over"), "{out}");
    assert!(out.contains("Final Score: 0"), "{out}");
}

#[test]
fn test_arcade_arena_renders_player() {
    let mut s = Session::new(1);
    s.apply_intent(Intent::Start);
    eat_food(&mut s);
    s.apply_intent(Intent::SelectOption(2));
    s.apply_intent(Intent::SelectOption(4));
    assert!(render(&s).contains('@'));
}
