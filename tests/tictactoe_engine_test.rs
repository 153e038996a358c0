//! Tests for the round engine: rules, turn order, score, and move log.

use tictactoe_tally::{
    Board, Cell, EngineError, GameEngine, GameResult, LogEntry, Mark, Mode, Move, RoundPhase,
    TRIPLES, check_win, is_full,
};

fn play(engine: &mut GameEngine, moves: &[(usize, Mark)]) -> Option<GameResult> {
    let mut last = None;
    for &(cell, mark) in moves {
        last = engine.place_mark(cell, mark).expect("Valid move");
    }
    last
}

fn human_round() -> GameEngine {
    let mut engine = GameEngine::with_seed(1);
    engine.start(Mode::VsHuman);
    engine
}

const X_TOP_ROW: [(usize, Mark); 5] = [
    (0, Mark::X),
    (3, Mark::O),
    (1, Mark::X),
    (4, Mark::O),
    (2, Mark::X),
];

const O_LEFT_COLUMN: [(usize, Mark); 6] = [
    (1, Mark::X),
    (0, Mark::O),
    (2, Mark::X),
    (3, Mark::O),
    (8, Mark::X),
    (6, Mark::O),
];

// X O X / X O O / O X X
const DRAW: [(usize, Mark); 9] = [
    (0, Mark::X),
    (1, Mark::O),
    (2, Mark::X),
    (4, Mark::O),
    (3, Mark::X),
    (5, Mark::O),
    (7, Mark::X),
    (6, Mark::O),
    (8, Mark::X),
];

#[test]
fn test_every_triple_is_a_win() {
    for triple in TRIPLES {
        for mark in [Mark::X, Mark::O] {
            let mut cells = [Cell::Empty; 9];
            for index in triple {
                cells[index] = Cell::Occupied(mark);
            }
            let board = Board::from_cells(cells);
            assert!(check_win(&board, mark), "{:?} should win on {:?}", mark, triple);
            assert!(!check_win(&board, mark.opponent()));
        }
    }
}

#[test]
fn test_full_iff_no_empty_cells() {
    let mut engine = human_round();
    for (n, &(cell, mark)) in DRAW.iter().enumerate() {
        assert!(!engine.is_draw());
        assert!(!is_full(engine.board()));
        engine.place_mark(cell, mark).unwrap();
        assert_eq!(engine.is_draw(), n == DRAW.len() - 1);
    }
}

#[test]
fn test_x_wins_top_row() {
    let mut engine = human_round();
    assert_eq!(engine.score().x_wins(), 0);

    let outcome = play(&mut engine, &X_TOP_ROW);

    assert_eq!(outcome, Some(GameResult::Winner(Mark::X)));
    assert!(engine.check_win(Mark::X));
    assert_eq!(engine.phase(), RoundPhase::Ended(GameResult::Winner(Mark::X)));
    assert_eq!(engine.score().x_wins(), 1);
    assert_eq!(engine.score().o_wins(), 0);
    assert_eq!(
        engine.move_log().last(),
        Some(&LogEntry::Result {
            outcome: GameResult::Winner(Mark::X)
        })
    );
}

#[test]
fn test_draw_leaves_score_alone() {
    let mut engine = human_round();
    let outcome = play(&mut engine, &DRAW);

    assert_eq!(outcome, Some(GameResult::Draw));
    assert!(!engine.check_win(Mark::X));
    assert!(!engine.check_win(Mark::O));
    assert!(engine.is_draw());
    assert_eq!(engine.score().x_wins(), 0);
    assert_eq!(engine.score().o_wins(), 0);
    assert_eq!(engine.status_message().as_deref(), Some("Draw!"));
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    // X completes the 0-4-8 diagonal with the ninth mark.
    let mut engine = human_round();
    let outcome = play(
        &mut engine,
        &[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::O),
            (7, Mark::X),
            (6, Mark::O),
            (8, Mark::X),
        ],
    );
    assert!(engine.is_draw());
    assert_eq!(outcome, Some(GameResult::Winner(Mark::X)));
    assert_eq!(engine.score().x_wins(), 1);
}

#[test]
fn test_move_log_records_moves_then_result() {
    let mut engine = human_round();
    play(&mut engine, &X_TOP_ROW);

    let log = engine.move_log();
    assert_eq!(log.len(), 6);
    let moves: Vec<Move> = log.iter().filter_map(LogEntry::as_move).copied().collect();
    let expected: Vec<Move> = X_TOP_ROW.iter().map(|&(cell, mark)| Move::new(cell, mark)).collect();
    assert_eq!(moves, expected);
    assert_eq!(log.iter().filter(|e| e.as_result().is_some()).count(), 1);
}

#[test]
fn test_moves_after_end_rejected() {
    let mut engine = human_round();
    play(&mut engine, &X_TOP_ROW);

    assert_eq!(engine.place_mark(8, Mark::O), Err(EngineError::RoundAlreadyEnded));
    assert_eq!(engine.move_log().len(), 6);
    assert_eq!(engine.score().x_wins(), 1);
}

#[test]
fn test_failed_moves_change_nothing() {
    let mut engine = human_round();
    engine.place_mark(4, Mark::X).unwrap();
    let before = engine.clone();

    assert_eq!(engine.place_mark(4, Mark::O), Err(EngineError::InvalidMove(4)));
    assert_eq!(engine.place_mark(0, Mark::X), Err(EngineError::WrongTurn(Mark::X)));
    assert_eq!(engine.place_mark(12, Mark::O), Err(EngineError::CellOutOfRange(12)));

    assert_eq!(engine.board(), before.board());
    assert_eq!(engine.move_log(), before.move_log());
    assert_eq!(engine.turn(), before.turn());
}

#[test]
fn test_score_carries_across_rounds() {
    let mut engine = human_round();
    play(&mut engine, &X_TOP_ROW);
    engine.start(Mode::VsHuman);
    play(&mut engine, &O_LEFT_COLUMN);
    engine.start(Mode::VsComputer);

    assert_eq!(engine.score().x_wins(), 1);
    assert_eq!(engine.score().o_wins(), 1);
    assert!(engine.move_log().is_empty());
    assert_eq!(engine.board(), &Board::new());
}

#[test]
fn test_reset_score_leaves_round_alone() {
    let mut engine = human_round();
    play(&mut engine, &X_TOP_ROW);
    engine.start(Mode::VsHuman);
    play(&mut engine, &X_TOP_ROW);
    engine.start(Mode::VsHuman);
    play(&mut engine, &O_LEFT_COLUMN);
    assert_eq!((engine.score().x_wins(), engine.score().o_wins()), (2, 1));

    engine.start(Mode::VsHuman);
    play(&mut engine, &[(4, Mark::X), (0, Mark::O)]);
    let board = engine.board().clone();
    let log = engine.move_log().to_vec();

    engine.reset_score();

    assert_eq!((engine.score().x_wins(), engine.score().o_wins()), (0, 0));
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.move_log(), log.as_slice());
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.phase(), RoundPhase::InProgress);
}

#[test]
fn test_computer_plays_o_against_x() {
    let mut engine = GameEngine::with_seed(2024);
    engine.start(Mode::VsComputer);
    assert!(!engine.is_computer_turn());

    while engine.phase() == RoundPhase::InProgress {
        let cell = engine.open_cells()[0];
        if engine.place_mark(cell, Mark::X).unwrap().is_some() {
            break;
        }
        let (cell, _) = engine.play_computer_turn().unwrap();
        assert_eq!(engine.board().get(cell), Some(Cell::Occupied(Mark::O)));
    }
    assert!(engine.outcome().is_some());
}

#[test]
fn test_no_moves_on_full_board() {
    let mut engine = human_round();
    play(&mut engine, &DRAW);
    assert_eq!(engine.computer_choose_move(), Err(EngineError::NoMovesAvailable));
}

#[test]
fn test_replay() {
    let moves: Vec<Move> = X_TOP_ROW.iter().map(|&(cell, mark)| Move::new(cell, mark)).collect();
    let engine = GameEngine::replay(&moves).expect("Valid replay");
    assert_eq!(engine.outcome(), Some(GameResult::Winner(Mark::X)));

    let partial = GameEngine::replay(&moves[..3]).expect("Valid replay");
    assert_eq!(partial.phase(), RoundPhase::InProgress);
    assert_eq!(partial.turn(), Mark::O);

    let bad = [Move::new(0, Mark::X), Move::new(1, Mark::X)];
    assert_eq!(GameEngine::replay(&bad).unwrap_err(), EngineError::WrongTurn(Mark::X));
}
