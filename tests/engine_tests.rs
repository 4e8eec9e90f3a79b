use tictactoe::{Cell, GameEngine, MoveError, Phase, Player, BOARD_SIZE};

/// Apply a move sequence, alternating players starting with X.
fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(r, c) in moves {
        let player = engine.state().current_player;
        engine.apply_move(r, c, player).unwrap();
    }
}

#[test]
fn fresh_engine_state() {
    let engine = GameEngine::new();
    let state = engine.state();
    assert_eq!(state.current_player, Player::X);
    assert_eq!(state.phase, Phase::InProgress);
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_eq!(state.board.cell(r, c).unwrap(), Cell::Empty);
        }
    }
}

#[test]
fn successful_move_returns_updated_snapshot() {
    let mut engine = GameEngine::new();
    let state = engine.apply_move(1, 1, Player::X).unwrap();
    assert_eq!(state.board.cell(1, 1).unwrap(), Cell::Mark(Player::X));
    assert_eq!(state.current_player, Player::O);
    assert_eq!(state.phase, Phase::InProgress);
    // the returned snapshot is the same state a later query sees
    assert_eq!(state, engine.state());
}

#[test]
fn out_of_bounds_is_rejected_unchanged() {
    let mut engine = GameEngine::new();
    let before = engine.state();
    assert_eq!(
        engine.apply_move(3, 0, Player::X).unwrap_err(),
        MoveError::OutOfBounds
    );
    assert_eq!(
        engine.apply_move(0, 17, Player::X).unwrap_err(),
        MoveError::OutOfBounds
    );
    assert_eq!(engine.state(), before);
}

#[test]
fn occupied_cell_is_rejected_unchanged() {
    let mut engine = GameEngine::new();
    engine.apply_move(0, 0, Player::X).unwrap();
    let before = engine.state();
    assert_eq!(
        engine.apply_move(0, 0, Player::O).unwrap_err(),
        MoveError::CellOccupied
    );
    assert_eq!(engine.state(), before);
}

#[test]
fn wrong_player_is_rejected_unchanged() {
    let mut engine = GameEngine::new();
    let before = engine.state();
    assert_eq!(
        engine.apply_move(0, 0, Player::O).unwrap_err(),
        MoveError::NotYourTurn
    );
    assert_eq!(engine.state(), before);
}

#[test]
fn stale_request_after_turn_switch() {
    // X marks (0,0), then tries again before O moves. Occupancy is checked
    // before turn ownership, so the same cell reports CellOccupied; a free
    // cell reports NotYourTurn.
    let mut engine = GameEngine::new();
    engine.apply_move(0, 0, Player::X).unwrap();
    assert_eq!(
        engine.apply_move(0, 0, Player::X).unwrap_err(),
        MoveError::CellOccupied
    );
    assert_eq!(
        engine.apply_move(1, 1, Player::X).unwrap_err(),
        MoveError::NotYourTurn
    );
}

#[test]
fn top_row_win_for_x() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2)]);
    let state = engine.apply_move(0, 2, Player::X).unwrap();
    assert_eq!(state.phase, Phase::Won(Player::X));
    // no turn switch after a winning move
    assert_eq!(state.current_player, Player::X);
}

#[test]
fn full_board_without_line_is_drawn() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (2, 1),
            (1, 2),
            (2, 0),
        ],
    );
    let state = engine.apply_move(2, 2, Player::X).unwrap();
    assert_eq!(state.phase, Phase::Drawn);
    assert_eq!(state.current_player, Player::X);
    assert!(state.board.is_full());
    assert!(!state.board.has_win());
}

#[test]
fn moves_after_game_over_are_rejected() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(engine.state().phase, Phase::Won(Player::X));
    let before = engine.state();

    // every follow-up is rejected with GameAlreadyOver, even ones that would
    // otherwise be out of bounds or on occupied cells
    assert_eq!(
        engine.apply_move(2, 0, Player::O).unwrap_err(),
        MoveError::GameAlreadyOver
    );
    assert_eq!(
        engine.apply_move(9, 9, Player::O).unwrap_err(),
        MoveError::GameAlreadyOver
    );
    assert_eq!(
        engine.apply_move(0, 0, Player::X).unwrap_err(),
        MoveError::GameAlreadyOver
    );
    assert_eq!(engine.state(), before);
}

#[test]
fn reset_restores_fresh_state() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert!(engine.state().phase.is_terminal());

    let state = engine.reset();
    assert_eq!(state, GameEngine::new().state());
    assert_eq!(state.current_player, Player::X);
    assert_eq!(state.phase, Phase::InProgress);

    // the engine accepts moves again after reset
    engine.apply_move(2, 2, Player::X).unwrap();
}

#[test]
fn column_and_diagonal_wins() {
    // left column for X
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (0, 1), (1, 0), (0, 2)]);
    let state = engine.apply_move(2, 0, Player::X).unwrap();
    assert_eq!(state.phase, Phase::Won(Player::X));

    // main diagonal for O
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 1), (0, 0), (0, 2), (1, 1), (1, 0)]);
    let state = engine.apply_move(2, 2, Player::O).unwrap();
    assert_eq!(state.phase, Phase::Won(Player::O));
}

#[test]
fn win_on_final_cell_is_a_win_not_a_draw() {
    // board fills completely on a move that also completes a line
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (2, 0),
            (1, 0),
            (2, 1),
            (1, 2),
        ],
    );
    assert_eq!(engine.state().phase, Phase::InProgress);
    let state = engine.apply_move(2, 2, Player::X).unwrap();
    assert!(state.board.is_full());
    assert_eq!(state.phase, Phase::Won(Player::X));
}
