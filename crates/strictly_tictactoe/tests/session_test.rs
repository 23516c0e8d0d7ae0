//! Tests for the human-vs-computer session controller.

use strictly_tictactoe::{
    Board, Chooser, InvalidMoveKind, Match, Phase, Player, Position, RoundResult, Side, Square,
    Status, Tier, Transition,
};

/// Always takes the first candidate.
struct First;

impl Chooser for First {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

fn human(session: &mut Match, cell: usize) -> Transition {
    session
        .play_human(cell)
        .unwrap_or_else(|e| panic!("human move {cell} rejected: {e}"))
}

fn opponent(session: &mut Match) -> (Position, Tier, Transition) {
    let reply = session.play_opponent(&mut First).expect("computer to move");
    (reply.position, reply.tier, reply.transition)
}

/// Human plays 0, 1, 3; the computer takes the center, blocks at 2 and
/// wins on the 2-4-6 diagonal.
fn lose_a_round(session: &mut Match) {
    assert_eq!(human(session, 0), Transition::OpponentToMove);
    assert_eq!(
        opponent(session),
        (Position::Center, Tier::Center, Transition::HumanToMove)
    );
    assert_eq!(human(session, 1), Transition::OpponentToMove);
    assert_eq!(
        opponent(session),
        (Position::TopRight, Tier::Block, Transition::HumanToMove)
    );
    assert_eq!(human(session, 3), Transition::OpponentToMove);
    assert_eq!(
        opponent(session),
        (
            Position::BottomLeft,
            Tier::Win,
            Transition::RoundOver(RoundResult::Winner(Side::Opponent))
        )
    );
}

#[test]
fn test_new_match_awaits_human() {
    let session = Match::new();
    let snapshot = session.snapshot();
    assert_eq!(session.phase(), Phase::AwaitingHuman);
    assert_eq!(snapshot.board, Board::new());
    assert_eq!(snapshot.status, Status::HumanToMove);
    assert_eq!(snapshot.status.to_string(), "Your turn (X)");
    assert_eq!(snapshot.scores.player(), 0);
    assert_eq!(snapshot.scores.opponent(), 0);
}

#[test]
fn test_human_move_hands_turn_to_opponent() {
    let mut session = Match::new();
    assert_eq!(human(&mut session, 4), Transition::OpponentToMove);
    assert_eq!(session.phase(), Phase::AwaitingOpponent);
    assert_eq!(session.status().to_string(), "AI is thinking...");
    assert_eq!(
        session.snapshot().board.get(4),
        Some(Square::Occupied(Player::X))
    );
}

#[test]
fn test_input_refused_while_opponent_to_move() {
    let mut session = Match::new();
    human(&mut session, 0);
    let board = session.snapshot().board;

    let err = session.play_human(8).expect_err("opponent's turn");
    assert_eq!(err.kind(), InvalidMoveKind::NotYourTurn(Player::X));
    assert_eq!(session.snapshot().board, board);
    assert_eq!(session.phase(), Phase::AwaitingOpponent);
}

#[test]
fn test_occupied_cell_refused() {
    let mut session = Match::new();
    human(&mut session, 0);
    opponent(&mut session);

    let err = session.play_human(4).expect_err("center taken by the computer");
    assert_eq!(err.kind(), InvalidMoveKind::Occupied(4));
    assert_eq!(session.phase(), Phase::AwaitingHuman);
}

#[test]
fn test_opponent_refuses_out_of_turn() {
    let mut session = Match::new();
    assert!(session.play_opponent(&mut First).is_none());
    assert_eq!(session.snapshot().board, Board::new());
}

#[test]
fn test_opponent_win_is_scored() {
    let mut session = Match::new();
    lose_a_round(&mut session);

    assert_eq!(session.phase(), Phase::RoundOver);
    assert_eq!(session.status(), Status::Won(Side::Opponent));
    assert_eq!(session.status().to_string(), "AI wins!");
    assert_eq!(session.scores().opponent(), 1);

    let err = session.play_human(5).expect_err("round over");
    assert_eq!(err.kind(), InvalidMoveKind::RoundOver);
}

#[test]
fn test_two_opponent_wins_count_twice() {
    let mut session = Match::new();
    lose_a_round(&mut session);
    session.restart();
    lose_a_round(&mut session);

    assert_eq!(session.scores().opponent(), 2);
    assert_eq!(session.scores().player(), 0);
}

#[test]
fn test_fork_beats_the_heuristic() {
    let mut session = Match::new();
    human(&mut session, 0);
    assert_eq!(opponent(&mut session).0, Position::Center);
    human(&mut session, 8);
    // No threats yet: first free corner.
    assert_eq!(
        opponent(&mut session),
        (Position::TopRight, Tier::Corner, Transition::HumanToMove)
    );
    // Blocking 6 also forks 3 and 7.
    human(&mut session, 6);
    assert_eq!(
        opponent(&mut session),
        (Position::MiddleLeft, Tier::Block, Transition::HumanToMove)
    );
    assert_eq!(
        human(&mut session, 7),
        Transition::RoundOver(RoundResult::Winner(Side::Human))
    );

    assert_eq!(session.status().to_string(), "Player X wins!");
    assert_eq!(session.scores().player(), 1);
    assert_eq!(session.scores().opponent(), 0);
}

#[test]
fn test_restart_keeps_scores_and_clears_board() {
    let mut session = Match::new();
    lose_a_round(&mut session);
    session.restart();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.board, Board::new());
    assert_eq!(snapshot.status, Status::HumanToMove);
    assert_eq!(snapshot.scores.opponent(), 1);
    assert_eq!(session.state().turn(), Player::X);
}

#[test]
fn test_reset_scores() {
    let mut session = Match::new();
    lose_a_round(&mut session);
    session.reset_scores();

    assert_eq!(session.scores().opponent(), 0);
    // The finished round stays finished.
    assert_eq!(session.phase(), Phase::RoundOver);
}

#[test]
fn test_draw_round() {
    let mut session = Match::new();
    // X 4, O takes the first corner, X 2, O blocks 6, X 3, O blocks 5,
    // X 7, O blocks 1, X 8 fills the board.
    let script = [
        (4, Position::TopLeft),
        (2, Position::BottomLeft),
        (3, Position::MiddleRight),
        (7, Position::TopCenter),
    ];
    for (cell, expected) in script {
        assert_eq!(human(&mut session, cell), Transition::OpponentToMove);
        assert_eq!(opponent(&mut session).0, expected);
    }
    assert_eq!(
        human(&mut session, 8),
        Transition::RoundOver(RoundResult::Draw)
    );
    assert_eq!(session.status(), Status::Draw);
    assert_eq!(session.status().to_string(), "Game ended in a draw!");
    assert_eq!(session.scores().player(), 0);
    assert_eq!(session.scores().opponent(), 0);
}
