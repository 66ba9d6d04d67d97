//! Property tests over random move sequences.

use proptest::prelude::*;

use tictactoe_duel::{
    Cell, GameSession, Marker, PlayerId, Roster, RoundOutcome, SessionError, SessionState,
};

fn started() -> (Roster, GameSession, PlayerId, PlayerId) {
    let mut roster = Roster::new();
    let x = roster.create_player("X-player", "x.gif").expect("valid");
    let o = roster.create_player("O-player", "o.gif").expect("valid");
    let mut session = GameSession::new();
    session.start(&mut roster, x, o).expect("valid setup");
    (roster, session, x, o)
}

proptest! {
    #[test]
    fn prop_every_call_has_one_outcome(moves in prop::collection::vec(0usize..9, 1..40)) {
        let (mut roster, mut session, x, o) = started();

        for index in moves {
            let before = session.board().clone();
            let active = session.active_player();

            match session.play_round(&mut roster, index) {
                Ok(RoundOutcome::Invalid { position }) => {
                    prop_assert_eq!(position.index(), index);
                    prop_assert_eq!(session.board(), &before);
                    prop_assert_eq!(session.active_player(), active);
                }
                Ok(RoundOutcome::Next { player, .. }) => {
                    prop_assert_eq!(session.state(), SessionState::InProgress);
                    prop_assert!(Some(player) != active);
                    prop_assert!(player == x || player == o);
                }
                Ok(RoundOutcome::Win { player, marker }) => {
                    prop_assert_eq!(session.board().check_winner(), Some(marker));
                    prop_assert_eq!(Some(player), active);
                }
                Ok(RoundOutcome::Tie { .. }) => {
                    prop_assert!(session.board().is_tie());
                }
                Err(e) => {
                    prop_assert_eq!(e, SessionError::NotInProgress);
                    prop_assert!(matches!(session.state(), SessionState::Finished(_)));
                    prop_assert_eq!(session.board(), &before);
                }
            }

            // Marked cells never change within a game.
            for (old, new) in before.cells().iter().zip(session.board().cells()) {
                if *old != Cell::Empty {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }

    #[test]
    fn prop_marker_counts_stay_balanced(moves in prop::collection::vec(0usize..9, 1..20)) {
        let (mut roster, mut session, _, _) = started();
        for index in moves {
            if session.play_round(&mut roster, index).is_err() {
                break;
            }
            let count = |m: Marker| session.board().cells().iter().filter(|c| **c == Cell::Marked(m)).count();
            let (xs, os) = (count(Marker::X), count(Marker::O));
            prop_assert!(xs == os || xs == os + 1);
        }
    }

    #[test]
    fn prop_stats_total_matches_decided_games(games in prop::collection::vec(prop::collection::vec(0usize..9, 9..30), 1..6)) {
        let (mut roster, mut session, x, o) = started();
        let mut decided = 0u32;

        for moves in games {
            session.start(&mut roster, x, o).expect("valid setup");
            for index in moves {
                match session.play_round(&mut roster, index) {
                    Ok(RoundOutcome::Win { .. }) => { decided += 1; break; }
                    Ok(RoundOutcome::Tie { .. }) | Err(_) => break,
                    Ok(_) => {}
                }
            }
        }

        let wins: u32 = roster.iter().map(|(_, p)| *p.stats().wins()).sum();
        let losses: u32 = roster.iter().map(|(_, p)| *p.stats().losses()).sum();
        prop_assert_eq!(wins, decided);
        prop_assert_eq!(losses, decided);
    }

    #[test]
    fn prop_check_winner_is_idempotent(moves in prop::collection::vec(0usize..9, 0..12)) {
        let (mut roster, mut session, _, _) = started();
        for index in moves {
            let _ = session.play_round(&mut roster, index);
        }
        let board = session.board();
        prop_assert_eq!(board.check_winner(), board.check_winner());
    }
}
