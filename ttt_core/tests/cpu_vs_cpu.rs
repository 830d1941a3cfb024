//! 結合テスト: CPU同士の対戦が終局まで進み、minimax が負けないことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use ttt_core::ai::types::Ai;
    use ttt_core::{ai, engine};

    /// 指定した2つのAIで対局し、最終局面を返す。
    fn play_game(
        rules: engine::Rules,
        x_agent: &mut dyn Ai,
        o_agent: &mut dyn Ai,
    ) -> engine::Game {
        let mut game = engine::Game::new(3, rules)
            .unwrap_or_else(|err| panic!("3x3 game rejected: {err}"));

        // 3x3 は最大9手で終局する。
        for _turn in 0_u8..9 {
            if game.is_over() {
                break;
            }

            let side = game.side_to_move();
            let mv = match side {
                engine::Player::X => x_agent.select_move(game.board(), side),
                engine::Player::O => o_agent.select_move(game.board(), side),
                _ => Err(ai::SelectMoveError::NoLegalMove),
            };
            assert!(mv.is_ok(), "agent failed on an open board: {mv:?}");

            let square = match mv {
                Ok(value) => value,
                Err(_err) => return game,
            };
            assert!(
                game.board().empty_squares().contains(&square),
                "agent must select an empty square, got={square:?}"
            );

            let play_result = game.play(square);
            assert!(
                play_result.is_ok(),
                "play must succeed, got={play_result:?}"
            );
        }

        assert!(game.is_over(), "game did not finish within 9 plies");
        game
    }

    /// `minimax` 同士は必ず引き分けになる。
    #[test]
    fn minimax_vs_minimax_is_a_draw() {
        for rules in [engine::Rules::Standard, engine::Rules::Misere] {
            let mut x_agent = ai::minimax::Agent::new();
            let mut o_agent = ai::minimax::Agent::new();
            let game = play_game(rules, &mut x_agent, &mut o_agent);

            assert_eq!(
                game.outcome(),
                engine::Outcome::Draw,
                "rules={rules:?}\n{}",
                game.board()
            );
            assert_eq!(game.history().len(), 9);
        }
    }

    /// 自己対戦は毎回同じ棋譜になる。
    #[test]
    fn minimax_self_play_is_deterministic() {
        let mut first_x = ai::minimax::Agent::new();
        let mut first_o = ai::minimax::Agent::new();
        let mut second_x = ai::minimax::Agent::new();
        let mut second_o = ai::minimax::Agent::new();

        let first = play_game(engine::Rules::Standard, &mut first_x, &mut first_o);
        let second = play_game(engine::Rules::Standard, &mut second_x, &mut second_o);
        assert_eq!(first.history(), second.history());
        assert_eq!(
            first.history().first(),
            Some(&engine::Square::new(0, 0))
        );
    }

    /// `minimax` は `random` に負けない（先手・後手とも）。
    #[test]
    fn minimax_never_loses_to_random() {
        for seed in 0_u64..32 {
            let mut minimax = ai::minimax::Agent::new();
            let mut random = ai::random::Agent::new(seed);
            let game = play_game(engine::Rules::Standard, &mut minimax, &mut random);
            assert_ne!(
                game.outcome(),
                engine::Outcome::Win(engine::Player::O),
                "seed={seed}\n{}",
                game.board()
            );

            let mut minimax = ai::minimax::Agent::new();
            let mut random = ai::random::Agent::new(seed);
            let game = play_game(engine::Rules::Standard, &mut random, &mut minimax);
            assert_ne!(
                game.outcome(),
                engine::Outcome::Win(engine::Player::X),
                "seed={seed}\n{}",
                game.board()
            );
        }
    }

    /// 逆ルールでも `minimax` は `random` に負けない。
    #[test]
    fn minimax_never_loses_to_random_in_misere() {
        for seed in 0_u64..16 {
            let mut minimax = ai::minimax::Agent::new();
            let mut random = ai::random::Agent::new(seed);
            let game = play_game(engine::Rules::Misere, &mut random, &mut minimax);
            assert_ne!(
                game.outcome(),
                engine::Outcome::Win(engine::Player::X),
                "seed={seed}\n{}",
                game.board()
            );
        }
    }

    /// 関数そのものを AI として差し替えられる。
    #[test]
    fn plain_function_can_play() {
        let mut x_agent = ai::minimax::select_move;
        let mut o_agent = |board: &engine::Board, _player: engine::Player| {
            board
                .empty_squares()
                .last()
                .copied()
                .ok_or(ai::SelectMoveError::NoLegalMove)
        };

        let game = play_game(engine::Rules::Standard, &mut x_agent, &mut o_agent);
        assert_eq!(
            game.outcome(),
            engine::Outcome::Win(engine::Player::X),
            "\n{}",
            game.board()
        );
    }

    /// `random` 同士でも終局まで進む。
    #[test]
    fn random_vs_random_finishes() {
        for seed in 0_u64..8 {
            let mut x_agent = ai::random::Agent::new(seed);
            let mut o_agent = ai::random::Agent::new(seed.wrapping_add(1));
            let game = play_game(engine::Rules::Standard, &mut x_agent, &mut o_agent);
            assert!(game.outcome().is_over());
        }
    }

    /// 埋まった盤面で AI を呼ぶのは呼び出し側の誤り。
    #[test]
    fn provider_rejects_full_board() {
        let grid = [
            [engine::Cell::X, engine::Cell::O, engine::Cell::X],
            [engine::Cell::O, engine::Cell::O, engine::Cell::X],
            [engine::Cell::X, engine::Cell::X, engine::Cell::O],
        ];
        let board = engine::Board::from_grid(3, &grid)
            .unwrap_or_else(|err| panic!("valid grid rejected: {err}"));
        assert_eq!(board.outcome(), engine::Outcome::Draw);
        assert_eq!(
            ai::minimax::select_move(&board, engine::Player::O),
            Err(ai::SelectMoveError::NoLegalMove)
        );
    }
}
