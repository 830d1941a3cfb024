//! N×N 三目並べ（tic-tac-toe）の core logic.
//!
//! このクレートは盤面と勝敗判定を管理する `engine` と、手を選択する `ai` を提供します。
//! 画面描画や入力処理は持たず、CLI（`ttt_cli`）などから利用されることを想定しています。

#![forbid(unsafe_code)]

/// 盤面・勝敗判定・対局進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
