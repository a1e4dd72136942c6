// src/components/game_state.rs

use serde::{Serialize, Deserialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 場に動かせる手がない。山札をめくるか、やり直すしかない状態。
    /// 何か手が生まれたらすぐ Playing に戻るよ。
    Stuck,
    /// 勝利！🏆 全カードが組札に乗った。
    Won,
}

/// ゲーム状態。WinConditionSystem が毎回の変更のあとに書き換える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub has_valid_moves: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self { status: GameStatus::Playing, has_valid_moves: true }
    }
}
