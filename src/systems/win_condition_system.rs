// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::{GameState, GameStatus};
use crate::logic::rules::{check_win_condition, has_valid_moves};
use crate::system::System;
use crate::world::World;

/// ゲームの勝利条件と「詰み」をチェックするシステムだよ！🏆
///
/// 卓が変わるたびに走らせて、`GameState` を書き換える。
/// - 全組札が K まで → Won
/// - 場に打てる手がない → Stuck (山札をめくれば戻るかも)
/// - それ以外 → Playing
#[derive(Debug, Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 今の卓から GameState を計算する（書き換えはしない）。
    pub fn evaluate(&self, world: &World) -> GameState {
        if check_win_condition(world) {
            return GameState { status: GameStatus::Won, has_valid_moves: false };
        }
        let has_valid_moves = has_valid_moves(world);
        let status = if has_valid_moves { GameStatus::Playing } else { GameStatus::Stuck };
        GameState { status, has_valid_moves }
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World) {
        let previous = world.game_state();
        let next = self.evaluate(world);

        if previous.status != next.status {
            match next.status {
                GameStatus::Won => info!("WinConditionSystem: all foundations complete, game won!"),
                GameStatus::Stuck => info!("WinConditionSystem: no more valid moves. Draw more cards or restart."),
                GameStatus::Playing => info!("WinConditionSystem: moves available again."),
            }
        }
        world.set_game_state(next);
    }
}
