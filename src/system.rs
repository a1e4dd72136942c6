// src/system.rs

use crate::world::World;

/// System（システム）トレイトだよ！
///
/// 卓の状態を見て、何かを更新する仕事をひとまとめにしたもの。
/// 引数なしで「今の World に対して走らせる」タイプの仕事に使うよ。
/// (勝敗判定みたいに、毎回の変更のあとに必ず走らせたいもの)
///
/// カード移動や山札めくりみたいに、引数があって結果を返すコマンドは
/// 各システムの専用メソッドとして生やしてある。
pub trait System {
    /// このシステムを実行するよ！
    fn run(&mut self, world: &mut World);
}
