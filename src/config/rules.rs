// src/config/rules.rs
//! 卓の形を決める定数と、ゲームごとの設定だよ！

use log::warn;
use serde::Deserialize;

pub const DECK_SIZE: usize = 52; // 標準デッキの枚数
pub const TABLEAU_COUNT: usize = 7; // 場札の列数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数
pub const DEFAULT_DRAW_COUNT: usize = 3; // 1回にめくる枚数
pub const INITIAL_TABLEAU_CARDS: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2; // 28枚

/// 1ゲーム分の設定。JSON から読めるようにしてあるよ。
///
/// ```json
/// { "seed": 42, "draw_count": 3, "auto_flip_exposed": false }
/// ```
/// 書いてないキーはデフォルト値になる。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// シャッフルの種。None なら毎回ランダム。
    pub seed: Option<u64>,
    /// 1組 (draw group) の枚数。
    pub draw_count: usize,
    /// 場札のカードを動かしたあと、下から出てきた裏向きカードを自動でめくるか。
    /// false なら `flip` コマンドを待つ。
    pub auto_flip_exposed: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_count: DEFAULT_DRAW_COUNT,
            auto_flip_exposed: false,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// ありえない値を直す。draw_count 0 だと永遠に何もめくれないので 1 にする。
    pub fn normalized(mut self) -> Self {
        if self.draw_count == 0 {
            warn!("draw_count 0 is not playable; using 1");
            self.draw_count = 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_constants() {
        assert_eq!(INITIAL_TABLEAU_CARDS, 28);
        assert_eq!(DECK_SIZE - INITIAL_TABLEAU_CARDS, 24);
    }

    #[test]
    fn config_from_json_with_defaults() {
        let config = GameConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.draw_count, DEFAULT_DRAW_COUNT);
        assert!(!config.auto_flip_exposed);

        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn zero_draw_count_is_clamped() {
        let config = GameConfig::from_json(r#"{ "draw_count": 0 }"#).unwrap();
        assert_eq!(config.draw_count, 1);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(GameConfig::from_json(r#"{ "draw_count": "three" }"#).is_err());
    }
}
