// src/app/game_app.rs

use log::{error, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use crate::app::engine::SolitaireEngine;
use crate::components::stack::StackType;
use crate::config::GameConfig;
use crate::protocol::EngineCommand;

/// JavaScript から使うためのラッパーだよ！🌐
///
/// 中身は `SolitaireEngine` をそのまま持ってるだけ。
/// カードは "HA" みたいなトークンで受け取って、結果は全部 JSON 文字列で返す。
/// 描画やアニメーション (カードを1枚ずつめくる演出とか) は JS 側のお仕事。
#[wasm_bindgen]
pub struct GameApp {
    engine: SolitaireEngine,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: Initializing with default config...");
        GameApp { engine: SolitaireEngine::default() }
    }

    /// JSON の設定からアプリを作る。`{"draw_count": 1}` みたいに一部だけでもOK。
    pub fn with_config(config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(|e| {
            let error_msg = format!("Failed to parse game config: {}", e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })?;
        info!("GameApp: Initializing with {:?}", config);
        Ok(GameApp { engine: SolitaireEngine::new(config) })
    }

    /// 新しいゲームを配って、卓のスナップショットを JSON で返す。
    pub fn new_game(&mut self, seed: Option<u64>) -> Result<String, JsValue> {
        let snapshot = self.engine.new_game(seed);
        to_json(&snapshot)
    }

    pub fn draw(&mut self) -> Result<String, JsValue> {
        self.send(EngineCommand::Draw)
    }

    /// `destination_json` は `{"Tableau":3}` や `{"Foundation":0}` の形。
    pub fn move_card(&mut self, card: &str, destination_json: &str) -> Result<String, JsValue> {
        let destination: StackType = serde_json::from_str(destination_json).map_err(|e| {
            let error_msg = format!("Failed to parse destination {:?}: {}", destination_json, e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })?;
        self.send(EngineCommand::Move { card: card.to_string(), destination })
    }

    pub fn auto_move(&mut self, card: &str) -> Result<String, JsValue> {
        self.send(EngineCommand::AutoMove { card: card.to_string() })
    }

    pub fn flip(&mut self, card: &str) -> Result<String, JsValue> {
        self.send(EngineCommand::Flip { card: card.to_string() })
    }

    pub fn hint(&mut self) -> Result<String, JsValue> {
        self.send(EngineCommand::Hint)
    }

    /// `EngineCommand` の JSON をそのまま受け取って処理する。
    pub fn handle_command_json(&mut self, command_json: &str) -> Result<String, JsValue> {
        let command: EngineCommand = serde_json::from_str(command_json).map_err(|e| {
            let error_msg = format!("Failed to parse command: {}", e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })?;
        self.send(command)
    }

    pub fn get_state_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.snapshot())
    }

    pub fn is_flippable(&self, card: &str) -> bool {
        self.engine
            .find_card(card)
            .is_some_and(|entity| self.engine.is_flippable(entity))
    }

    pub fn is_win(&self) -> bool {
        self.engine.is_win()
    }

    pub fn has_valid_moves(&self) -> bool {
        self.engine.has_valid_moves()
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

impl GameApp {
    fn send(&mut self, command: EngineCommand) -> Result<String, JsValue> {
        let outcome = self.engine.handle_command(command);
        to_json(&outcome)
    }

    pub fn engine(&self) -> &SolitaireEngine {
        &self.engine
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| {
        let error_msg = format!("Failed to serialize response: {}", e);
        error!("{}", error_msg);
        JsValue::from_str(&error_msg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{CommandOutcome, PileStoreSnapshot};

    #[test]
    fn new_game_returns_snapshot_json() {
        let mut app = GameApp::new();
        let json = app.new_game(Some(12)).unwrap();
        let snapshot: PileStoreSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.card_count(), 52);
        assert_eq!(snapshot.stock.len(), 24);
    }

    #[test]
    fn draw_returns_outcome_json() {
        let mut app = GameApp::with_config(r#"{"draw_count": 1}"#).unwrap();
        app.new_game(Some(12)).unwrap();
        let outcome: CommandOutcome = serde_json::from_str(&app.draw().unwrap()).unwrap();
        match outcome {
            CommandOutcome::Drawn { result } => assert_eq!(result.displayed.len(), 1),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn bad_token_is_rejected_not_thrown() {
        let mut app = GameApp::new();
        app.new_game(Some(1)).unwrap();
        let json = app.move_card("XX", r#"{"Tableau":0}"#).unwrap();
        assert!(json.contains("Rejected"), "JSON: {}", json);
        assert!(json.contains("MalformedCardToken"));
        assert!(!app.is_flippable("XX"));
    }
}
