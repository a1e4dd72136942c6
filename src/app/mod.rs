// src/app/mod.rs
//! ゲームを外から操作するための入口をまとめるよ！
//! `engine` が Rust 向けの司令塔、`game_app` がそれを JS 向けに包んだもの。

pub mod engine;
pub mod game_app;

pub use engine::SolitaireEngine;
pub use game_app::GameApp;
