// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod entity;
pub mod error;
pub mod config;
pub mod components;
pub mod world;
pub mod system;
pub mod logic;
pub mod systems;
pub mod protocol;
pub mod app;

// よく使う型は crate のトップから使えるようにしておくよ。
pub use app::{GameApp, SolitaireEngine};
pub use components::{Card, Rank, StackType, Suit};
pub use config::GameConfig;
pub use entity::Entity;
pub use error::MoveError;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックしたらブラウザのコンソールにちゃんと出るようにする。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
