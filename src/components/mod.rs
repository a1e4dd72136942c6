// src/components/mod.rs

// ゲームのデータ部品たち。ロジックは持たず、形と小さなヘルパーだけ！
pub mod card;
pub mod stack;
pub mod foundation;
pub mod game_state;

pub use card::{Card, Rank, Suit};
pub use foundation::FoundationSlot;
pub use game_state::{GameState, GameStatus};
pub use stack::{StackInfo, StackType};
