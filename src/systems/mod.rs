// src/systems/mod.rs
//! 卓を実際に動かすシステムたち！

pub mod deal_system;
pub mod draw_system;
pub mod move_card_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use draw_system::{DrawOutcome, DrawSystem};
pub use move_card_system::MoveCardSystem;
pub use win_condition_system::WinConditionSystem;
