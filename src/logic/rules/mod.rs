// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! ここにあるのは全部「見るだけ」の判定。卓の状態は変えないよ。

pub mod common;
pub mod foundation;
pub mod tableau;
pub mod move_validation;
pub mod stock_waste;
pub mod win_condition;


pub use common::CardColor;
pub use foundation::*;
pub use tableau::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use win_condition::*;
