// src/logic/mod.rs
//! ゲームのルールとデッキまわりの純粋なロジック。

pub mod auto_move;
pub mod deck;
pub mod rules;
