// src/error.rs
//! エンジンのコマンドが断られたときの理由だよ。
//!
//! どのエラーも「コマンドを拒否して状態はそのまま」で終わる回復可能なもの。
//! 52枚の不変条件を壊すようなエラーはそもそも作らない！

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// 移動先のルールに合わない (色・ランク・スート違い、山札への移動など)。
    InvalidDestination,
    /// 移動元のカードが一番上じゃない、または裏向き。
    SourceBlocked,
    /// 山札も捨て札も表示中のカードも空っぽで、めくるものがない。
    EmptyStock,
    /// 境界で受け取ったカード名が読めなかった。
    MalformedCardToken(String),
    /// 存在しないカード ID (0..52 の外)、またはまだ場に出ていないカード。
    UnknownCard(Entity),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidDestination => write!(f, "card cannot be placed on that destination"),
            MoveError::SourceBlocked => write!(f, "card is covered or face down"),
            MoveError::EmptyStock => write!(f, "nothing left to draw or recycle"),
            MoveError::MalformedCardToken(token) => write!(f, "malformed card token {:?}", token),
            MoveError::UnknownCard(entity) => write!(f, "unknown card {:?}", entity),
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(MoveError::EmptyStock.to_string(), "nothing left to draw or recycle");
        assert_eq!(
            MoveError::MalformedCardToken("Z9".into()).to_string(),
            "malformed card token \"Z9\""
        );
    }

    #[test]
    fn serializes_unit_variants_as_strings() {
        let json = serde_json::to_string(&MoveError::InvalidDestination).unwrap();
        assert_eq!(json, "\"InvalidDestination\"");
    }
}
