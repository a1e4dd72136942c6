// src/entity.rs

use serde::{Serialize, Deserialize};

/// カード1枚を指す ID だよ！🪪
///
/// 値はソート済みデッキ（スート C, D, H, S の外側ループ × ランク A..K の内側ループ）
/// でのインデックスそのもの。だから `Entity(0)` はクラブのA、`Entity(51)` はスペードのK。
/// シャッフルしても、カードがどの山に移動しても、この ID は一生変わらないよ。
///
/// カードが「今どこにあるか」は ID 自体は知らなくて、`World` 側の
/// location インデックス (`StackInfo`) が管理するんだ。
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub struct Entity(pub usize);

impl Entity {
    /// ソート済みデッキでの位置 (0..52)。
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ordering_follows_index() {
        assert!(Entity(0) < Entity(51));
        assert_eq!(Entity(7).index(), 7);
    }

    #[test]
    fn entity_serializes_as_plain_number() {
        let json = serde_json::to_string(&Entity(13)).unwrap();
        assert_eq!(json, "13");
        let back: Entity = serde_json::from_str("13").unwrap();
        assert_eq!(back, Entity(13));
    }
}
