// src/components/foundation.rs

use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Suit};

/// 組札 (Foundation) 1つ分の「一番上」の記録だよ。
///
/// `value == 0` かつ `suit == None` が空っぽの状態。
/// A が置かれた瞬間にスートが決まって、そのあとは同じスートしか乗らない。
/// 一番上のカードが場札に戻されたら 1 つ下がる（A が戻されたら空に戻る）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FoundationSlot {
    pub suit: Option<Suit>,
    pub value: u8,
}

impl FoundationSlot {
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// カードが乗ったときの更新。
    pub fn place(&mut self, card: &Card) {
        self.value = card.rank.value();
        self.suit = Some(card.suit);
    }

    /// 一番上のカードが取り除かれたときの更新。
    pub fn remove_top(&mut self) {
        if self.value <= 1 {
            *self = FoundationSlot::default();
        } else {
            self.value -= 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.value == 13
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Rank;

    #[test]
    fn place_and_remove() {
        let mut slot = FoundationSlot::default();
        assert!(slot.is_empty());

        slot.place(&Card::new(Suit::Club, Rank::Ace));
        assert_eq!(slot, FoundationSlot { suit: Some(Suit::Club), value: 1 });

        slot.place(&Card::new(Suit::Club, Rank::Two));
        slot.remove_top();
        assert_eq!(slot, FoundationSlot { suit: Some(Suit::Club), value: 1 }, "スートは残るはず");

        slot.remove_top();
        assert_eq!(slot, FoundationSlot::default(), "A を戻したら空に戻るはず");
    }
}
