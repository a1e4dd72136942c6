// src/components/stack.rs

use serde::{Serialize, Deserialize};

use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// カードが存在する場所の種類を示す Enum だよ。
/// 山の種類はこれで全部！ ルール判定も移動処理も、この enum を `match` で
/// 網羅的に分岐するよ（文字列タグで判定するのは禁止）。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。4つあって、番号 (0-3) で管理する。
    /// どのスートが乗るかは固定じゃなくて、最初に置かれた A で決まるよ。
    Foundation(u8),
    /// 山札 (Stock)。まだめくってないカード。3枚ずつの組 (draw group) に分かれてる。
    Stock,
    /// 今めくって表示中のカード (0〜3枚)。めくるたびに丸ごと入れ替わる。
    Waste,
    /// 一度表示されたけど使われなかったカードの溜まり場。
    /// 山札が尽きたら、ここが次の山札になるよ♻️
    Discard,
}

impl StackType {
    /// 列番号や組札番号が範囲内かどうか。
    pub fn is_in_range(self) -> bool {
        match self {
            StackType::Tableau(i) => (i as usize) < TABLEAU_COUNT,
            StackType::Foundation(i) => (i as usize) < FOUNDATION_COUNT,
            StackType::Stock | StackType::Waste | StackType::Discard => true,
        }
    }

    /// プレイヤーがカードを置ける山かどうか。
    pub fn accepts_cards(self) -> bool {
        matches!(self, StackType::Tableau(_) | StackType::Foundation(_))
    }
}

/// カード1枚の現在地だよ。
/// `World` がカード ID → `StackInfo` の対応表を持っていて、
/// 移動のたびに差分だけ更新するから、どのカードでも O(1) で居場所がわかる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackInfo {
    /// カードが属しているスタックの種類。
    pub stack_type: StackType,
    /// そのスタックの中で、カードが下から何番目に積まれているか (0 が一番下)。
    /// Stock だけは「仕分けしたときの通し番号」で、めくっても詰め直さない。
    pub position_in_stack: u8,
}

impl StackInfo {
    pub fn new(stack_type: StackType, position_in_stack: u8) -> Self {
        Self { stack_type, position_in_stack }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_info_creation() {
        let info = StackInfo::new(StackType::Tableau(2), 5);
        assert_eq!(info.stack_type, StackType::Tableau(2));
        assert_eq!(info.position_in_stack, 5);
    }

    #[test]
    fn stack_ranges() {
        assert!(StackType::Tableau(6).is_in_range());
        assert!(!StackType::Tableau(7).is_in_range());
        assert!(StackType::Foundation(3).is_in_range());
        assert!(!StackType::Foundation(4).is_in_range());
        assert!(StackType::Discard.is_in_range());
    }

    #[test]
    fn only_tableau_and_foundation_accept_cards() {
        assert!(StackType::Tableau(0).accepts_cards());
        assert!(StackType::Foundation(1).accepts_cards());
        assert!(!StackType::Stock.accepts_cards());
        assert!(!StackType::Waste.accepts_cards());
        assert!(!StackType::Discard.accepts_cards());
    }

    #[test]
    fn stack_type_json_shape() {
        // JS 側からはこの形で移動先を送ってもらう
        let parsed: StackType = serde_json::from_str(r#"{"Foundation":2}"#).unwrap();
        assert_eq!(parsed, StackType::Foundation(2));
        let parsed: StackType = serde_json::from_str(r#""Waste""#).unwrap();
        assert_eq!(parsed, StackType::Waste);
    }
}
