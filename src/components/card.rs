// src/components/card.rs

// カード情報をスナップショットとして JS 側に渡すから serde を使うよ！
use serde::{Serialize, Deserialize};
use log::warn;

use crate::entity::Entity;
use crate::error::MoveError;

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 並び順はデッキを作るときの外側ループの順番 (C, D, H, S) と同じ。
/// この順番が `Entity` の番号の付け方にもなってるから、勝手に並べ替えちゃダメだよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,    // ♣️
    Diamond, // ♦️
    Heart,   // ❤️
    Spade,   // ♠️
}

/// 全スート。デッキ生成で使う順番そのもの。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// カード名の1文字目 (`"HA"` の `H`)。
    pub fn letter(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'C' => Some(Suit::Club),
            'D' => Some(Suit::Diamond),
            'H' => Some(Suit::Heart),
            'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    /// ALL_SUITS の中での位置。
    pub fn index(self) -> usize {
        self as usize
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// Ace = 1 から始まって King = 13。`value()` で数値として取り出せるから、
/// 「1つ上」「1つ下」の判定はこの数値でやるよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 全ランク (A..K)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
    Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
];

impl Rank {
    /// 1 (Ace) 〜 13 (King) の数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        if (1..=13).contains(&value) {
            Some(ALL_RANKS[(value - 1) as usize])
        } else {
            None
        }
    }

    /// カード名で使うランク表記 (`A`, `2`..`10`, `J`, `Q`, `K`)。
    pub fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        ALL_RANKS.iter().copied().find(|rank| rank.token() == token)
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `is_face_up`: 表向きなら true
///
/// スートとランクは作ったあと変わらない。変わるのは `is_face_up` だけ！
/// 「今どの山にあるか」はカード自身じゃなくて `World` が覚えてるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// このカードの安定 ID。ソート済みデッキでのインデックスと同じ。
    pub fn id(&self) -> Entity {
        Entity(self.suit.index() * ALL_RANKS.len() + (self.rank.value() as usize - 1))
    }

    /// ID からカードを復元する（裏向きで返すよ）。範囲外なら None。
    pub fn from_entity(entity: Entity) -> Option<Self> {
        let suit = *ALL_SUITS.get(entity.index() / ALL_RANKS.len())?;
        let rank = ALL_RANKS[entity.index() % ALL_RANKS.len()];
        Some(Self::new(suit, rank))
    }

    /// 外部とのやり取り用のカード名。例: `"HA"`, `"S10"`, `"DK"`。
    pub fn name(&self) -> String {
        format!("{}{}", self.suit.letter(), self.rank.token())
    }
}

/// カード名 (`"HA"` とか `"S10"`) をスートとランクに分解するよ。
///
/// 境界 (JS 側とかデバッグ入力) でしか使わないこと！ 内部の状態は
/// 構造化されたフィールドで持つので、文字列を解析するのはここだけ。
/// 読めない名前は warn ログを出して `MalformedCardToken` を返す。
pub fn parse_card_token(token: &str) -> Result<(Suit, Rank), MoveError> {
    let mut chars = token.chars();
    let parsed = chars.next().and_then(|first| {
        let suit = Suit::from_letter(first)?;
        let rank = Rank::from_token(chars.as_str())?;
        Some((suit, rank))
    });

    match parsed {
        Some(pair) => Ok(pair),
        None => {
            warn!("Invalid card name: {:?}", token);
            Err(MoveError::MalformedCardToken(token.to_string()))
        }
    }
}
