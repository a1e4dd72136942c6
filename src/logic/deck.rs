// src/logic/deck.rs

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// 並び順は決まってて、スート (C, D, H, S) が外側、ランク (A..K) が内側。
/// だから何回呼んでも同じ順番になるし、`i` 番目のカードの ID は `Entity(i)` になる。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) だよ。
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(suit, rank))
        .collect()
}

/// カードデッキをその場でシャッフルする関数だよ。
///
/// 中身は Fisher–Yates (rand の `SliceRandom::shuffle`) なので、乱数源がちゃんとしていれば
/// どの並びも同じ確率で出る。テストで同じ並びを再現したいときは
/// `StdRng::seed_from_u64` みたいな種付きの乱数を渡してね。
pub fn shuffle_deck<T, R: Rng + ?Sized>(deck: &mut [T], rng: &mut R) {
    deck.shuffle(rng);
}
