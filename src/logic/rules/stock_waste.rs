//! 山札 (Stock) のめくり・作り直しに関するルールを定義するよ。

use crate::entity::Entity;
use crate::world::World;

/// 山札を `group_size` 枚ずつの組に分ける。
///
/// `n / group_size` 個の満杯の組と、余りがあれば最後に `n % group_size` 枚の組が1つ。
/// 並び順はそのまま (先頭の組が最初にめくられる)。
pub fn partition_into_draw_groups(cards: &[Entity], group_size: usize) -> Vec<Vec<Entity>> {
    let group_size = group_size.max(1);
    cards.chunks(group_size).map(<[Entity]>::to_vec).collect()
}

/// まだめくってない組が残っていれば、次の組をめくれる。
pub fn can_deal_from_stock(world: &World) -> bool {
    world.has_undrawn_groups()
}

/// 山札が尽きていて、表示中か溜まり場に1枚でも残っていれば、山札を作り直せる。
/// (表示中のカードは作り直す前に溜まり場へ移されるので、両方見るよ)
pub fn can_recycle(world: &World) -> bool {
    !world.has_undrawn_groups() && !(world.waste().is_empty() && world.discard().is_empty())
}
