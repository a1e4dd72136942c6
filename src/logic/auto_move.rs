// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! 「ダブルタップしたら組札に飛ばす」の判定部分。タップの検出はプレゼン側のお仕事。

use log::debug;

use crate::components::card::Rank;
use crate::components::stack::StackType;
use crate::config::rules::FOUNDATION_COUNT;
use crate::entity::Entity;
use crate::logic::rules::common::movable_source;
use crate::world::World;

/// 特定のカードが、今の卓の状態で自動的に移動できる組札を探す関数だよ。
///
/// 対象になるのは、表向きで上に何も乗ってないカード（場札か表示中のカード）だけ。
/// 組札を 0 → 3 の順に見て、最初に見つかった行き先を返す:
/// - A で、その組札が空なら、そこ
/// - その組札のスートが同じで、一番上がちょうど1つ下のランクなら、そこ
///
/// 「上に何も乗ってないか」は、選択中のカードじゃなくて調べているカード自身で判定するよ。
pub fn find_automatic_foundation_move(world: &World, card_to_move_entity: Entity) -> Option<StackType> {
    debug!("[AutoMove] Finding automatic foundation move for {:?}...", card_to_move_entity);

    let card = movable_source(world, card_to_move_entity).ok()?;
    if matches!(
        world.location(card_to_move_entity).map(|info| info.stack_type),
        Some(StackType::Foundation(_))
    ) {
        return None;
    }

    for i in 0..FOUNDATION_COUNT {
        let Some(slot) = world.foundation_slot(i) else {
            continue;
        };

        if card.rank == Rank::Ace && slot.is_empty() {
            debug!("  Found empty foundation [{}] for {}.", i, card.name());
            return Some(StackType::Foundation(i as u8));
        }

        if slot.suit == Some(card.suit) && slot.value + 1 == card.rank.value() {
            debug!("  Found valid foundation [{}] for {}.", i, card.name());
            return Some(StackType::Foundation(i as u8));
        }
    }

    debug!("  No suitable foundation found for {}.", card.name());
    None
}
