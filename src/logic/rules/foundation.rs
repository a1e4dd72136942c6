//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::foundation::FoundationSlot;
use crate::entity::Entity;
use crate::world::World;

/// カードが、この組札の記録の上に置けるか。純粋な判定だけ。
///
/// ランクがちょうど1つ上で、しかもスートが同じ (空っぽの組札なら A だけ OK)。
pub fn can_stack_on_foundation(card: &Card, slot: FoundationSlot) -> bool {
    let next_rank = card.rank.value() == slot.value + 1;
    let suit_ok = slot.suit == Some(card.suit) || (card.rank == Rank::Ace && slot.is_empty());
    next_rank && suit_ok
}

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
pub fn can_move_to_foundation(
    world: &World,
    card_to_move_entity: Entity,
    target_foundation_index: u8,
) -> bool {
    let Some(card_to_move) = world.card(card_to_move_entity) else {
        debug!("[Foundation Rule] No card for {:?}", card_to_move_entity);
        return false;
    };
    let Some(slot) = world.foundation_slot(target_foundation_index as usize) else {
        debug!("[Foundation Rule] Invalid Foundation index: {}", target_foundation_index);
        return false;
    };

    let result = can_stack_on_foundation(card_to_move, slot);
    debug!(
        "[Foundation Rule] {} onto Foundation({}) {:?}: {}",
        card_to_move.name(),
        target_foundation_index,
        slot,
        result
    );
    result
}
