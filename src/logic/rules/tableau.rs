//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;
use crate::entity::Entity;
use crate::world::World;

use super::common::{get_top_card, CardColor};

/// カードが、場札の一番上のカード (`None` なら空の列) に置けるか。純粋な判定だけ。
///
/// - 空の列には King だけ
/// - それ以外はランクがちょうど1つ下で、色が違うこと
/// - 裏向きのカードの上には何も置けない
pub fn can_stack_on_tableau(card: &Card, target_top: Option<&Card>) -> bool {
    match target_top {
        None => card.rank == Rank::King,
        Some(top) => {
            let colors_different = CardColor::of(card) != CardColor::of(top);
            let rank_is_one_less = card.rank.value() + 1 == top.rank.value();
            top.is_face_up && colors_different && rank_is_one_less
        }
    }
}

/// 指定されたカードが、特定の場札 (Tableau) の一番上に置けるかチェックする。
pub fn can_move_to_tableau(
    world: &World,
    card_to_move_entity: Entity,
    target_tableau_index: u8,
) -> bool {
    let Some(card_to_move) = world.card(card_to_move_entity) else {
        debug!("[Tableau Rule] No card for {:?}", card_to_move_entity);
        return false;
    };
    let target = StackType::Tableau(target_tableau_index);
    if !target.is_in_range() {
        return false;
    }
    let target_top = get_top_card(world, target);
    let result = can_stack_on_tableau(card_to_move, target_top);
    debug!(
        "[Tableau Rule] {} onto Tableau({}) top {:?}: {}",
        card_to_move.name(),
        target_tableau_index,
        target_top.map(Card::name),
        result
    );
    result
}

/// 裏向きで、しかも列の一番上にあるカードならめくれるよ。
pub fn is_flippable(world: &World, entity: Entity) -> bool {
    let face_down = world.card(entity).is_some_and(|card| !card.is_face_up);
    let in_tableau = matches!(
        world.location(entity).map(|info| info.stack_type),
        Some(StackType::Tableau(_))
    );
    face_down && in_tableau && world.is_topmost(entity)
}
