//! ゲームの勝利条件と「もう打つ手がないか」の判定ロジックを定義するよ。

use log::debug;

use crate::components::foundation::FoundationSlot;
use crate::components::stack::StackType;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::entity::Entity;
use crate::world::World;

use super::move_validation::can_stack_onto;

/// ゲームのクリア条件（4つの組札が全部 K まで積み上がってるか）を判定する。
/// 全カードが組札にある、と同じ意味。空っぽの卓ではもちろん false。
pub fn check_win_condition(world: &World) -> bool {
    world.foundation_slots().iter().all(FoundationSlot::is_complete)
}

/// 場にまだ打てる手があるか。
///
/// - 場札の一番上に裏向きのカードがある (めくれる)
/// - 手に取れるカード (場札・組札の一番上、表示中の一番上) が、
///   どこかの場札か組札に `can_stack_onto` で置ける
///
/// `try_move` が通る手なら必ず true になる。山札をめくる手は数えないので、
/// false のときは「めくるか、やり直すか」になるよ。
pub fn has_valid_moves(world: &World) -> bool {
    let mut sources: Vec<Entity> = Vec::new();
    for index in 0..TABLEAU_COUNT {
        let Some(&top) = world.tableau(index).last() else {
            continue;
        };
        if world.card(top).is_some_and(|card| !card.is_face_up) {
            debug!("[Hint] {:?} can be flipped.", top);
            return true;
        }
        sources.push(top);
    }
    sources.extend(world.waste().last().copied());
    sources.extend((0..FOUNDATION_COUNT).filter_map(|i| world.foundation(i).last().copied()));

    let destinations: Vec<StackType> = (0..TABLEAU_COUNT as u8)
        .map(StackType::Tableau)
        .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation))
        .collect();

    for &source in &sources {
        if let Some(&target) = destinations.iter().find(|&&target| can_stack_onto(world, source, target)) {
            debug!("[Hint] {:?} can move to {:?}.", source, target);
            return true;
        }
    }
    false
}
