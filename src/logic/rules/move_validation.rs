//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::stack::StackType;
use crate::entity::Entity;
use crate::error::MoveError;
use crate::logic::rules::{foundation, tableau};
use crate::world::World;

use super::common::movable_source;

/// 指定されたカードを特定のスタックに移動できるか検証する。
///
/// 先に移動元 (手に取れるか) を見て、次に移動先のルールを見るよ。
/// 状態は一切変えないので、何回呼んでも大丈夫。
pub fn is_move_valid(
    world: &World,
    moved_entity: Entity,
    target_stack: StackType,
) -> Result<(), MoveError> {
    movable_source(world, moved_entity)?;

    if !target_stack.is_in_range() {
        debug!("[Rules Validation] {:?} is out of range.", target_stack);
        return Err(MoveError::InvalidDestination);
    }
    if !target_stack.accepts_cards() {
        debug!("[Rules Validation] Moving to {:?} is not allowed.", target_stack);
        return Err(MoveError::InvalidDestination);
    }
    let source_stack = world.location(moved_entity).map(|info| info.stack_type);
    if source_stack == Some(target_stack) {
        return Err(MoveError::InvalidDestination);
    }

    let allowed = match target_stack {
        StackType::Tableau(target_index) => {
            tableau::can_move_to_tableau(world, moved_entity, target_index)
        }
        StackType::Foundation(target_index) => {
            foundation::can_move_to_foundation(world, moved_entity, target_index)
        }
        // accepts_cards で弾いてある
        StackType::Stock | StackType::Waste | StackType::Discard => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(MoveError::InvalidDestination)
    }
}

/// `is_move_valid` の bool 版。
pub fn can_stack_onto(world: &World, moved_entity: Entity, target_stack: StackType) -> bool {
    is_move_valid(world, moved_entity, target_stack).is_ok()
}
