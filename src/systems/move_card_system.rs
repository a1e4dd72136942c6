// src/systems/move_card_system.rs

use log::{info, warn};

use crate::components::stack::StackType;
use crate::entity::Entity;
use crate::error::MoveError;
use crate::logic::rules::{is_flippable, is_move_valid};
use crate::world::World;

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どのカードをどの山に動かすか」を受け取って、ルール上OKなら World を更新する。
/// ダメなら理由付きのエラーを返して、卓には一切触らない。
#[derive(Debug, Clone, Default)]
pub struct MoveCardSystem {
    /// 場札の一番上が動いて裏向きのカードが出てきたら、自動でめくるか。
    auto_flip_exposed: bool,
}

impl MoveCardSystem {
    pub fn new(auto_flip_exposed: bool) -> Self {
        Self { auto_flip_exposed }
    }

    /// 移動を試す。成功したら Ok、ルール違反ならその理由。
    pub fn try_move(&self, world: &mut World, moved_entity: Entity, target_stack: StackType) -> Result<(), MoveError> {
        if let Err(reason) = is_move_valid(world, moved_entity, target_stack) {
            warn!("MoveCardSystem: rejected {:?} -> {:?}: {}", moved_entity, target_stack, reason);
            return Err(reason);
        }
        self.apply_move(world, moved_entity, target_stack);
        Ok(())
    }

    /// 検証済みの移動を World に反映する。
    ///
    /// 移動元から外す → (組札からなら記録を1つ下げる) → 移動先に積む →
    /// (組札なら記録を更新) の順番。
    fn apply_move(&self, world: &mut World, moved_entity: Entity, target_stack: StackType) {
        let Some(source_stack) = world.location(moved_entity).map(|info| info.stack_type) else {
            return;
        };

        if world.pop_card(source_stack) != Some(moved_entity) {
            // is_move_valid で一番上なのは確認済み
            warn!("MoveCardSystem: {:?} was not on top of {:?}", moved_entity, source_stack);
            return;
        }
        if let StackType::Foundation(index) = source_stack {
            if let Some(slot) = world.foundation_slot_mut(index as usize) {
                slot.remove_top();
            }
        }

        world.push_card(target_stack, moved_entity);
        if let StackType::Foundation(index) = target_stack {
            let card = world.card(moved_entity).copied();
            if let (Some(card), Some(slot)) = (card, world.foundation_slot_mut(index as usize)) {
                slot.place(&card);
            }
        }

        if let Some(card) = world.card(moved_entity) {
            info!("  Moved {} from {:?} to {:?}.", card.name(), source_stack, target_stack);
        }

        if self.auto_flip_exposed {
            if let StackType::Tableau(_) = source_stack {
                if let Some(exposed) = world.top_card(source_stack) {
                    if is_flippable(world, exposed) {
                        self.turn_face_up(world, exposed);
                    }
                }
            }
        }
    }

    /// 場札の一番上にある裏向きカードをめくる。
    pub fn flip(&self, world: &mut World, entity: Entity) -> Result<(), MoveError> {
        if world.location(entity).is_none() {
            return Err(MoveError::UnknownCard(entity));
        }
        if !is_flippable(world, entity) {
            warn!("MoveCardSystem: {:?} cannot be flipped.", entity);
            return Err(MoveError::SourceBlocked);
        }
        self.turn_face_up(world, entity);
        Ok(())
    }

    fn turn_face_up(&self, world: &mut World, entity: Entity) {
        if let Some(card) = world.card_mut(entity) {
            card.is_face_up = true;
            info!("  Flipped {} face up.", card.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::components::foundation::FoundationSlot;

    fn id(suit: Suit, rank: Rank) -> Entity {
        Card::new(suit, rank).id()
    }

    #[test]
    fn foundation_scenario() {
        let mut world = World::new();
        let system = MoveCardSystem::new(false);
        let ace_clubs = id(Suit::Club, Rank::Ace);
        let two_clubs = id(Suit::Club, Rank::Two);
        let two_diamonds = id(Suit::Diamond, Rank::Two);
        world.place_card(ace_clubs, StackType::Tableau(0), true);
        world.place_card(two_clubs, StackType::Tableau(1), true);
        world.place_card(two_diamonds, StackType::Tableau(2), true);

        system.try_move(&mut world, ace_clubs, StackType::Foundation(0)).unwrap();
        assert_eq!(
            world.foundation_slot(0),
            Some(FoundationSlot { suit: Some(Suit::Club), value: 1 })
        );
        assert!(world.tableau(0).is_empty());

        assert_eq!(
            system.try_move(&mut world, two_diamonds, StackType::Foundation(0)),
            Err(MoveError::InvalidDestination),
            "スートが違う"
        );
        system.try_move(&mut world, two_clubs, StackType::Foundation(0)).unwrap();
        assert_eq!(world.foundation_slot(0).unwrap().value, 2);
        world.verify_integrity().unwrap();
    }

    #[test]
    fn moving_back_from_foundation_decrements_slot() {
        let mut world = World::new();
        let system = MoveCardSystem::new(false);
        let ace = id(Suit::Heart, Rank::Ace);
        let two = id(Suit::Heart, Rank::Two);
        world.place_card(ace, StackType::Foundation(1), true);
        world.place_card(two, StackType::Foundation(1), true);
        world.place_card(id(Suit::Spade, Rank::Three), StackType::Tableau(4), true);

        system.try_move(&mut world, two, StackType::Tableau(4)).unwrap();
        assert_eq!(
            world.foundation_slot(1),
            Some(FoundationSlot { suit: Some(Suit::Heart), value: 1 })
        );
        assert_eq!(world.top_card(StackType::Tableau(4)), Some(two));
        world.verify_integrity().unwrap();
    }

    #[test]
    fn rejected_move_leaves_world_untouched() {
        let mut world = World::new();
        let system = MoveCardSystem::new(false);
        let red_eight = id(Suit::Heart, Rank::Eight);
        world.place_card(id(Suit::Diamond, Rank::Nine), StackType::Tableau(0), true);
        world.place_card(red_eight, StackType::Tableau(1), true);
        let before = world.clone();

        assert_eq!(
            system.try_move(&mut world, red_eight, StackType::Tableau(0)),
            Err(MoveError::InvalidDestination)
        );
        assert_eq!(world.tableau(0), before.tableau(0));
        assert_eq!(world.tableau(1), before.tableau(1));
        assert_eq!(world.location(red_eight), before.location(red_eight));
    }

    #[test]
    fn waste_card_moves_to_tableau() {
        let mut world = World::new();
        let system = MoveCardSystem::new(false);
        let black_eight = id(Suit::Club, Rank::Eight);
        world.place_card(id(Suit::Heart, Rank::Nine), StackType::Tableau(3), true);
        world.place_card(id(Suit::Spade, Rank::Two), StackType::Waste, true);
        world.place_card(black_eight, StackType::Waste, true);

        system.try_move(&mut world, black_eight, StackType::Tableau(3)).unwrap();
        assert_eq!(world.waste().len(), 1);
        assert_eq!(world.location(black_eight).unwrap().position_in_stack, 1);
        world.verify_integrity().unwrap();
    }

    #[test]
    fn exposed_card_flips_only_when_configured() {
        for auto_flip in [false, true] {
            let mut world = World::new();
            let system = MoveCardSystem::new(auto_flip);
            let hidden = id(Suit::Diamond, Rank::Seven);
            let king = id(Suit::Spade, Rank::King);
            world.place_card(hidden, StackType::Tableau(2), false);
            world.place_card(king, StackType::Tableau(2), true);

            system.try_move(&mut world, king, StackType::Tableau(5)).unwrap();
            assert_eq!(world.card(hidden).unwrap().is_face_up, auto_flip);
        }
    }

    #[test]
    fn flip_rules() {
        let mut world = World::new();
        let system = MoveCardSystem::new(false);
        let bottom = id(Suit::Club, Rank::Four);
        let top = id(Suit::Club, Rank::Five);
        world.place_card(bottom, StackType::Tableau(0), false);
        world.place_card(top, StackType::Tableau(0), false);

        assert_eq!(system.flip(&mut world, bottom), Err(MoveError::SourceBlocked), "下のカードはめくれない");
        system.flip(&mut world, top).unwrap();
        assert!(world.card(top).unwrap().is_face_up);
        assert_eq!(system.flip(&mut world, top), Err(MoveError::SourceBlocked), "もう表向き");
        assert_eq!(
            system.flip(&mut world, id(Suit::Heart, Rank::Ace)),
            Err(MoveError::UnknownCard(id(Suit::Heart, Rank::Ace)))
        );
    }
}
