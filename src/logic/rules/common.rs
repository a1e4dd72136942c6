//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit};
use crate::components::stack::StackType;
use crate::entity::Entity;
use crate::error::MoveError;
use crate::world::World;

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    pub fn of(card: &Card) -> Self {
        Self::from_suit(card.suit)
    }
}

/// 指定されたスタックの一番上にあるカードを取得するよ。
pub(crate) fn get_top_card<'a>(world: &'a World, target_stack: StackType) -> Option<&'a Card> {
    world.top_card(target_stack).and_then(|entity| world.card(entity))
}

/// 移動元として手に取れるカードか確認して、取れるならカードを返す。
///
/// - 場に出てない ID → `UnknownCard`
/// - 裏向き → `SourceBlocked`
/// - 上に何か乗ってる (表示中の最後の1枚じゃない、列の最後じゃない)、
///   または山札・溜まり場の中 → `SourceBlocked`
pub(crate) fn movable_source(world: &World, entity: Entity) -> Result<&Card, MoveError> {
    let card = world.card(entity).ok_or(MoveError::UnknownCard(entity))?;
    if world.location(entity).is_none() {
        return Err(MoveError::UnknownCard(entity));
    }
    if !card.is_face_up || !world.is_topmost(entity) {
        return Err(MoveError::SourceBlocked);
    }
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Rank;

    fn id(suit: Suit, rank: Rank) -> Entity {
        Card::new(suit, rank).id()
    }

    #[test]
    fn test_card_color() {
        assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
        assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
        assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
        assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
    }

    #[test]
    fn covered_and_face_down_cards_are_blocked() {
        let mut world = World::new();
        let bottom = id(Suit::Heart, Rank::Nine);
        let top = id(Suit::Spade, Rank::Eight);
        world.place_card(bottom, StackType::Tableau(0), true);
        world.place_card(top, StackType::Tableau(0), true);

        assert_eq!(movable_source(&world, bottom), Err(MoveError::SourceBlocked));
        assert!(movable_source(&world, top).is_ok());

        let hidden = id(Suit::Club, Rank::Two);
        world.place_card(hidden, StackType::Tableau(1), false);
        assert_eq!(movable_source(&world, hidden), Err(MoveError::SourceBlocked));
    }

    #[test]
    fn cards_not_in_play_are_unknown() {
        let world = World::new();
        assert_eq!(movable_source(&world, Entity(3)), Err(MoveError::UnknownCard(Entity(3))));
        assert_eq!(movable_source(&world, Entity(99)), Err(MoveError::UnknownCard(Entity(99))));
    }

    #[test]
    fn only_last_waste_card_is_movable() {
        let mut world = World::new();
        let first = id(Suit::Club, Rank::Five);
        let last = id(Suit::Diamond, Rank::Six);
        world.place_card(first, StackType::Waste, true);
        world.place_card(last, StackType::Waste, true);

        assert_eq!(movable_source(&world, first), Err(MoveError::SourceBlocked));
        assert!(movable_source(&world, last).is_ok());
        assert_eq!(get_top_card(&world, StackType::Waste).map(|c| c.rank), Some(Rank::Six));
    }
}
