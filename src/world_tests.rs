// src/world_tests.rs
// World (卓) のユニットテスト！

use super::*;
use crate::components::card::{Rank, Suit};

fn id(suit: Suit, rank: Rank) -> Entity {
    Card::new(suit, rank).id()
}

#[test]
fn new_world_has_cards_but_no_piles() {
    let world = World::new();
    assert_eq!(world.cards.len(), DECK_SIZE);
    assert_eq!(world.cards_in_play(), 0);
    assert!(world.stock().is_empty());
    assert!(!world.has_undrawn_groups());
    assert!(world.cards.iter().all(|card| !card.is_face_up), "最初は全部裏向き");
    world.verify_integrity().unwrap();
}

#[test]
fn push_and_pop_keep_location_index() {
    let mut world = World::new();
    let nine = id(Suit::Heart, Rank::Nine);
    let eight = id(Suit::Spade, Rank::Eight);

    assert!(world.push_card(StackType::Tableau(3), nine));
    assert!(world.push_card(StackType::Tableau(3), eight));
    assert_eq!(world.location(nine), Some(StackInfo::new(StackType::Tableau(3), 0)));
    assert_eq!(world.location(eight), Some(StackInfo::new(StackType::Tableau(3), 1)));
    assert_eq!(world.top_card(StackType::Tableau(3)), Some(eight));
    assert!(world.is_topmost(eight));
    assert!(!world.is_topmost(nine));

    assert_eq!(world.pop_card(StackType::Tableau(3)), Some(eight));
    assert_eq!(world.location(eight), None, "取り除いたら居場所も消える");
    assert!(world.is_topmost(nine));
    world.verify_integrity().unwrap();
}

#[test]
fn stock_and_bad_indices_reject_single_pushes() {
    let mut world = World::new();
    assert!(!world.push_card(StackType::Stock, Entity(0)));
    assert!(!world.push_card(StackType::Tableau(9), Entity(0)));
    assert!(!world.push_card(StackType::Foundation(4), Entity(0)));
    assert_eq!(world.cards_in_play(), 0);
    assert_eq!(world.pop_card(StackType::Stock), None);
}

#[test]
fn draw_groups_track_stock_positions() {
    let mut world = World::new();
    let cards: Vec<Entity> = (0..5).map(Entity).collect();
    world.set_draw_groups(vec![cards[..3].to_vec(), cards[3..].to_vec()]);

    assert_eq!(world.stock(), cards);
    assert_eq!(world.stock_len(), 5);
    assert_eq!(world.location(Entity(4)), Some(StackInfo::new(StackType::Stock, 4)));
    assert!(!world.is_topmost(Entity(4)), "山札のカードは手に取れない");

    let group = world.take_next_draw_group().unwrap();
    assert_eq!(group, cards[..3].to_vec());
    assert_eq!(world.current_draw_index(), 1);
    for entity in group {
        world.push_card(StackType::Waste, entity);
    }
    assert_eq!(world.stock(), cards[3..].to_vec());
    assert_eq!(
        world.location(Entity(3)),
        Some(StackInfo::new(StackType::Stock, 3)),
        "めくっても残りの番号は振り直さない"
    );
    world.verify_integrity().unwrap();

    let _ = world.take_next_draw_group();
    assert!(world.take_next_draw_group().is_none());
    assert!(!world.has_undrawn_groups());
}

#[test]
fn integrity_catches_duplicates_and_stale_index() {
    let mut world = World::new();
    let card = id(Suit::Club, Rank::Five);
    world.push_card(StackType::Tableau(0), card);
    world.tableaus[1].push(card);
    assert!(world.verify_integrity().is_err(), "同じカードが2か所");

    let mut world = World::new();
    world.push_card(StackType::Waste, card);
    world.locations.insert(card, StackInfo::new(StackType::Waste, 5));
    assert!(world.verify_integrity().is_err(), "番号がずれてる");

    let mut world = World::new();
    world.place_card(id(Suit::Club, Rank::Ace), StackType::Foundation(0), true);
    world.foundation_slots[0].value = 4;
    assert!(world.verify_integrity().is_err(), "組札の記録と一番上が合わない");
}

#[test]
fn take_waste_and_discard_clear_locations() {
    let mut world = World::new();
    world.place_card(Entity(1), StackType::Waste, true);
    world.place_card(Entity(2), StackType::Discard, true);

    assert_eq!(world.take_waste(), vec![Entity(1)]);
    assert_eq!(world.take_discard(), vec![Entity(2)]);
    assert_eq!(world.cards_in_play(), 0);
}

#[test]
fn reset_clears_everything() {
    let mut world = World::new();
    world.place_card(Entity(7), StackType::Tableau(0), true);
    world.set_draw_groups(vec![vec![Entity(8)]]);
    world.reset();
    assert_eq!(world.cards_in_play(), 0);
    assert!(world.draw_groups().is_empty());
    assert!(!world.card(Entity(7)).unwrap().is_face_up);
}
