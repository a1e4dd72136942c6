// src/systems/deal_system.rs

use log::{info, warn};
use rand::Rng;

use crate::components::stack::StackType;
use crate::config::rules::{DECK_SIZE, INITIAL_TABLEAU_CARDS, TABLEAU_COUNT};
use crate::entity::Entity;
use crate::logic::deck::{create_standard_deck, shuffle_deck};
use crate::systems::draw_system::DrawSystem;
use crate::world::World;

// === 初期カード配置システム！ ===
// ゲーム開始時に、7つの場札と山札にカードを配る役割を担うシステムだよ。
#[derive(Debug, Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    pub fn new() -> Self {
        Self
    }

    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 卓を空にして、新しい52枚のデッキを作ってシャッフルする。
    /// 2. 三角形に配る: `i` を 0..7、`j` を `i..7` で回して、デッキの一番最後のカードを
    ///    場札 `j` に積む。列の枚数は 1, 2, ..., 7 (合計28枚) になる。
    /// 3. 各列の一番上 (最後に配ったカード) だけ表向き、残りは裏向き。
    /// 4. 残った24枚はそのままの順番で山札になって、組に仕分けられる。
    pub fn execute<R: Rng + ?Sized>(&self, world: &mut World, draw_system: &DrawSystem, rng: &mut R) {
        world.reset();

        let mut deck_cards = create_standard_deck();
        shuffle_deck(&mut deck_cards, rng);
        let mut deck: Vec<Entity> = deck_cards.iter().map(|card| card.id()).collect();
        info!("Deck created and shuffled ({} cards).", deck.len());

        for i in 0..TABLEAU_COUNT {
            for j in i..TABLEAU_COUNT {
                if let Some(entity) = deck.pop() {
                    world.push_card(StackType::Tableau(j as u8), entity);
                }
            }
        }

        for index in 0..TABLEAU_COUNT {
            if let Some(&top) = world.tableau(index).last() {
                if let Some(card) = world.card_mut(top) {
                    card.is_face_up = true;
                }
            }
        }
        info!(
            "Dealt tableaus {:?}; {} cards left for the stock.",
            (0..TABLEAU_COUNT).map(|i| world.tableau(i).len()).collect::<Vec<_>>(),
            deck.len()
        );

        if deck.len() != DECK_SIZE - INITIAL_TABLEAU_CARDS {
            warn!("Unexpected stock size after dealing: {}", deck.len());
        }
        draw_system.sort_deck_into_draw_groups(world, &deck);
    }
}
