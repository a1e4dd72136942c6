// src/systems/draw_system.rs
//! 山札をめくるシステムだよ！🎴
//! 山札を3枚ずつの組に分けて、クリックされるたびに次の組を表示する。
//! 全部めくり終わったら、使われなかったカードを集めて山札を作り直す♻️

use log::{info, warn};

use crate::components::stack::StackType;
use crate::entity::Entity;
use crate::error::MoveError;
use crate::logic::rules::stock_waste::{
    can_deal_from_stock, can_recycle, partition_into_draw_groups,
};
use crate::world::World;

/// 1回めくった結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// 新しく表示されたカード (下 → 上)。山札を作り直した回は空。
    pub displayed: Vec<Entity>,
    /// この呼び出しのあと、まだめくってない組が残っていないか。
    pub stock_exhausted: bool,
    /// この呼び出しで山札を作り直したか。
    pub recycled: bool,
}

#[derive(Debug, Clone)]
pub struct DrawSystem {
    draw_count: usize,
}

impl DrawSystem {
    pub fn new(draw_count: usize) -> Self {
        Self { draw_count: draw_count.max(1) }
    }

    /// 山札のカードを組に仕分けて World に置く。カーソルは最初の組に戻る。
    pub fn sort_deck_into_draw_groups(&self, world: &mut World, cards: &[Entity]) {
        let groups = partition_into_draw_groups(cards, self.draw_count);
        info!(
            "Sorted {} stock cards into {} draw groups of up to {}.",
            cards.len(),
            groups.len(),
            self.draw_count
        );
        world.set_draw_groups(groups);
    }

    /// 山札をクリックしたときの処理だよ。
    ///
    /// 1. 今表示中のカード (使われなかった分) を溜まり場に移す。
    /// 2. 次の組があれば、それを表向きにして表示する。
    /// 3. なければ、溜まり場のカードを (めくった順のまま) 新しい山札にして組に分け直す。
    ///    この回は何も表示されない。
    ///
    /// 山札も表示中も溜まり場も空なら `EmptyStock` で、何も変えない。
    pub fn deal_from_deck(&self, world: &mut World) -> Result<DrawOutcome, MoveError> {
        let deal = can_deal_from_stock(world);
        if !deal && !can_recycle(world) {
            warn!("Draw requested but there is nothing left to draw or recycle.");
            return Err(MoveError::EmptyStock);
        }

        for entity in world.take_waste() {
            world.push_card(StackType::Discard, entity);
        }

        if deal {
            let group = world.take_next_draw_group().unwrap_or_default();
            for &entity in &group {
                if let Some(card) = world.card_mut(entity) {
                    card.is_face_up = true;
                }
                world.push_card(StackType::Waste, entity);
            }
            info!(
                "Drew group {}/{} ({} cards).",
                world.current_draw_index(),
                world.draw_groups().len(),
                group.len()
            );
            return Ok(DrawOutcome {
                displayed: group,
                stock_exhausted: !world.has_undrawn_groups(),
                recycled: false,
            });
        }

        // ここに来たら溜まり場には必ずカードがある
        let cards = world.take_discard();
        info!("Stock exhausted; recycling {} cards.", cards.len());
        self.sort_deck_into_draw_groups(world, &cards);
        Ok(DrawOutcome {
            displayed: Vec::new(),
            stock_exhausted: !world.has_undrawn_groups(),
            recycled: true,
        })
    }
}
