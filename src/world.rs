// src/world.rs

use std::collections::HashMap;

use crate::components::card::Card;
use crate::components::foundation::FoundationSlot;
use crate::components::game_state::GameState;
use crate::components::stack::{StackInfo, StackType};
use crate::config::rules::{DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::entity::Entity;
use crate::logic::deck::create_standard_deck;

/// World（ワールド）は、卓の上の全部の山と全部のカードを持ってる司令塔だよ！🫡
///
/// - `cards`: 52枚のカード本体。`Entity` の番号がそのまま添字。
/// - `locations`: カード ID → 現在地 (`StackInfo`)。移動のたびに差分更新するから、
///   「このカードどこ？」は名前で全部探し回らなくても O(1) でわかる。
/// - 各山の並び (下 → 上)。場札 7 列、組札 4 つ、めくり待ちの組 (draw group)、
///   表示中 (waste)、使われなかったカードの溜まり場 (discard)。
///
/// 山の中身をいじれるのは crate 内のシステムだけ。外からは読み取り専用の
/// アクセサとスナップショットで見てね。
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) cards: Vec<Card>,
    pub(crate) locations: HashMap<Entity, StackInfo>,
    pub(crate) tableaus: [Vec<Entity>; TABLEAU_COUNT],
    pub(crate) foundations: [Vec<Entity>; FOUNDATION_COUNT],
    pub(crate) foundation_slots: [FoundationSlot; FOUNDATION_COUNT],
    pub(crate) draw_groups: Vec<Vec<Entity>>,
    pub(crate) current_draw_index: usize,
    pub(crate) waste: Vec<Entity>,
    pub(crate) discard: Vec<Entity>,
    pub(crate) game_state: GameState,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// 空っぽの卓を作るよ。カード52枚は存在するけど、まだどの山にも置かれてない。
    pub fn new() -> Self {
        World {
            cards: create_standard_deck(),
            locations: HashMap::with_capacity(DECK_SIZE),
            tableaus: Default::default(),
            foundations: Default::default(),
            foundation_slots: Default::default(),
            draw_groups: Vec::new(),
            current_draw_index: 0,
            waste: Vec::new(),
            discard: Vec::new(),
            game_state: GameState::default(),
        }
    }

    // --- 読み取り ---

    pub fn card(&self, entity: Entity) -> Option<&Card> {
        self.cards.get(entity.index())
    }

    pub(crate) fn card_mut(&mut self, entity: Entity) -> Option<&mut Card> {
        self.cards.get_mut(entity.index())
    }

    /// カードの現在地。まだ場に出ていないカードは None。
    pub fn location(&self, entity: Entity) -> Option<StackInfo> {
        self.locations.get(&entity).copied()
    }

    pub fn tableau(&self, index: usize) -> &[Entity] {
        self.tableaus.get(index).map_or(&[], |pile| pile.as_slice())
    }

    pub fn foundation(&self, index: usize) -> &[Entity] {
        self.foundations.get(index).map_or(&[], |pile| pile.as_slice())
    }

    pub fn foundation_slot(&self, index: usize) -> Option<FoundationSlot> {
        self.foundation_slots.get(index).copied()
    }

    pub fn foundation_slots(&self) -> &[FoundationSlot; FOUNDATION_COUNT] {
        &self.foundation_slots
    }

    /// 今表示中のカード (下 → 上)。最後の1枚だけが動かせる。
    pub fn waste(&self) -> &[Entity] {
        &self.waste
    }

    pub fn discard(&self) -> &[Entity] {
        &self.discard
    }

    pub fn draw_groups(&self) -> &[Vec<Entity>] {
        &self.draw_groups
    }

    /// 次にめくる組の番号。`draw_groups().len()` と同じなら山札は尽きてる。
    pub fn current_draw_index(&self) -> usize {
        self.current_draw_index
    }

    /// まだめくってない山札のカード (次にめくる順)。
    pub fn stock(&self) -> Vec<Entity> {
        self.draw_groups
            .iter()
            .skip(self.current_draw_index)
            .flatten()
            .copied()
            .collect()
    }

    pub fn stock_len(&self) -> usize {
        self.draw_groups.iter().skip(self.current_draw_index).map(Vec::len).sum()
    }

    pub fn has_undrawn_groups(&self) -> bool {
        self.current_draw_index < self.draw_groups.len()
    }

    /// 指定した山の一番上のカード。
    pub fn top_card(&self, stack: StackType) -> Option<Entity> {
        match stack {
            StackType::Tableau(i) => self.tableau(i as usize).last().copied(),
            StackType::Foundation(i) => self.foundation(i as usize).last().copied(),
            StackType::Stock => self.stock().last().copied(),
            StackType::Waste => self.waste.last().copied(),
            StackType::Discard => self.discard.last().copied(),
        }
    }

    /// そのカードの上に何も乗ってないか。
    /// 山札と捨て札の溜まり場にあるカードは、手に取れないので常に false。
    pub fn is_topmost(&self, entity: Entity) -> bool {
        match self.location(entity) {
            Some(info) => match info.stack_type {
                StackType::Stock | StackType::Discard => false,
                stack => self.top_card(stack) == Some(entity),
            },
            None => false,
        }
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    /// どこかの山に置かれているカードの枚数。
    pub fn cards_in_play(&self) -> usize {
        self.locations.len()
    }

    // --- 変更 (システムからだけ使う) ---

    fn pile_mut(&mut self, stack: StackType) -> Option<&mut Vec<Entity>> {
        match stack {
            StackType::Tableau(i) => self.tableaus.get_mut(i as usize),
            StackType::Foundation(i) => self.foundations.get_mut(i as usize),
            StackType::Waste => Some(&mut self.waste),
            StackType::Discard => Some(&mut self.discard),
            // 山札は組単位で管理してるので1枚ずつは積まない
            StackType::Stock => None,
        }
    }

    pub(crate) fn foundation_slot_mut(&mut self, index: usize) -> Option<&mut FoundationSlot> {
        self.foundation_slots.get_mut(index)
    }

    /// カードを山の一番上に積んで、居場所を記録する。
    /// 積めない山 (Stock や範囲外) なら false を返して何もしない。
    pub(crate) fn push_card(&mut self, stack: StackType, entity: Entity) -> bool {
        let Some(pile) = self.pile_mut(stack) else {
            return false;
        };
        let position = pile.len() as u8;
        pile.push(entity);
        self.locations.insert(entity, StackInfo::new(stack, position));
        true
    }

    /// 山の一番上のカードを取り除いて、居場所の記録も消す。
    pub(crate) fn pop_card(&mut self, stack: StackType) -> Option<Entity> {
        let entity = self.pile_mut(stack)?.pop()?;
        self.locations.remove(&entity);
        Some(entity)
    }

    /// 山札を組に分けた状態でまるごと置き換える。全部裏向きにして、カーソルは先頭へ。
    pub(crate) fn set_draw_groups(&mut self, groups: Vec<Vec<Entity>>) {
        let mut position = 0u8;
        for &entity in groups.iter().flatten() {
            if let Some(card) = self.card_mut(entity) {
                card.is_face_up = false;
            }
            self.locations.insert(entity, StackInfo::new(StackType::Stock, position));
            position += 1;
        }
        self.draw_groups = groups;
        self.current_draw_index = 0;
    }

    /// 次の組を山札から取り出してカーソルを進める。残ってなければ None。
    /// 取り出したカードの居場所は消すので、呼び出し側で必ずどこかに積むこと。
    pub(crate) fn take_next_draw_group(&mut self) -> Option<Vec<Entity>> {
        let group = self.draw_groups.get(self.current_draw_index)?.clone();
        self.current_draw_index += 1;
        for entity in &group {
            self.locations.remove(entity);
        }
        Some(group)
    }

    pub(crate) fn take_waste(&mut self) -> Vec<Entity> {
        let cards = std::mem::take(&mut self.waste);
        for entity in &cards {
            self.locations.remove(entity);
        }
        cards
    }

    pub(crate) fn take_discard(&mut self) -> Vec<Entity> {
        let cards = std::mem::take(&mut self.discard);
        for entity in &cards {
            self.locations.remove(entity);
        }
        cards
    }

    /// 全部の山を空にして、カードを裏向きのソート済みに戻す。
    pub(crate) fn reset(&mut self) {
        *self = World::new();
    }

    pub(crate) fn set_game_state(&mut self, state: GameState) {
        self.game_state = state;
    }

    /// 山の並びと location インデックスが食い違ってないか、
    /// 同じカードが2か所にないかを全部チェックするよ。
    /// 問題があればその内容を文字列で返す。
    pub fn verify_integrity(&self) -> Result<(), String> {
        let mut seen: HashMap<Entity, StackInfo> = HashMap::with_capacity(DECK_SIZE);
        let mut record = |entity: Entity, info: StackInfo| -> Result<(), String> {
            match seen.insert(entity, info) {
                Some(previous) => Err(format!(
                    "{:?} appears twice ({:?} and {:?})",
                    entity, previous, info
                )),
                None => Ok(()),
            }
        };

        for (i, pile) in self.tableaus.iter().enumerate() {
            for (pos, &entity) in pile.iter().enumerate() {
                record(entity, StackInfo::new(StackType::Tableau(i as u8), pos as u8))?;
            }
        }
        for (i, pile) in self.foundations.iter().enumerate() {
            for (pos, &entity) in pile.iter().enumerate() {
                record(entity, StackInfo::new(StackType::Foundation(i as u8), pos as u8))?;
            }
        }
        let mut stock_position = 0u8;
        for group in &self.draw_groups[..self.current_draw_index.min(self.draw_groups.len())] {
            stock_position += group.len() as u8;
        }
        for &entity in self.draw_groups.iter().skip(self.current_draw_index).flatten() {
            record(entity, StackInfo::new(StackType::Stock, stock_position))?;
            stock_position += 1;
        }
        for (pos, &entity) in self.waste.iter().enumerate() {
            record(entity, StackInfo::new(StackType::Waste, pos as u8))?;
        }
        for (pos, &entity) in self.discard.iter().enumerate() {
            record(entity, StackInfo::new(StackType::Discard, pos as u8))?;
        }

        if seen.len() != self.locations.len() {
            return Err(format!(
                "piles hold {} cards but the location index has {}",
                seen.len(),
                self.locations.len()
            ));
        }
        for (entity, info) in &seen {
            if self.locations.get(entity) != Some(info) {
                return Err(format!(
                    "{:?} is at {:?} but indexed as {:?}",
                    entity,
                    info,
                    self.locations.get(entity)
                ));
            }
        }

        for (i, slot) in self.foundation_slots.iter().enumerate() {
            let top = self.foundations[i].last().and_then(|&e| self.card(e));
            let expected_value = top.map_or(0, |card| card.rank.value());
            let expected_suit = top.map(|card| card.suit);
            if slot.value != expected_value || slot.suit != expected_suit {
                return Err(format!("foundation {} slot {:?} disagrees with its top card", i, slot));
            }
        }
        Ok(())
    }

    /// テスト用: カードを好きな山の上に直接置く。組札なら記録も合わせる。
    #[cfg(test)]
    pub(crate) fn place_card(&mut self, entity: Entity, stack: StackType, face_up: bool) {
        if let Some(card) = self.card_mut(entity) {
            card.is_face_up = face_up;
        }
        assert!(self.push_card(stack, entity), "cannot place onto {:?}", stack);
        if let StackType::Foundation(i) = stack {
            let card = self.cards[entity.index()];
            self.foundation_slots[i as usize].place(&card);
        }
    }
}

// テストコードは world_tests.rs にあるよ
#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
