// src/protocol.rs

// このファイルは、エンジンとプレゼン側 (JS とか) の間でやり取りする
// データの形式を定義するよ！💌
// 全部 `serde` で JSON にしたり JSON から戻したりできる。
// カードは境界ではトークン文字列 ("HA", "S10") と Entity の両方で表す。

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameState;
use crate::entity::Entity;
use crate::error::MoveError;
use crate::systems::draw_system::DrawOutcome;
use crate::world::World;

pub use crate::components::stack::StackType;

// --- スナップショット ---

/// カード1枚分の情報。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub entity: Entity,
    /// "HA" みたいな表示用の名前
    pub name: String,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub stack_type: StackType,
    pub position_in_stack: u8,
}

impl CardData {
    /// World から1枚分の情報を組み立てる。場に出てないカードなら None。
    pub fn from_world(world: &World, entity: Entity) -> Option<Self> {
        let card: &Card = world.card(entity)?;
        let info = world.location(entity)?;
        Some(CardData {
            entity,
            name: card.name(),
            suit: card.suit,
            rank: card.rank,
            is_face_up: card.is_face_up,
            stack_type: info.stack_type,
            position_in_stack: info.position_in_stack,
        })
    }
}

/// 組札1つ分の「一番上」の記録。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoundationData {
    pub index: u8,
    pub suit: Option<Suit>,
    pub value: u8,
}

/// 卓全体の読み取り専用スナップショットだよ。各山は下 → 上の順。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileStoreSnapshot {
    pub tableaus: Vec<Vec<CardData>>,
    pub foundations: Vec<Vec<CardData>>,
    pub foundation_slots: Vec<FoundationData>,
    /// まだめくってない山札 (次にめくる順)
    pub stock: Vec<CardData>,
    pub waste: Vec<CardData>,
    pub discard: Vec<CardData>,
    pub draw_groups_remaining: usize,
    pub game_state: GameState,
}

fn collect_cards(world: &World, entities: &[Entity]) -> Vec<CardData> {
    entities
        .iter()
        .filter_map(|&entity| CardData::from_world(world, entity))
        .collect()
}

impl PileStoreSnapshot {
    pub fn from_world(world: &World) -> Self {
        let tableaus = (0..crate::config::rules::TABLEAU_COUNT)
            .map(|i| collect_cards(world, world.tableau(i)))
            .collect();
        let foundations = (0..crate::config::rules::FOUNDATION_COUNT)
            .map(|i| collect_cards(world, world.foundation(i)))
            .collect();
        let foundation_slots = world
            .foundation_slots()
            .iter()
            .enumerate()
            .map(|(i, slot)| FoundationData { index: i as u8, suit: slot.suit, value: slot.value })
            .collect();

        PileStoreSnapshot {
            tableaus,
            foundations,
            foundation_slots,
            stock: collect_cards(world, &world.stock()),
            waste: collect_cards(world, world.waste()),
            discard: collect_cards(world, world.discard()),
            draw_groups_remaining: world.draw_groups().len().saturating_sub(world.current_draw_index()),
            game_state: world.game_state(),
        }
    }

    /// 全部の山に載ってるカードの枚数。
    pub fn card_count(&self) -> usize {
        self.tableaus.iter().map(Vec::len).sum::<usize>()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
            + self.discard.len()
    }
}

// --- コマンドの結果 ---

/// 山札をめくった結果。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    pub displayed: Vec<CardData>,
    pub stock_exhausted: bool,
    pub recycled: bool,
}

impl DrawResult {
    pub fn from_outcome(world: &World, outcome: &DrawOutcome) -> Self {
        DrawResult {
            displayed: collect_cards(world, &outcome.displayed),
            stock_exhausted: outcome.stock_exhausted,
            recycled: outcome.recycled,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<MoveError>,
}

impl MoveResult {
    pub fn applied() -> Self {
        MoveResult { applied: true, reason: None }
    }

    pub fn rejected(reason: MoveError) -> Self {
        MoveResult { applied: false, reason: Some(reason) }
    }
}

impl From<Result<(), MoveError>> for MoveResult {
    fn from(result: Result<(), MoveError>) -> Self {
        match result {
            Ok(()) => MoveResult::applied(),
            Err(reason) => MoveResult::rejected(reason),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AutoMoveResult {
    pub applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<StackType>,
}

/// 「ここに動かせるよ」のヒント1つ分。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HintMove {
    pub card: String,
    pub destination: StackType,
}

// --- コマンド ---

/// プレゼン側からエンジンに送るコマンドだよ。`{"type": "Move", ...}` の形。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum EngineCommand {
    NewGame {
        #[serde(default)]
        seed: Option<u64>,
    },
    Draw,
    Move { card: String, destination: StackType },
    AutoMove { card: String },
    Flip { card: String },
    Hint,
}

/// コマンドを処理した結果。失敗したら `Rejected` に理由が入る。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CommandOutcome {
    NewGame { snapshot: PileStoreSnapshot },
    Drawn { result: DrawResult },
    Moved { result: MoveResult },
    AutoMoved { result: AutoMoveResult },
    Flipped { card: String },
    Hint { moves: Vec<HintMove> },
    Rejected { reason: MoveError },
}
