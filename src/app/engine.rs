// src/app/engine.rs
//! ゲーム全体の司令塔 `SolitaireEngine` だよ！🎮
//!
//! World とシステムたちを持っていて、外から来るコマンド (新しいゲーム、山札めくり、
//! カード移動、自動移動、めくり) を1つずつ処理する。
//! どのコマンドも最後まで終わってから戻るし、変更のあとは必ず勝敗判定を走らせるよ。
//! プレゼン側はこれを持って、読み取り専用のスナップショットで卓を見る。

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::card::{parse_card_token, Card, Rank};
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::GameConfig;
use crate::entity::Entity;
use crate::error::MoveError;
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules;
use crate::protocol::{
    AutoMoveResult, CommandOutcome, DrawResult, EngineCommand, HintMove, MoveResult, PileStoreSnapshot,
};
use crate::system::System;
use crate::systems::{DealInitialCardsSystem, DrawSystem, MoveCardSystem, WinConditionSystem};
use crate::world::World;

#[derive(Debug)]
pub struct SolitaireEngine {
    world: World,
    config: GameConfig,
    deal_system: DealInitialCardsSystem,
    draw_system: DrawSystem,
    move_system: MoveCardSystem,
    win_system: WinConditionSystem,
    /// 今のゲームを配ったときの種 (種なしで配ったなら None)
    seed: Option<u64>,
}

impl Default for SolitaireEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl SolitaireEngine {
    /// エンジンを作る。まだカードは配られてないので、`new_game` を呼んでね。
    pub fn new(config: GameConfig) -> Self {
        let config = config.normalized();
        let mut engine = SolitaireEngine {
            world: World::new(),
            deal_system: DealInitialCardsSystem::new(),
            draw_system: DrawSystem::new(config.draw_count),
            move_system: MoveCardSystem::new(config.auto_flip_exposed),
            win_system: WinConditionSystem::new(),
            seed: None,
            config,
        };
        engine.refresh_state();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// 卓を片付けて、新しくシャッフルして配り直す。
    /// 種を渡せば同じ配りを再現できる。渡さなければ設定の種、それもなければランダム。
    pub fn new_game(&mut self, seed: Option<u64>) -> PileStoreSnapshot {
        self.seed = seed.or(self.config.seed);
        match self.seed {
            Some(seed) => {
                info!("Starting new game with seed {}.", seed);
                let mut rng = StdRng::seed_from_u64(seed);
                self.deal_system.execute(&mut self.world, &self.draw_system, &mut rng);
            }
            None => {
                info!("Starting new game with a random shuffle.");
                let mut rng = rand::thread_rng();
                self.deal_system.execute(&mut self.world, &self.draw_system, &mut rng);
            }
        }
        self.refresh_state();
        self.snapshot()
    }

    /// 山札をめくる (尽きてたら作り直す)。
    pub fn draw_from_stock(&mut self) -> Result<DrawResult, MoveError> {
        let outcome = self.draw_system.deal_from_deck(&mut self.world)?;
        self.refresh_state();
        Ok(DrawResult::from_outcome(&self.world, &outcome))
    }

    /// カードを指定の山に動かしてみる。ダメなら理由付きで `applied: false`。
    pub fn try_move(&mut self, card: Entity, destination: StackType) -> MoveResult {
        let result = self.move_system.try_move(&mut self.world, card, destination);
        if result.is_ok() {
            self.refresh_state();
        }
        MoveResult::from(result)
    }

    /// ダブルタップ用。行ける組札があればそこに動かす。
    pub fn try_auto_move(&mut self, card: Entity) -> AutoMoveResult {
        let Some(destination) = find_automatic_foundation_move(&self.world, card) else {
            return AutoMoveResult { applied: false, destination: None };
        };
        match self.move_system.try_move(&mut self.world, card, destination) {
            Ok(()) => {
                self.refresh_state();
                AutoMoveResult { applied: true, destination: Some(destination) }
            }
            Err(reason) => {
                warn!("[AutoMove] {:?} -> {:?} failed validation: {}", card, destination, reason);
                AutoMoveResult { applied: false, destination: None }
            }
        }
    }

    pub fn is_flippable(&self, card: Entity) -> bool {
        rules::is_flippable(&self.world, card)
    }

    pub fn flip(&mut self, card: Entity) -> Result<(), MoveError> {
        self.move_system.flip(&mut self.world, card)?;
        self.refresh_state();
        Ok(())
    }

    pub fn has_valid_moves(&self) -> bool {
        self.world.game_state().has_valid_moves
    }

    pub fn is_win(&self) -> bool {
        self.world.game_state().status == GameStatus::Won
    }

    pub fn status(&self) -> GameState {
        self.world.game_state()
    }

    pub fn snapshot(&self) -> PileStoreSnapshot {
        PileStoreSnapshot::from_world(&self.world)
    }

    /// "HA" や "S10" みたいなトークンからカードを探す。
    /// 変なトークンは warn ログを出して None。
    pub fn find_card(&self, token: &str) -> Option<Entity> {
        parse_card_token(token).ok().map(|(suit, rank)| Card::new(suit, rank).id())
    }

    /// 今打てる手を全部並べる。
    /// 場札の一番上 (表向き) と表示中の一番上から、行ける山を全部探すよ。
    /// 列の一番下にいる K を別の空き列に動かす手は意味がないので入れない。
    pub fn hint(&self) -> Vec<HintMove> {
        let mut sources: Vec<Entity> = (0..TABLEAU_COUNT)
            .filter_map(|i| self.world.tableau(i).last().copied())
            .collect();
        sources.extend(self.world.waste().last().copied());

        let destinations = (0..TABLEAU_COUNT as u8)
            .map(StackType::Tableau)
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation));

        let mut moves = Vec::new();
        for destination in destinations {
            for &source in &sources {
                if !rules::can_stack_onto(&self.world, source, destination) {
                    continue;
                }
                let Some(card) = self.world.card(source) else {
                    continue;
                };
                if self.is_pointless_king_shift(source, card, destination) {
                    continue;
                }
                moves.push(HintMove { card: card.name(), destination });
            }
        }
        moves
    }

    fn is_pointless_king_shift(&self, source: Entity, card: &Card, destination: StackType) -> bool {
        let Some(info) = self.world.location(source) else {
            return false;
        };
        card.rank == Rank::King
            && matches!(info.stack_type, StackType::Tableau(_))
            && info.position_in_stack == 0
            && matches!(destination, StackType::Tableau(_))
    }

    /// JSON で来たコマンドをまとめて処理する入口。
    pub fn handle_command(&mut self, command: EngineCommand) -> CommandOutcome {
        match command {
            EngineCommand::NewGame { seed } => CommandOutcome::NewGame { snapshot: self.new_game(seed) },
            EngineCommand::Draw => match self.draw_from_stock() {
                Ok(result) => CommandOutcome::Drawn { result },
                Err(reason) => CommandOutcome::Rejected { reason },
            },
            EngineCommand::Move { card, destination } => match self.resolve(&card) {
                Ok(entity) => CommandOutcome::Moved { result: self.try_move(entity, destination) },
                Err(reason) => CommandOutcome::Rejected { reason },
            },
            EngineCommand::AutoMove { card } => match self.resolve(&card) {
                Ok(entity) => CommandOutcome::AutoMoved { result: self.try_auto_move(entity) },
                Err(reason) => CommandOutcome::Rejected { reason },
            },
            EngineCommand::Flip { card } => match self.resolve(&card).and_then(|entity| self.flip(entity)) {
                Ok(()) => CommandOutcome::Flipped { card },
                Err(reason) => CommandOutcome::Rejected { reason },
            },
            EngineCommand::Hint => CommandOutcome::Hint { moves: self.hint() },
        }
    }

    fn resolve(&self, token: &str) -> Result<Entity, MoveError> {
        let (suit, rank) = parse_card_token(token)?;
        Ok(Card::new(suit, rank).id())
    }

    fn refresh_state(&mut self) {
        self.win_system.run(&mut self.world);
    }
}
