// src/systems/turn_controller.rs

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::components::card::CardStatus;
use crate::components::game_state::{GameStatus, Pick, SessionStats, TurnState};
use crate::config::GameConfig;
use crate::logic::deck::{create_pair_faces, Deck};
use crate::logic::rules::{self, IgnoreReason};
use crate::presentation::{EffectKind, Presenter};
use crate::systems::scheduler::{ScheduledTask, SessionId, TaskKind, TaskQueue};

/// `select_card` の結果だよ！
///
/// UI にとっては `Ignored` は「何も起きない」のと同じ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionResult {
    Ignored(IgnoreReason),
    /// 1枚目をめくった (ターン継続中)
    FirstPicked { index: usize },
    /// ペア成立！
    Matched { first: usize, second: usize },
    /// はずれ。少し待ってから裏に戻る (MismatchRevert タスクが積まれてる)
    Mismatched { first: usize, second: usize },
    /// 最後のペアがそろって勝利！🎉
    Won { moves: u32 },
}

/// JS 側に渡すカード1枚分の情報。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: usize,
    pub symbol: String,
    pub status: CardStatus,
}

/// 盤面まるごとのスナップショット (デバッグ表示用)。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub session: SessionId,
    pub status: GameStatus,
    pub moves: u32,
    pub matches: u32,
    pub pairs: usize,
    pub locked: bool,
    pub first_selected: Option<usize>,
    pub second_selected: Option<usize>,
    pub cards: Vec<CardView>,
}

/// 神経衰弱のターン進行を管理するコントローラだよ！🃏🔒
///
/// デッキ・選択状態・カウンター・ロックを全部ここが持ってて、
/// 状態を変えられるのもここだけ。画面への反映は `Presenter` に押し出す。
///
/// 時間待ちが必要な処理 (ミスマッチの戻し、プレビュー、勝利ポップアップ) は
/// その場で実行しないで `ScheduledTask` として積むよ。ホストが
/// `take_scheduled` で取り出して、時間が来たら `run_task` に戻してくれる。
pub struct TurnController<P: Presenter> {
    config: GameConfig,
    deck: Deck,
    turn: TurnState,
    stats: SessionStats,
    /// true の間はクリックを受け付けない (評価待ち・プレビュー中・勝利後)
    locked: bool,
    /// プレビューが終わったら true
    started: bool,
    won: bool,
    session: SessionId,
    tasks: TaskQueue,
    presenter: P,
    rng: StdRng,
}

impl<P: Presenter> TurnController<P> {
    /// 乱数をエントロピーから作るコンストラクタ。ブラウザではこっち！
    pub fn new(config: GameConfig, presenter: P) -> Self {
        Self::with_rng(config, presenter, StdRng::from_entropy())
    }

    /// 乱数を指定するコンストラクタ。テストでシード固定したい時用。
    ///
    /// 作った直後はまだゲームが始まってない (ロック中) ので、`new_game` を呼んでね！
    ///
    /// # Panics
    /// `config.symbols` に同じ絵柄が2回入ってる場合 (先に `GameConfig::validate` で弾いてね)。
    pub fn with_rng(config: GameConfig, presenter: P, rng: StdRng) -> Self {
        let deck = Deck::from_faces(config.symbols.clone(), create_pair_faces(config.pair_count()));
        Self {
            config,
            deck,
            turn: TurnState::default(),
            stats: SessionStats::default(),
            locked: true,
            started: false,
            won: false,
            session: SessionId::default(),
            tasks: TaskQueue::new(),
            presenter,
            rng,
        }
    }

    // --- 操作 ---

    /// 新しいゲームを始めるよ！デッキをシャッフルして作り直す。
    pub fn new_game(&mut self) {
        let deck = Deck::shuffled(&self.config.symbols, &mut self.rng);
        self.new_game_with_deck(deck);
    }

    /// 指定したデッキで新しいゲームを始める。
    ///
    /// セッション ID を進めるので、前のゲームで積まれたタスクは届いても何もしなくなる。
    pub fn new_game_with_deck(&mut self, deck: Deck) {
        self.session = self.session.next();
        self.tasks.clear();
        info!(
            "TurnController: new game (session {:?}, {} cards)",
            self.session,
            deck.len()
        );

        self.deck = deck;
        self.turn.clear();
        self.stats = SessionStats::default();
        self.locked = true;
        self.started = false;
        self.won = false;

        self.presenter.hide_popup();
        self.presenter.render_board(&self.deck);
        self.presenter.update_stats_display(self.stats.moves, self.stats.matches);

        if self.config.preview.enabled {
            self.schedule_preview();
        } else {
            self.finish_preview();
        }
    }

    /// カードが選ばれた時の処理！UI からの入口はここだけ。
    ///
    /// 条件を満たさないクリックは何も変えずに `Ignored` を返す。
    pub fn select_card(&mut self, index: usize) -> SelectionResult {
        if let Err(reason) = rules::check_selectable(&self.deck, index, self.started, self.locked) {
            debug!("TurnController: ignoring card {} ({:?})", index, reason);
            return SelectionResult::Ignored(reason);
        }

        self.apply_status(index, CardStatus::Revealed);
        self.presenter.play_effect(EffectKind::Flip);

        match self.turn.record(index) {
            Pick::First => SelectionResult::FirstPicked { index },
            Pick::Second { first } => {
                self.stats.record_move();
                self.presenter.update_stats_display(self.stats.moves, self.stats.matches);
                self.locked = true;
                self.evaluate(first, index)
            }
        }
    }

    /// 時間が来たタスクを実行するよ。
    ///
    /// 今のセッションのタスクじゃなければ何もしないで `false`。
    pub fn run_task(&mut self, task: ScheduledTask) -> bool {
        if task.session != self.session {
            debug!(
                "TurnController: dropping stale task {:?} (session {:?}, current {:?})",
                task.kind, task.session, self.session
            );
            return false;
        }

        match task.kind {
            TaskKind::PreviewReveal { index } => {
                if let Some(card) = self.deck.card(index) {
                    self.presenter.set_card_visual(card, CardStatus::Revealed);
                }
            }
            TaskKind::PreviewHide => self.finish_preview(),
            TaskKind::MismatchRevert { first, second } => self.revert_mismatch(first, second),
            TaskKind::ShowWinPopup { moves } => self.presenter.show_win_popup(moves),
        }
        true
    }

    /// 積まれたタスクを全部取り出す (ホスト用)。
    pub fn take_scheduled(&mut self) -> Vec<ScheduledTask> {
        self.tasks.drain()
    }

    // --- 内部処理 ---

    /// 2枚そろった時の評価。
    fn evaluate(&mut self, first: usize, second: usize) -> SelectionResult {
        let is_match = match (self.deck.card(first), self.deck.card(second)) {
            (Some(a), Some(b)) => rules::is_pair(a, b),
            _ => false,
        };

        if !is_match {
            debug!("TurnController: mismatch {} / {}", first, second);
            self.tasks.push(
                self.session,
                self.config.mismatch_delay_ms,
                TaskKind::MismatchRevert { first, second },
            );
            return SelectionResult::Mismatched { first, second };
        }

        self.apply_status(first, CardStatus::Matched);
        self.apply_status(second, CardStatus::Matched);
        self.stats.record_match();
        self.turn.clear();
        self.locked = false;
        self.presenter.play_effect(EffectKind::Match);
        self.presenter.update_stats_display(self.stats.moves, self.stats.matches);
        debug!("TurnController: matched {} / {}", first, second);

        if rules::is_won(self.stats.matches, self.deck.pair_count()) {
            return self.declare_win();
        }
        SelectionResult::Matched { first, second }
    }

    fn declare_win(&mut self) -> SelectionResult {
        debug_assert!(self.deck.all_matched());
        let moves = self.stats.moves;
        self.locked = true;
        self.won = true;
        info!("TurnController: game won in {} moves", moves);

        self.presenter.play_effect(EffectKind::Win);
        self.tasks.push(
            self.session,
            self.config.win_popup_delay_ms,
            TaskKind::ShowWinPopup { moves },
        );
        SelectionResult::Won { moves }
    }

    fn revert_mismatch(&mut self, first: usize, second: usize) {
        if self.turn.first() != Some(first) || self.turn.second() != Some(second) {
            warn!(
                "TurnController: mismatch revert for {} / {} does not match pending turn {:?}",
                first, second, self.turn
            );
            return;
        }
        self.apply_status(first, CardStatus::Hidden);
        self.apply_status(second, CardStatus::Hidden);
        self.turn.clear();
        self.locked = false;
        self.presenter.play_effect(EffectKind::Mismatch);
    }

    /// 1枚ずつめくるタスクと、最後に全部裏返すタスクを積む。
    fn schedule_preview(&mut self) {
        let step = self.config.preview.step_ms;
        for index in 0..self.deck.len() {
            self.tasks.push(
                self.session,
                step.saturating_mul(index as u32),
                TaskKind::PreviewReveal { index },
            );
        }
        let hide_at = step
            .saturating_mul(self.deck.len() as u32)
            .saturating_add(self.config.preview.hold_ms);
        self.tasks.push(self.session, hide_at, TaskKind::PreviewHide);
    }

    fn finish_preview(&mut self) {
        for card in self.deck.cards() {
            self.presenter.set_card_visual(card, card.status);
        }
        self.locked = false;
        self.started = true;
        debug!("TurnController: preview finished, accepting input");
    }

    fn apply_status(&mut self, index: usize, status: CardStatus) {
        if let Some(card) = self.deck.set_status(index, status) {
            self.presenter.set_card_visual(card, status);
        }
    }

    // --- 参照用 ---

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won { moves: self.stats.moves }
        } else if !self.started {
            GameStatus::Previewing
        } else {
            GameStatus::Playing
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            session: self.session,
            status: self.status(),
            moves: self.stats.moves,
            matches: self.stats.matches,
            pairs: self.deck.pair_count(),
            locked: self.locked,
            first_selected: self.turn.first(),
            second_selected: self.turn.second(),
            cards: self
                .deck
                .cards()
                .iter()
                .map(|card| CardView {
                    id: card.id,
                    symbol: self.deck.label(card.face).to_string(),
                    status: card.status,
                })
                .collect(),
        }
    }
}
