// src/presentation.rs
//! TurnController が画面や音を動かすための窓口 (トレイト) だよ！
//!
//! コントローラは UI に状態を聞きに行かない。変化があったらここのメソッドを
//! 呼んで「こうなったよ！」って一方的に押し出すだけ。

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardStatus};
use crate::logic::deck::Deck;

/// 演出の種類。鳴らしっぱなし・動かしっぱなしで、コントローラは完了を待たない！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Flip,
    Match,
    Mismatch,
    Win,
}

/// 盤面の描画・演出・ポップアップを担当する外部の協力者。
///
/// ブラウザでは `app::dom_presenter::DomPresenter`、テストでは記録するだけの実装を使うよ。
pub trait Presenter {
    /// デッキ全体からカード要素を作り直す
    fn render_board(&mut self, deck: &Deck);
    /// カード1枚の見た目を更新する
    fn set_card_visual(&mut self, card: &Card, status: CardStatus);
    fn play_effect(&mut self, kind: EffectKind);
    fn show_win_popup(&mut self, final_moves: u32);
    fn hide_popup(&mut self);
    /// 手数やペア数が変わるたびに呼ばれる
    fn update_stats_display(&mut self, moves: u32, matches: u32);
}
