// src/components/game_state.rs

use serde::{Serialize, Deserialize};

/// ゲーム全体の今の状態だよ！🏆
///
/// TurnController の `started` / `won` フラグから作られる「見える用」の値。
/// JS 側にスナップショットとして渡すのに使うんだ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 最初のプレビュー中。クリックは受け付けない！
    Previewing,
    /// プレイ中
    Playing,
    /// 勝利！🎉 最終的な手数付き
    Won { moves: u32 },
}

/// 1ターン分の選択状態。
///
/// `second` は `first` が埋まってる時しかセットされないよ (record で保証)。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    first: Option<usize>,
    second: Option<usize>,
}

/// `TurnState::record` の結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// 1枚目として記録された
    First,
    /// 2枚目として記録された。ペアの相手 (1枚目) 付き
    Second { first: usize },
}

impl TurnState {
    pub fn first(&self) -> Option<usize> {
        self.first
    }

    pub fn second(&self) -> Option<usize> {
        self.second
    }

    /// 2枚そろって評価待ちか？
    pub fn is_pending(&self) -> bool {
        self.second.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// カードを1枚記録するよ。1枚目が空なら first、そうでなければ second に入る。
    pub fn record(&mut self, index: usize) -> Pick {
        match self.first {
            None => {
                self.first = Some(index);
                Pick::First
            }
            Some(first) => {
                debug_assert!(self.second.is_none(), "turn already holds two cards");
                self.second = Some(index);
                Pick::Second { first }
            }
        }
    }

    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}

/// 手数とペア数のカウンター！ゲーム中は増えるだけ📈
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub moves: u32,
    pub matches: u32,
}

impl SessionStats {
    pub fn record_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    pub fn record_match(&mut self) {
        self.matches = self.matches.saturating_add(1);
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fills_first_then_second() {
        let mut turn = TurnState::default();
        assert!(turn.is_empty());

        assert_eq!(turn.record(4), Pick::First);
        assert_eq!(turn.first(), Some(4));
        assert_eq!(turn.second(), None);
        assert!(!turn.is_pending());

        assert_eq!(turn.record(7), Pick::Second { first: 4 });
        assert_eq!(turn.second(), Some(7));
        assert!(turn.is_pending());

        turn.clear();
        assert!(turn.is_empty());
        assert_eq!(turn.second(), None);
    }

    #[test]
    fn stats_only_grow() {
        let mut stats = SessionStats::default();
        stats.record_move();
        stats.record_move();
        stats.record_match();

        assert_eq!(stats, SessionStats { moves: 2, matches: 1 });
    }

    #[test]
    fn game_status_comparison() {
        let won = GameStatus::Won { moves: 9 };
        assert_eq!(won, GameStatus::Won { moves: 9 });
        assert_ne!(won, GameStatus::Won { moves: 10 });
        assert_ne!(GameStatus::Playing, GameStatus::Previewing);
    }
}
