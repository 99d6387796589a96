// src/systems/scheduler.rs
//! 後から実行される処理 (タイマー) を「データ」として表すモジュールだよ！⏰
//!
//! コントローラはクロージャを直接タイマーに渡さない。代わりに
//! `ScheduledTask` をキューに積んで、ホスト (ブラウザなら setTimeout) が
//! 時間が来たら `TurnController::run_task` に返してくれる。
//! 各タスクは作られた時のセッション ID を持ってて、リスタート後に届いた古いタスクは無視される。

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// 1ゲーム (1デッキ) を識別する番号。`new_game` のたびに増える。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    pub fn next(self) -> Self {
        SessionId(self.0.wrapping_add(1))
    }
}

/// 遅れて実行する処理の中身。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// プレビュー: index 番目のカードを表に見せる
    PreviewReveal { index: usize },
    /// プレビュー終了: 全部裏に戻してプレイ開始！
    PreviewHide,
    /// ミスマッチした2枚を裏に戻す
    MismatchRevert { first: usize, second: usize },
    /// 勝利ポップアップを出す
    ShowWinPopup { moves: u32 },
}

/// セッション ID と待ち時間つきのタスク。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub session: SessionId,
    /// 積まれた時点からの待ち時間 (ms)
    pub delay_ms: u32,
    pub kind: TaskKind,
}

/// ホストに渡す前のタスクを溜めておくキュー。
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<ScheduledTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, session: SessionId, delay_ms: u32, kind: TaskKind) {
        self.tasks.push_back(ScheduledTask { session, delay_ms, kind });
    }

    /// 積まれた順に全部取り出す。
    pub fn drain(&mut self) -> Vec<ScheduledTask> {
        self.tasks.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
