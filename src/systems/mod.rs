// src/systems/mod.rs
//! ゲームの進行ロジック！ターン管理と、遅れて実行するタスク。

pub mod scheduler;
pub mod turn_controller;

pub use scheduler::{ScheduledTask, SessionId, TaskKind};
pub use turn_controller::{GameSnapshot, SelectionResult, TurnController};
