// src/components/mod.rs

// ゲームのデータ部品たち！
pub mod card;
pub mod game_state;

pub use card::{Card, CardStatus, Face};
pub use game_state::{GameStatus, Pick, SessionStats, TurnState};
