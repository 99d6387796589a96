// src/app/mod.rs
//! ブラウザとつなぐ部分！DOM・イベント・タイマー・音。

use std::cell::RefCell;
use std::rc::Rc;

use crate::systems::turn_controller::TurnController;

pub mod audio;
pub mod dom_presenter;
pub mod event_handler;
pub mod game_app;
pub mod state_getter;
pub mod timer;

use self::dom_presenter::DomPresenter;

/// イベントリスナーとタイマーのコールバックで共有するコントローラ。
/// Wasm はシングルスレッドなので Rc<RefCell<>> で十分！
pub(crate) type SharedController = Rc<RefCell<TurnController<DomPresenter>>>;

// --- DOM の ID たち ---
pub const BOARD_ID: &str = "game-board";
pub const MOVES_ID: &str = "moves";
pub const MATCHES_ID: &str = "matches";
pub const RESTART_ID: &str = "restart";
pub const PLAY_AGAIN_ID: &str = "play-again";
pub const POPUP_ID: &str = "win-popup";
pub const POPUP_MESSAGE_ID: &str = "win-message";
pub const LOADING_ID: &str = "loading";
