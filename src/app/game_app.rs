// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::app::dom_presenter::DomPresenter;
use crate::app::event_handler::{self, Listener};
use crate::app::{state_getter, SharedController, LOADING_ID};
use crate::components::game_state::GameStatus;
use crate::config::GameConfig;
use crate::systems::turn_controller::{SelectionResult, TurnController};

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    controller: SharedController,
    // イベントリスナーのクロージャ。drop される時に外すよ
    listeners: Vec<Listener>,
}

/// ローディング画面をフェードアウト (CSS の .hidden にお任せ)。
fn fade_loading_screen() {
    let loading = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(LOADING_ID));
    if let Some(element) = loading {
        if let Err(e) = element.class_list().add_1("hidden") {
            warn!("GameApp: failed to hide loading screen: {:?}", e);
        }
    }
}

impl GameApp {
    fn build(config: GameConfig) -> Result<GameApp, JsValue> {
        let presenter = DomPresenter::from_document(config.sound_enabled)?;
        let controller = TurnController::new(config, presenter);
        Ok(GameApp {
            controller: Rc::new(RefCell::new(controller)),
            listeners: Vec::new(),
        })
    }

    fn read<T>(&self, f: impl FnOnce(&TurnController<DomPresenter>) -> T) -> Option<T> {
        match self.controller.try_borrow() {
            Ok(controller) => Some(f(&controller)),
            Err(e) => {
                warn!("GameApp: controller is busy: {}", e);
                None
            }
        }
    }
}

// GameApp のメソッドを JS に公開していくよ！
#[wasm_bindgen]
impl GameApp {
    /// デフォルト設定でゲームを作る。ページに #game-board などが必要！
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<GameApp, JsValue> {
        Self::build(GameConfig::default())
    }

    /// JSON の設定でゲームを作る。例: `{"symbols": ["🐶", "🐱"], "sound_enabled": false}`
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::build(config)
    }

    /// リスナーを付けて、ローディング画面を消して、最初のゲームを始める！
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<(), JsValue> {
        if !self.listeners.is_empty() {
            warn!("GameApp: start() called twice, ignoring");
            return Ok(());
        }
        event_handler::attach_listeners(&self.controller, &mut self.listeners)?;
        fade_loading_screen();
        event_handler::handle_restart(&self.controller);
        info!("GameApp: started");
        Ok(())
    }

    #[wasm_bindgen]
    pub fn restart(&self) {
        event_handler::handle_restart(&self.controller);
    }

    /// カードを選ぶ。受け付けられたら true (無視されたら false)。
    #[wasm_bindgen]
    pub fn select_card(&self, index: usize) -> bool {
        !matches!(
            event_handler::handle_card_click(&self.controller, index),
            SelectionResult::Ignored(_)
        )
    }

    #[wasm_bindgen]
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_state_json(&self.controller)
    }

    #[wasm_bindgen]
    pub fn moves(&self) -> u32 {
        self.read(|c| c.stats().moves).unwrap_or(0)
    }

    #[wasm_bindgen]
    pub fn matches(&self) -> u32 {
        self.read(|c| c.stats().matches).unwrap_or(0)
    }

    #[wasm_bindgen]
    pub fn is_won(&self) -> bool {
        self.read(|c| matches!(c.status(), GameStatus::Won { .. })).unwrap_or(false)
    }
}

impl Drop for GameApp {
    fn drop(&mut self) {
        event_handler::detach_listeners(&mut self.listeners);
    }
}
