// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod logger;
pub mod logic;
pub mod presentation;
pub mod systems;

// JS 側から使う主要な型を再エクスポート
pub use crate::app::game_app::GameApp;
pub use crate::config::GameConfig;
pub use crate::presentation::{EffectKind, Presenter};
pub use crate::systems::turn_controller::{SelectionResult, TurnController};

// JavaScript の console.log / console.error を Rust から呼び出すための準備 (extern ブロック)。
// ネイティブのテストからは呼べないので、コアのロジックでは log クレートのマクロを使ってね！
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub(crate) fn error(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    log("Panic hook set!");
}
