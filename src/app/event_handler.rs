// src/app/event_handler.rs
//! ユーザー入力 (クリック・ボタン・キーボード) を TurnController につなぐよ！
//!
//! カード1枚ずつにリスナーを付けると、リスタートのたびに付け直しになっちゃう。
//! だから盤面に1個だけ付けて、クリックされた要素の `data-index` から位置を調べる (イベント委譲)。

use std::rc::Rc;

use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, EventTarget, KeyboardEvent};

use crate::app::{timer, SharedController, BOARD_ID, PLAY_AGAIN_ID, RESTART_ID};
use crate::logic::rules::IgnoreReason;
use crate::presentation::Presenter;
use crate::systems::turn_controller::SelectionResult;

/// 付けたリスナー。外す時に target と event 名が必要だから一緒に持っておく。
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// キーボードショートカットで何をするか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Restart,
    DismissPopup,
}

/// キー名をコマンドに変換する。修飾キー付き (Ctrl+R でリロードとか) は無視！
pub fn key_command(key: &str, with_modifier: bool) -> Option<KeyCommand> {
    if with_modifier {
        return None;
    }
    match key {
        "r" | "R" => Some(KeyCommand::Restart),
        "Escape" => Some(KeyCommand::DismissPopup),
        _ => None,
    }
}

/// `data-index` 属性の値をカード位置に変換。
pub fn parse_card_index(attr: &str) -> Option<usize> {
    attr.trim().parse().ok()
}

/// クリックされた要素から一番近い `.card` を探して、その位置を返す。
fn card_index_from_event(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let card = target.closest(".card").ok()??;
    parse_card_index(&card.get_attribute("data-index")?)
}

// --- コントローラ操作 (GameApp からも呼ばれる) ---

/// カードの選択。借用を返してからタイマーを登録するよ。
pub(crate) fn handle_card_click(controller: &SharedController, index: usize) -> SelectionResult {
    let result = match controller.try_borrow_mut() {
        Ok(mut controller) => controller.select_card(index),
        Err(e) => {
            error!("EventHandler: controller is busy, dropping click on {}: {}", index, e);
            return SelectionResult::Ignored(IgnoreReason::Locked);
        }
    };
    debug!("EventHandler: card {} -> {:?}", index, result);
    timer::schedule_pending(controller);
    result
}

pub(crate) fn handle_restart(controller: &SharedController) {
    match controller.try_borrow_mut() {
        Ok(mut controller) => controller.new_game(),
        Err(e) => {
            error!("EventHandler: controller is busy, cannot restart: {}", e);
            return;
        }
    }
    timer::schedule_pending(controller);
}

pub(crate) fn handle_dismiss_popup(controller: &SharedController) {
    match controller.try_borrow_mut() {
        Ok(mut controller) => controller.presenter_mut().hide_popup(),
        Err(e) => error!("EventHandler: controller is busy, cannot hide popup: {}", e),
    }
}

// --- リスナーの付け外し ---

fn attach(
    listeners: &mut Vec<Listener>,
    target: EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    listeners.push(Listener { target, event, closure });
    Ok(())
}

/// 盤面クリック・リスタートボタン・もう一回ボタン・キーボードのリスナーを付けるよ！
pub(crate) fn attach_listeners(
    controller: &SharedController,
    listeners: &mut Vec<Listener>,
) -> Result<(), JsValue> {
    let window = window().ok_or("Failed to get window")?;
    let document = window.document().ok_or("Failed to get document")?;

    // --- 盤面 (カードのクリック) ---
    let board = document
        .get_element_by_id(BOARD_ID)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", BOARD_ID)))?;
    let board_controller = Rc::clone(controller);
    attach(listeners, board.into(), "click", move |event: Event| {
        match card_index_from_event(&event) {
            Some(index) => {
                handle_card_click(&board_controller, index);
            }
            None => debug!("EventHandler: click on board outside any card"),
        }
    })?;

    // --- ボタン (無いページもあるので見つからなければ warn だけ) ---
    for id in [RESTART_ID, PLAY_AGAIN_ID] {
        match document.get_element_by_id(id) {
            Some(button) => {
                let button_controller = Rc::clone(controller);
                attach(listeners, button.into(), "click", move |_event: Event| {
                    handle_restart(&button_controller);
                })?;
            }
            None => warn!("EventHandler: #{} not found, skipping listener", id),
        }
    }

    // --- キーボード ---
    let key_controller = Rc::clone(controller);
    attach(listeners, document.into(), "keydown", move |event: Event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            error!("Failed to cast event to KeyboardEvent in keydown listener");
            return;
        };
        let with_modifier = key_event.ctrl_key() || key_event.meta_key() || key_event.alt_key();
        match key_command(&key_event.key(), with_modifier) {
            Some(KeyCommand::Restart) => handle_restart(&key_controller),
            Some(KeyCommand::DismissPopup) => handle_dismiss_popup(&key_controller),
            None => {}
        }
    })?;

    debug!("EventHandler: attached {} listeners", listeners.len());
    Ok(())
}

/// 付けたリスナーを全部外す。クロージャはここで drop される。
pub(crate) fn detach_listeners(listeners: &mut Vec<Listener>) {
    for listener in listeners.drain(..) {
        if let Err(e) = listener
            .target
            .remove_event_listener_with_callback(listener.event, listener.closure.as_ref().unchecked_ref())
        {
            error!("EventHandler: failed to detach {} listener: {:?}", listener.event, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_shortcuts() {
        assert_eq!(key_command("r", false), Some(KeyCommand::Restart));
        assert_eq!(key_command("R", false), Some(KeyCommand::Restart));
        assert_eq!(key_command("Escape", false), Some(KeyCommand::DismissPopup));
        // Ctrl+R はブラウザのリロードなので邪魔しない
        assert_eq!(key_command("r", true), None);
        assert_eq!(key_command("x", false), None);
    }

    #[test]
    fn card_index_attribute() {
        assert_eq!(parse_card_index("7"), Some(7));
        assert_eq!(parse_card_index(" 12 "), Some(12));
        assert_eq!(parse_card_index("-1"), None);
        assert_eq!(parse_card_index("card"), None);
    }
}
