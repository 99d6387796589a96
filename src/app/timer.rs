// src/app/timer.rs
//! コントローラに溜まったタスクを `window.setTimeout` に渡す係だよ！⏰
//!
//! コールバックはコントローラを借りてタスクを実行して (前のセッションのタスクなら何もしない)、
//! そのタスクが新しく積んだ分をまた登録する。

use std::rc::Rc;

use js_sys::Function;
use log::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::app::SharedController;
use crate::systems::scheduler::ScheduledTask;

/// setTimeout に渡す待ち時間。i32 に収まらない分は切り詰める。
pub fn timeout_ms(task: &ScheduledTask) -> i32 {
    i32::try_from(task.delay_ms).unwrap_or(i32::MAX)
}

/// コントローラに溜まってるタスクを全部タイマーに登録するよ！
pub(crate) fn schedule_pending(controller: &SharedController) {
    let tasks = match controller.try_borrow_mut() {
        Ok(mut controller) => controller.take_scheduled(),
        Err(e) => {
            error!("Timer: controller is busy, cannot drain tasks: {}", e);
            return;
        }
    };

    for task in tasks {
        if let Err(e) = schedule_task(controller, task) {
            error!("Timer: failed to schedule {:?}: {:?}", task.kind, e);
        }
    }
}

fn schedule_task(controller: &SharedController, task: ScheduledTask) -> Result<(), JsValue> {
    let window = window().ok_or("Failed to get window")?;
    let controller_clone = Rc::clone(controller);

    let callback = Closure::once_into_js(move || {
        let applied = match controller_clone.try_borrow_mut() {
            Ok(mut controller) => controller.run_task(task),
            Err(e) => {
                error!("Timer: controller is busy, dropping {:?}: {}", task.kind, e);
                return;
            }
        };
        // run_task の借用はここで解放済み。次のタスクがあれば登録
        if applied {
            schedule_pending(&controller_clone);
        }
    });

    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<Function>(),
        timeout_ms(&task),
    )?;
    Ok(())
}
