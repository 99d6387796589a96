// src/config/timing.rs
//! ゲームの演出タイミングと初期シンボルの定数だよ！⏱️
//! GameConfig のデフォルト値はここから取ってくる。

/// ミスマッチのカードを裏に戻すまでの待ち時間 (ms)
pub const MISMATCH_DELAY_MS: u32 = 800;
/// 全部そろってから勝利ポップアップを出すまで (ms)
pub const WIN_POPUP_DELAY_MS: u32 = 200;
/// プレビューで1枚ずつめくる間隔 (ms)
pub const PREVIEW_STEP_MS: u32 = 60;
/// 全部めくり終わってから裏返すまで (ms)
pub const PREVIEW_HOLD_MS: u32 = 1200;

/// デフォルトの絵柄 (8種類 = 8ペア = 16枚)
pub const DEFAULT_SYMBOLS: [&str; 8] = ["🍎", "🍌", "🍇", "🍓", "🍒", "🍍", "🥝", "🍉"];
