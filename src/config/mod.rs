// src/config/mod.rs
//! ゲームの設定！JS から JSON で上書きできるよ。

pub mod timing;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::timing::{
    DEFAULT_SYMBOLS, MISMATCH_DELAY_MS, PREVIEW_HOLD_MS, PREVIEW_STEP_MS, WIN_POPUP_DELAY_MS,
};

/// プレビュー (最初に全カードを見せる演出) の設定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub enabled: bool,
    pub step_ms: u32,
    pub hold_ms: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step_ms: PREVIEW_STEP_MS,
            hold_ms: PREVIEW_HOLD_MS,
        }
    }
}

/// ゲーム全体の設定だよ！⚙️
///
/// 足りないフィールドは `#[serde(default)]` でデフォルト値になるから、
/// JS 側は `{"mismatch_delay_ms": 500}` みたいに変えたいとこだけ書けばOK！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// ペアにする絵柄。1つにつき2枚のカードになる
    pub symbols: Vec<String>,
    pub mismatch_delay_ms: u32,
    pub win_popup_delay_ms: u32,
    pub preview: PreviewConfig,
    pub sound_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            win_popup_delay_ms: WIN_POPUP_DELAY_MS,
            preview: PreviewConfig::default(),
            sound_enabled: true,
        }
    }
}

/// 設定の読み込み・検証エラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid game config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("game config needs at least one symbol")]
    NoSymbols,
    #[error("symbol {0:?} appears more than once")]
    DuplicateSymbol(String),
}

impl GameConfig {
    /// JSON 文字列から設定を作って、そのまま検証もするよ。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 絵柄が空だったり、同じ絵柄が2回書かれてたらダメ！🙅‍♀️
    /// (同じ絵柄が4枚になってペアの判定がおかしくなるから)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        match self.symbols.iter().duplicates().next() {
            Some(symbol) => Err(ConfigError::DuplicateSymbol(symbol.clone())),
            None => Ok(()),
        }
    }

    /// ペアの数 (N)。
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }
}
