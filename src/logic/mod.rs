// src/logic/mod.rs
//! ゲームのルールやデッキ操作みたいな、状態を持たないロジック。

pub mod deck;
pub mod rules;
