#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player;
pub mod rules;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
mod turn;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use rules::{evaluate, winning_line};
#[cfg(feature = "std")]
pub use input::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use turn::*;
