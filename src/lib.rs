//! Retro terminal Snake on a wrap-around grid.
//!
//! The playing field is a torus: stepping off any edge re-enters from the
//! opposite edge, and running into your own body does not end the program —
//! the field resets in place and play continues. The simulation ([`snake`],
//! [`food`], [`game`]) is a deterministic tick-driven state machine with no
//! terminal dependencies; rendering, input, and pacing live in the outer
//! layers ([`renderer`], [`input`], `main`).

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
