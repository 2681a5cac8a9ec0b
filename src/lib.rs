//! A Cinnamoroll endless runner that lives in your terminal.
//!
//! `game` is the display-free simulation core; `canvas`, `sprite`, and
//! `render` paint it with half-block pixel graphics; `audio` adds
//! best-effort sound. The binary owns the terminal and the frame loop.

pub mod audio;
pub mod canvas;
pub mod game;
pub mod render;
pub mod sprite;
