//! Paint pass: projects the world into the pixel buffer and draws the
//! frame back-to-front. Reads the game state, never mutates it.

use crate::canvas::{PixelBuf, Rgb};
use crate::game::{
    Game, OBSTACLE_HEIGHT, OBSTACLE_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_X,
};
use crate::sprite::Sprites;

/// World units per buffer pixel. An 80x24 terminal (80x48 pixels) is a
/// 640x384 world, tall enough for the full jump arc over the floor band.
pub const WORLD_PER_PIXEL: f64 = 8.0;

pub const SKY_TOP: Rgb = Rgb(70, 180, 200);
pub const SKY_BOT: Rgb = Rgb(190, 232, 245);
pub const FLOOR: Rgb = Rgb(139, 69, 19);
const FLOOR_EDGE: Rgb = Rgb(101, 50, 14);
const CLOUD: Rgb = Rgb(255, 255, 255);
const WHITE: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(30, 30, 30);
const PANEL: Rgb = Rgb(210, 185, 110);
const PANEL_LIGHT: Rgb = Rgb(220, 195, 120);

fn to_px(v: f64) -> i32 {
    (v / WORLD_PER_PIXEL).round() as i32
}

fn size_px(v: f64) -> i32 {
    ((v / WORLD_PER_PIXEL).round() as i32).max(1)
}

/// One frame: sky, floor band, clouds, player, obstacles, score.
pub fn draw(game: &Game, sprites: &Sprites, buf: &mut PixelBuf) {
    draw_sky(buf);
    draw_floor(game, buf);

    for c in &game.clouds {
        let cx = c.x / WORLD_PER_PIXEL;
        let cy = c.y / WORLD_PER_PIXEL;
        let r = c.size / WORLD_PER_PIXEL;
        buf.fill_circle(cx, cy, r, CLOUD);
        buf.fill_circle(cx - r * 0.6, cy + r * 0.4, r * 0.8, CLOUD);
        buf.fill_circle(cx + r * 0.6, cy + r * 0.4, r * 0.8, CLOUD);
        buf.fill_circle(cx, cy - r * 0.4, r * 0.7, CLOUD);
    }

    buf.blit(
        &sprites.runner,
        to_px(PLAYER_X),
        to_px(game.player.y),
        size_px(PLAYER_WIDTH),
        size_px(PLAYER_HEIGHT),
    );

    for m in &game.obstacles {
        buf.blit(
            &sprites.mushroom,
            to_px(m.x),
            to_px(m.y),
            size_px(OBSTACLE_WIDTH),
            size_px(OBSTACLE_HEIGHT),
        );
    }

    draw_number(buf, buf.width() as i32 / 2, 3, game.score, WHITE);
}

fn draw_sky(buf: &mut PixelBuf) {
    let h = buf.height().max(1);
    for y in 0..buf.height() {
        let t = (y * 256 / h) as u16;
        let c = Rgb::lerp(SKY_TOP, SKY_BOT, t);
        for x in 0..buf.width() {
            buf.set(x as i32, y as i32, c);
        }
    }
}

fn draw_floor(game: &Game, buf: &mut PixelBuf) {
    let top = to_px(game.viewport.floor_top());
    let w = buf.width() as i32;
    let h = buf.height() as i32;
    buf.fill_rect(0, top, w, h - top, FLOOR);
    buf.fill_rect(0, top, w, 1, FLOOR_EDGE);
}

/// Painted once when the run ends: darkened frame, panel, final score.
pub fn draw_game_over(game: &Game, buf: &mut PixelBuf) {
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let c = buf.get(x, y);
            buf.set(x as i32, y as i32, c.darken());
        }
    }

    let cx = buf.width() as i32 / 2;
    let cy = buf.height() as i32 / 2;
    let panel_w = 42;
    let panel_h = 18;
    let px = cx - panel_w / 2;
    let py = cy - panel_h / 2;
    buf.fill_rect(px - 1, py - 1, panel_w + 2, panel_h + 2, SHADOW);
    buf.fill_rect(px, py, panel_w, panel_h, PANEL);
    buf.fill_rect(px + 1, py + 1, panel_w - 2, panel_h - 2, PANEL_LIGHT);

    // "GAME OVER" as a blocky letter strip.
    let msg = "GAME OVER";
    let msg_w = msg.len() as i32 * 4;
    let mut bx = cx - msg_w / 2;
    for ch in msg.chars() {
        if ch != ' ' {
            buf.fill_rect(bx, py + 3, 3, 4, SHADOW);
        }
        bx += 4;
    }

    draw_number(buf, cx, py + 10, game.score, WHITE);
}

// 3x5 bitmap digits for the score readout.
#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, d: u8, fg: Rgb) {
    let glyph = &DIGITS[d as usize];
    for row in 0..5 {
        for col in 0..3 {
            if glyph[row * 3 + col] == 1 {
                let gx = x + col as i32;
                let gy = y + row as i32;
                buf.set(gx + 1, gy + 1, SHADOW);
                buf.set(gx, gy, fg);
            }
        }
    }
}

fn draw_number(buf: &mut PixelBuf, cx: i32, y: i32, n: u32, fg: Rgb) {
    let s = n.to_string();
    let total_w = s.len() as i32 * 4 - 1;
    let start_x = cx - total_w / 2;
    for (i, ch) in s.chars().enumerate() {
        let d = ch as u8 - b'0';
        draw_digit(buf, start_x + i as i32 * 4, y, d, fg);
    }
}
