//! RGB pixel buffer flushed to the terminal as Unicode half-blocks, two
//! pixels per character cell. Out-of-bounds writes are clipped, so callers
//! can paint entities that hang off the screen edges freely.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color as CColor},
};

use crate::sprite::Sprite;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    pub fn darken(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }
}

pub struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    base: Rgb,
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize, base: Rgb) -> Self {
        Self {
            w,
            h,
            base,
            px: vec![base; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.clear();
        self.px.resize(w * h, self.base);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Filled circle; samples pixel centers against the radius.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, c: Rgb) {
        if r <= 0.0 {
            return;
        }
        let x0 = (cx - r).floor() as i32;
        let x1 = (cx + r).ceil() as i32;
        let y0 = (cy - r).floor() as i32;
        let y1 = (cy + r).ceil() as i32;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.set(px, py, c);
                }
            }
        }
    }

    /// Blit a sprite into the destination rectangle, nearest-neighbor
    /// scaled. Transparent pixels are skipped; a sprite with no pixel data
    /// (or an empty destination) draws nothing.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32, w: i32, h: i32) {
        if !sprite.is_ready() || w <= 0 || h <= 0 {
            return;
        }
        for oy in 0..h {
            let sy = (oy as usize * sprite.h) / h as usize;
            for ox in 0..w {
                let sx = (ox as usize * sprite.w) / w as usize;
                if let Some(c) = sprite.pixel(sx, sy) {
                    self.set(x + ox, y + oy, c);
                }
            }
        }
    }

    /// Flush the buffer to the terminal. Each character cell carries two
    /// vertically stacked pixels via '▀'; color changes are coalesced to
    /// keep the escape stream short.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if top == bot {
                    if bg != Some(top) {
                        queue!(out, style::SetBackgroundColor(to_cterm(top)))?;
                        bg = Some(top);
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if fg != Some(top) {
                        queue!(out, style::SetForegroundColor(to_cterm(top)))?;
                        fg = Some(top);
                    }
                    if bg != Some(bot) {
                        queue!(out, style::SetBackgroundColor(to_cterm(bot)))?;
                        bg = Some(bot);
                    }
                    queue!(out, style::Print('\u{2580}'))?;
                }
            }
            if row < rows - 1 {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                fg = None;
                bg = None;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

fn to_cterm(c: Rgb) -> CColor {
    CColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}
