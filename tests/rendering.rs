//! Paint-pass checks against hand-built states: the frame goes into a
//! plain pixel buffer, so assertions read pixels straight back out.

use cinna_run::canvas::{PixelBuf, Rgb};
use cinna_run::game::{Cloud, Game, Obstacle};
use cinna_run::render::{self, FLOOR, SKY_TOP, WORLD_PER_PIXEL};
use cinna_run::sprite::Sprites;

const WHITE: Rgb = Rgb(255, 255, 255);

/// An 80x48-pixel buffer and a game whose world viewport matches it.
fn fixture() -> (Game, Sprites, PixelBuf) {
    let (pw, ph) = (80usize, 48usize);
    let game = Game::seeded(pw as f64 * WORLD_PER_PIXEL, ph as f64 * WORLD_PER_PIXEL, 1);
    (game, Sprites::load(), PixelBuf::new(pw, ph, SKY_TOP))
}

#[test]
fn floor_band_spans_the_width() {
    let (game, sprites, mut buf) = fixture();
    render::draw(&game, &sprites, &mut buf);

    // floor_top = 384 - 80 = 304 world -> pixel row 38; row 38 is the
    // darker edge, everything below is the fill.
    for x in [0, 20, 40, 79] {
        assert_eq!(buf.get(x, 39), FLOOR);
        assert_eq!(buf.get(x, 47), FLOOR);
        assert_ne!(buf.get(x, 37), FLOOR);
    }
}

#[test]
fn runner_sprite_lands_on_its_box() {
    let (game, sprites, mut buf) = fixture();
    render::draw(&game, &sprites, &mut buf);

    // Player box: x 50, y 240, 64x64 world -> pixels (6, 30) to (14, 38).
    // Sample the middle of the face, which the art fills with white fur.
    assert_eq!(buf.get(9, 33), Rgb(248, 248, 248));
}

#[test]
fn score_digits_paint_at_top_center() {
    let (mut game, sprites, mut buf) = fixture();
    game.score = 7;
    render::draw(&game, &sprites, &mut buf);

    // Single digit centered on column 40: glyph top row spans x 39..=41.
    assert_eq!(buf.get(39, 3), WHITE);
    assert_eq!(buf.get(40, 3), WHITE);
    assert_eq!(buf.get(41, 3), WHITE);
}

#[test]
fn cloud_paints_its_center_circle() {
    let (mut game, sprites, mut buf) = fixture();
    game.clouds.push(Cloud {
        x: 320.0,
        y: 96.0,
        size: 40.0,
        speed: 1.0,
    });
    render::draw(&game, &sprites, &mut buf);
    // Center at pixel (40, 12), radius 5.
    assert_eq!(buf.get(40, 12), WHITE);
}

#[test]
fn entities_off_screen_are_clipped_not_fatal() {
    let (mut game, sprites, mut buf) = fixture();
    game.obstacles.push(Obstacle {
        x: -100.0,
        y: 488.0,
    });
    game.obstacles.push(Obstacle {
        x: 10_000.0,
        y: 488.0,
    });
    game.clouds.push(Cloud {
        x: -150.0,
        y: -50.0,
        size: 49.0,
        speed: 1.0,
    });
    game.player.y = -500.0;
    render::draw(&game, &sprites, &mut buf);

    // A tiny buffer gets the same frame without panicking.
    let mut small = PixelBuf::new(4, 4, SKY_TOP);
    render::draw(&game, &sprites, &mut small);
}

#[test]
fn game_over_overlay_darkens_the_frame_and_adds_a_panel() {
    let (game, sprites, mut buf) = fixture();
    render::draw(&game, &sprites, &mut buf);
    let corner_before = buf.get(0, 0);

    render::draw_game_over(&game, &mut buf);
    assert_eq!(buf.get(0, 0), corner_before.darken());

    // Panel interior is painted over the darkened frame.
    let center = buf.get(40, 24);
    assert_ne!(center, corner_before);
    assert_ne!(center, corner_before.darken());
}
