use std::io::{self, stdout};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute, terminal,
};

use cinna_run::audio::Audio;
use cinna_run::canvas::PixelBuf;
use cinna_run::game::{Game, Status};
use cinna_run::render::{self, WORLD_PER_PIXEL};
use cinna_run::sprite::Sprites;

// ~60 fps; the physics constants assume one simulation tick per frame.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
        EnableMouseCapture,
    )?;

    let result = run(&mut out);

    // Always try to restore terminal state.
    let _ = execute!(
        out,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    );
    let _ = terminal::disable_raw_mode();
    result
}

fn run(out: &mut io::Stdout) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let pw = cols as usize;
    let ph = rows as usize * 2;

    let mut buf = PixelBuf::new(pw, ph, render::SKY_TOP);
    let mut game = Game::new(pw as f64 * WORLD_PER_PIXEL, ph as f64 * WORLD_PER_PIXEL);
    let sprites = Sprites::load();
    let audio = Audio::open();

    loop {
        let frame_start = Instant::now();

        // Input: Space/Up or a mouse press jumps, q/Esc quits. The jump
        // guard lives in the game, so handlers just route.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Up => {
                        if game.jump() {
                            audio.play_jump();
                        }
                    }
                    _ => {}
                },
                Event::Mouse(m) => {
                    if matches!(m.kind, MouseEventKind::Down(_)) && game.jump() {
                        audio.play_jump();
                    }
                }
                Event::Resize(c, r) => {
                    let npw = c as usize;
                    let nph = r as usize * 2;
                    buf.resize(npw, nph);
                    game.resize(npw as f64 * WORLD_PER_PIXEL, nph as f64 * WORLD_PER_PIXEL);
                }
                _ => {}
            }
        }

        game.step();
        render::draw(&game, &sprites, &mut buf);
        buf.present(out)?;

        if game.status == Status::Over {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }

    // The run is over: signal once, then only quit input is accepted.
    audio.play_game_over();
    render::draw_game_over(&game, &mut buf);
    buf.present(out)?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                return Ok(());
            }
        }
    }
}
