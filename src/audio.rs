//! Best-effort sound effects. The output stream is opened once at startup;
//! if no audio device is available every play call is a silent no-op.

use fundsp::prelude64::*;
use rodio::{OutputStream, OutputStreamBuilder, Sink, buffer::SamplesBuffer};

const SAMPLE_RATE: f64 = 44_100.0;

pub struct Audio {
    stream: Option<OutputStream>,
}

impl Audio {
    pub fn open() -> Self {
        Audio {
            stream: OutputStreamBuilder::open_default_stream().ok(),
        }
    }

    /// Short rising chirp on a successful jump.
    pub fn play_jump(&self) {
        self.play(jump_samples());
    }

    /// Falling sweep when the run ends.
    pub fn play_game_over(&self) {
        self.play(game_over_samples());
    }

    fn play(&self, samples: Vec<f32>) {
        let Some(stream) = &self.stream else { return };
        let sink = Sink::connect_new(stream.mixer());
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE as u32, samples));
        sink.detach();
    }
}

fn jump_samples() -> Vec<f32> {
    // Sine chirp 300Hz -> 700Hz over 0.15s, gain fading out alongside.
    let freq = lfo(|t: f64| lerp11(300.0, 700.0, (t / 0.15).min(1.0)));
    let gain = lfo(|t: f64| lerp11(0.12, 0.0, (t / 0.15).min(1.0)));
    let mut node = (freq >> sine()) * gain;
    render(&mut node, 0.15)
}

fn game_over_samples() -> Vec<f32> {
    // Sawtooth ramp 400Hz -> 80Hz over 0.4s, gain 0.15 -> 0 over 0.5s.
    let freq = lfo(|t: f64| lerp11(400.0, 80.0, (t / 0.4).min(1.0)));
    let gain = lfo(|t: f64| lerp11(0.15, 0.0, (t / 0.5).min(1.0)));
    let mut node = (freq >> saw()) * gain;
    render(&mut node, 0.5)
}

fn render(node: &mut impl AudioUnit, secs: f64) -> Vec<f32> {
    let n = (SAMPLE_RATE * secs) as usize;
    (0..n).map(|_| node.get_mono()).collect()
}
