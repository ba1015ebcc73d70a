//! Deterministic synthetic test images
//!
//! The regression tests build their inputs here instead of loading image
//! files, so every run sees the same pixels.

use quadedge_core::GrayBuffer;

/// Simple linear congruential generator for reproducible randomness
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator from a seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// Next raw value
    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Next value in `0..bound`
    pub fn next_below(&mut self, bound: u32) -> u32 {
        ((self.next_u64() >> 33) % bound as u64) as u32
    }
}

fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> i32) -> GrayBuffer {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for x in 0..height {
        for y in 0..width {
            data.push(f(x, y));
        }
    }
    GrayBuffer::from_vec(width, height, data).expect("synthetic image dimensions")
}

/// Uniform noise in `0..=255`
pub fn noise(width: u32, height: u32, seed: u32) -> GrayBuffer {
    let mut rng = SimpleRng::new(seed);
    from_fn(width, height, |_, _| rng.next_below(256) as i32)
}

/// Single value everywhere
pub fn flat(width: u32, height: u32, value: i32) -> GrayBuffer {
    from_fn(width, height, |_, _| value)
}

/// Checkerboard of `cell` x `cell` squares alternating `0` and `255`
pub fn checkerboard(width: u32, height: u32, cell: u32) -> GrayBuffer {
    from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 { 255 } else { 0 }
    })
}

/// Bright disc of `radius` centered in a dark image, with a soft ramp in
/// the background
pub fn disc(width: u32, height: u32, radius: u32) -> GrayBuffer {
    let cx = height as i64 / 2;
    let cy = width as i64 / 2;
    let r2 = radius as i64 * radius as i64;
    from_fn(width, height, |x, y| {
        let dx = x as i64 - cx;
        let dy = y as i64 - cy;
        if dx * dx + dy * dy <= r2 {
            230
        } else {
            (y * 60 / width) as i32
        }
    })
}

/// A few random bright rectangles over noise-free background
pub fn blocks(width: u32, height: u32, count: u32, seed: u32) -> GrayBuffer {
    let mut rng = SimpleRng::new(seed);
    let mut buf = flat(width, height, 20);
    for _ in 0..count {
        let x0 = rng.next_below(height);
        let y0 = rng.next_below(width);
        let h = 1 + rng.next_below((height / 3).max(1));
        let w = 1 + rng.next_below((width / 3).max(1));
        let value = 100 + rng.next_below(156) as i32;
        for x in x0..(x0 + h).min(height) {
            for y in y0..(y0 + w).min(width) {
                let idx = buf.index(x, y);
                buf.data_mut()[idx] = value;
            }
        }
    }
    buf
}
