//! Reproducible mixed token workload

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `size` tokens from `seed`. Same seed, same corpus.
pub fn generate_corpus(size: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size);

    for _ in 0..size {
        let token = match rng.gen_range(0u8..10) {
            // Plain and negative numbers, the common case
            0..=2 => rng.gen_range(0u64..1_000_000).to_string(),
            3..=4 => format!("-{}", rng.gen_range(0u64..1_000_000)),
            // Long digit runs, past i32
            5 => rng.gen_range(10_000_000_000u64..u64::MAX).to_string(),
            6 => format!("+{}", rng.gen_range(0u32..1000)),
            7 => ["-", "+", ""][rng.gen_range(0..3)].to_string(),
            8 => random_word(&mut rng),
            _ => digits_with_junk(&mut rng),
        };
        data.push(token);
    }

    data
}

fn random_word<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(1..10);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn digits_with_junk<R: Rng>(rng: &mut R) -> String {
    let mut token = rng.gen_range(10u64..100_000_000).to_string();
    let at = rng.gen_range(0..token.len());
    let junk = [" ", "-", "x", ".", "_"][rng.gen_range(0..5)];
    token.replace_range(at..at + 1, junk);
    token
}
