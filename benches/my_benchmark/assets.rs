use fake::rand::rngs::StdRng;
use fake::rand::SeedableRng;
use fake::Fake;

/// Number of live births in the 2002 NSFG pregnancy file.
pub const LIVE_BIRTHS: usize = 9148;

/// Generates pregnancy lengths in weeks, clustered around 39 like the survey data.
///
/// Seeded so runs are comparable.
pub fn pregnancy_lengths(count: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(39);
    (0..count)
        .map(|_| {
            let offset: i32 = (-4..=4).fake_with_rng(&mut rng);
            39 + offset / 2 + offset % 2
        })
        .collect()
}

/// Generates birth weights in pounds, between 5.0 and 10.0.
pub fn birth_weights(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (5.0..10.0).fake_with_rng::<f64, _>(&mut rng))
        .collect()
}
