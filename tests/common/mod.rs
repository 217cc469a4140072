use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

/// Generates a vector of random data.
pub fn generate_random_data(amount: usize) -> Vec<u64> {
    let mut rng = thread_rng();
    let uniform = Uniform::from(0..u64::MAX);

    let mut data = Vec::with_capacity(amount);
    for _ in 0..amount {
        data.push(rng.sample(&uniform));
    }

    data
}

/// Generates a vector of random data from a small value universe, so that
/// the result is dense with duplicate keys.
pub fn generate_duplicate_heavy_data(amount: usize) -> Vec<u64> {
    let mut rng = thread_rng();
    let uniform = Uniform::from(0..16u64);

    let mut data = Vec::with_capacity(amount);
    for _ in 0..amount {
        data.push(rng.sample(&uniform));
    }

    data
}
