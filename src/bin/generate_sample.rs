//! Writes a deterministic sample movie dataset so the dashboard can be
//! exercised without the original CSV:
//!
//! ```text
//! cargo run --bin generate_sample
//! cargo run -- sample_movies.csv
//! ```

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let years = ["2018", "2019", "2020", "2021", "2022", "2023"];
    let languages = ["English", "French", "Hindi", "Spanish", "Korean"];
    let genres = ["Drama", "Comedy", "Action", "Thriller", "Romance", "Horror"];
    let first_words = [
        "Midnight", "Silent", "Crimson", "Golden", "Broken", "Electric", "Paper", "Winter",
    ];
    let second_words = [
        "Harbor", "Promise", "Letters", "Orbit", "Garden", "Signal", "Engine", "Tide",
    ];

    let output_path = "sample_movies.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Year", "Language", "Movie Name", "Rating(10)", "Timing(min)", "Genre"])
        .expect("Failed to write header");

    let n_movies = 60;
    for _ in 0..n_movies {
        let name = format!("{} {}", rng.pick(&first_words), rng.pick(&second_words));
        let rating = format!("{:.1}", rng.gauss(6.8, 1.4).clamp(1.0, 10.0));
        let timing = format!("{:.0}", rng.gauss(118.0, 22.0).clamp(70.0, 210.0));

        writer
            .write_record([
                *rng.pick(&years),
                *rng.pick(&languages),
                name.as_str(),
                rating.as_str(),
                timing.as_str(),
                *rng.pick(&genres),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {n_movies} movies to {output_path}");
}
