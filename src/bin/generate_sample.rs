use std::fs;

use serde_json::{json, Value};

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

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const ADJECTIVES: &[&str] = &[
    "Silent", "Crimson", "Last", "Hidden", "Endless", "Broken", "Golden", "Distant", "Burning",
    "Frozen",
];
const NOUNS: &[&str] = &[
    "Harbor", "Witness", "Garden", "Horizon", "Letter", "Empire", "Voyage", "Orchard", "Signal",
    "Mirror",
];
const DIRECTORS: &[&str] = &[
    "Agnès Varda",
    "Akira Kurosawa",
    "Chantal Akerman",
    "Federico Fellini",
    "Ingmar Bergman",
    "Lina Wertmüller",
    "Ousmane Sembène",
    "Satyajit Ray",
];
const COUNTRIES: &[&str] = &[
    "France", "Japan", "Belgium", "Italy", "Sweden", "Senegal", "India", "US",
];

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let n_movies = 60;

    let mut records: Vec<Value> = Vec::with_capacity(n_movies);
    for id in 1..=n_movies as i64 {
        let title = format!("The {} {}", rng.pick(ADJECTIVES), rng.pick(NOUNS));
        let release_year = 1950 + rng.below(75) as i64;
        let director = rng.pick(DIRECTORS);
        let country = rng.pick(COUNTRIES);

        let gross = (rng.below(500_000) as f64) * 1_000.0 + 10_000.0;
        // Mix value types the way real exports do: mostly numbers, some
        // string-typed numbers, the occasional non-numeric placeholder.
        let box_office: Value = match id % 9 {
            0 => json!(gross.to_string()),
            4 => json!("N/A"),
            _ => json!(gross),
        };

        records.push(json!({
            "id": id,
            "title": title,
            "release_year": release_year,
            "director": director,
            "box_office": box_office,
            "country": country,
        }));
    }

    fs::create_dir_all("data")?;

    let json_path = "data/movies.json";
    fs::write(json_path, serde_json::to_string_pretty(&records)?)?;
    println!("Wrote {n_movies} movies to {json_path}");

    let csv_path = "data/movies.csv";
    let mut writer = csv::Writer::from_path(csv_path)?;
    writer.write_record([
        "id",
        "title",
        "release_year",
        "director",
        "box_office",
        "country",
    ])?;
    for rec in &records {
        let cell = |key: &str| -> String {
            match &rec[key] {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }
        };
        writer.write_record([
            cell("id"),
            cell("title"),
            cell("release_year"),
            cell("director"),
            cell("box_office"),
            cell("country"),
        ])?;
    }
    writer.flush()?;
    println!("Wrote {n_movies} movies to {csv_path}");

    Ok(())
}
