use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct BookRecord {
    title: String,
    category: String,
    price: f64,
    stars: u8,
    availability: String,
    url: String,
}

/// SplitMix64: a fixed seed gives the same catalogue on every run.
struct SampleRng(u64);

impl SampleRng {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const ADJECTIVES: [&str; 12] = [
    "Silent", "Crimson", "Hidden", "Last", "Broken", "Golden",
    "Forgotten", "Endless", "Wild", "Quiet", "Midnight", "Paper",
];
const NOUNS: [&str; 12] = [
    "Garden", "River", "Letters", "Empire", "Lighthouse", "Orchard",
    "Voyage", "Kingdom", "Harbor", "Atlas", "Winter", "Machine",
];

/// (category, typical price, typical rating)
const CATEGORIES: [(&str, f64, f64); 8] = [
    ("Poetry", 28.0, 3.4),
    ("Travel", 40.0, 3.0),
    ("Mystery", 33.0, 3.1),
    ("Historical Fiction", 36.0, 2.9),
    ("Science Fiction", 30.0, 3.6),
    ("Classics", 22.0, 4.1),
    ("Romance", 25.0, 2.7),
    ("Philosophy", 45.0, 3.3),
];

fn main() -> Result<()> {
    let mut rng = SampleRng(42);

    let books: Vec<BookRecord> = (0..400)
        .map(|i| {
            let (category, base_price, base_stars) = CATEGORIES[rng.below(CATEGORIES.len())];
            let title = format!(
                "The {} {}",
                rng.pick(&ADJECTIVES),
                rng.pick(&NOUNS)
            );

            // Prices in [10, 60), clustered around the category's typical price.
            let jitter = (rng.next_f64() + rng.next_f64() - 1.0) * 25.0;
            let price = ((base_price + jitter).clamp(10.0, 59.99) * 100.0).round() / 100.0;

            let stars = (base_stars + (rng.next_f64() - 0.5) * 4.0).round().clamp(1.0, 5.0) as u8;
            let availability = (1 + rng.below(22)).to_string();
            let slug = title.to_lowercase().replace(' ', "-");

            BookRecord {
                url: format!("https://books.toscrape.com/catalogue/{slug}_{i}/index.html"),
                title,
                category: category.to_string(),
                price,
                stars,
                availability,
            }
        })
        .collect();

    let output_path = "Books.json";
    let json = serde_json::to_string_pretty(&books).context("serialising books")?;
    std::fs::write(output_path, json).with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} books in {} categories to {output_path}",
        books.len(),
        CATEGORIES.len()
    );
    Ok(())
}
