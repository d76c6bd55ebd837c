use csv::WriterBuilder;

/// (name, mass 10^24 kg, distance million km, moons)
const PLANETS: &[(&str, f64, f64, &[&str])] = &[
    ("Mercury", 0.330, 57.9, &[]),
    ("Venus", 4.87, 108.2, &[]),
    ("Earth", 5.97, 149.6, &["Moon"]),
    ("Mars", 0.642, 227.9, &["Phobos", "Deimos"]),
    (
        "Jupiter",
        1898.0,
        778.5,
        &["Io", "Europa", "Ganymede", "Callisto"],
    ),
    (
        "Saturn",
        568.0,
        1432.0,
        &["Titan", "Enceladus", "Rhea", "Iapetus", "Dione", "Tethys", "Mimas"],
    ),
    (
        "Uranus",
        86.8,
        2867.0,
        &["Titania", "Oberon", "Umbriel", "Ariel", "Miranda"],
    ),
    ("Neptune", 102.0, 4515.0, &["Triton", "Nereid", "Proteus"]),
];

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "planets.txt".to_string());

    // Ragged rows, no quoting: one plain comma-separated line per planet.
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .from_path(&output_path)
        .expect("Failed to create output file");

    for &(name, mass, distance, moons) in PLANETS {
        let mut row = vec![name.to_string(), mass.to_string(), distance.to_string()];
        row.extend(moons.iter().map(|m| m.to_string()));
        writer.write_record(&row).expect("Failed to write planet");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {} planets to {output_path}", PLANETS.len());
}
