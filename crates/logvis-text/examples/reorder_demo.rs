/// Prints the visual order of a few mixed-direction strings.
///
/// Run with: cargo run -p logvis-text --example reorder_demo [text...]

use anyhow::Result;
use logvis_config::LogvisConfig;
use logvis_text::Reorderer;

fn main() -> Result<()> {
    let config = LogvisConfig::load();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(filter) = &config.logging.filter {
        logger.parse_filters(filter);
    }
    let _ = logger.try_init();

    let reorderer = Reorderer::from_config(&config);

    let mut samples: Vec<String> = std::env::args().skip(1).collect();
    if samples.is_empty() {
        samples = vec![
            "abc".to_string(),
            "\u{05E9}\u{05DC}\u{05D5}\u{05DD} abc".to_string(),
            "Hello \u{05E2}\u{05D5}\u{05DC}\u{05DD} (123)".to_string(),
            "\u{0645}\u{0631}\u{062D}\u{0628}\u{0627} world".to_string(),
        ];
    }

    println!("Default direction: {:?}", reorderer.options().default_direction);
    println!("Mirroring: {}", reorderer.engine().mirroring());
    println!();

    for logical in &samples {
        let visual = reorderer.reorder_default(logical)?;
        println!("Logical: {:?}", logical);
        println!("  Visual:    {:?}", visual.text);
        println!("  Direction: {:?}", visual.direction);
    }

    Ok(())
}
