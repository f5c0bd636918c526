/// Example program to print the loaded configuration
///
/// Run with: cargo run -p logvis-config --example print_config

fn main() {
    // Load configuration from logvis.toml
    let config = logvis_config::LogvisConfig::load();

    println!("=== logvis Configuration ===\n");

    println!("Bidi Settings:");
    println!("  Base Direction: {}", config.bidi.base_direction);
    println!("  Mirroring: {}", config.bidi.mirroring);
    println!("  Max Input Bytes: {:?}", config.bidi.max_input_bytes);
    println!();

    println!("Logging Settings:");
    println!("  Filter: {:?}", config.logging.filter);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
