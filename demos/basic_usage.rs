// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the prototype registry.
//!
//! This example demonstrates:
//! - Registering one prototype configuration per configuration type
//! - Cloning fresh configurations from the registry
//! - Customizing a clone without touching its prototype
//! - Handling a configuration type with no registered prototype
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use protocfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Prototype Registry: Basic Usage ===\n");

    let registry = ConfigurationPrototypeRegistry::builder()
        .with_prototype(Configuration::new(
            "Black",
            true,
            "English",
            true,
            12,
            "Arial",
            ConfigurationType::Basic,
        ))
        .with_prototype(
            Configuration::builder(ConfigurationType::Advanced)
                .theme_color("Solarized")
                .auto_save(true)
                .language("English")
                .dark_mode(true)
                .font_size(11)
                .font_family("Fira Code")
                .build(),
        )
        .build();

    println!("Registered prototypes: {:?}\n", registry.configuration_types());

    // Example 1: Clone a prototype
    println!("--- Example 1: Cloning ---");
    let basic = registry.try_clone(ConfigurationType::Basic)?;
    println!("✓ BASIC clone: {:?}", basic);

    // Example 2: Customize a clone
    println!("\n--- Example 2: Customizing a Clone ---");
    let presentation = registry
        .try_clone(ConfigurationType::Basic)?
        .with_font_size(20)
        .with_dark_mode(false);
    if let Some(prototype) = registry.get_prototype(ConfigurationType::Basic) {
        println!(
            "✓ Presentation font size: {} (prototype still {})",
            presentation.font_size(),
            prototype.font_size()
        );
    }

    // Example 3: Missing prototype
    println!("\n--- Example 3: Missing Prototype ---");
    match registry.clone(ConfigurationType::Custom) {
        Some(config) => println!("✓ CUSTOM clone: {:?}", config),
        None => println!("✗ No CUSTOM prototype registered"),
    }

    Ok(())
}
