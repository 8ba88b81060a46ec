use anyhow::{Context, Result};
use csv::Writer;

use mars_inventory::config::{DEFAULT_DANGER_THRESHOLD, DEFAULT_INPUT};

/// Substance, density (g/cm³), specific gravity, strength, flammability.
const MATERIALS: &[(&str, f64, f64, &str, f64)] = &[
    ("Aluminum", 2.70, 2.70, "High", 0.10),
    ("Hydrogen", 0.0000899, 0.0000899, "Low", 0.95),
    ("Oxygen", 0.001429, 0.001429, "Low", 0.90),
    ("Methane", 0.000656, 0.000656, "Low", 0.95),
    ("Ethanol", 0.789, 0.789, "Low", 0.80),
    ("Acetone", 0.784, 0.784, "Low", 0.85),
    ("Hydrazine", 1.021, 1.021, "Low", 0.90),
    ("Kerosene", 0.810, 0.810, "Low", 0.70),
    ("Sodium", 0.968, 0.968, "Low", 0.75),
    ("Magnesium", 1.738, 1.738, "Medium", 0.70),
    ("Polyethylene", 0.94, 0.94, "Medium", 0.65),
    ("Nylon", 1.15, 1.15, "High", 0.35),
    ("Titanium", 4.51, 4.51, "Very High", 0.05),
    ("Silicon Carbide", 3.21, 3.21, "Very High", 0.00),
    ("Water", 1.00, 1.00, "Low", 0.00),
    ("Lithium", 0.534, 0.534, "Low", 0.69),
    ("Glycerol", 1.26, 1.26, "Low", 0.40),
    ("Carbon Fiber", 1.75, 1.75, "Very High", 0.10),
];

fn main() -> Result<()> {
    let mut writer = Writer::from_path(DEFAULT_INPUT).context("creating inventory file")?;

    writer.write_record([
        "Substance",
        "Weight (g/cm³)",
        "Specific Gravity",
        "Strength",
        "Flammability",
    ])?;
    for &(substance, weight, gravity, strength, flammability) in MATERIALS {
        writer.write_record([
            substance.to_string(),
            weight.to_string(),
            gravity.to_string(),
            strength.to_string(),
            format!("{flammability:.2}"),
        ])?;
    }
    writer.flush().context("flushing inventory file")?;

    let dangerous = MATERIALS.iter().filter(|m| m.4 >= DEFAULT_DANGER_THRESHOLD).count();
    println!(
        "Wrote {} materials ({dangerous} at or above {DEFAULT_DANGER_THRESHOLD}) to {DEFAULT_INPUT}",
        MATERIALS.len()
    );
    Ok(())
}
