//! POLFID Manual Measurement Check
//!
//! Compares one hand-recorded polarization tomography session against the
//! state the waveplates were set to prepare.

use polfid_engine::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║              POLFID Manual Measurement Check                         ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    // Waveplate settings (degrees) and power meter readings (µW)
    let (theta, phi) = (80.0, 50.0);
    let total = 5.6;
    let (h, v) = (3.2, 2.574);
    let (d, a) = (0.654, 4.9);
    let (r, l) = (1.0, 4.52);

    let setup = PreparationSetup::from_degrees(theta, phi)?;
    let counts = PhotonCounts::new(total, d, a, r, l, h, v)?;

    println!("Configuration:");
    println!("  • HWP angle θ: {}°", theta);
    println!("  • QWP angle φ: {}°", phi);
    println!("  • Total power: {} µW", total);
    println!("  • H/V: {} / {}", h, v);
    println!("  • D/A: {} / {}", d, a);
    println!("  • R/L: {} / {}", r, l);
    println!();

    let comparator = StateComparator::new(PolfidConfig::default())?;
    let result = comparator.compare_counts(&setup, &counts)?;

    // =========================================================================
    // Reconstruction
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  RECONSTRUCTION");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let e = result.expectations;
    println!("┌──────────┬──────────┬──────────┬──────────┬──────────┐");
    println!("│ ⟨X⟩      │ ⟨Y⟩      │ ⟨Z⟩      │ |r|      │ Purity   │");
    println!("├──────────┼──────────┼──────────┼──────────┼──────────┤");
    println!(
        "│ {:+.4}  │ {:+.4}  │ {:+.4}  │ {:.4}   │ {:.4}   │",
        e.x,
        e.y,
        e.z,
        e.bloch_length(),
        result.experimental_purity
    );
    println!("└──────────┴──────────┴──────────┴──────────┴──────────┘\n");
    println!("  {}\n", result.physicality);

    // =========================================================================
    // Comparison
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  COMPARISON");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let formatted = comparator.format(&result);
    println!("  Fidelity:        {:.6}", result.fidelity);
    println!("  Error (1 − F):   {}", formatted.error);
    println!("  Trace distance:  {}", formatted.trace_distance);
    println!(
        "  Eigenvalues:     [{}, {}]",
        formatted.eigenvalue_0, formatted.eigenvalue_1
    );
    println!();

    println!("JSON:");
    println!("{}", formatted.to_json()?);

    Ok(())
}
