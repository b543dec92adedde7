//! # Concal CLI
//!
//! Terminal interface for the concrete section capacity engine.
//!
//! Two modes:
//!
//! - default: prompt for the main section parameters, print a formatted
//!   capacity report plus the JSON payload;
//! - `sweep [fc]`: emit the deemed-to-comply sweep family (min Ast vs depth,
//!   one series per cover) as JSON on stdout, for external charting.

use std::env;
use std::io::{self, BufRead, Write};

use conc_core::capacity::calculate;
use conc_core::section::{DuctilityClass, SectionInput};
use conc_core::sweep::deemed_sweep_family;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_ductility(prompt: &str, default: DuctilityClass) -> DuctilityClass {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default
    } else {
        DuctilityClass::from_code(trimmed)
    }
}

fn run_sweep(fc_mpa: f64) {
    match deemed_sweep_family(fc_mpa) {
        Ok(family) => match serde_json::to_string_pretty(&family) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        },
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.get(1).map(String::as_str) == Some("sweep") {
        let fc_mpa = args
            .get(2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(32.0);
        run_sweep(fc_mpa);
        return;
    }

    println!("Concal CLI - Concrete Section Capacity Calculator");
    println!("=================================================");
    println!();

    let depth_mm = prompt_f64("Overall depth D (mm) [200]: ", 200.0);
    let width_mm = prompt_f64("Width b (mm) [1000]: ", 1000.0);
    let cover_mm = prompt_f64("Cover (mm) [20]: ", 20.0);
    let fc_mpa = prompt_f64("Concrete strength f'c (MPa) [32]: ", 32.0);
    let bar_diameter_mm = prompt_f64("Bar diameter (mm) [7.6]: ", 7.6);
    let bar_spacing_mm = prompt_f64("Bar spacing (mm) [100]: ", 100.0);
    let ductility = prompt_ductility("Ductility class L/N [L]: ", DuctilityClass::Low);

    let input = SectionInput {
        depth_mm,
        width_mm,
        cover_mm,
        fc_mpa,
        bar_diameter_mm,
        bar_spacing_mm,
        ductility,
        ..SectionInput::default()
    };

    println!();
    match calculate(&input) {
        Ok(report) => {
            println!("═══════════════════════════════════════");
            println!("  SECTION CAPACITY RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Section:   {:.0} x {:.0} mm, cover {:.0} mm", width_mm, depth_mm, cover_mm);
            println!("  Concrete:  f'c = {:.0} MPa", fc_mpa);
            println!("  Steel:     {:.1} mm @ {:.0} mm, class {}", bar_diameter_mm, bar_spacing_mm, ductility.code());
            println!();
            println!("Derived:");
            println!("  d   = {:.1} mm", report.effective_depth_mm);
            println!("  Ast = {:.0} mm2", report.ast_mm2);
            println!();
            println!("Design Capacities (phi included):");
            println!("  Bending:        {:>8.1} kN.m", report.bending_knm);
            println!("  Shear:          {:>8.1} kN", report.shear_kn);
            println!("  Plain bending:  {:>8.1} kN.m", report.plain_bending_knm);
            println!("  Plain shear:    {:>8.1} kN", report.plain_shear_kn);
            println!();
            println!("Minimum Steel (deemed to comply):");
            println!("  Ast.min = {:.0} mm2/m (f = 0.2, one-way slab/beam)", report.deemed_min_ast_mm2);
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for external reporting):");
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
