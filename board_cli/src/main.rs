//! # Boardwise CLI
//!
//! Terminal front-end for the board analysis engine. Prompts for board
//! geometry and load, runs the calculation, and prints the safety
//! verdict, a short load-deflection table, and the raw JSON result.

use std::io::{self, BufRead, Write};

use board_core::calculations::board::{calculate, BoardInput, LoadType};
use board_core::calculations::curve::{sample_curve, DEFAULT_SAMPLE_COUNT};
use board_core::materials::SAMANEA;

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

fn prompt_load_type(default: LoadType) -> LoadType {
    print!("Load type - (c)enter point or (d)istributed [c]: ");
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_lowercase().as_str() {
        "d" | "distributed" => LoadType::Distributed,
        "c" | "center" => LoadType::Center,
        _ => default,
    }
}

fn main() {
    println!("Boardwise CLI - Wooden Board Safety Calculator");
    println!("==============================================");
    println!();
    println!("Material: {} (MOE {} MPa, MOR {} MPa)",
        SAMANEA.name, SAMANEA.moe_mpa, SAMANEA.mor_mpa);
    println!();

    let length_cm = prompt_f64("Board length (cm) [120]: ", 120.0);
    let width_cm = prompt_f64("Board width (cm) [60]: ", 60.0);
    let thickness_cm = prompt_f64("Board thickness (cm) [3]: ", 3.0);
    let load_kg = prompt_f64("Applied load (kg) [80]: ", 80.0);
    let load_type = prompt_load_type(LoadType::Center);

    let input = BoardInput {
        label: "CLI Board".to_string(),
        length_cm,
        width_cm,
        thickness_cm,
        load_kg,
        load_type,
    };

    println!();
    match calculate(&input, &SAMANEA) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  BOARD ANALYSIS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Board:      {:.0} x {:.0} x {:.1} cm", length_cm, width_cm, thickness_cm);
            println!("  Load:       {:.0} kg ({})", load_kg, load_type.description());
            println!();
            println!("Results:");
            println!("  Deflection:    {:.2} mm", result.deflection_mm);
            println!("  Stress:        {:.2} MPa (MOR {:.0} MPa)", result.bending_stress_mpa, SAMANEA.mor_mpa);
            println!("  Safety factor: {:.2}", result.safety_factor);
            println!("  Max rec. load: {:.0} kg", result.max_load_recommended_kg);
            println!("  Board weight:  {:.1} kg", result.weight_kg);
            println!();
            println!("═══════════════════════════════════════");
            println!("  RESULT: {}", if result.is_safe { "PASS" } else { "FAIL" });
            println!("═══════════════════════════════════════");

            match sample_curve(&input, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT) {
                Ok(curve) => {
                    println!();
                    println!("Load-deflection curve (safe limit {:.0} kg):", result.max_load_recommended_kg);
                    println!("  {:>10}  {:>14}", "Load (kg)", "Deflection (mm)");
                    for sample in &curve {
                        let marker = if sample.load_kg > sample.safe_limit_kg { "  *over limit" } else { "" };
                        println!("  {:>10.0}  {:>14.2}{}", sample.load_kg, sample.deflection_mm, marker);
                    }
                }
                Err(e) => eprintln!("Curve error: {}", e),
            }

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
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
