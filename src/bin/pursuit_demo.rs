use pursuit_core::config::{load_config, RuntimeConfig};
use pursuit_core::diagnostics::SolveReport;
use pursuit_core::Solver;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: pursuit_demo <config.json>".to_string())?;
    let config: RuntimeConfig = load_config(Path::new(&config_path))?;

    let solver = Solver::new(config.solver.clone());
    let report = solver.solve_with_diagnostics(
        config.scene.start,
        &config.scene.targets,
        &config.scene.camera,
    );

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        fs::write(path, json)
            .map_err(|e| format!("Failed to write report {}: {e}", path.display()))?;
        println!("\nJSON report written to {}", path.display());
    }
    Ok(())
}

fn print_text_summary(report: &SolveReport) {
    let trace = &report.trace;
    println!(
        "targets: {} supplied, {} visible, {} behind camera",
        trace.input.supplied_targets, trace.input.visible_targets, trace.input.excluded_behind_camera
    );
    if let Some(pivot) = trace.pivot_angle_deg {
        println!("recentred on pivot angle {pivot:.1}°");
    }
    for group in &trace.groups {
        println!(
            "group {}: members {:?} span {:.1}° zone x{:.2}{}",
            group.group_id,
            group.member_ids,
            group.span_deg,
            group.zone_multiplier,
            if group.high_density_fallback {
                " (high-density straight fallback)"
            } else {
                ""
            }
        );
    }
    for path in &report.paths {
        println!(
            "target {}: {} points, phase {:.3}{}",
            path.id,
            path.points.len(),
            path.phase,
            if path.straight { ", straight" } else { "" }
        );
    }
    println!("total {:.3} ms", trace.timings.total_ms);
}
