//! # Lumen CLI Application
//!
//! Terminal interface for laser safety calculations.
//!
//! ```text
//! calc_cli                          interactive prompts, full hazard report
//! calc_cli --input item.json        run one stored calculation, print JSON
//! calc_cli --settings settings.json use non-default calculation settings
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use calc_core::calculations::{eyewear, exposure, nohd};
use calc_core::calculations::{EyewearInput, MpeInput, NohdInput};
use calc_core::{classify, CalcError, CalcResult, CalcSettings, CalculationItem, Emission, ExposureContext, LaserSpec};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line options
#[derive(Debug, Default)]
struct Options {
    settings_path: Option<String>,
    input_path: Option<String>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => options.settings_path = Some(args.next().ok_or("--settings needs a path")?),
            "--input" => options.input_path = Some(args.next().ok_or("--input needs a path")?),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn load_settings(path: Option<&str>) -> CalcResult<CalcSettings> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| CalcError::invalid_input("settings", path, e.to_string()))?;
            let settings = CalcSettings::from_json(&json)?;
            tracing::info!(
                path,
                factor_defaults = ?settings.factor_defaults,
                emission_model = ?settings.emission_model,
                "settings loaded"
            );
            Ok(settings)
        }
        None => Ok(CalcSettings::default()),
    }
}

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

fn run_item(path: &str, settings: &CalcSettings) -> CalcResult<()> {
    let json = fs::read_to_string(path).map_err(|e| CalcError::invalid_input("input", path, e.to_string()))?;
    let item: CalculationItem = serde_json::from_str(&json)?;
    let output = item.run(settings)?;
    let pretty = serde_json::to_string_pretty(&output)?;
    println!("{}", pretty);
    Ok(())
}

fn run_interactive(settings: &CalcSettings) -> CalcResult<()> {
    println!("Lumen CLI - Laser Safety Calculator");
    println!("===================================");
    println!();

    let wavelength_nm = prompt_f64("Wavelength (nm) [532]: ", 532.0);
    let power_mw = prompt_f64("CW power (mW) [5.0]: ", 5.0);
    let beam_diameter_mm = prompt_f64("Beam diameter (mm) [7.0]: ", 7.0);
    let divergence_mrad = prompt_f64("Beam divergence (mrad) [1.0]: ", 1.0);
    let exposure_time_s = prompt_f64("Exposure time (s) [0.25]: ", 0.25);

    let power_w = power_mw * 1e-3;
    let laser = LaserSpec::continuous(wavelength_nm, power_w, beam_diameter_mm).with_label("CLI");
    let exposure_ctx = ExposureContext::new(exposure_time_s);

    let class = classify(&laser, &exposure_ctx, settings)?;
    let mpe = exposure::calculate(
        &MpeInput {
            label: "CLI".to_string(),
            wavelength_nm,
            exposure_time_s,
            emission: Emission::Continuous { power_w },
        },
        settings,
    )?;
    let hazard = nohd::calculate(
        &NohdInput {
            label: "CLI".to_string(),
            power_w,
            beam_diameter_mm,
            divergence_rad: divergence_mrad * 1e-3,
            wavelength_nm,
            exposure_time_s,
        },
        settings,
    )?;
    let protection = eyewear::calculate(
        &EyewearInput {
            label: "CLI".to_string(),
            laser: laser.clone(),
            exposure: exposure_ctx,
        },
        settings,
    )?;

    println!();
    println!("═══════════════════════════════════════");
    println!("  LASER HAZARD REPORT");
    println!("═══════════════════════════════════════");
    println!("  {}", chrono::Local::now().format("%Y-%m-%d %H:%M"));
    println!("  Standard: {}", settings.standard);
    println!();
    println!("Input:");
    println!("  Wavelength: {:.1} nm ({})", wavelength_nm, laser.region());
    println!("  Power:      {:.3} mW CW", power_mw);
    println!("  Beam:       {:.2} mm, {:.2} mrad", beam_diameter_mm, divergence_mrad);
    println!("  Exposure:   {} s", exposure_time_s);
    println!();
    println!("Classification:");
    for step in &class.steps {
        println!("  {}", step);
    }
    println!();
    println!("MPE:");
    println!("  Critical MPE: {} ({})", mpe.critical_mpe, mpe.limiting_mechanism.display_name());
    println!();
    println!("Hazard Distance:");
    if hazard.is_unbounded() {
        println!("  NOHD: unbounded ({})", hazard.hazard_class);
    } else {
        println!("  NOHD: {:.1} m ({})", hazard.nohd_m, hazard.hazard_class);
    }
    println!();
    println!("Eyewear:");
    for line in &protection.recommendations {
        println!("  {}", line);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", class.laser_class);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&class) {
        println!("{}", json);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let options = match parse_args() {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Usage: calc_cli [--settings settings.json] [--input item.json]");
            return ExitCode::from(2);
        }
    };

    let result = load_settings(options.settings_path.as_deref()).and_then(|settings| match &options.input_path {
        Some(path) => run_item(path, &settings),
        None => run_interactive(&settings),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
