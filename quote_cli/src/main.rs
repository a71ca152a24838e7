//! # Versatto Quote CLI
//!
//! Terminal form host for the furniture quote calculator. Collects the
//! five form fields, runs one calculation per submission, renders the
//! breakdown, and offers a CSV download of the quote.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use quote_core::catalog::{FurnitureType, Material, PanelKind};
use quote_core::export::ExportRecord;
use quote_core::pricing::price_table;
use quote_core::quote::{calculate, QuoteRequest, HEIGHT_RANGE_M, WIDTH_RANGE_M};
use quote_core::units::Meters;
use quote_core::QuoteError;

/// Default export file name
const EXPORT_FILE: &str = "furniture_quote.csv";

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Numbered selection with a blank option, mirroring the empty entry of
/// the original select box. Returns None when the user presses Enter.
fn prompt_selection<T: Copy + std::fmt::Display>(label: &str, options: &[T]) -> Option<T> {
    println!("{}", label);
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    let input = prompt_line("Select (Enter to skip): ");
    if input.is_empty() {
        return None;
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= options.len() => Some(options[n - 1]),
        _ => {
            println!("Unrecognized choice '{}' - treated as no selection.", input);
            None
        }
    }
}

fn prompt_meters(label: &str, (min, max): (f64, f64)) -> Meters {
    loop {
        let input = prompt_line(&format!("{} [{:.1}-{:.1}]: ", label, min, max));
        match input.parse::<f64>() {
            Ok(v) if v >= min && v <= max => return Meters(v),
            Ok(v) => println!("{} is outside [{:.1}, {:.1}]. Try again.", v, min, max),
            Err(_) => println!("Enter a number, e.g. 2.5."),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    matches!(
        prompt_line(prompt).to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

/// Collect one form submission
fn collect_request() -> QuoteRequest {
    let furniture_type = prompt_selection("Furniture type:", &FurnitureType::ALL);

    // Panel style only asked for panels, defaulted otherwise
    let panel_kind = if furniture_type == Some(FurnitureType::Panel) {
        prompt_selection("Panel style:", &PanelKind::ALL).unwrap_or_default()
    } else {
        PanelKind::default()
    };

    let height_m = prompt_meters("Height (m)", HEIGHT_RANGE_M);
    let width_m = prompt_meters("Width (m)", WIDTH_RANGE_M);
    let material = prompt_selection("Material:", &Material::ALL);
    let apply_discount = prompt_yes_no("Apply 5% discount? [y/N]: ");

    QuoteRequest {
        furniture_type,
        panel_kind,
        height_m,
        width_m,
        material,
        apply_discount,
    }
}

fn render_quote(quote: &quote_core::Quote) {
    let panel_kind = quote
        .panel_kind
        .map(|k| k.display_name())
        .unwrap_or("—");

    println!("═══════════════════════════════════════");
    println!("  QUOTE DETAILS");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Furniture type: {}", quote.furniture_type);
    println!("  Panel style:    {}", panel_kind);
    println!("  Material:       {}", quote.material);
    println!("  Height:         {}", quote.effective_height_m);
    println!("  Width:          {}", quote.width_m);
    println!("  Total area:     {}", quote.area_m2);
    println!("  Price per m²:   {}", quote.unit_price);
    println!("  {}", quote.discount_label());
    println!();
    println!("  FINAL VALUE: {}", quote.final_cost);
    println!("═══════════════════════════════════════");
}

fn render_error(error: &QuoteError) {
    match error {
        QuoteError::MissingSelection { .. } => {
            println!("Please select both a furniture type and a material.");
        }
        QuoteError::UnsupportedMaterialForPanel { .. } => {
            let materials: Vec<&str> = price_table()
                .panel_materials()
                .iter()
                .map(|m| m.display_name())
                .collect();
            println!("Panels are only available in: {}.", materials.join(", "));
        }
        QuoteError::InvalidDimension { .. } => {
            println!("{}", error);
        }
        QuoteError::UnknownMaterial { .. } => {
            println!("An error occurred: {}", error);
        }
    }
}

fn write_csv(record: &ExportRecord, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(ExportRecord::HEADERS)?;
    writer.write_record(record.row())?;
    writer.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    println!("Versatto Quote Calculator");
    println!("=========================");
    println!();
    println!("Estimate panels, wardrobes, and kitchen cabinets.");
    println!();
    log::info!("form host started");

    loop {
        let request = collect_request();
        log::debug!("submission: {:?}", request);

        println!();
        match calculate(&request, price_table()) {
            Ok(quote) => {
                println!("Quote calculated successfully!");
                println!();
                render_quote(&quote);

                println!();
                println!("JSON Output (for programmatic use):");
                if let Ok(json) = serde_json::to_string_pretty(&quote) {
                    println!("{}", json);
                }

                println!();
                if prompt_yes_no(&format!("Save {}? [y/N]: ", EXPORT_FILE)) {
                    let record = ExportRecord::from_quote(&quote);
                    match write_csv(&record, Path::new(EXPORT_FILE)) {
                        Ok(()) => println!("Saved {}.", EXPORT_FILE),
                        Err(e) => {
                            log::error!("csv export failed: {}", e);
                            eprintln!("Could not save {}: {}", EXPORT_FILE, e);
                        }
                    }
                }
            }
            Err(e) => {
                log::debug!("rejected: {}", e.error_code());
                render_error(&e);
            }
        }

        println!();
        if !prompt_yes_no("Quote another piece? [y/N]: ") {
            break;
        }
        println!();
    }
}
