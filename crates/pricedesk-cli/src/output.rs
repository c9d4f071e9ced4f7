use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::report::PriceReport;

pub fn render(report: &PriceReport, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => print!("{}", render_table(report)),
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
    }

    Ok(())
}

/// Three sections: min line, max line, one indented line per entry in
/// ascending price order.
fn render_table(report: &PriceReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "min price: ({}, {})\n",
        report.min.price, report.min.symbol
    ));
    out.push_str(&format!(
        "max price: ({}, {})\n",
        report.max.price, report.max.symbol
    ));

    for entry in &report.entries {
        out.push_str(&format!("    {} {}\n", entry.symbol, entry.price));
    }

    out
}
