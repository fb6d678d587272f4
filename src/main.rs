//! Durascope: Winger Durability CLI Tool
//!
//! Loads before/after-22 match and injury counts, derives growth factors,
//! renders the chart set and prints the console summary.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use durascope::charts::{chart_jobs, render_all, ChartStyle, RenderOptions};
use durascope::cli::Cli;
use durascope::pipeline::{
    average_growth, build_comparison, correlation_matrix, derive_metrics, extract_records,
    load_wingers, project, save_dataset, InjuryInsights, Metric,
};
use durascope::report::{
    build_export, display_preview, display_projection, display_summary, write_export,
    ExportParams,
};
use durascope::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_info, print_stat, print_step_header, print_step_time, print_success,
    print_warning, ConfigCard,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let compare = cli.compare_players();
    let prospect = cli.prospect();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&ConfigCard {
        input: &cli.input,
        output_dir: &cli.output_dir,
        format: cli.format.extension(),
        dpi: cli.dpi,
        compare: &compare,
        prospect: &prospect.name,
        growth: &format!("{:?}", cli.growth_source).to_lowercase(),
    });

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Reading CSV...");
    let df = match load_wingers(&cli.input, cli.infer_schema_length) {
        Ok(df) => {
            finish_with_success(&spinner, "Dataset loaded");
            df
        }
        Err(e) => {
            finish_with_warning(&spinner, "Failed to load dataset");
            return Err(e);
        }
    };
    print_stat("Players", df.height());
    print_stat("Columns", df.width());
    print_step_time(step_start.elapsed());

    // Step 2: Derived columns
    print_step_header(2, "Derive Metrics");
    let step_start = Instant::now();
    let mut df = derive_metrics(df)?;
    let records = extract_records(&df)?;
    print_success("Totals, match share and growth factors computed");
    display_preview(&df, cli.preview_rows);

    if let Some(path) = &cli.save_derived {
        save_dataset(&mut df, path)?;
        print_success(&format!("Derived table saved to {}", path.display()));
    }
    print_step_time(step_start.elapsed());

    // Step 3: Insights
    print_step_header(3, "Injury Insights");
    let step_start = Instant::now();
    let insights = InjuryInsights::compute(&records, cli.top);
    let correlation = correlation_matrix(&records, &Metric::ALL);
    let comparison = build_comparison(&records, &compare, &Metric::ALL);
    print_stat(
        "Average injury growth",
        format!("{:.2}x", insights.averages.injury),
    );
    print_stat(
        "Average missed days growth",
        format!("{:.2}x", insights.averages.missed_days),
    );
    for name in &comparison.missing {
        print_warning(&format!("Compared player '{}' not found in dataset", name));
    }
    print_step_time(step_start.elapsed());

    // Step 4: Projection
    print_step_header(4, "Durability Projection");
    let factors = cli
        .growth_source
        .resolve(cli.fixed_growth(), average_growth(&records));
    let projection = project(&prospect, factors);
    display_projection(&projection);

    // Step 5: Charts
    print_step_header(5, "Render Charts");
    let step_start = Instant::now();
    if cli.no_charts {
        print_info("Chart rendering skipped (--no-charts)");
    } else {
        if comparison.is_empty() {
            print_warning("No compared players found - skipping radar chart");
        }
        let jobs = chart_jobs(&records, &correlation, &comparison, &projection);

        let options = RenderOptions {
            format: cli.format,
            style: ChartStyle::new(cli.dpi),
        };

        let spinner = create_spinner(&format!("Rendering {} chart(s)...", jobs.len()));
        match render_all(&jobs, &cli.output_dir, &options) {
            Ok(paths) => {
                finish_with_success(&spinner, &format!("Rendered {} chart(s)", paths.len()));
                for path in &paths {
                    println!("      {}", path.display());
                }
            }
            Err(e) => {
                finish_with_warning(&spinner, "Chart rendering failed");
                return Err(e);
            }
        }
    }
    print_step_time(step_start.elapsed());

    // Step 6: Export
    print_step_header(6, "Export Results");
    if cli.no_export {
        print_info("JSON export skipped (--no-export)");
    } else {
        let export_path = cli.export_path();
        let params = ExportParams {
            input_file: &cli.input,
            output_dir: &cli.output_dir,
            chart_format: cli.format.extension(),
            dpi: cli.dpi,
        };
        let spinner = create_spinner("Writing JSON export...");
        let export = build_export(&params, &records, &insights, &correlation, &projection);
        if let Err(e) = write_export(&export, &export_path) {
            finish_with_warning(&spinner, "Export failed");
            return Err(e);
        }
        finish_with_success(
            &spinner,
            &format!("Analysis saved to {}", export_path.display()),
        );
    }

    let visuals_dir = (!cli.no_charts).then_some(cli.output_dir.as_path());
    display_summary(&insights, visuals_dir);

    print_completion();

    Ok(())
}
