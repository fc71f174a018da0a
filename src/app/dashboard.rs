use {
    crate::{
        Cli,
        analysis::{compute_aggregate_series, compute_series, compute_table_metrics},
        config::PresetBook,
        domain::{LocationSelector, ReportingPeriod},
        models::{Series, TableMetrics},
    },
    anyhow::{Context, Result},
    chrono::{Local, NaiveDate},
    itertools::Itertools,
    tabled::{Table, Tabled, settings::Style},
};

/// One render pass: resolve the selection, run the pure calculators, print.
/// The engine owns no state; this caller holds the "current selection" and
/// re-invokes on every run.
pub fn run_dashboard(cli: &Cli) -> Result<()> {
    let book = PresetBook::builtin();

    if cli.list {
        for name in book.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let available = book.names().join(", ");
    let roster = book
        .roster(&cli.practice)
        .with_context(|| format!("known practices: {available}"))?;

    // The only clock read in the whole program. Everything below takes the
    // date as an explicit input.
    let as_of: NaiveDate = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    let period = ReportingPeriod::parse_lenient(&cli.period, cli.years);
    let metrics = compute_table_metrics(roster, period, as_of);

    let series = match LocationSelector::parse(&cli.location) {
        LocationSelector::All => compute_aggregate_series(roster, cli.growth_rate, as_of),
        LocationSelector::Named(name) => match roster.find_location(&name) {
            Ok(location) => compute_series(location, cli.growth_rate, as_of),
            Err(err) => {
                // Documented fallback: the aggregate view, never a silent
                // wrong-location substitution.
                log::warn!("{err}; showing the aggregate view instead");
                compute_aggregate_series(roster, cli.growth_rate, as_of)
            }
        },
    };

    if cli.json {
        let payload = serde_json::json!({
            "table": metrics,
            "series": series,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\n{} ({} as of {})", cli.practice, period, as_of);
    print_table(&metrics);
    print_cards(&metrics);
    print_series(&series, cli.growth_rate);
    Ok(())
}

#[derive(Tabled)]
struct MetricsRow {
    #[tabled(rename = "Location")]
    name: String,
    #[tabled(rename = "Start Avg")]
    start_avg: i64,
    #[tabled(rename = "New Avg")]
    new_avg: i64,
    #[tabled(rename = "Growth")]
    growth: String,
    #[tabled(rename = "Avg Revenue")]
    avg_revenue: String,
    #[tabled(rename = "Growth Total")]
    growth_total: String,
}

fn print_table(metrics: &TableMetrics) {
    let rows = metrics.locations.iter().map(|m| MetricsRow {
        name: m.name.clone(),
        start_avg: m.start_avg,
        new_avg: m.new_avg,
        growth: if m.growth_percent > 0 {
            format!("{} ({}%)", m.growth, m.growth_percent)
        } else {
            m.growth.to_string()
        },
        avg_revenue: money(m.avg_revenue),
        growth_total: money(m.growth_total),
    });

    println!("{}", Table::new(rows).with(Style::sharp()));
}

fn print_cards(metrics: &TableMetrics) {
    let breakdown = match metrics.training_investment {
        Some(training) => format!(
            " (program {}, training {})",
            money(metrics.program_investment),
            money(training)
        ),
        None => String::new(),
    };

    println!(
        "Investment: {}{}{}",
        money(metrics.total_investment),
        metrics.period_label,
        breakdown
    );
    println!(
        "Return:     {}{} from {} new patients",
        money(metrics.total_return),
        metrics.period_label,
        metrics.total_growth
    );
}

fn print_series(series: &Series, growth_rate: f64) {
    if series.is_empty() {
        println!("\nNo projection: the selection has no locations.");
        return;
    }

    println!(
        "\nCumulative collections (actual growth to date {:.1}%, projecting {:.0}%/year):",
        series.actual_growth_rate, growth_rate
    );
    for i in 0..series.len() {
        if let Some(r) = series.reading(i) {
            let tag = if r.is_projected { "projected" } else { "member" };
            println!(
                "  {:>4}  baseline {:>16}  {:>9} {:>16}",
                r.year_label,
                money(r.baseline_value),
                tag,
                money(r.headline_value)
            );
        }
    }
}

fn money(value: f64) -> String {
    let rounded = value.round() as i64;
    format!("${}", group_thousands(rounded))
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .join(",");
    if n < 0 { format!("-{grouped}") } else { grouped }
}
