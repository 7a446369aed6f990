use growth_plot::plot::parse_cli;
use std::path::PathBuf;

fn main() {
    let (data, outdir) = parse_cli();
    print!("{}", data);

    let path_for = |name: String| match &outdir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    };
    let scatter = path_for(format!("{}_scatter.png", data.plant));
    let histogram = path_for(format!("{}_histogram.png", data.plant));
    let line = path_for(format!("{}_line_plot.png", data.plant));

    // a failed chart is fatal for that chart only, the others are still attempted
    let mut failed = 0;
    if let Err(e) = data.plot_scatter(scatter.clone()) {
        eprintln!("could not generate scatter plot {}: {}", scatter.display(), e);
        failed += 1;
    }
    if let Err(e) = data.plot_histogram(histogram.clone()) {
        eprintln!("could not generate histogram {}: {}", histogram.display(), e);
        failed += 1;
    }
    if let Err(e) = data.plot_line(line.clone()) {
        eprintln!("could not generate line plot {}: {}", line.display(), e);
        failed += 1;
    }
    if failed > 0 {
        std::process::exit(1);
    }

    println!("Generated plots for {}:", data.plant);
    println!("  1) Scatter plot saved as {}", scatter.display());
    println!("  2) Histogram saved as {}", histogram.display());
    println!("  3) Line plot saved as {}", line.display());
}
