use plotters::coord::types::RangedSlice;
use plotters::prelude::*;
use std::path::PathBuf;
pub mod plot;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// number of equal-width bins for the dry weight histogram
pub const HISTOGRAM_BINS: usize = 5;

/// The main struct for the plant growth measurements
#[derive(Debug, Clone)]
pub struct GrowthData {
    pub plant: String,
    pub heights: Vec<f64>,
    pub leaf_counts: Vec<i64>,
    pub dry_weights: Vec<f64>,
}

impl GrowthData {
    pub fn new(
        plant: String,
        heights: Vec<f64>,
        leaf_counts: Vec<i64>,
        dry_weights: Vec<f64>,
    ) -> GrowthData {
        GrowthData {
            plant,
            heights,
            leaf_counts,
            dry_weights,
        }
    }

    /// plots height against leaf count as a blue point cloud
    pub fn plot_scatter(&self, fout: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let (xmin, xmax) = min_and_max(&self.heights[..]);
        let (xmin, xmax) = pad_range(xmin, xmax);
        let (ymin, ymax) = min_and_max(&self.leaf_counts[..]);
        let (ymin, ymax) = (ymin - 1, ymax + 1);
        let root = BitMapBackend::new(&fout, (1000, 600)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Height vs Leaf Count for {}", self.plant),
                ("sans-serif", 30),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .label_style(("sans-serif", 20))
            .x_desc("Height (cm)")
            .y_desc("Leaf Count")
            .draw()?;
        chart.draw_series(
            self.heights
                .iter()
                .zip(self.leaf_counts.iter())
                .map(|(&h, &lc)| Circle::new((h, lc), 5, BLUE.filled())),
        )?;
        root.present()?;
        Ok(())
    }

    /// plots the dry weight distribution as green bars with black edges,
    /// binned with [`bin_values`]
    pub fn plot_histogram(&self, fout: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let bins = bin_values(&self.dry_weights[..], HISTOGRAM_BINS);
        let xmin = bins[0].0;
        let xmax = bins[bins.len() - 1].1;
        let ymax = bins.iter().map(|&(_, _, count)| count).max().unwrap_or(0) as i64 + 1;
        let root = BitMapBackend::new(&fout, (1000, 600)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Histogram of Dry Weight for {}", self.plant),
                ("sans-serif", 30),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(xmin..xmax, 0i64..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .label_style(("sans-serif", 20))
            .x_desc("Dry Weight (g)")
            .y_desc("Frequency")
            .draw()?;
        chart.draw_series(bins.iter().map(|&(start, end, count)| {
            Rectangle::new([(start, 0), (end, count as i64)], GREEN.filled())
        }))?;
        chart.draw_series(bins.iter().map(|&(start, end, count)| {
            Rectangle::new([(start, 0), (end, count as i64)], BLACK.stroke_width(1))
        }))?;
        root.present()?;
        Ok(())
    }

    /// plots height over time as a red line with circular markers,
    /// one category label per sample, "Week 1" to "Week N"
    pub fn plot_line(&self, fout: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let weeks: &'static [String] =
            Box::leak(week_labels(self.heights.len()).into_boxed_slice());
        let (ymin, ymax) = min_and_max(&self.heights[..]);
        let (ymin, ymax) = pad_range(ymin, ymax);
        let root = BitMapBackend::new(&fout, (1000, 600)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} Height Over Time", self.plant),
                ("sans-serif", 30),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(RangedSlice::from(&weeks[..]), ymin..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .label_style(("sans-serif", 20))
            .x_labels(weeks.len())
            .x_label_formatter(&|w: &&String| w.to_string())
            .x_desc("Time")
            .y_desc("Height (cm)")
            .draw()?;
        chart.draw_series(LineSeries::new(
            weeks.iter().zip(self.heights.iter()).map(|(w, &h)| (w, h)),
            RED.stroke_width(2),
        ))?;
        chart.draw_series(
            weeks
                .iter()
                .zip(self.heights.iter())
                .map(|(w, &h)| Circle::new((w, h), 5, RED.filled())),
        )?;
        root.present()?;
        Ok(())
    }
}

impl std::fmt::Display for GrowthData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Plant: {}\n", self.plant)?;
        write!(f, "Height data (cm): {:?}\n", self.heights)?;
        write!(f, "Leaf count data: {:?}\n", self.leaf_counts)?;
        write!(f, "Dry weight data (g): {:?}\n", self.dry_weights)
    }
}

/// ordinal x-axis labels for the line plot, one per sample
pub fn week_labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Week {}", i)).collect()
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    return (min, max);
}

/// widens an axis range by a small margin;
/// a zero span (single sample or all values equal) is padded to a unit span
/// so the point still falls inside the drawing area
pub fn pad_range(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        (min - 1.0, max + 1.0)
    } else {
        let margin = (max - min) / 20.0;
        (min - margin, max + margin)
    }
}

/// splits the values into nbins equal-width bins over [min, max] and counts
/// the values falling in each, returned as (start, end, count).
/// The last bin is right-closed so the counts always sum to values.len();
/// a single distinct value widens the binned range to value +- 0.5.
pub fn bin_values(values: &[f64], nbins: usize) -> Vec<(f64, f64, usize)> {
    let (vmin, vmax) = min_and_max(values);
    let (lo, hi) = if vmin == vmax {
        (vmin - 0.5, vmax + 0.5)
    } else {
        (vmin, vmax)
    };
    let width = (hi - lo) / nbins as f64;
    let mut bins: Vec<(f64, f64, usize)> = (0..nbins)
        .map(|i| (lo + width * i as f64, lo + width * (i + 1) as f64, 0))
        .collect();
    for &v in values {
        let mut i = ((v - lo) / width) as usize;
        if i >= nbins {
            i = nbins - 1;
        }
        bins[i].2 += 1;
    }
    bins
}
