use super::{GrowthData, VERSION};
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

fn validate_float(v: String) -> Result<(), String> {
    match v.parse::<f64>() {
        Ok(_) => Ok(()),
        Err(_) => Err(format!("'{}' is not a valid decimal number", v)),
    }
}

fn validate_int(v: String) -> Result<(), String> {
    match v.parse::<i64>() {
        Ok(_) => Ok(()),
        Err(_) => Err(format!("'{}' is not a valid integer", v)),
    }
}

pub fn cli_app() -> App<'static, 'static> {
    let arg_plant = Arg::with_name("plant")
        .help("plant name, used as prefix for the output files")
        .long("plant")
        .takes_value(true)
        .required(true);
    let arg_height = Arg::with_name("height")
        .help("height measurements (cm) over time")
        .long("height")
        .takes_value(true)
        .multiple(true)
        .required(true)
        .validator(validate_float);
    let arg_leaf_count = Arg::with_name("leaf_count")
        .help("leaf count measurements over time")
        .long("leaf_count")
        .takes_value(true)
        .multiple(true)
        .required(true)
        .validator(validate_int);
    let arg_dry_weight = Arg::with_name("dry_weight")
        .help("dry weight measurements (g) over time")
        .long("dry_weight")
        .takes_value(true)
        .multiple(true)
        .required(true)
        .validator(validate_float);
    let arg_outdir = Arg::with_name("outdir")
        .help("directory for the output png files, defaults to the working directory")
        .short("o")
        .long("outdir")
        .takes_value(true);
    App::new("growth_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot plant growth measurements")
        .arg(arg_plant)
        .arg(arg_height)
        .arg(arg_leaf_count)
        .arg(arg_dry_weight)
        .arg(arg_outdir)
}

/// Extracts the growth measurements and the optional output directory from
/// the parsed arguments. The height and leaf count sequences must have the
/// same length because the scatter plot pairs them one to one.
pub fn growth_from_matches(matches: &ArgMatches) -> Result<(GrowthData, Option<PathBuf>), String> {
    let plant = String::from(matches.value_of("plant").unwrap_or_default());
    let heights: Vec<f64> = matches
        .values_of("height")
        .unwrap()
        .map(|v| v.parse::<f64>().unwrap())
        .collect();
    let leaf_counts: Vec<i64> = matches
        .values_of("leaf_count")
        .unwrap()
        .map(|v| v.parse::<i64>().unwrap())
        .collect();
    let dry_weights: Vec<f64> = matches
        .values_of("dry_weight")
        .unwrap()
        .map(|v| v.parse::<f64>().unwrap())
        .collect();
    if heights.len() != leaf_counts.len() {
        return Err(format!(
            "--height has {} values but --leaf_count has {}, \
             the scatter plot pairs them one to one",
            heights.len(),
            leaf_counts.len()
        ));
    }
    let outdir = matches.value_of("outdir").map(PathBuf::from);
    Ok((
        GrowthData::new(plant, heights, leaf_counts, dry_weights),
        outdir,
    ))
}

/// Takes the CLI arguments that control the plotting of the growth measurements.
pub fn parse_cli() -> (GrowthData, Option<PathBuf>) {
    let matches = cli_app().get_matches();
    match growth_from_matches(&matches) {
        Ok(parsed) => parsed,
        Err(msg) => clap::Error::with_description(&msg, clap::ErrorKind::ValueValidation).exit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_args() -> Vec<&'static str> {
        vec![
            "growth_plot",
            "--plant",
            "Basil",
            "--height",
            "5.0",
            "10.0",
            "15.0",
            "--leaf_count",
            "2",
            "4",
            "6",
            "--dry_weight",
            "0.5",
            "0.8",
            "1.1",
        ]
    }

    #[test]
    fn accepts_the_full_argument_set() {
        let matches = cli_app().get_matches_from(full_args());
        let (data, outdir) = growth_from_matches(&matches).unwrap();
        assert_eq!(data.plant, "Basil");
        assert_eq!(data.heights, vec![5.0, 10.0, 15.0]);
        assert_eq!(data.leaf_counts, vec![2, 4, 6]);
        assert_eq!(data.dry_weights, vec![0.5, 0.8, 1.1]);
        assert!(outdir.is_none());
    }

    #[test]
    fn missing_height_is_a_usage_error() {
        let res = cli_app().get_matches_from_safe(vec![
            "growth_plot",
            "--plant",
            "Basil",
            "--leaf_count",
            "2",
            "--dry_weight",
            "0.5",
        ]);
        let err = res.unwrap_err();
        assert_eq!(err.kind, clap::ErrorKind::MissingRequiredArgument);
        assert!(err.message.contains("--height"));
    }

    #[test]
    fn malformed_height_is_a_usage_error() {
        let res = cli_app().get_matches_from_safe(vec![
            "growth_plot",
            "--plant",
            "Basil",
            "--height",
            "tall",
            "--leaf_count",
            "2",
            "--dry_weight",
            "0.5",
        ]);
        let err = res.unwrap_err();
        assert_eq!(err.kind, clap::ErrorKind::ValueValidation);
    }

    #[test]
    fn fractional_leaf_count_is_a_usage_error() {
        let res = cli_app().get_matches_from_safe(vec![
            "growth_plot",
            "--plant",
            "Basil",
            "--height",
            "5.0",
            "--leaf_count",
            "2.5",
            "--dry_weight",
            "0.5",
        ]);
        let err = res.unwrap_err();
        assert_eq!(err.kind, clap::ErrorKind::ValueValidation);
    }

    #[test]
    fn mismatched_pair_lengths_are_rejected() {
        let matches = cli_app().get_matches_from(vec![
            "growth_plot",
            "--plant",
            "Basil",
            "--height",
            "5.0",
            "10.0",
            "--leaf_count",
            "2",
            "4",
            "6",
            "--dry_weight",
            "0.5",
        ]);
        let err = growth_from_matches(&matches).unwrap_err();
        assert!(err.contains("--leaf_count"));
    }

    #[test]
    fn dry_weight_length_is_independent() {
        let matches = cli_app().get_matches_from(vec![
            "growth_plot",
            "--plant",
            "Basil",
            "--height",
            "5.0",
            "10.0",
            "--leaf_count",
            "2",
            "4",
            "--dry_weight",
            "0.5",
        ]);
        let (data, _) = growth_from_matches(&matches).unwrap();
        assert_eq!(data.dry_weights, vec![0.5]);
    }

    #[test]
    fn outdir_is_optional_and_forwarded() {
        let mut args = full_args();
        args.extend_from_slice(&["--outdir", "plots"]);
        let matches = cli_app().get_matches_from(args);
        let (_, outdir) = growth_from_matches(&matches).unwrap();
        assert_eq!(outdir, Some(PathBuf::from("plots")));
    }
}
