use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use sepscreen::params::{FieldKind, FIELDS};
use sepscreen::patient::{ParamId, PatientSnapshot};
use sepscreen::scoring::{evaluate, validate_snapshot, Scale};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_VALIDATION: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the input fields with units, clinical ranges and option sets
    Params,
    /// List the five scales with parameter counts and maximum scores
    Scales,
}

#[derive(Parser, Debug)]
#[command(name = "sepscreen")]
#[command(about = "Obstetric sepsis screening: SIRS, qSOFA, omqSOFA, MOEWS and SOS", long_about = None)]
#[command(version)]
struct Cli {
    /// Print per-scale detail and input diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read a patient snapshot from a JSON or YAML file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Emit the assessment as pretty-printed JSON
    #[arg(long, conflicts_with = "tsv")]
    json: bool,

    /// Emit tab-separated rows for scripting
    #[arg(long)]
    tsv: bool,

    #[command(flatten)]
    vitals: VitalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Individual measurements; each flag overrides the same key from --file.
#[derive(Args, Debug)]
struct VitalArgs {
    /// Body temperature, °C (20-45)
    #[arg(long, value_name = "C")]
    temp: Option<f64>,

    /// Heart rate, beats/min (0-300)
    #[arg(long, value_name = "BPM")]
    hr: Option<f64>,

    /// Respiratory rate, breaths/min (0-100)
    #[arg(long, value_name = "RPM")]
    rr: Option<f64>,

    /// Systolic blood pressure, mmHg (0-300)
    #[arg(long, value_name = "MMHG")]
    sbp: Option<f64>,

    /// Diastolic blood pressure, mmHg (0-200)
    #[arg(long, value_name = "MMHG")]
    dbp: Option<f64>,

    /// Oxygen saturation, % (0-100)
    #[arg(long, value_name = "PCT")]
    spo2: Option<f64>,

    /// White cell count, x10^9/L (0-100)
    #[arg(long, value_name = "N")]
    wbc: Option<f64>,

    /// Band neutrophils, % (0-100)
    #[arg(long, value_name = "PCT")]
    bands: Option<f64>,

    /// Lactate, mmol/L (0-20)
    #[arg(long, value_name = "N")]
    lactate: Option<f64>,

    /// Glasgow Coma Scale, points (3-15)
    #[arg(long, value_name = "N")]
    gcs: Option<f64>,

    /// Mental status
    #[arg(long, value_parser = ["alert", "not_alert"])]
    mental: Option<String>,

    /// Oxygen therapy mode
    #[arg(long = "o2-therapy", value_parser = ["air", "nasal", "mask"])]
    o2_therapy: Option<String>,

    /// Severe postpartum hemorrhage or cardiac disease
    #[arg(long, value_parser = ["no", "yes"])]
    pph: Option<String>,
}

impl VitalArgs {
    fn apply(&self, snapshot: &mut PatientSnapshot) {
        let numbers = [
            (ParamId::Temp, self.temp),
            (ParamId::Hr, self.hr),
            (ParamId::Rr, self.rr),
            (ParamId::Sbp, self.sbp),
            (ParamId::Dbp, self.dbp),
            (ParamId::Spo2, self.spo2),
            (ParamId::Wbc, self.wbc),
            (ParamId::Bands, self.bands),
            (ParamId::Lactate, self.lactate),
            (ParamId::Gcs, self.gcs),
        ];
        for (id, value) in numbers {
            if let Some(value) = value {
                snapshot.insert(id, value);
            }
        }

        let tokens = [
            (ParamId::Mental, self.mental.as_deref()),
            (ParamId::O2Therapy, self.o2_therapy.as_deref()),
            (ParamId::Pph, self.pph.as_deref()),
        ];
        for (id, value) in tokens {
            if let Some(value) = value {
                snapshot.insert(id, value);
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Params) => {
            print_params();
            std::process::exit(EXIT_SUCCESS);
        }
        Some(Commands::Scales) => {
            print_scales();
            std::process::exit(EXIT_SUCCESS);
        }
        None => {}
    }

    // Assemble the snapshot: file first, then flag overrides.
    let mut snapshot = match &cli.file {
        Some(path) => match sepscreen::input::load_snapshot(path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("Input error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        },
        None => PatientSnapshot::new(),
    };
    cli.vitals.apply(&mut snapshot);

    if let Err(errors) = validate_snapshot(&snapshot) {
        eprintln!("Input errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_VALIDATION);
    }

    if cli.verbose {
        let supplied = ParamId::ALL
            .iter()
            .filter(|&&id| snapshot.number(id).is_some() || snapshot.token(id).is_some())
            .count();
        eprintln!("{} of {} parameters supplied", supplied, ParamId::ALL.len());
    }

    if snapshot.is_empty() && !cli.json && !cli.tsv {
        eprintln!("No measurements provided; every scale scores 0.");
    }

    let assessment = evaluate(&snapshot);

    if cli.json {
        match serde_json::to_string_pretty(&assessment) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize assessment: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else if cli.tsv {
        println!("{}", sepscreen::output::format_tsv(&assessment));
    } else {
        let use_colors = sepscreen::output::should_use_colors();
        if cli.verbose {
            for (scale, result) in assessment.iter() {
                println!(
                    "{}",
                    sepscreen::output::format_scale_detail(scale, result, use_colors)
                );
                println!();
            }
        } else {
            println!(
                "{}",
                sepscreen::output::format_assessment_table(&assessment, use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn print_params() {
    for field in FIELDS {
        match &field.kind {
            FieldKind::Number { min, max, step } => {
                let unit = field.unit.unwrap_or("");
                println!(
                    "{:<12}{} ({}), {}-{}, step {}",
                    field.id.as_str(),
                    field.label,
                    unit,
                    min,
                    max,
                    step
                );
            }
            FieldKind::Select { options } => {
                let options = options
                    .iter()
                    .map(|o| format!("{} ({})", o.value, o.label))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{:<12}{}: {}", field.id.as_str(), field.label, options);
            }
        }
    }
}

fn print_scales() {
    for scale in Scale::ALL {
        println!(
            "{:<10}{:<9}{} params, max score {}",
            scale.id(),
            scale.name(),
            scale.total_params(),
            scale.max_score()
        );
    }
}
