use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use deposit_predictor::importance::{DEFAULT_TOP_N, model_top_features};
use deposit_predictor::profile::parse_flag;
use deposit_predictor::{
    Classifier, ConsoleRenderer, CustomerProfile, ModelArtifact, Predictor, batch, build_report,
    form,
};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deposit-predictor")]
#[command(about = "Bank term deposit subscription predictor", version)]
struct Cli {
    /// Path to the MessagePack model artifact
    #[arg(long, env = "DEPOSIT_MODEL", default_value = "model.msgpack", global = true)]
    model: PathBuf,

    /// Number of features shown in the importance chart
    #[arg(long, default_value_t = DEFAULT_TOP_N, global = true)]
    top: usize,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Prompt for customer profiles until `exit` (default)
    Interactive,

    /// Score one customer profile given as flags
    Predict(ProfileArgs),

    /// Score every row of a CSV file
    Score {
        /// CSV with columns age,balance,housing,loan,campaign,previous
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show model details and every feature importance
    Inspect,
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long, default_value_t = 35)]
    age: u32,

    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    balance: f64,

    /// Housing loan (yes/no)
    #[arg(long, default_value = "no", value_parser = parse_flag, action = ArgAction::Set)]
    housing: bool,

    /// Personal loan (yes/no)
    #[arg(long, default_value = "no", value_parser = parse_flag, action = ArgAction::Set)]
    loan: bool,

    #[arg(long, default_value_t = 1)]
    campaign: u32,

    #[arg(long, default_value_t = 0)]
    previous: u32,
}

impl From<ProfileArgs> for CustomerProfile {
    fn from(args: ProfileArgs) -> Self {
        CustomerProfile {
            age: args.age,
            balance: args.balance,
            housing: args.housing,
            loan: args.loan,
            campaign: args.campaign,
            previous: args.previous,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let model = ModelArtifact::load_from_file(&cli.model)
        .with_context(|| format!("cannot start without a model ({})", cli.model.display()))?;
    let predictor = Predictor::new(&model);
    let renderer = ConsoleRenderer::new(!cli.no_color);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => run_interactive(&predictor, &renderer, cli.top),
        Command::Predict(args) => {
            let profile = CustomerProfile::from(args);
            profile.validate()?;
            let report = build_report(&predictor, &profile, cli.top)?;
            print!("{}", renderer.render(&report));
            Ok(())
        }
        Command::Score { input, output } => {
            let reader = File::open(&input)
                .with_context(|| format!("failed to open {}", input.display()))?;
            let count = match output {
                Some(path) => {
                    // The file is only created once every row has scored.
                    let mut scored = Vec::new();
                    let count = batch::score_csv(&predictor, reader, &mut scored)?;
                    fs::write(&path, scored)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    count
                }
                None => batch::score_csv(&predictor, reader, io::stdout().lock())?,
            };
            info!("Wrote {} scored rows", count);
            Ok(())
        }
        Command::Inspect => {
            write_inspection(&model, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Model details followed by every feature importance, highest first.
fn write_inspection<C: Classifier + ?Sized, W: Write>(model: &C, out: &mut W) -> io::Result<()> {
    writeln!(out, "Model Details")?;
    writeln!(out, "  Algorithm: {}", ModelArtifact::ALGORITHM)?;
    writeln!(out, "  Task:      {}", ModelArtifact::TASK)?;
    writeln!(out, "  Output:    {}", ModelArtifact::OUTPUT)?;
    writeln!(out, "  Features:  {}", model.feature_schema().len())?;
    writeln!(out)?;
    writeln!(out, "Feature Importances:")?;
    for (name, importance) in model_top_features(model, usize::MAX) {
        writeln!(out, "{:>25} | {:.4}", name, importance)?;
    }
    Ok(())
}

fn run_interactive(
    predictor: &Predictor<'_, ModelArtifact>,
    renderer: &ConsoleRenderer,
    top: usize,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!("Bank Term Deposit Predictor");
    println!("Enter a customer profile (press Enter for the default, 'exit' to quit).");

    loop {
        println!();
        let Some(profile) = form::prompt_profile(&mut input, &mut stdout)? else {
            break;
        };
        let report = build_report(predictor, &profile, top)?;
        writeln!(stdout)?;
        write!(stdout, "{}", renderer.render(&report))?;
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use deposit_predictor::{FeatureRow, FeatureSchema};

    struct FixedModel {
        schema: FeatureSchema,
    }

    impl Classifier for FixedModel {
        fn feature_schema(&self) -> &FeatureSchema {
            &self.schema
        }

        fn feature_importances(&self) -> &[f64] {
            &[0.2, 0.5, 0.3]
        }

        fn predict(&self, _row: &FeatureRow<'_>) -> deposit_predictor::Result<usize> {
            Ok(0)
        }

        fn predict_proba(&self, _row: &FeatureRow<'_>) -> deposit_predictor::Result<Vec<f64>> {
            Ok(vec![1.0, 0.0])
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_parses_yes_no_flags_and_negative_balance() {
        let cli = Cli::try_parse_from([
            "deposit-predictor",
            "predict",
            "--housing",
            "yes",
            "--balance",
            "-50",
        ])
        .expect("parse");
        let Some(Command::Predict(args)) = cli.command else {
            panic!("expected the predict subcommand");
        };
        let profile = CustomerProfile::from(args);
        assert!(profile.housing);
        assert!(!profile.loan);
        assert_eq!(profile.balance, -50.0);
        assert_eq!(profile.age, 35);
        assert_eq!(profile.campaign, 1);
    }

    #[test]
    fn predict_rejects_unknown_flag_value() {
        let parsed = Cli::try_parse_from(["deposit-predictor", "predict", "--loan", "maybe"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["deposit-predictor", "--top", "3", "--no-color"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.top, 3);
        assert!(cli.no_color);
    }

    #[test]
    fn inspection_lists_features_by_importance() {
        let model = FixedModel {
            schema: FeatureSchema::new(["age", "balance", "campaign"]),
        };
        let mut out = Vec::new();
        write_inspection(&model, &mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.contains("Algorithm: Gaussian Naive Bayes"));
        assert!(text.contains("Features:  3"));
        let rows: Vec<_> = text
            .lines()
            .skip_while(|l| *l != "Feature Importances:")
            .skip(1)
            .map(str::trim)
            .collect();
        assert_eq!(rows, vec!["balance | 0.5000", "campaign | 0.3000", "age | 0.2000"]);
    }
}
