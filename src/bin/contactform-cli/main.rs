mod args;
mod output;
mod simulate;

#[cfg(not(feature = "with-serde"))]
use anyhow::bail;
use anyhow::{Context, Result};
use contactform_lib::{FieldId, FormValidator, SubmissionPayload};

use crate::args::{Cli, Commands};
use crate::output::{FieldReport, any_invalid, reports, write_human, write_reports};
use crate::simulate::{SimulationConfig, run_simulation};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(cmd) = cli.cmd else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    };

    // codes de sortie : 0 OK, 2 invalide / échec d'envoi, 1 fatal
    let ok = match cmd {
        Commands::Validate { form, format } => {
            let mut form = form.to_form();
            let _ = form.validate_all();
            let rows = reports(&form);
            write_reports(&rows, &format)?;
            !any_invalid(&rows)
        }
        Commands::Check {
            field,
            value,
            optional,
        } => {
            let id: FieldId = field.parse().context("check")?;
            let mut form = FormValidator::contact_form().with_required(id, !optional);
            form.on_input(id, value);
            let row = FieldReport::from(form.field(id));
            let ok = row.valid;
            write_human(&[row]);
            ok
        }
        Commands::Payload { form } => {
            let mut form = form.to_form();
            if let Err(failing) = form.validate_all() {
                eprintln!("warning: {} champ(s) invalide(s)", failing.len());
            }
            print_payload(&SubmissionPayload::from_form(&form, &chrono::Local::now()))?;
            true
        }
        Commands::Simulate {
            form,
            latency_ms,
            fail,
            timeout_ms,
        } => run_simulation(
            form.to_form(),
            SimulationConfig {
                latency_ms,
                fail,
                timeout_ms,
            },
        )?,
    };

    if !ok {
        std::process::exit(2);
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn print_payload(payload: &SubmissionPayload) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn print_payload(_: &SubmissionPayload) -> Result<()> {
    bail!("payload nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-tracing")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    if verbose {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(not(feature = "with-tracing"))]
fn init_logging(verbose: bool) {
    if verbose {
        eprintln!("--verbose nécessite la feature 'with-tracing'");
    }
}
