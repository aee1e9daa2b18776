/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use clap::Parser;
use dialoguer::{Input, Password};
use literal_export::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "literal-export")]
#[command(version)]
#[command(about = "Export your book ratings from Literal to CSV or JSON", long_about = None)]
struct Cli {
    /// Output file to write to. If not provided, the data will be written to stdout.
    #[arg(long)]
    outfile: Option<PathBuf>,

    /// Literal email address
    #[arg(short, long)]
    email: Option<String>,

    /// Literal password
    #[arg(short, long)]
    password: Option<String>,

    /// Export format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_logger();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if !e.is_unhandled() => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Unhandled error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::new();
    let format = cli.format.unwrap_or(config.export_format);
    let credentials = resolve_credentials(cli.email, cli.password)?;

    let mut exporter = Exporter::new(credentials, config)?;

    // Fetch before touching the output file so a failed run leaves it intact.
    let ratings = exporter.fetch_ratings().await?;

    match cli.outfile {
        Some(path) => {
            let file = File::create(&path)?;
            write_ratings(BufWriter::new(file), &ratings, format)?;
            info!("Wrote {} ratings to {}", ratings.len(), path.display());
        }
        None => write_ratings(io::stdout().lock(), &ratings, format)?,
    }
    Ok(())
}

/// Flag, then environment, then interactive prompt
fn resolve_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<Credentials, AppError> {
    let (env_email, env_password) = Credentials::from_env();

    let email = match email.or(env_email) {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Enter the email address for your Literal account")
            .interact_text()?
            .trim()
            .to_string(),
    };

    let password = match password.or(env_password) {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Enter the password for your Literal account")
            .interact()?,
    };

    Ok(Credentials::new(email, password))
}
