use clap::Parser;
use pwseal::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt {
            ref input,
            ref output,
            ref aad,
            armor,
        } => pwseal::cli::commands::encrypt::execute(
            &cli,
            input,
            output.as_deref(),
            aad.as_deref(),
            armor,
        ),
        Commands::Decrypt {
            ref input,
            ref output,
            ref aad,
        } => {
            pwseal::cli::commands::decrypt::execute(&cli, input, output.as_deref(), aad.as_deref())
        }
        Commands::Inspect { ref input } => pwseal::cli::commands::inspect::execute(&cli, input),
        Commands::Fingerprint => pwseal::cli::commands::fingerprint::execute(&cli),
        Commands::Completions { ref shell } => pwseal::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        pwseal::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
