use clap::Parser;
use miette::Result;
use pwa_icons::cli::{Cli, Commands};
use pwa_icons::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.into_command() {
        Commands::Generate(args) => {
            let printer = Printer::new().quiet(args.quiet);
            pwa_icons::cli::generate::run(args, &printer)?
        }
        Commands::Init(args) => pwa_icons::cli::init::run(args, &Printer::new())?,
        Commands::Completions(args) => pwa_icons::cli::completions::run(args)?,
    }

    Ok(())
}
