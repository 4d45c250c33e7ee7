mod archive;
mod error;
mod manifest;
mod result;

use clap::Command;
use manifest::Manifest;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // The tool takes no functional arguments; clap only provides the
    // standard --help and --version surface.
    Command::new("deploy-zip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Packages the project into a deployment zip archive")
        .get_matches();

    cliclack::intro("deploy-zip")?;

    let base_dir = std::env::current_dir()?;
    let manifest = Manifest::builtin();
    archive::build(&base_dir, &manifest)?;

    cliclack::outro("Deployment archive created successfully!")?;
    Ok(())
}
