use anyhow::Context;
use falimy_logo::{confirmation_message, generate_logo, output, LogoConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let base = output::program_dir();
    let path = generate_logo(&LogoConfig::default(), &base)
        .with_context(|| format!("failed to create logo under {}", base.display()))?;

    println!("{}", confirmation_message(&path));
    Ok(())
}
