use anyhow::{Context, Result};
use clap::Parser;
use filedev_set::{write_record, SetArgs};
use filedev_sink::target_path_from_env;

fn main() -> Result<()> {
    env_logger::init();
    let args = SetArgs::parse();

    let path = target_path_from_env()?;
    write_record(&args.record(), &path)
        .with_context(|| format!("posing file device {}", path.display()))?;
    Ok(())
}
