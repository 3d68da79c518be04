use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ConfigArg, UnwrapOrExit, open_config};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Output directory (overrides `generator.output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config_file = open_config(self.config.config.as_deref());
        let schema = config_file.load_schema().unwrap_or_exit();
        let tables = config_file.config().lookup_tables();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config_file.output_dir());

        let report = ops::generate(
            &schema,
            &tables,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                registry: config_file.config().generator.registry,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
