use clap::Args;
use eyre::Result;

use super::{ConfigArg, UnwrapOrExit, open_config};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub config: ConfigArg,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config_file = open_config(self.config.config.as_deref());
        let schema_path = config_file.schema_path();
        let schema = config_file.load_schema().unwrap_or_exit();
        let tables = config_file.config().lookup_tables();

        let report = ops::check(&schema, &tables, config_file.path(), &schema_path);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
