use clap::Args;
use eyre::Result;

use super::{ConfigArg, UnwrapOrExit, open_config};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub config: ConfigArg,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config_file = open_config(self.config.config.as_deref());
        let schema = config_file.load_schema().unwrap_or_exit();
        let tables = config_file.config().lookup_tables();

        let report = ops::list(&schema, &tables);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
