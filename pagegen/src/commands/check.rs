use clap::Args;
use eyre::Result;
use pagegen_react::Generator;

use super::{UnwrapOrExit, page::PageArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub page: PageArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.page.config().unwrap_or_exit();
        let table = self.page.table().unwrap_or_exit();
        let options = self.page.options(&config);

        let report = ops::check(
            &Generator::from_config(&config),
            &table,
            &options,
            &self.page.metadata,
        );
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
