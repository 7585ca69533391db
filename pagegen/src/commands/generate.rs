use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pagegen_react::Generator;

use super::{UnwrapOrExit, page::PageArgs};
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub page: PageArgs,

    /// Output directory (overrides [output] dir in pagegen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.page.config().unwrap_or_exit();
        let table = self.page.table().unwrap_or_exit();
        let options = self.page.options(&config);

        let generator = Generator::from_config(&config);
        let page = generator.generate(&table, &options).unwrap_or_exit();

        let output_dir = self.output.as_ref().unwrap_or(&config.output.dir);
        let report = ops::generate(
            &page,
            &table,
            &options,
            GenerateOptions {
                output_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
