use std::path::PathBuf;

use clap::Args;
use pagegen_schema::{Config, GenerationOptions, TableMetadata};

/// Arguments shared by every command that works on one page.
#[derive(Args)]
pub struct PageArgs {
    /// Table metadata JSON (an object with `tableName` and `fields`, or a bare column array)
    pub metadata: PathBuf,

    /// Table name (overrides the name in the metadata document)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Path to pagegen.toml; defaults apply when it does not exist
    #[arg(short, long, default_value = Config::FILENAME)]
    pub config: PathBuf,

    /// Component name (defaults to `<Table>Table`)
    #[arg(long)]
    pub name: Option<String>,

    /// Page title (defaults to `<Table> Management`)
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub no_pagination: bool,

    #[arg(long)]
    pub no_sorting: bool,

    #[arg(long)]
    pub no_filtering: bool,

    #[arg(long)]
    pub no_search: bool,

    #[arg(long)]
    pub no_refresh: bool,

    /// Generate a read-only list without create, edit or delete
    #[arg(long)]
    pub no_crud: bool,
}

impl PageArgs {
    pub fn config(&self) -> pagegen_schema::Result<Config> {
        Config::open_or_default(&self.config)
    }

    pub fn table(&self) -> pagegen_schema::Result<TableMetadata> {
        TableMetadata::open(&self.metadata, self.table.as_deref())
    }

    /// The config's page defaults with the command-line overrides applied.
    pub fn options(&self, config: &Config) -> GenerationOptions {
        let mut options = config.page.clone();
        options.pagination &= !self.no_pagination;
        options.sorting &= !self.no_sorting;
        options.filtering &= !self.no_filtering;
        options.search &= !self.no_search;
        options.refresh &= !self.no_refresh;
        options.crud &= !self.no_crud;
        if self.name.is_some() {
            options.component_name = self.name.clone();
        }
        if self.title.is_some() {
            options.page_title = self.title.clone();
        }
        options
    }
}
