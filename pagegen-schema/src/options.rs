use pagegen_core::to_pascal_case;
use serde::{Deserialize, Serialize};

use crate::{Result, validate::validate_component_name};

/// Feature toggles and naming overrides for one generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    pub pagination: bool,
    pub sorting: bool,
    pub filtering: bool,
    pub search: bool,
    pub refresh: bool,
    pub crud: bool,
    #[serde(alias = "component_name", skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(alias = "page_title", skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            pagination: true,
            sorting: true,
            filtering: true,
            search: true,
            refresh: true,
            crud: true,
            component_name: None,
            page_title: None,
        }
    }
}

/// Resolved component name and page title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNames {
    pub component_name: String,
    pub page_title: String,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl GenerationOptions {
    /// Every feature off; the bare read-only table.
    pub fn minimal() -> Self {
        Self {
            pagination: false,
            sorting: false,
            filtering: false,
            search: false,
            refresh: false,
            crud: false,
            component_name: None,
            page_title: None,
        }
    }

    /// Resolve the component name and title, deriving blanks from the table name.
    ///
    /// `user_roles` yields `UserRolesTable` and `UserRoles Management`. The
    /// result is validated whether it was given or derived.
    pub fn resolve_names(&self, table_name: &str) -> Result<PageNames> {
        let pascal = to_pascal_case(table_name);

        let component_name = match non_blank(&self.component_name) {
            Some(name) => name.to_string(),
            None => format!("{}Table", pascal),
        };
        validate_component_name(&component_name)?;

        let page_title = match non_blank(&self.page_title) {
            Some(title) => title.to_string(),
            None => format!("{} Management", pascal),
        };

        Ok(PageNames {
            component_name,
            page_title,
        })
    }
}
