use std::fmt;

/// Fixed position of a section in the generated file.
///
/// Sections are emitted in declaration order of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Imports,
    DeclarationOpen,
    State,
    Effects,
    DataAccess,
    EventHandlers,
    Helpers,
    Render,
    DeclarationClose,
    Export,
}

impl Slot {
    pub const ALL: [Slot; 10] = [
        Slot::Imports,
        Slot::DeclarationOpen,
        Slot::State,
        Slot::Effects,
        Slot::DataAccess,
        Slot::EventHandlers,
        Slot::Helpers,
        Slot::Render,
        Slot::DeclarationClose,
        Slot::Export,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Imports => "imports",
            Slot::DeclarationOpen => "declaration-open",
            Slot::State => "state",
            Slot::Effects => "effects",
            Slot::DataAccess => "data-access",
            Slot::EventHandlers => "event-handlers",
            Slot::Helpers => "helpers",
            Slot::Render => "render",
            Slot::DeclarationClose => "declaration-close",
            Slot::Export => "export",
        }
    }

    /// Indent level of code in this slot; body slots sit inside the component.
    pub fn depth(self) -> usize {
        match self {
            Slot::Imports | Slot::DeclarationOpen | Slot::DeclarationClose | Slot::Export => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
