//! Fixed text of the generated table
//!
//! The defaults reproduce the signon table exactly; the downstream C code
//! depends on the include lines and on the `signon_error_entries` name.

use super::scan::ErrorEntry;

/// Text written before the first entry
pub const HEADER: &str = "// File generated automatically -- DO NOT EDIT
#include <gio/gio.h>

#include \"signon-errors.h\"
#include \"signon-internals.h\"

static const GDBusErrorEntry signon_error_entries[] = {
";

/// Text written after the last entry
pub const FOOTER: &str = "
};
";

/// Prefix of the error constants recognized in the source
pub const CONSTANT_PREFIX: &str = "SIGNON_ERROR_";

/// Prefix of the D-Bus error name macro
pub const NAME_PREFIX: &str = "SIGNOND_";

/// Suffix of the D-Bus error name macro
pub const NAME_SUFFIX: &str = "_ERR_NAME";

/// Boilerplate and naming convention of a generated table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTemplate {
    pub header: String,
    pub footer: String,
    /// Recognized case-insensitively, always written as given here
    pub constant_prefix: String,
    pub name_prefix: String,
    pub name_suffix: String,
}

impl Default for TableTemplate {
    fn default() -> Self {
        Self {
            header: HEADER.to_string(),
            footer: FOOTER.to_string(),
            constant_prefix: CONSTANT_PREFIX.to_string(),
            name_prefix: NAME_PREFIX.to_string(),
            name_suffix: NAME_SUFFIX.to_string(),
        }
    }
}

impl TableTemplate {
    /// `SIGNON_ERROR_<suffix>`
    pub fn constant(
        &self,
        suffix: &str,
    ) -> String {
        format!("{}{}", self.constant_prefix, suffix)
    }

    /// `SIGNOND_<suffix>_ERR_NAME`
    pub fn name(
        &self,
        suffix: &str,
    ) -> String {
        format!("{}{}{}", self.name_prefix, suffix, self.name_suffix)
    }

    /// Render one table line, keeping the source line's indent and terminator.
    pub fn render_entry(
        &self,
        entry: &ErrorEntry,
    ) -> String {
        format!(
            "{}{{ {}, {} }},{}",
            entry.indent,
            self.constant(&entry.suffix),
            self.name(&entry.suffix),
            if entry.terminated { "\n" } else { "" }
        )
    }
}
