//! Log severity levels and named categories.

use std::borrow::Cow;

use strum_macros::{Display, EnumIter};

/// Total-ordered log severity.
///
/// The derived ordering is used for filtering (`level < category.minimum()`
/// suppresses a message) and drives the console color mapping.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Level {
    Trace,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// ANSI escape sequence used by the console sink for this level.
    ///
    /// Exhaustive by construction; there is no "unknown level" branch.
    pub fn color_code(self) -> &'static str {
        match self {
            Level::Trace => "\x1b[90m", // gray
            Level::Info => "\x1b[32m",  // green
            Level::Warn => "\x1b[33m",  // yellow
            Level::Error => "\x1b[91m", // red
            Level::Fatal => "\x1b[31m", // dark red
        }
    }
}

/// A named logging channel with its own severity thresholds.
///
/// Immutable once constructed. `minimum` gates which messages are written at
/// all; `default_level` is used by [`crate::log::Logger::write_default`].
/// By convention `minimum <= default_level`, but this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: Cow<'static, str>,
    minimum: Level,
    default_level: Level,
}

impl Category {
    /// Creates a user-defined category.
    pub fn new(name: impl Into<String>, minimum: Level, default_level: Level) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            minimum,
            default_level,
        }
    }

    /// Creates a category with a static name, usable in `const` context.
    pub const fn new_static(name: &'static str, minimum: Level, default_level: Level) -> Self {
        Self {
            name: Cow::Borrowed(name),
            minimum,
            default_level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn minimum(&self) -> Level {
        self.minimum
    }

    pub fn default_level(&self) -> Level {
        self.default_level
    }
}

/// Builtin category for engine internals.
pub const CORE_ENGINE: Category = Category::new_static("CoreEngine", Level::Trace, Level::Info);

/// Builtin category the logger uses for its own lifecycle messages.
pub const LOGGER: Category = Category::new_static("Logger", Level::Trace, Level::Info);

/// A read-mostly set of categories: the builtins plus any user-defined ones.
///
/// Pure data; construction and name lookup are the only operations.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Creates a registry seeded with the builtin categories.
    pub fn new() -> Self {
        Self {
            categories: vec![CORE_ENGINE, LOGGER],
        }
    }

    /// Adds a user-defined category. Later registrations shadow earlier ones
    /// with the same name on lookup.
    pub fn register(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().rev().find(|c| c.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
