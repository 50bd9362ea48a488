use std::fmt;
use std::str::FromStr;

/// Category of a linting rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Problem: code that goes against how the component library is meant to
    /// be used
    Prob,
    /// Suggestion: code that works but has a clearer or more maintainable form
    Sugg,
    /// Layout: whitespace and formatting concerns only
    Layout,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prob => "PROB",
            Self::Sugg => "SUGG",
            Self::Layout => "LAYOUT",
        }
    }

    pub const ALL: &'static [Category] = &[Category::Prob, Category::Sugg, Category::Layout];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROB" => Ok(Self::Prob),
            "SUGG" => Ok(Self::Sugg),
            "LAYOUT" => Ok(Self::Layout),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultStatus {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixStatus {
    #[default]
    None,
    Safe,
    Unsafe,
}

macro_rules! declare_rules {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                categories: [$($category:ident),+ $(,)?],
                default: $default:ident,
                fix: $fix:ident,
            }
        ),* $(,)?
    ) => {
        /// Enum representing all available linting rules
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Rule {
            $($variant),*
        }

        impl Rule {
            /// Get the rule's string name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }

            /// Get the rule's categories
            pub const fn categories(self) -> &'static [Category] {
                match self {
                    $(Self::$variant => &[$(Category::$category),+]),*
                }
            }

            /// Get the rule's default status
            pub const fn default_status(self) -> DefaultStatus {
                match self {
                    $(Self::$variant => DefaultStatus::$default),*
                }
            }

            /// Get the rule's fix status
            pub const fn fix_status(self) -> FixStatus {
                match self {
                    $(Self::$variant => FixStatus::$fix),*
                }
            }

            /// Check if the rule has a safe fix
            pub const fn has_safe_fix(self) -> bool {
                matches!(self.fix_status(), FixStatus::Safe)
            }

            /// Check if the rule has an unsafe fix
            pub const fn has_unsafe_fix(self) -> bool {
                matches!(self.fix_status(), FixStatus::Unsafe)
            }

            /// Check if the rule has no fix
            pub const fn has_no_fix(self) -> bool {
                matches!(self.fix_status(), FixStatus::None)
            }

            /// Check if the rule is enabled by default
            pub const fn is_enabled_by_default(self) -> bool {
                matches!(self.default_status(), DefaultStatus::Enabled)
            }

            /// Check if the rule belongs to a specific category
            pub fn has_category(self, category: Category) -> bool {
                self.categories().contains(&category)
            }

            /// Parse a rule from its string name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Get all rules as a slice
            pub const fn all() -> &'static [Rule] {
                ALL_RULES
            }
        }

        impl fmt::Display for Rule {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        /// Static array containing all rules
        pub const ALL_RULES: &[Rule] = &[
            $(Rule::$variant),*
        ];
    };
}

declare_rules! {
    NoBoxFlex => {
        name: "no-box-flex",
        categories: [Prob],
        default: Enabled,
        fix: None,
    },
    NoEmptyLinesInObjects => {
        name: "no-empty-lines-in-objects",
        categories: [Layout],
        default: Enabled,
        fix: Safe,
    },
    NoEmptySx => {
        name: "no-empty-sx",
        categories: [Sugg],
        default: Enabled,
        fix: None,
    },
    NoNonJsdocComments => {
        name: "no-non-jsdoc-comments",
        categories: [Sugg],
        default: Enabled,
        fix: Unsafe,
    },
    NoRelativeImports => {
        name: "no-relative-imports",
        categories: [Sugg],
        default: Enabled,
        fix: None,
    },
    NoThemeBreakpointsInSx => {
        name: "no-theme-breakpoints-in-sx",
        categories: [Sugg],
        default: Enabled,
        fix: None,
    },
}

/// A collection of rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a rule set containing all rules
    pub fn all() -> Self {
        Self { rules: ALL_RULES.to_vec() }
    }

    /// Get an iterator over the rules
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Check if the rule set contains a specific rule
    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    /// Get the number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the rule set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Filter rules by a predicate
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&Rule) -> bool,
    {
        self.rules.iter().copied().filter(predicate).collect()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self { rules: iter.into_iter().collect() }
    }
}

impl<'a> FromIterator<&'a Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = &'a Rule>>(iter: I) -> Self {
        Self { rules: iter.into_iter().copied().collect() }
    }
}

impl Rule {
    /// Get all rules in a specific category
    pub fn by_category(category: Category) -> impl Iterator<Item = Rule> {
        ALL_RULES
            .iter()
            .copied()
            .filter(move |r| r.has_category(category))
    }

    /// Get all rules enabled by default
    pub fn enabled_by_default() -> impl Iterator<Item = Rule> {
        ALL_RULES
            .iter()
            .copied()
            .filter(|r| r.is_enabled_by_default())
    }
}
