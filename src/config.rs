use crate::errors::{Result, WfError};

pub const BRANCH_NAME_TEMPLATE_VAR: &str = "WF_BRANCH_NAME_TEMPLATE";
pub const MAIN_BRANCH_VAR: &str = "WF_MAIN_BRANCH";

pub const DEFAULT_BRANCH_NAME_TEMPLATE: &str = "%s/%s";
pub const DEFAULT_MAIN_BRANCH: &str = "main";
pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub branch_name_template: String,
    pub main_branch: String,
    pub remote: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_name_template: DEFAULT_BRANCH_NAME_TEMPLATE.to_string(),
            main_branch: DEFAULT_MAIN_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from a variable lookup
    ///
    /// Unset and empty variables fall back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_or = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let config = Self {
            branch_name_template: value_or(BRANCH_NAME_TEMPLATE_VAR, DEFAULT_BRANCH_NAME_TEMPLATE),
            main_branch: value_or(MAIN_BRANCH_VAR, DEFAULT_MAIN_BRANCH),
            remote: DEFAULT_REMOTE.to_string(),
        };

        log::debug!("Loaded configuration: {:?}", config);
        config
    }

    /// Fill the branch name template with the ticket id, then the slug
    ///
    /// The template takes one or two `%s` placeholders, `%%` is a literal
    /// percent sign.
    pub fn branch_name(&self, ticket: &str, slug: &str) -> Result<String> {
        let template = &self.branch_name_template;
        let mut values = [ticket, slug].into_iter();
        let mut placeholders = 0;
        let mut output = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                output.push(c);
                continue;
            }
            match chars.next() {
                Some('s') => {
                    placeholders += 1;
                    output.push_str(values.next().unwrap_or_default());
                }
                Some('%') => output.push('%'),
                Some(other) => {
                    return Err(WfError::Template(format!(
                        "'{}' contains unsupported directive %{}",
                        template, other
                    )))
                }
                None => {
                    return Err(WfError::Template(format!(
                        "'{}' ends with a lone %",
                        template
                    )))
                }
            }
        }

        if !(1..=2).contains(&placeholders) {
            return Err(WfError::Template(format!(
                "'{}' must contain one or two %s placeholders, found {}",
                template, placeholders
            )));
        }
        Ok(output)
    }
}
