//! Token parsing and option resolution for one plugin invocation

use std::collections::BTreeMap;

use crate::error::{ConfigurationError, Result};
use crate::tools::arg::{ArgSpec, ArgValue, ResolvedOptions};
use crate::tools::settings::GlobalOptions;

/// Split on every occurrence of `sep` not preceded by a backslash.
///
/// A backslash-escaped separator becomes a literal separator character in the
/// produced piece; any other backslash is kept as-is. Never returns an empty
/// vector.
pub fn split_unescaped(input: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&sep) {
            current.push(sep);
            chars.next();
        } else if c == sep {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

/// Staged resolver for one plugin invocation.
///
/// Stages run in a fixed order: seed every spec's default, copy declared
/// global arguments in, apply raw tokens (several rounds for composed tools,
/// later rounds overriding earlier ones), then validate choice sets and
/// freeze. Resolution is all-or-nothing; a failed stage yields no options.
pub struct ArgumentResolver<'a> {
    tool: String,
    specs: &'a [ArgSpec],
    options: BTreeMap<String, ArgValue>,
}

impl<'a> ArgumentResolver<'a> {
    /// `tool` labels error messages, e.g. `"layout feynman"`.
    pub fn new(tool: impl Into<String>, specs: &'a [ArgSpec]) -> Self {
        let options = specs
            .iter()
            .map(|spec| (spec.name().to_string(), spec.default_value().clone()))
            .collect();
        Self {
            tool: tool.into(),
            specs,
            options,
        }
    }

    fn spec(&self, name: &str) -> Option<&'a ArgSpec> {
        self.specs.iter().find(|spec| spec.name() == name)
    }

    /// Copy every declared global argument in from the global options source.
    pub fn apply_globals<'n, I>(&mut self, names: I, globals: &GlobalOptions) -> Result<()>
    where
        I: IntoIterator<Item = &'n str>,
    {
        for name in names {
            let value =
                globals
                    .get(name)
                    .ok_or_else(|| ConfigurationError::UnknownGlobalArgument {
                        tool: self.tool.clone(),
                        name: name.to_string(),
                    })?;
            self.options.insert(name.to_string(), value.clone());
        }
        tracing::debug!("{} options after global args: {:?}", self.tool, self.options);
        Ok(())
    }

    /// Apply one round of raw tokens.
    ///
    /// Each token carries zero or one unescaped `=`: one makes it a keyword
    /// assignment, zero a positional value, more are malformed. Positionals
    /// are zipped to the specs in declaration order; a positional landing on
    /// a name also supplied by keyword is a duplicate.
    pub fn apply_tokens(&mut self, tokens: &[String]) -> Result<()> {
        let mut keyword: BTreeMap<String, ArgValue> = BTreeMap::new();
        let mut positional: Vec<String> = Vec::new();

        for token in tokens {
            let parts = split_unescaped(token, '=');
            match parts.as_slice() {
                [value] => positional.push(value.clone()),
                [name, value] => {
                    let spec =
                        self.spec(name)
                            .ok_or_else(|| ConfigurationError::UnknownArgument {
                                tool: self.tool.clone(),
                                name: name.clone(),
                            })?;
                    keyword.insert(name.clone(), self.convert(spec, value)?);
                }
                _ => {
                    return Err(ConfigurationError::MalformedToken {
                        tool: self.tool.clone(),
                        token: token.clone(),
                    }
                    .into())
                }
            }
        }

        if positional.len() > self.specs.len() {
            return Err(ConfigurationError::TooManyArguments {
                tool: self.tool.clone(),
            }
            .into());
        }

        let mut assigned: Vec<(String, ArgValue)> = Vec::new();
        for (spec, raw) in self.specs.iter().zip(&positional) {
            if keyword.contains_key(spec.name()) {
                return Err(ConfigurationError::DuplicateArgument {
                    tool: self.tool.clone(),
                    name: spec.name().to_string(),
                }
                .into());
            }
            assigned.push((spec.name().to_string(), self.convert(spec, raw)?));
        }

        self.options.extend(keyword);
        self.options.extend(assigned);
        tracing::debug!("{} options after local args: {:?}", self.tool, self.options);
        Ok(())
    }

    fn convert(&self, spec: &ArgSpec, raw: &str) -> Result<ArgValue> {
        spec.kind().convert(raw).map_err(|_| {
            ConfigurationError::ConversionError {
                tool: self.tool.clone(),
                argument: spec.name().to_string(),
                value: raw.to_string(),
            }
            .into()
        })
    }

    /// Validate choice sets and freeze the options.
    pub fn finish(self) -> Result<ResolvedOptions> {
        for spec in self.specs {
            let Some(choices) = spec.choice_set() else {
                continue;
            };
            let Some(value) = self.options.get(spec.name()) else {
                continue;
            };
            if !value.is_set() {
                continue;
            }
            let allowed = choices.iter().any(|choice| match value {
                ArgValue::Str(s) => s == choice,
                other => other.to_string() == *choice,
            });
            if !allowed {
                return Err(ConfigurationError::InvalidChoice {
                    tool: self.tool.clone(),
                    argument: spec.name().to_string(),
                    value: value.to_string(),
                    choices: choices.join(", "),
                }
                .into());
            }
        }
        Ok(ResolvedOptions::from_values(self.options))
    }
}
