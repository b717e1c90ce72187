//! The argument schema registry (C5): typed storage for registered flags and
//! options, keyed by long form with an optional short-form alias.
//!
//! Short forms are stored as an index into the same `entries` vector as the
//! long form rather than a pointer to it (the original's `shortForm` map
//! held a raw `ArgInstanceInfoT*` into the long-form list) — Rust's
//! ownership rules make an aliasing pointer into a growable `Vec` a
//! non-starter, so the alias is a stable integer key instead.

use crate::error::ParserError;
use crate::logging::scope;

/// One recorded occurrence of a flag or option: where it appeared in the
/// token stream, and (for options) its value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgInstance {
    pub position: usize,
    pub value: String,
}

/// A flag sub-registry or an option sub-registry: long-form-keyed storage
/// with an optional short-form alias index.
#[derive(Debug, Default)]
struct SubRegistry {
    entries: Vec<(String, Vec<ArgInstance>)>,
    long_index: std::collections::HashMap<String, usize>,
    short_index: std::collections::HashMap<char, usize>,
}

impl SubRegistry {
    fn contains_long(&self, long: &str) -> bool {
        self.long_index.contains_key(long)
    }

    fn contains_short(&self, short: char) -> bool {
        self.short_index.contains_key(&short)
    }

    fn index_of_short(&self, short: char) -> Option<usize> {
        self.short_index.get(&short).copied()
    }

    fn index_of_long(&self, long: &str) -> Option<usize> {
        self.long_index.get(long).copied()
    }

    fn insert(&mut self, long: &str, short: Option<char>) {
        let index = self.entries.len();
        self.entries.push((long.to_string(), Vec::new()));
        self.long_index.insert(long.to_string(), index);
        if let Some(c) = short {
            self.short_index.insert(c, index);
        }
    }

    fn instances(&self, index: usize) -> &[ArgInstance] {
        &self.entries[index].1
    }

    fn push(&mut self, index: usize, instance: ArgInstance) {
        self.entries[index].1.push(instance);
    }

    fn set_last_value(&mut self, index: usize, value: String) {
        if let Some(last) = self.entries[index].1.last_mut() {
            last.value = value;
        }
    }
}

fn validate_long_form(long: &str) -> Result<(), ParserError> {
    if long.is_empty() {
        return Err(ParserError::EmptyStringParameter {
            parameter: "long form",
        });
    }
    if !long.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ParserError::StringNotValid {
            value: long.to_string(),
        });
    }
    Ok(())
}

fn validate_short_form(short: char) -> Result<(), ParserError> {
    if !short.is_ascii_alphanumeric() {
        return Err(ParserError::CharacterNotValid { character: short });
    }
    Ok(())
}

/// Which category a long or short form belongs to, as reported by
/// [`ArgRegistry::classify`]. Used by the driver to dispatch without
/// duplicating the flag/option lookup logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArgKind {
    Flag,
    Option,
}

/// The full schema: flags, options and the free-value list accumulated
/// during a parse.
#[derive(Debug, Default)]
pub struct ArgRegistry {
    flags: SubRegistry,
    options: SubRegistry,
    free_values: Vec<ArgInstance>,
}

impl ArgRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(
        &mut self,
        kind: ArgKind,
        long: &str,
        short: Option<char>,
    ) -> Result<(), ParserError> {
        scope!();
        validate_long_form(long)?;
        if let Some(c) = short {
            validate_short_form(c)?;
        }

        if self.flags.contains_long(long) || self.options.contains_long(long) {
            return Err(ParserError::IdAlreadyInUse {
                long: long.to_string(),
            });
        }
        if let Some(c) = short {
            if self.flags.contains_short(c) || self.options.contains_short(c) {
                return Err(ParserError::IdAlreadyInUse { long: c.to_string() });
            }
        }

        let target = match kind {
            ArgKind::Flag => &mut self.flags,
            ArgKind::Option => &mut self.options,
        };
        target.insert(long, short);
        Ok(())
    }

    pub fn add_flag(&mut self, long: &str, short: Option<char>) -> Result<(), ParserError> {
        self.add(ArgKind::Flag, long, short)
    }

    pub fn add_option(&mut self, long: &str, short: Option<char>) -> Result<(), ParserError> {
        self.add(ArgKind::Option, long, short)
    }

    pub fn is_flag_long(&self, long: &str) -> bool {
        self.flags.contains_long(long)
    }

    pub fn is_option_long(&self, long: &str) -> bool {
        self.options.contains_long(long)
    }

    pub fn is_flag_short(&self, short: char) -> bool {
        self.flags.contains_short(short)
    }

    pub fn is_option_short(&self, short: char) -> bool {
        self.options.contains_short(short)
    }

    /// Appends an empty-valued occurrence to the named flag's instance list.
    pub fn push_flag_long(&mut self, long: &str, position: usize) {
        if let Some(i) = self.flags.index_of_long(long) {
            self.flags.push(i, ArgInstance { position, value: String::new() });
        }
    }

    pub fn push_flag_short(&mut self, short: char, position: usize) {
        if let Some(i) = self.flags.index_of_short(short) {
            self.flags.push(i, ArgInstance { position, value: String::new() });
        }
    }

    pub fn push_option_long(&mut self, long: &str, position: usize, value: String) {
        if let Some(i) = self.options.index_of_long(long) {
            self.options.push(i, ArgInstance { position, value });
        }
    }

    pub fn push_option_short(&mut self, short: char, position: usize, value: String) {
        if let Some(i) = self.options.index_of_short(short) {
            self.options.push(i, ArgInstance { position, value });
        }
    }

    /// Sets the value of the most recent occurrence of the named option, used
    /// when `HandleOptionValue` resolves a pending option.
    pub fn set_pending_long_value(&mut self, long: &str, value: String) {
        if let Some(i) = self.options.index_of_long(long) {
            self.options.set_last_value(i, value);
        }
    }

    pub fn set_pending_short_value(&mut self, short: char, value: String) {
        if let Some(i) = self.options.index_of_short(short) {
            self.options.set_last_value(i, value);
        }
    }

    pub fn push_free_value(&mut self, position: usize, value: String) {
        self.free_values.push(ArgInstance { position, value });
    }

    pub fn flag_count(&self, long: &str) -> usize {
        self.flags
            .index_of_long(long)
            .map_or(0, |i| self.flags.instances(i).len())
    }

    pub fn option_count(&self, long: &str) -> usize {
        self.options
            .index_of_long(long)
            .map_or(0, |i| self.options.instances(i).len())
    }

    pub fn free_value_count(&self) -> usize {
        self.free_values.len()
    }

    pub fn flag_instance_position(&self, long: &str, index: usize) -> Result<usize, ParserError> {
        let i = self
            .flags
            .index_of_long(long)
            .ok_or_else(|| ParserError::ArgLongFormNotValid { long: long.to_string() })?;
        let instances = self.flags.instances(i);
        instances
            .get(index)
            .map(|inst| inst.position)
            .ok_or(ParserError::InstanceIndexNotValid { index, count: instances.len() })
    }

    pub fn option_instance_position(&self, long: &str, index: usize) -> Result<usize, ParserError> {
        let i = self
            .options
            .index_of_long(long)
            .ok_or_else(|| ParserError::ArgLongFormNotValid { long: long.to_string() })?;
        let instances = self.options.instances(i);
        instances
            .get(index)
            .map(|inst| inst.position)
            .ok_or(ParserError::InstanceIndexNotValid { index, count: instances.len() })
    }

    pub fn option_instance_value(&self, long: &str, index: usize) -> Result<&str, ParserError> {
        let i = self
            .options
            .index_of_long(long)
            .ok_or_else(|| ParserError::ArgLongFormNotValid { long: long.to_string() })?;
        let instances = self.options.instances(i);
        instances
            .get(index)
            .map(|inst| inst.value.as_str())
            .ok_or(ParserError::InstanceIndexNotValid { index, count: instances.len() })
    }

    pub fn free_value_instance_position(&self, index: usize) -> Result<usize, ParserError> {
        self.free_values
            .get(index)
            .map(|inst| inst.position)
            .ok_or(ParserError::InstanceIndexNotValid { index, count: self.free_values.len() })
    }

    pub fn free_value_instance_value(&self, index: usize) -> Result<&str, ParserError> {
        self.free_values
            .get(index)
            .map(|inst| inst.value.as_str())
            .ok_or(ParserError::InstanceIndexNotValid { index, count: self.free_values.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_flag_rejects_empty_long_form() {
        let mut r = ArgRegistry::new();
        assert!(matches!(
            r.add_flag("", None),
            Err(ParserError::EmptyStringParameter { .. })
        ));
    }

    #[test]
    fn add_flag_rejects_non_alphanumeric_long_form() {
        let mut r = ArgRegistry::new();
        assert!(matches!(
            r.add_flag("foo-bar", None),
            Err(ParserError::StringNotValid { .. })
        ));
    }

    #[test]
    fn add_option_rejects_non_alphanumeric_short_form() {
        let mut r = ArgRegistry::new();
        assert!(matches!(
            r.add_option("width", Some('-')),
            Err(ParserError::CharacterNotValid { .. })
        ));
    }

    #[test]
    fn duplicate_long_form_in_same_category_is_rejected() {
        let mut r = ArgRegistry::new();
        r.add_flag("verbose", None).unwrap();
        assert!(matches!(
            r.add_flag("verbose", None),
            Err(ParserError::IdAlreadyInUse { .. })
        ));
    }

    #[test]
    fn duplicate_long_form_across_categories_is_rejected() {
        let mut r = ArgRegistry::new();
        r.add_flag("verbose", None).unwrap();
        assert!(matches!(
            r.add_option("verbose", None),
            Err(ParserError::IdAlreadyInUse { .. })
        ));
    }

    #[test]
    fn duplicate_short_form_across_categories_is_rejected() {
        let mut r = ArgRegistry::new();
        r.add_flag("verbose", Some('v')).unwrap();
        assert!(matches!(
            r.add_option("version", Some('v')),
            Err(ParserError::IdAlreadyInUse { .. })
        ));
    }

    #[test]
    fn short_form_alias_resolves_to_same_instances_as_long_form() {
        let mut r = ArgRegistry::new();
        r.add_option("width", Some('w')).unwrap();
        r.push_option_short('w', 3, "1280".to_string());
        assert_eq!(r.option_count("width"), 1);
        assert_eq!(r.option_instance_value("width", 0).unwrap(), "1280");
    }

    #[test]
    fn unknown_long_form_query_yields_zero_count_and_error_on_instance() {
        let r = ArgRegistry::new();
        assert_eq!(r.flag_count("bogus"), 0);
        assert!(matches!(
            r.flag_instance_position("bogus", 0),
            Err(ParserError::ArgLongFormNotValid { .. })
        ));
    }

    #[test]
    fn out_of_range_index_yields_instance_index_not_valid() {
        let mut r = ArgRegistry::new();
        r.add_flag("verbose", None).unwrap();
        r.push_flag_long("verbose", 0);
        assert!(matches!(
            r.flag_instance_position("verbose", 5),
            Err(ParserError::InstanceIndexNotValid { .. })
        ));
    }
}
