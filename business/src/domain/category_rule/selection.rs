use crate::domain::product::owner::default_owner;

use super::model::{CategoryRule, find_rule};

const FALLBACK_BASE_PREFIX: &str = "C";
const FALLBACK_SUBCATEGORY_PREFIX: &str = "SC";
const PREVIEW_SEQUENCE: &str = "0001";

/// Classification picked on the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSelection {
    pub owner: String,
    pub base: String,
    pub subcategory: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Owner(String),
    Base(String),
    Subcategory(String),
}

impl RegistrationSelection {
    /// First owner, first rule and its first subcategory.
    pub fn initial(rules: &[CategoryRule]) -> Self {
        let (base, subcategory) = match rules.first() {
            Some(rule) => (
                rule.base.clone(),
                rule.first_subcategory()
                    .map(|sub| sub.name.clone())
                    .unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };

        Self {
            owner: default_owner().code.to_string(),
            base,
            subcategory,
        }
    }

    /// Switching base always resets the subcategory to the new base's first one.
    pub fn change_base(&self, base: impl Into<String>, rules: &[CategoryRule]) -> Self {
        let base = base.into();
        let subcategory = find_rule(rules, &base)
            .and_then(|rule| rule.first_subcategory())
            .map(|sub| sub.name.clone())
            .unwrap_or_default();

        Self {
            owner: self.owner.clone(),
            base,
            subcategory,
        }
    }

    pub fn change_subcategory(&self, subcategory: impl Into<String>) -> Self {
        Self {
            subcategory: subcategory.into(),
            ..self.clone()
        }
    }

    pub fn change_owner(&self, owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..self.clone()
        }
    }

    pub fn apply(&self, change: SelectionChange, rules: &[CategoryRule]) -> Self {
        match change {
            SelectionChange::Owner(owner) => self.change_owner(owner),
            SelectionChange::Base(base) => self.change_base(base, rules),
            SelectionChange::Subcategory(sub) => self.change_subcategory(sub),
        }
    }

    /// Preview of the code the source will generate, e.g. `J-DZAP-0001`.
    ///
    /// The real sequence is assigned remotely; the preview always shows `0001`.
    pub fn code_preview(&self, rules: &[CategoryRule]) -> String {
        let base_prefix = self
            .base
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| FALLBACK_BASE_PREFIX.to_string());

        let sub_prefix = find_rule(rules, &self.base)
            .and_then(|rule| rule.find_subcategory(&self.subcategory))
            .map(|sub| sub.prefix.as_str())
            .unwrap_or(FALLBACK_SUBCATEGORY_PREFIX);

        format!(
            "{}-{}{}-{}",
            self.owner, base_prefix, sub_prefix, PREVIEW_SEQUENCE
        )
    }
}
