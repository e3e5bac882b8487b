use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryRule {
    pub name: String,
    pub prefix: String,
}

/// An audience category ("categoría base") and the product types it allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub base: String,
    pub subcategories: Vec<SubcategoryRule>,
}

impl CategoryRule {
    pub fn first_subcategory(&self) -> Option<&SubcategoryRule> {
        self.subcategories.first()
    }

    pub fn find_subcategory(&self, name: &str) -> Option<&SubcategoryRule> {
        self.subcategories.iter().find(|sub| sub.name == name)
    }
}

pub fn find_rule<'a>(rules: &'a [CategoryRule], base: &str) -> Option<&'a CategoryRule> {
    rules.iter().find(|rule| rule.base == base)
}

/// Audience values in rule order.
pub fn audience_options(rules: &[CategoryRule]) -> Vec<String> {
    rules.iter().map(|rule| rule.base.clone()).collect()
}

/// Distinct subcategory names across all rules, first occurrence wins.
pub fn type_options(rules: &[CategoryRule]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for sub in rules.iter().flat_map(|rule| rule.subcategories.iter()) {
        if !types.contains(&sub.name) {
            types.push(sub.name.clone());
        }
    }
    types
}
