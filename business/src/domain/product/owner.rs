/// Consignor that owns a product. Its code is the first segment of every
/// product code it registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    pub code: &'static str,
    pub name: &'static str,
}

pub const OWNERS: [Owner; 10] = [
    Owner { code: "Z", name: "Karla y Cecy" },
    Owner { code: "J", name: "JACKO" },
    Owner { code: "C", name: "Cecy" },
    Owner { code: "Y", name: "Vale y Cecy" },
    Owner { code: "K", name: "Karla" },
    Owner { code: "A1", name: "Arrendador 1" },
    Owner { code: "A2", name: "Arrendador 2" },
    Owner { code: "D", name: "Dani" },
    Owner { code: "V", name: "Vale" },
    Owner { code: "L", name: "Daniel" },
];

pub fn default_owner() -> Owner {
    OWNERS[0]
}

pub fn find_owner(code: &str) -> Option<Owner> {
    OWNERS.iter().copied().find(|owner| owner.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_find_owner_by_exact_code() {
        let owner = find_owner("A2").unwrap();
        assert_eq!(owner.name, "Arrendador 2");
    }

    #[test]
    fn should_not_match_owner_case_insensitively() {
        assert!(find_owner("j").is_none());
    }

    #[test]
    fn should_default_to_first_owner() {
        assert_eq!(default_owner().code, "Z");
    }
}
