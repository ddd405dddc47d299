//! Display helpers shared by the favorites store and the CLI.

/// Upper-case the first character: "pikachu" -> "Pikachu"
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Dex number label, e.g. "Nº 25"
pub fn dex_number(id: u32) -> String {
    format!("Nº {}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("pikachu"), "Pikachu");
        assert_eq!(display_name("mr-mime"), "Mr-mime");
        assert_eq!(display_name("Pikachu"), "Pikachu");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_dex_number() {
        assert_eq!(dex_number(151), "Nº 151");
    }
}
