/// Fill the greeting template with a positional format argument
pub fn fill_template(name: &str) -> String {
    format!("fill {}", name)
}

/// Same template, filled through a named capture in the format string
pub fn fill_template_named(name: &str) -> String {
    format!("fill {name}")
}

/// Same template, filled by plain slice concatenation
pub fn fill_template_concat(name: &str) -> String {
    ["fill ", name].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template() {
        assert_eq!(fill_template("my name"), "fill my name");
        assert_eq!(fill_template(""), "fill ");
    }

    #[test]
    fn test_fill_variants_agree() {
        let name = "my name";
        let fill1 = fill_template(name);
        let fill2 = fill_template_concat(name);
        let fill3 = fill_template_named(name);
        assert_eq!(fill1, fill2);
        assert_eq!(fill3, fill2);
    }

    #[test]
    fn test_fill_variants_agree_on_unusual_input() {
        for name in ["", " ", "{name}", "%s", "fill fill"] {
            assert_eq!(fill_template(name), format!("fill {}", name));
            assert_eq!(fill_template_named(name), fill_template(name));
            assert_eq!(fill_template_concat(name), fill_template(name));
        }
    }
}
