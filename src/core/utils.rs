pub trait CleanField {
    fn clean_field(&self) -> String;
}

// Raw tabs would tear the tab-separated export apart, so they become
// plain spaces before anything else touches the field.
impl CleanField for str {
    fn clean_field(&self) -> String {
        self.replace('\t', " ").trim().to_string()
    }
}

/// Implement the trait for `String` by forwarding the method to `str`
impl CleanField for String {
    fn clean_field(&self) -> String {
        self.as_str().clean_field()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_field() {
        assert_eq!("  hello \t world ".clean_field(), "hello   world");
        assert_eq!("\t".clean_field(), "");
        assert_eq!("שלום".clean_field(), "שלום");
    }
}
