/// Lowercase `label`, collapse every run of characters outside `[a-z0-9]`
/// into one `-`, and trim separators from both ends.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_sep = false;

    for ch in label.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(ch);
        } else {
            pending_sep = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Running Shoes!!"), "running-shoes");
        assert_eq!(slugify("--Edge--"), "edge");
        assert_eq!(slugify("Training & Gym"), "training-gym");
        assert_eq!(slugify("Big Kids (3.5Y - 7Y)"), "big-kids-3-5y-7y");
    }

    #[test]
    fn test_slugify_degenerate() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("Café Noir"), "caf-noir");
    }
}
