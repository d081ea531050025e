pub fn is_blank(path: &str) -> bool {
    path.trim().is_empty()
}
