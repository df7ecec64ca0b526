/// Map a dataset name and key onto the flat guestinfo namespace.
///
/// The result is always `guestinfo.<dataset>.<key>`. Separators inside the
/// inputs are not escaped, so `("a.b", "c")` and `("a", "b.c")` collide.
pub fn guestinfo_key(dataset: &str, key: &str) -> String {
    format!("guestinfo.{}.{}", dataset, key)
}
