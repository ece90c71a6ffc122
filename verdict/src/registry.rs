//! Catalog of every error kind linked into the program.
//!
//! Kinds declared with `#[derive(ErrorKind)]` register themselves here.

pub struct KindInfo {
    pub name: &'static str,
    pub module: &'static str,
}

inventory::collect!(KindInfo);

/// Returns all registered kinds, sorted by name.
pub fn kinds() -> Vec<&'static KindInfo> {
    let mut kinds: Vec<_> = inventory::iter::<KindInfo>.into_iter().collect();
    kinds.sort_by_key(|k| (k.name, k.module));
    kinds
}

/// Find a kind by name.
pub fn get(name: &str) -> Option<&'static KindInfo> {
    kinds().into_iter().find(|k| k.name == name)
}
