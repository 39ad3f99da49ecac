use derive_builder::Builder;

/// Options for a restore run.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into), default)]
pub struct RestoreOptions {
    /// Report what would change without writing any timestamps.
    pub dry_run: bool,
    /// Visit candidates in name order instead of listing order.
    pub sorted: bool,
}
