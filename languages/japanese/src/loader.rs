use akapen_core::BundledResources;

/// Particles that commonly repeat in well-formed sentences (と, や, ...)
pub const DOUBLED_JOSHI_SKIP_LIST: &str = "ja/doubled-joshi-skip.txt";

/// Particle surface to particle kind (格助詞, 係助詞, ...), tab separated
pub const JOSHI_KINDS: &str = "ja/joshi-kinds.tsv";

/// Japanese data files embedded in the binary
pub fn bundled_resources() -> BundledResources {
    let resources = BundledResources::new()
        .with(
            DOUBLED_JOSHI_SKIP_LIST,
            include_bytes!("../data/doubled-joshi-skip.txt"),
        )
        .with(JOSHI_KINDS, include_bytes!("../data/joshi-kinds.tsv"));
    tracing::debug!("Registered bundled Japanese resources: {:?}", resources.paths());
    resources
}
