//! DNS resolver initialization.

use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;

use crate::dns::HickoryTxtResolver;

/// Initializes the DNS resolver used for DMARC TXT lookups.
///
/// Uses the host's resolver configuration (`/etc/resolv.conf` on Unix, the
/// registry on Windows), including its timeouts and attempts; no extra
/// timeout is layered on top. If the host configuration cannot be read the
/// resolver falls back to hickory's default upstream servers.
pub fn init_resolver() -> HickoryTxtResolver {
    let resolver = match TokioResolver::builder_tokio() {
        Ok(builder) => builder.build(),
        Err(e) => {
            log::warn!(
                "Failed to read system DNS configuration, falling back to default resolvers: {e}"
            );
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
            .build()
        }
    };

    HickoryTxtResolver::new(resolver)
}
