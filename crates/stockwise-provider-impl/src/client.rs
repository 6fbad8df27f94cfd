/// Builds the outbound client shared by every request of a provider.
///
/// With no proxy configured the client connects directly and ignores
/// proxy settings from the environment.
pub fn build_client(proxy: Option<&str>) -> Result<wreq::Client, wreq::Error> {
    let builder = wreq::Client::builder();
    let builder = match proxy.map(str::trim).filter(|value| !value.is_empty()) {
        Some(proxy) => builder.proxy(wreq::Proxy::all(proxy)?),
        None => builder.no_proxy(),
    };
    builder.build()
}
