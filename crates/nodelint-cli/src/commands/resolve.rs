use std::path::PathBuf;

use miette::Result;

use nodelint_core::config::GlobalConfig;
use nodelint_ops::ops_resolve::{resolve_spec, IndexSource};

pub fn exec(
    spec: &str,
    index_file: Option<PathBuf>,
    index_url: Option<String>,
    platform: Option<String>,
) -> Result<()> {
    let source = match (index_file, index_url) {
        (Some(path), _) => IndexSource::File(path),
        (None, Some(url)) => IndexSource::Url(url),
        (None, None) => IndexSource::Url(GlobalConfig::load()?.node.index_url),
    };

    let version = resolve_spec(spec, &source, platform.as_deref())?;
    println!("{}", version.tag());
    Ok(())
}
