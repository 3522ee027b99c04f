use std::path::PathBuf;

use anyhow::Context;
use schedge::Catalog;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("schedge=info,schedge_catalog=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: schedge-catalog <catalog dir>")?;

    let catalog = match Catalog::load_from_directory(&dir) {
        Ok(catalog) => catalog,
        Err(e) if e.is_malformed_value() => {
            error!("Catalog in {} contains a malformed record: {}", dir.display(), e);
            return Err(e.into());
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("failed to load catalog from {}", dir.display())))
        }
    };

    info!(
        "Catalog has {} courses and {} sections",
        catalog.course_count(),
        catalog.section_count()
    );

    let two_meeting = catalog
        .sections()
        .iter()
        .filter(|s| s.secondary().is_some())
        .count();
    info!("{} sections meet on a second pattern", two_meeting);

    if let Err(e) = catalog.validate() {
        let dangling = catalog.dangling_sections().count();
        error!("{} sections reference unknown courses", dangling);
        return Err(e.into());
    }

    Ok(())
}
