use anyhow::Context;
use placeholder_assets::{AssetSet, logger, run};

fn main() -> anyhow::Result<()> {
    logger::init();
    let set = AssetSet::default();
    let mut out = std::io::stdout().lock();
    run(&set, &mut out).with_context(|| {
        format!("could not create placeholder assets in {}", set.output_dir.display())
    })?;
    Ok(())
}
