use miette::Result;

use nodelint_core::config::GlobalConfig;
use nodelint_core::rules::RuleTable;

pub fn exec() -> Result<()> {
    let config = GlobalConfig::load()?;
    let table = RuleTable::with_overrides(&config.rules);
    let width = table.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    for (id, kind) in table.iter() {
        println!("{id:<width$}  {kind}");
    }
    Ok(())
}
