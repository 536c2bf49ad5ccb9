use serde::Serialize;
use tally_core::entities::ChecklistItem;
use tally_core::enums::Tier;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CatalogArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CatalogRow<'a> {
    id: u32,
    tier: Tier,
    category: &'a str,
    title: &'a str,
    points: u32,
}

impl<'a> From<&'a ChecklistItem> for CatalogRow<'a> {
    fn from(item: &'a ChecklistItem) -> Self {
        Self {
            id: item.id,
            tier: item.tier,
            category: &item.category,
            title: &item.title,
            points: item.points,
        }
    }
}

pub fn handle(args: &CatalogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows: Vec<CatalogRow<'_>> = match args.tier.as_deref() {
        Some(raw) => {
            let tier: Tier = parse_enum(raw, "tier")?;
            ctx.catalog.tier(tier).iter().map(CatalogRow::from).collect()
        }
        None => ctx.catalog.iter().map(CatalogRow::from).collect(),
    };

    output(&rows, flags.format)
}
