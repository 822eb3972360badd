// ─── Demo Catalog ───
// Served whenever no API key is configured. This is a documented,
// first-class offline mode: the catalog is fixed, so the browse UI stays
// fully functional (including filtering) without network access.

use super::model::RemoteModRecord;

pub const DEMO_MODE_MESSAGE: &str =
    "Showing demo mods. Configure Orbis API key in Settings for real mods.";

fn entry(
    id: &str,
    name: &str,
    author: &str,
    description: &str,
    downloads: u64,
    version: &str,
    download_url: &str,
    category: &str,
) -> RemoteModRecord {
    RemoteModRecord {
        id: id.to_string(),
        name: name.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        downloads,
        version: version.to_string(),
        download_url: Some(download_url.to_string()),
        icon_url: None,
        categories: vec![category.to_string()],
    }
}

pub fn demo_catalog() -> Vec<RemoteModRecord> {
    vec![
        entry(
            "1",
            "Enhanced Textures Pack",
            "TextureArtist",
            "High-quality texture overhauls for better visuals in Hytale",
            5234,
            "2.1.0",
            "https://example.com/enhanced-textures.jar",
            "Textures",
        ),
        entry(
            "2",
            "Better Lighting Mod",
            "LightingEnthusiast",
            "Improves global illumination and dynamic lighting in the game",
            3892,
            "1.5.0",
            "https://example.com/better-lighting.jar",
            "Graphics",
        ),
        entry(
            "3",
            "Combat Tweaks",
            "GameBalancer",
            "Rebalances combat mechanics for more challenging gameplay",
            2156,
            "1.0.5",
            "https://example.com/combat-tweaks.jar",
            "Gameplay",
        ),
        entry(
            "4",
            "Inventory Manager",
            "UIDesigner",
            "Enhanced inventory system with better organization tools",
            1843,
            "1.2.3",
            "https://example.com/inventory-manager.jar",
            "UI",
        ),
        entry(
            "5",
            "Quality of Life Enhancements",
            "QoLModder",
            "Various quality of life improvements and convenience features",
            4521,
            "3.0.0",
            "https://example.com/qol-enhancements.jar",
            "General",
        ),
        entry(
            "6",
            "Advanced Crafting System",
            "CraftMaster",
            "Adds new crafting recipes and advanced manufacturing options",
            2789,
            "1.1.0",
            "https://example.com/advanced-crafting.jar",
            "Gameplay",
        ),
    ]
}

/// Case-insensitive substring match on name/description/author; exact match
/// on category.
pub fn filter_catalog(
    mut catalog: Vec<RemoteModRecord>,
    query: Option<&str>,
    category: Option<&str>,
) -> Vec<RemoteModRecord> {
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        let needle = query.to_lowercase();
        catalog.retain(|m| {
            m.name.to_lowercase().contains(&needle)
                || m.description.to_lowercase().contains(&needle)
                || m.author.to_lowercase().contains(&needle)
        });
    }

    if let Some(category) = category.filter(|c| !c.is_empty()) {
        catalog.retain(|m| m.categories.iter().any(|c| c == category));
    }

    catalog
}
