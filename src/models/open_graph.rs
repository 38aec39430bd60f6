use serde::Serialize;

use crate::html::PropertyMap;

/// Open Graph properties the debugger looks for, in display order.
pub const OG_TAGS: [&str; 11] = [
    "og:title",
    "og:type",
    "og:url",
    "og:image",
    "og:audio",
    "og:description",
    "og:determiner",
    "og:locale",
    "og:locale:alternate",
    "og:site_name",
    "og:video",
];

/// Metadata pulled from a page head: the canonical link and every Open Graph
/// tag that was present, in page order. Tags that were not found are absent
/// from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaTagProperties {
    #[serde(rename = "canonicalURL", skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(rename = "openGraph")]
    pub open_graph: PropertyMap,
}

impl MetaTagProperties {
    /// Found tags in [`OG_TAGS`] order.
    pub fn ordered_tags(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        OG_TAGS
            .iter()
            .filter_map(|tag| self.open_graph.get(*tag).map(|value| (*tag, value.as_str())))
    }
}
