//! Class-name constants shared by the selector builder and the DOM binding.

// ── Markers ─────────────────────────────────────────────────────

/// Class present on a widget while its panel is open.
pub const ACTIVE_CLASS: &str = "active";

// ── Brand prefixes ──────────────────────────────────────────────

/// Class prefix used by the Haier product pages.
pub const HAIER_PREFIX: &str = "haier";

/// Class prefix used by the Candy product pages.
pub const CANDY_PREFIX: &str = "candy";

// ── BEM block and elements ──────────────────────────────────────

/// Block name appended to a brand prefix (`<prefix>__card-faq-card`).
pub const ITEM_BLOCK: &str = "card-faq-card";

/// Element suffix for the clickable header that toggles the panel.
pub const TOGGLER_ELEMENT: &str = "toggler";

/// Element suffix for the collapsible content region.
pub const PANEL_ELEMENT: &str = "panel";

// ── Styles ──────────────────────────────────────────────────────

/// Inline style property animated between collapsed and natural height.
pub const MAX_HEIGHT_PROPERTY: &str = "max-height";
