// src/font_config.rs

// Font styles for every text element of a genome plot.
// Kept in one place so the rasteriser and any caller-side layout agree on sizes.

use plotters::style::{FontDesc, FontStyle, IntoFont};

use crate::constants::{FONT_SIZE_AXIS_LABEL, FONT_SIZE_TICK_LABEL, FONT_SIZE_TITLE};

/// Font family name for default system fonts
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_TICK_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_TICK_LABEL);

/// Plot titles are italic.
pub fn title_font() -> FontDesc<'static> {
    (FONT_FAMILY_SYSTEM, FONT_SIZE_TITLE, FontStyle::Italic).into_font()
}

// src/font_config.rs
