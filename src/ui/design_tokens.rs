// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the demo window.
//!
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod sizing {
    /// Width of the card holding the current item.
    pub const CARD_WIDTH: f32 = 480.0;
}

pub mod typography {
    /// Card text.
    pub const TITLE_LG: f32 = 30.0;
    /// Step counter and hints.
    pub const CAPTION: f32 = 12.0;
    /// Button labels.
    pub const BODY: f32 = 14.0;
}

pub mod radius {
    pub const LG: f32 = 8.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn title_outweighs_body_text() {
        assert!(typography::TITLE_LG > typography::BODY);
        assert!(typography::BODY > typography::CAPTION);
    }
}
