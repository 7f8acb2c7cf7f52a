// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the notification system's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base and per-kind toast colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toasts::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Progress strip color derived from the toast text color
let strip = Color {
    a: opacity::PROGRESS_STRIP,
    ..palette::toast::SUCCESS_TEXT
};

// Use the spacing scale
let padding = spacing::SM; // 12px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Per-kind toast color triples (background, text, border).
    pub mod toast {
        use super::Color;

        pub const SUCCESS_BG: Color = Color::from_rgb(0.902, 0.957, 0.918);
        pub const SUCCESS_TEXT: Color = Color::from_rgb(0.118, 0.494, 0.204);
        pub const SUCCESS_BORDER: Color = Color::from_rgb(0.718, 0.878, 0.761);

        pub const ERROR_BG: Color = Color::from_rgb(0.992, 0.925, 0.918);
        pub const ERROR_TEXT: Color = Color::from_rgb(0.690, 0.165, 0.216);
        pub const ERROR_BORDER: Color = Color::from_rgb(0.961, 0.761, 0.780);

        pub const WARNING_BG: Color = Color::from_rgb(1.0, 0.957, 0.898);
        pub const WARNING_TEXT: Color = Color::from_rgb(0.541, 0.427, 0.231);
        pub const WARNING_BORDER: Color = Color::from_rgb(1.0, 0.878, 0.698);

        pub const VIOLATION_BG: Color = Color::from_rgb(0.973, 0.843, 0.855);
        pub const VIOLATION_TEXT: Color = Color::from_rgb(0.518, 0.125, 0.161);
        pub const VIOLATION_BORDER: Color = Color::from_rgb(0.945, 0.682, 0.710);

        pub const INFO_BG: Color = Color::from_rgb(0.906, 0.953, 1.0);
        pub const INFO_TEXT: Color = Color::from_rgb(0.031, 0.259, 0.596);
        pub const INFO_BORDER: Color = Color::from_rgb(0.714, 0.831, 0.996);
    }
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Remaining-time progress strip at the bottom of a toast.
    pub const PROGRESS_STRIP: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Height of the remaining-time progress strip.
    pub const TOAST_PROGRESS_HEIGHT: f32 = 3.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - toast message text
    pub const BODY: f32 = 14.0;

    /// Large body - close button glyph
    pub const BODY_LG: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - toast outlines
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PROGRESS_STRIP > 0.0 && opacity::PROGRESS_STRIP < 1.0);

    // Sizing validation
    assert!(sizing::TOAST_WIDTH > 0.0);
    assert!(sizing::TOAST_PROGRESS_HEIGHT < sizing::TOAST_WIDTH);

    // Typography validation
    assert!(typography::BODY_LG > typography::BODY);

    // Radius validation
    assert!(radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn toast_backgrounds_are_light_and_texts_dark() {
        let pairs = [
            (palette::toast::SUCCESS_BG, palette::toast::SUCCESS_TEXT),
            (palette::toast::ERROR_BG, palette::toast::ERROR_TEXT),
            (palette::toast::WARNING_BG, palette::toast::WARNING_TEXT),
            (palette::toast::VIOLATION_BG, palette::toast::VIOLATION_TEXT),
            (palette::toast::INFO_BG, palette::toast::INFO_TEXT),
        ];
        for (bg, text) in pairs {
            let bg_luma = bg.r + bg.g + bg.b;
            let text_luma = text.r + text.g + text.b;
            assert!(bg_luma > text_luma, "toast background should be lighter");
        }
    }
}
