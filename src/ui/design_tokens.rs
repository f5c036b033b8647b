// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens of the simulated watch face.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale
- **Sizing**: Component sizes, in watch pixels
- **Typography**: Font size scale

## Examples

```
use wrist_notify::ui::design_tokens::{palette, sizing};
use iced::Length;

let button = Length::Fixed(sizing::CALL_BUTTON);
let subject_bg = palette::SUBJECT_BG;
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Background of the message area.
    pub const SUBJECT_BG: Color = Color::from_rgb(0.22, 0.22, 0.22);
    /// Title and mute button.
    pub const MUTED: Color = Color::from_rgb(0.69, 0.69, 0.69);
    /// Message text.
    pub const AMBER: Color = Color::from_rgb(1.0, 0.69, 0.0);

    pub const ACCEPT: Color = Color::from_rgb(0.0, 0.69, 0.0);
    pub const REJECT: Color = Color::from_rgb(1.0, 0.0, 0.0);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 5.0;
    pub const XS: f32 = 10.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of the header band above the message area.
    pub const HEADER_HEIGHT: f32 = 50.0;
    /// Message area height when call buttons share the screen.
    pub const CALL_SUBJECT_HEIGHT: f32 = 108.0;
    /// Side of each square call button.
    pub const CALL_BUTTON: f32 = 76.0;
    /// Thickness of the preview countdown bar.
    pub const TIMEOUT_BAR: f32 = 3.0;
    /// Width of the scrolling title label.
    pub const TITLE_WIDTH: f32 = 180.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 20.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);
    assert!(sizing::CALL_BUTTON * 3.0 <= 240.0);
};
