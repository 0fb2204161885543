use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::charts::NO_HOUSE;

// ---------------------------------------------------------------------------
// House palette
// ---------------------------------------------------------------------------

pub const GRYFFINDOR: Color32 = Color32::from_rgb(116, 1, 1);
pub const SLYTHERIN: Color32 = Color32::from_rgb(26, 71, 42);
pub const RAVENCLAW: Color32 = Color32::from_rgb(14, 26, 64);
pub const HUFFLEPUFF: Color32 = Color32::from_rgb(187, 132, 16);
/// Neutral tone for houseless characters and unknown buckets.
pub const DEFAULT_HOUSE: Color32 = Color32::from_rgb(84, 78, 74);

/// Accent for the age bar chart.
pub const AGE_BARS: Color32 = Color32::from_rgb(136, 132, 216);

/// Card background color for a house (or none).
pub fn house_color(house: Option<&str>) -> Color32 {
    match house {
        Some("Gryffindor") => GRYFFINDOR,
        Some("Slytherin") => SLYTHERIN,
        Some("Ravenclaw") => RAVENCLAW,
        Some("Hufflepuff") => HUFFLEPUFF,
        _ => DEFAULT_HOUSE,
    }
}

/// Darker house shade used for the card's name band.
pub fn house_deep_color(house: Option<&str>) -> Color32 {
    darken(house_color(house), 0.07)
}

/// Chart color for a house bucket label ("No House" maps to the neutral
/// tone).
pub fn house_bucket_color(bucket: &str) -> Color32 {
    if bucket == NO_HOUSE {
        DEFAULT_HOUSE
    } else {
        house_color(Some(bucket))
    }
}

/// Chart color for a gender bucket: male takes the Ravenclaw blue, female
/// the Gryffindor red, everything else the neutral tone.
pub fn gender_bucket_color(bucket: &str) -> Color32 {
    match bucket.to_lowercase().as_str() {
        "male" => RAVENCLAW,
        "female" => GRYFFINDOR,
        _ => DEFAULT_HOUSE,
    }
}

/// Reduce a color's HSL lightness by `amount`.
fn darken(color: Color32, amount: f32) -> Color32 {
    let srgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let hsl: Hsl = srgb.into_color();
    let hsl = Hsl::new(hsl.hue, hsl.saturation, (hsl.lightness - amount).max(0.0));
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_house_gets_neutral_tone() {
        assert_eq!(house_color(None), DEFAULT_HOUSE);
        assert_eq!(house_color(Some("Ilvermorny")), DEFAULT_HOUSE);
        assert_eq!(house_bucket_color(NO_HOUSE), DEFAULT_HOUSE);
    }

    #[test]
    fn gender_colors_match_case_insensitively() {
        assert_eq!(gender_bucket_color("Male"), RAVENCLAW);
        assert_eq!(gender_bucket_color("female"), GRYFFINDOR);
        assert_eq!(gender_bucket_color("Unknown"), DEFAULT_HOUSE);
    }

    #[test]
    fn deep_shade_is_darker() {
        let base = house_color(Some("Hufflepuff"));
        let deep = house_deep_color(Some("Hufflepuff"));
        let luma = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(luma(deep) < luma(base));
    }
}
