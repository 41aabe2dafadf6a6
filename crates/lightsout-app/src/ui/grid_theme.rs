use eframe::egui::{Color32, Visuals};

/// Color palette for tile rendering.
///
/// Kept separate from `egui::Visuals` so the lit/unlit tiles and the hint
/// border can be tuned without touching the global UI theme.
#[derive(Debug, Clone)]
pub(crate) struct GridPalette {
    pub(crate) tile_on: Color32,
    pub(crate) tile_off: Color32,
    pub(crate) border_normal: Color32,
    pub(crate) border_hint: Color32,
}

impl GridPalette {
    fn light() -> Self {
        Self {
            tile_on: Color32::from_rgb(0xff, 0xd5, 0x4f),
            tile_off: Color32::from_rgb(0x42, 0x42, 0x42),
            border_normal: Color32::GRAY,
            border_hint: Color32::from_rgb(0x02, 0x88, 0xd1),
        }
    }

    fn dark() -> Self {
        Self {
            tile_on: Color32::from_rgb(0xff, 0xca, 0x28),
            tile_off: Color32::from_rgb(0x21, 0x21, 0x21),
            border_normal: Color32::DARK_GRAY,
            border_hint: Color32::from_rgb(0x4f, 0xc3, 0xf7),
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub(crate) struct GridTheme {
    pub(crate) light: GridPalette,
    pub(crate) dark: GridPalette,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            light: GridPalette::light(),
            dark: GridPalette::dark(),
        }
    }
}

impl GridTheme {
    pub(crate) fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: Color32, b: Color32) -> u32 {
        [(a.r(), b.r()), (a.g(), b.g()), (a.b(), b.b())]
            .into_iter()
            .map(|(x, y)| u32::from(x.abs_diff(y)))
            .sum()
    }

    #[test]
    fn test_hint_border_stands_out_on_both_fills() {
        let theme = GridTheme::default();
        for palette in [&theme.light, &theme.dark] {
            assert!(distance(palette.border_hint, palette.tile_on) >= 200);
            assert!(distance(palette.border_hint, palette.tile_off) >= 200);
            assert_ne!(palette.border_hint, palette.border_normal);
        }
    }
}
