use eframe::egui::{Align, Label, RichText, Ui, Widget as _};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    text: String,
    highlighted: bool,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(text: String, highlighted: bool) -> Self {
        Self { text, highlighted }
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, text_size: f32) {
    let color = if vm.highlighted {
        ui.visuals().warn_fg_color
    } else {
        ui.visuals().text_color()
    };
    Label::new(RichText::new(&vm.text).color(color).size(text_size))
        .halign(Align::Min)
        .ui(ui);
}
