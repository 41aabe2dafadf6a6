use eframe::egui::{Button, RichText, Ui, Widget as _};

use crate::action::{Action, ActionRequestQueue};

const BUTTONS: [(&str, Action); 4] = [
    ("New Game", Action::NewGame),
    ("Load Game", Action::LoadGame),
    ("Save Game", Action::SaveGame),
    ("Hint", Action::Hint),
];

pub(crate) fn show(ui: &mut Ui, text_size: f32, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        for (label, action) in BUTTONS {
            if Button::new(RichText::new(label).size(text_size))
                .ui(ui)
                .clicked()
            {
                action_queue.request(action);
            }
        }
    });
}
