// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran = texte de l’éditeur rendu tel quel (lecture seule)
// - Tactile : gros boutons, grille 4 colonnes
//
// La vue ne modifie jamais le texte : chaque clic devient une Touche.

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::Operation;

/// Taille d’un bouton du pavé.
const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

/// Pavé : 5 rangées de 4 (None = case vide).
const PAVE: [[Option<Touche>; 4]; 5] = [
    [
        Some(Touche::Effacer),
        None,
        None,
        Some(Touche::Operateur(Operation::Divise)),
    ],
    [
        Some(Touche::Chiffre('7')),
        Some(Touche::Chiffre('8')),
        Some(Touche::Chiffre('9')),
        Some(Touche::Operateur(Operation::Fois)),
    ],
    [
        Some(Touche::Chiffre('4')),
        Some(Touche::Chiffre('5')),
        Some(Touche::Chiffre('6')),
        Some(Touche::Operateur(Operation::Moins)),
    ],
    [
        Some(Touche::Chiffre('1')),
        Some(Touche::Chiffre('2')),
        Some(Touche::Chiffre('3')),
        Some(Touche::Operateur(Operation::Plus)),
    ],
    [
        Some(Touche::Point),
        Some(Touche::Chiffre('0')),
        None,
        Some(Touche::Egal),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Heading));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(32.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for case in rangee {
                        match case {
                            Some(t) => self.bouton(ui, t),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, t: Touche) {
        let libelle = egui::RichText::new(t.libelle()).size(20.0);
        if ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(libelle))
            .clicked()
        {
            self.appuyer(t);
        }
    }
}
