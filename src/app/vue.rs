// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran lecture seule : l'expression courante, "0" si vide,
//   "Erreur" + motif pendant le compte à rebours d'erreur
// - Tactile : gros boutons, grille 4 colonnes comme une calculette
//
// Note :
// - Le clavier est traité dans app.rs (événements egui globaux),
//   pas ici : la vue ne fait que des boutons.

use eframe::egui;

use super::etat::{AppCalc, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        let maintenant = ui.input(|i| i.time);
        self.ui_pave(ui, maintenant);
    }

    /// Écran : cadre monospace lecture seule.
    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let (texte, en_erreur) = if self.erreur_en_cours() {
            ("Erreur".to_string(), true)
        } else {
            let expr = self.saisie.expression();
            let texte = if expr.is_empty() { "0" } else { expr };
            (texte.to_string(), false)
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if en_erreur {
                        ui.colored_label(
                            ui.visuals().error_fg_color,
                            egui::RichText::new(texte).monospace().size(22.0),
                        );
                    } else {
                        ui.label(egui::RichText::new(texte).monospace().size(22.0));
                    }
                });
            });

        // motif détaillé sous l'écran (taxonomie du noyau)
        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Grille de boutons (même disposition que la calculette d'origine).
    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Tout effacer", Touche::Effacer, maintenant);
                self.bouton(ui, "DEL", "Efface le dernier caractère", Touche::RetourArriere, maintenant);
                self.bouton(ui, "÷", "Division", Touche::Caractere('÷'), maintenant);
                self.bouton(ui, "×", "Multiplication", Touche::Caractere('×'), maintenant);
                ui.end_row();

                self.bouton(ui, "7", "", Touche::Caractere('7'), maintenant);
                self.bouton(ui, "8", "", Touche::Caractere('8'), maintenant);
                self.bouton(ui, "9", "", Touche::Caractere('9'), maintenant);
                self.bouton(ui, "-", "Soustraction", Touche::Caractere('-'), maintenant);
                ui.end_row();

                self.bouton(ui, "4", "", Touche::Caractere('4'), maintenant);
                self.bouton(ui, "5", "", Touche::Caractere('5'), maintenant);
                self.bouton(ui, "6", "", Touche::Caractere('6'), maintenant);
                self.bouton(ui, "+", "Addition", Touche::Caractere('+'), maintenant);
                ui.end_row();

                self.bouton(ui, "1", "", Touche::Caractere('1'), maintenant);
                self.bouton(ui, "2", "", Touche::Caractere('2'), maintenant);
                self.bouton(ui, "3", "", Touche::Caractere('3'), maintenant);
                self.bouton(ui, "=", "Évalue l'expression", Touche::Egal, maintenant);
                ui.end_row();

                self.bouton(ui, "0", "", Touche::Caractere('0'), maintenant);
                self.bouton(ui, ".", "Point décimal", Touche::Caractere('.'), maintenant);
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        tip: &str,
        touche: Touche,
        maintenant: f64,
    ) {
        let mut resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }

        if resp.clicked() {
            self.touche(touche, maintenant);
        }
    }
}
